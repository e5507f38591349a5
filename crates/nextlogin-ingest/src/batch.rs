//! Batch prediction across users.

use chrono::{DateTime, Utc};
use nextlogin_core::UserPrediction;
use nextlogin_observability::{batch_span, prediction_span};
use nextlogin_prediction::PredictionEngine;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::records::UserHistory;

/// Output document: `{"users": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub users: Vec<UserPrediction>,
}

/// Predict every user. Output order matches input order whether or not the
/// work runs in parallel.
pub fn predict_all(
    users: &[UserHistory],
    engine: &PredictionEngine,
    now: DateTime<Utc>,
    parallel: bool,
) -> PredictionReport {
    let _span = batch_span!(users.len()).entered();

    let predict_one = |user: &UserHistory| {
        let _span = prediction_span!(user.id, user.history.len()).entered();
        UserPrediction {
            id: user.id.clone(),
            name: user.name.clone(),
            last_login: user.history.last(),
            login_count: user.history.len(),
            predictions: engine.predict(&user.history, now),
        }
    };

    let rows: Vec<UserPrediction> = if parallel {
        users.par_iter().map(predict_one).collect()
    } else {
        users.iter().map(predict_one).collect()
    };

    info!(users = rows.len(), parallel, "batch prediction complete");
    PredictionReport { users: rows }
}
