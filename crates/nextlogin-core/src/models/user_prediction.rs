use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PredictionSet;
use crate::timefmt;

/// One user's row in the output report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPrediction {
    pub id: String,
    pub name: String,
    #[serde(with = "timefmt::iso_seconds")]
    pub last_login: DateTime<Utc>,
    pub login_count: usize,
    pub predictions: PredictionSet,
}
