use chrono::{DateTime, Utc};

use crate::models::{Algorithm, LoginHistory};

/// A single next-login heuristic.
///
/// Implementations are pure: the same history and `now` always give the same
/// answer, and "no prediction" is `None`, never an error.
pub trait Forecaster: Send + Sync {
    /// Which algorithm this forecaster implements.
    fn algorithm(&self) -> Algorithm;

    /// Fewest logins the heuristic needs before it will predict.
    fn min_logins(&self) -> usize;

    /// Predict the next login instant after `now`'s reference point.
    fn forecast(&self, history: &LoginHistory, now: DateTime<Utc>) -> Option<DateTime<Utc>>;
}
