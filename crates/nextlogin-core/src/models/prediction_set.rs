use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Algorithm, ReliabilityTier};
use crate::timefmt;

/// Per-algorithm confidence in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityScores {
    pub smart_interval: f64,
    pub periodicity: f64,
    pub dynamic_patterns: f64,
}

impl ReliabilityScores {
    pub fn get(&self, algorithm: Algorithm) -> f64 {
        match algorithm {
            Algorithm::SmartInterval => self.smart_interval,
            Algorithm::Periodicity => self.periodicity,
            Algorithm::DynamicPatterns => self.dynamic_patterns,
        }
    }

    pub fn set(&mut self, algorithm: Algorithm, score: f64) {
        match algorithm {
            Algorithm::SmartInterval => self.smart_interval = score,
            Algorithm::Periodicity => self.periodicity = score,
            Algorithm::DynamicPatterns => self.dynamic_patterns = score,
        }
    }
}

/// Everything predicted for one user: one nullable instant per algorithm,
/// their reliabilities, and the selected best.
///
/// `best_reliability` is the maximum reliability among algorithms that
/// produced an instant, or 0 with `best_algorithm`/`best_prediction` unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSet {
    #[serde(with = "timefmt::iso_seconds_option")]
    pub smart_interval: Option<DateTime<Utc>>,
    #[serde(with = "timefmt::iso_seconds_option")]
    pub periodicity: Option<DateTime<Utc>>,
    #[serde(with = "timefmt::iso_seconds_option")]
    pub dynamic_patterns: Option<DateTime<Utc>>,
    pub reliability: ReliabilityScores,
    #[serde(with = "timefmt::iso_seconds_option")]
    pub best_prediction: Option<DateTime<Utc>>,
    pub best_algorithm: Option<Algorithm>,
    pub best_reliability: f64,
}

impl PredictionSet {
    /// All predictions null, all reliabilities zero.
    pub fn empty() -> Self {
        Self {
            smart_interval: None,
            periodicity: None,
            dynamic_patterns: None,
            reliability: ReliabilityScores::default(),
            best_prediction: None,
            best_algorithm: None,
            best_reliability: 0.0,
        }
    }

    pub fn prediction(&self, algorithm: Algorithm) -> Option<DateTime<Utc>> {
        match algorithm {
            Algorithm::SmartInterval => self.smart_interval,
            Algorithm::Periodicity => self.periodicity,
            Algorithm::DynamicPatterns => self.dynamic_patterns,
        }
    }

    /// Tier of the selected prediction, if any.
    pub fn best_tier(&self) -> Option<ReliabilityTier> {
        self.best_algorithm
            .map(|_| ReliabilityTier::from_score(self.best_reliability))
    }
}

impl Default for PredictionSet {
    fn default() -> Self {
        Self::empty()
    }
}
