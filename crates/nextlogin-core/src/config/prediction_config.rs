use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::SECONDS_PER_DAY;

/// Prediction subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Gaps at or beyond this many days are treated as anomalies by the interval forecaster.
    pub max_interval_gap_days: u32,
    /// How many of the latest weighted gaps feed the interval forecaster's recent average.
    pub interval_recent_samples: usize,
    /// How many of the latest logins form the dynamic forecaster's recent window.
    pub dynamic_recent_window: usize,
    /// Evaluate users in parallel.
    pub parallel: bool,
}

impl PredictionConfig {
    /// Upper gap bound in seconds (exclusive).
    pub fn max_interval_gap_secs(&self) -> i64 {
        i64::from(self.max_interval_gap_days) * SECONDS_PER_DAY
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            max_interval_gap_days: defaults::DEFAULT_MAX_INTERVAL_GAP_DAYS,
            interval_recent_samples: defaults::DEFAULT_INTERVAL_RECENT_SAMPLES,
            dynamic_recent_window: defaults::DEFAULT_DYNAMIC_RECENT_WINDOW,
            parallel: defaults::DEFAULT_PARALLEL,
        }
    }
}
