use std::fmt;

use serde::{Deserialize, Serialize};

/// The three forecasting heuristics, in ensemble evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    SmartInterval,
    Periodicity,
    DynamicPatterns,
}

impl Algorithm {
    /// Fixed evaluation order. Ties in the ensemble go to the earliest entry.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::SmartInterval,
        Algorithm::Periodicity,
        Algorithm::DynamicPatterns,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SmartInterval => "smart_interval",
            Self::Periodicity => "periodicity",
            Self::DynamicPatterns => "dynamic_patterns",
        }
    }

    /// Position in [`Algorithm::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::SmartInterval => 0,
            Self::Periodicity => 1,
            Self::DynamicPatterns => 2,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
