use chrono::{DateTime, Utc};
use nextlogin_core::config::PredictionConfig;
use nextlogin_core::constants::{DEFAULT_INTERVAL_SECS, MIN_LOGINS_INTERVAL};
use nextlogin_core::timefmt;
use nextlogin_core::{Algorithm, Forecaster, LoginHistory};
use tracing::debug;

use crate::stats::{mean, median};

/// Extra weight given to the most recent gap: `1 + (i / n) × 1.5`.
const RECENCY_WEIGHT: f64 = 1.5;
const MEDIAN_SHARE: f64 = 0.6;
const RECENT_SHARE: f64 = 0.4;
/// Fraction of the cadence to wait when the user is already overdue.
const OVERDUE_FRACTION: f64 = 0.3;

/// One retained inter-login gap after recency weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalSample {
    /// Index `i` of the gap `t[i] - t[i-1]` in the history.
    pub index: usize,
    /// Gap in seconds multiplied by its recency weight.
    pub weighted_secs: f64,
}

/// Recency-weighted median/average of inter-login gaps.
#[derive(Debug, Clone)]
pub struct IntervalForecaster {
    max_gap_secs: i64,
    recent_samples: usize,
}

impl IntervalForecaster {
    pub fn new(config: &PredictionConfig) -> Self {
        Self {
            max_gap_secs: config.max_interval_gap_secs(),
            recent_samples: config.interval_recent_samples.max(1),
        }
    }

    /// Weighted gaps in chronological order.
    ///
    /// Gaps that are not positive or reach the anomaly bound are dropped. If
    /// nothing survives, a single one-day sample stands in.
    pub fn weighted_samples(&self, stamps: &[i64]) -> Vec<IntervalSample> {
        let n = stamps.len() as f64;
        let mut samples: Vec<IntervalSample> = stamps
            .windows(2)
            .enumerate()
            .filter_map(|(offset, pair)| {
                let gap = pair[1] - pair[0];
                if gap <= 0 || gap >= self.max_gap_secs {
                    return None;
                }
                let index = offset + 1;
                let weight = 1.0 + (index as f64 / n) * RECENCY_WEIGHT;
                Some(IntervalSample {
                    index,
                    weighted_secs: gap as f64 * weight,
                })
            })
            .collect();

        if samples.is_empty() {
            samples.push(IntervalSample {
                index: 0,
                weighted_secs: DEFAULT_INTERVAL_SECS,
            });
        }
        samples
    }

    /// `0.6 × median + 0.4 × mean of the latest samples`, in seconds.
    pub fn balanced_interval(&self, samples: &[IntervalSample]) -> f64 {
        let chronological: Vec<f64> = samples.iter().map(|s| s.weighted_secs).collect();
        let mut sorted = chronological.clone();
        sorted.sort_by(f64::total_cmp);

        let median_secs = median(&sorted).unwrap_or(DEFAULT_INTERVAL_SECS);
        let take = self.recent_samples.min(chronological.len());
        let recent = &chronological[chronological.len() - take..];
        let recent_avg = mean(recent).unwrap_or(median_secs);

        MEDIAN_SHARE * median_secs + RECENT_SHARE * recent_avg
    }
}

impl Default for IntervalForecaster {
    fn default() -> Self {
        Self::new(&PredictionConfig::default())
    }
}

impl Forecaster for IntervalForecaster {
    fn algorithm(&self) -> Algorithm {
        Algorithm::SmartInterval
    }

    fn min_logins(&self) -> usize {
        MIN_LOGINS_INTERVAL
    }

    fn forecast(&self, history: &LoginHistory, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if history.len() < self.min_logins() {
            return None;
        }

        let mut stamps = history.epoch_seconds();
        stamps.sort_unstable();
        let last = stamps[stamps.len() - 1];

        let samples = self.weighted_samples(&stamps);
        let balanced = self.balanced_interval(&samples);
        let now_secs = now.timestamp();
        let elapsed = (now_secs - last) as f64;

        let predicted = if elapsed > balanced {
            debug!(balanced, elapsed, "interval: overdue, predicting near-term login");
            now_secs + (balanced * OVERDUE_FRACTION) as i64
        } else {
            debug!(balanced, elapsed, "interval: next regular-cadence login");
            last + balanced as i64
        };
        timefmt::from_epoch(predicted)
    }
}
