//! PredictionEngine: runs all three forecasters and picks the most reliable.

use chrono::{DateTime, Utc};
use nextlogin_core::config::PredictionConfig;
use nextlogin_core::constants::MIN_LOGINS_INTERVAL;
use nextlogin_core::{Algorithm, Forecaster, LoginHistory, PredictionSet, ReliabilityScores};
use tracing::debug;

use crate::forecasters::{DynamicPatternForecaster, IntervalForecaster, PeriodicityForecaster};
use crate::reliability;

/// The selected winner of an ensemble run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestPrediction {
    pub algorithm: Algorithm,
    pub prediction: DateTime<Utc>,
    pub reliability: f64,
}

/// Ensemble selector over the interval, periodicity and dynamic-pattern forecasters.
///
/// Stateless between calls: one history and one `now` in, one
/// [`PredictionSet`] out.
#[derive(Debug, Clone)]
pub struct PredictionEngine {
    interval: IntervalForecaster,
    periodicity: PeriodicityForecaster,
    dynamic: DynamicPatternForecaster,
}

impl PredictionEngine {
    pub fn new(config: &PredictionConfig) -> Self {
        Self {
            interval: IntervalForecaster::new(config),
            periodicity: PeriodicityForecaster::new(),
            dynamic: DynamicPatternForecaster::new(config),
        }
    }

    /// Forecasters in evaluation order.
    pub fn forecasters(&self) -> [&dyn Forecaster; 3] {
        [&self.interval, &self.periodicity, &self.dynamic]
    }

    /// Predict the next login for one user.
    pub fn predict(&self, history: &LoginHistory, now: DateTime<Utc>) -> PredictionSet {
        let n = history.len();
        if n < MIN_LOGINS_INTERVAL {
            debug!(login_count = n, "too few logins, skipping forecasters");
            return PredictionSet::empty();
        }

        // All three forecasts exist before selection starts.
        let forecasts = self.forecasters().map(|f| f.forecast(history, now));
        let scores = reliability::score_all(n, &forecasts);
        let best = select_best(&forecasts, &scores);

        debug!(
            login_count = n,
            best_algorithm = best.map(|b| b.algorithm.as_str()),
            best_reliability = best.map_or(0.0, |b| b.reliability),
            "ensemble complete"
        );

        PredictionSet {
            smart_interval: forecasts[Algorithm::SmartInterval.index()],
            periodicity: forecasts[Algorithm::Periodicity.index()],
            dynamic_patterns: forecasts[Algorithm::DynamicPatterns.index()],
            reliability: scores,
            best_prediction: best.map(|b| b.prediction),
            best_algorithm: best.map(|b| b.algorithm),
            best_reliability: best.map_or(0.0, |b| b.reliability),
        }
    }
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self::new(&PredictionConfig::default())
    }
}

/// Highest-reliability algorithm that produced a prediction.
///
/// Walks [`Algorithm::ALL`] in order and only replaces the current best on a
/// strictly greater score, so the earliest algorithm wins ties. Zero-reliability
/// forecasts are never selected.
pub fn select_best(
    forecasts: &[Option<DateTime<Utc>>; 3],
    scores: &ReliabilityScores,
) -> Option<BestPrediction> {
    let mut best: Option<BestPrediction> = None;
    for algorithm in Algorithm::ALL {
        let Some(prediction) = forecasts[algorithm.index()] else {
            continue;
        };
        let reliability = scores.get(algorithm);
        if reliability > best.map_or(0.0, |b| b.reliability) {
            best = Some(BestPrediction {
                algorithm,
                prediction,
                reliability,
            });
        }
    }
    best
}
