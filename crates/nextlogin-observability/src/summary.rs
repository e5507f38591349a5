//! Aggregate view of a batch of predictions.

use std::collections::BTreeMap;

use nextlogin_core::{Algorithm, ReliabilityTier, UserPrediction};
use serde::Serialize;

/// Counts per winning algorithm and reliability tier across a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub users: usize,
    pub without_prediction: usize,
    pub by_algorithm: BTreeMap<Algorithm, usize>,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Mean best reliability over users that have a prediction.
    pub mean_best_reliability: f64,
}

impl BatchSummary {
    pub fn from_predictions(rows: &[UserPrediction]) -> Self {
        let mut summary = Self {
            users: rows.len(),
            ..Default::default()
        };
        let mut reliability_sum = 0.0;

        for row in rows {
            let set = &row.predictions;
            let (Some(algorithm), Some(tier)) = (set.best_algorithm, set.best_tier()) else {
                summary.without_prediction += 1;
                continue;
            };
            *summary.by_algorithm.entry(algorithm).or_insert(0) += 1;
            match tier {
                ReliabilityTier::High => summary.high += 1,
                ReliabilityTier::Medium => summary.medium += 1,
                ReliabilityTier::Low => summary.low += 1,
            }
            reliability_sum += set.best_reliability;
        }

        let predicted = summary.users - summary.without_prediction;
        if predicted > 0 {
            summary.mean_best_reliability = reliability_sum / predicted as f64;
        }
        summary
    }

    /// Emit the summary as a single `info` event.
    pub fn log(&self) {
        tracing::info!(
            users = self.users,
            without_prediction = self.without_prediction,
            smart_interval = self.count(Algorithm::SmartInterval),
            periodicity = self.count(Algorithm::Periodicity),
            dynamic_patterns = self.count(Algorithm::DynamicPatterns),
            high = self.high,
            medium = self.medium,
            low = self.low,
            mean_best_reliability = self.mean_best_reliability,
            "batch summary"
        );
    }

    pub fn count(&self, algorithm: Algorithm) -> usize {
        self.by_algorithm.get(&algorithm).copied().unwrap_or(0)
    }
}
