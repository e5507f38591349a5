//! Sample-size reliability per algorithm.
//!
//! Each score is a non-decreasing, capped function of the login count:
//!
//! ```text
//! smart_interval   = min(0.85, 0.4 + n/40)                          n ≥ 2
//! periodicity      = min(0.9,  0.3 + n/30), +0.1 when n ≥ 7 (cap)   n ≥ 3
//! dynamic_patterns = min(0.95, 0.2 + n/20), +0.2 when n ≥ 10 (cap)  n ≥ 5
//! ```
//!
//! Below the minimum count, or when the algorithm produced no prediction,
//! the score is 0.

use chrono::{DateTime, Utc};
use nextlogin_core::constants::{
    DYNAMIC_RELIABILITY_CAP, INTERVAL_RELIABILITY_CAP, MIN_LOGINS_DYNAMIC, MIN_LOGINS_INTERVAL,
    MIN_LOGINS_PERIODICITY, PERIODICITY_RELIABILITY_CAP,
};
use nextlogin_core::{Algorithm, ReliabilityScores};

const PERIODICITY_BOOST_AT: usize = 7;
const PERIODICITY_BOOST: f64 = 0.1;
const DYNAMIC_BOOST_AT: usize = 10;
const DYNAMIC_BOOST: f64 = 0.2;

pub fn smart_interval(n: usize) -> f64 {
    if n < MIN_LOGINS_INTERVAL {
        return 0.0;
    }
    (0.4 + n as f64 / 40.0).min(INTERVAL_RELIABILITY_CAP)
}

pub fn periodicity(n: usize) -> f64 {
    if n < MIN_LOGINS_PERIODICITY {
        return 0.0;
    }
    let mut score = (0.3 + n as f64 / 30.0).min(PERIODICITY_RELIABILITY_CAP);
    if n >= PERIODICITY_BOOST_AT {
        score = (score + PERIODICITY_BOOST).min(PERIODICITY_RELIABILITY_CAP);
    }
    score
}

pub fn dynamic_patterns(n: usize) -> f64 {
    if n < MIN_LOGINS_DYNAMIC {
        return 0.0;
    }
    let mut score = (0.2 + n as f64 / 20.0).min(DYNAMIC_RELIABILITY_CAP);
    if n >= DYNAMIC_BOOST_AT {
        score = (score + DYNAMIC_BOOST).min(DYNAMIC_RELIABILITY_CAP);
    }
    score
}

/// Reliability of `algorithm` for a history of `n` logins, ignoring whether it predicted.
pub fn score(algorithm: Algorithm, n: usize) -> f64 {
    match algorithm {
        Algorithm::SmartInterval => smart_interval(n),
        Algorithm::Periodicity => periodicity(n),
        Algorithm::DynamicPatterns => dynamic_patterns(n),
    }
}

/// Scores for all algorithms, zeroed where the forecast is `None`.
/// `forecasts` is indexed by [`Algorithm::index`].
pub fn score_all(n: usize, forecasts: &[Option<DateTime<Utc>>; 3]) -> ReliabilityScores {
    let mut scores = ReliabilityScores::default();
    for algorithm in Algorithm::ALL {
        let value = match forecasts[algorithm.index()] {
            Some(_) => score(algorithm, n),
            None => 0.0,
        };
        scores.set(algorithm, value);
    }
    scores
}
