//! # nextlogin-prediction
//!
//! Predicts a user's next login from their login history.
//!
//! ## 3 Forecasters
//!
//! | Algorithm | Min logins | Signal |
//! |-----------|-----------|--------|
//! | Smart interval | 2 | Recency-weighted median/average of inter-login gaps |
//! | Periodicity | 3 | Weekday × hour frequency grid, dominant slot |
//! | Dynamic patterns | 5 | Day-gap mode + top hours, overdue short-circuit |
//!
//! ## Ensemble
//!
//! Each forecaster gets a sample-size reliability (zeroed when it has no
//! prediction). The highest reliability wins; ties go to the earlier
//! algorithm in `smart_interval → periodicity → dynamic_patterns` order.

mod calendar;
pub mod engine;
pub mod forecasters;
pub mod grid;
pub mod reliability;
mod stats;

pub use engine::{select_best, BestPrediction, PredictionEngine};
pub use forecasters::{DynamicPatternForecaster, IntervalForecaster, PeriodicityForecaster};
pub use grid::FrequencyGrid;
