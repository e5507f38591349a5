//! The three next-login heuristics.
//!
//! Each one is a pure [`Forecaster`](nextlogin_core::Forecaster): it reads the
//! history, never mutates it, and answers `None` when it cannot predict.

pub mod dynamic_patterns;
pub mod interval;
pub mod periodicity;

pub use dynamic_patterns::DynamicPatternForecaster;
pub use interval::{IntervalForecaster, IntervalSample};
pub use periodicity::PeriodicityForecaster;
