//! # nextlogin-core
//!
//! Foundation crate for next-login prediction.
//! Defines the login history and prediction models, the forecaster trait,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod timefmt;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NextLoginConfig;
pub use errors::{NextLoginError, NextLoginResult};
pub use models::{
    Algorithm, LoginHistory, PredictionSet, ReliabilityScores, ReliabilityTier, UserPrediction,
};
pub use traits::Forecaster;
