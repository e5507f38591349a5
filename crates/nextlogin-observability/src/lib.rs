//! # nextlogin-observability
//!
//! Tracing subscriber setup, span macros per pipeline stage, and the batch
//! summary logged after each run.

pub mod summary;
pub mod tracing_setup;

pub use summary::BatchSummary;
pub use tracing_setup::{init_from_config, init_tracing, LogFormat};
