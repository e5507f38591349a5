//! # nextlogin-ingest
//!
//! Turns an upstream user payload into validated login histories and runs
//! the prediction engine across them.
//!
//! Pipeline: payload → rows → dedup/validate → [`UserHistory`] → batch predict → report.

pub mod batch;
pub mod payload;
pub mod records;

pub use batch::{predict_all, PredictionReport};
pub use payload::{extract_rows, parse_payload};
pub use records::{ingest_rows, IngestOutcome, SkipReason, SkippedRecord, UserHistory};
