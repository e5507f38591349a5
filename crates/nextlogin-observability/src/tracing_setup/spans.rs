//! Span definitions per pipeline stage: ingest, batch, per-user prediction.

/// Create an ingest span.
#[macro_export]
macro_rules! ingest_span {
    ($record_count:expr) => {
        tracing::info_span!("nextlogin.ingest", record_count = $record_count)
    };
}

/// Create a batch prediction span.
#[macro_export]
macro_rules! batch_span {
    ($user_count:expr) => {
        tracing::info_span!("nextlogin.batch", user_count = $user_count)
    };
}

/// Create a per-user prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($user_id:expr, $login_count:expr) => {
        tracing::debug_span!("nextlogin.prediction", user_id = %$user_id, login_count = $login_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INGEST: &str = "nextlogin.ingest";
    pub const BATCH: &str = "nextlogin.batch";
    pub const PREDICTION: &str = "nextlogin.prediction";
}
