mod config_error;
mod ingest_error;

pub use config_error::ConfigError;
pub use ingest_error::IngestError;

/// Top-level error type. Forecasters never produce one; only ingestion,
/// configuration and I/O at the edges are fallible.
#[derive(Debug, thiserror::Error)]
pub enum NextLoginError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NextLoginResult<T> = Result<T, NextLoginError>;
