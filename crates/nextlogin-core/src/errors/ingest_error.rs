/// Errors raised while turning an upstream payload into login histories.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("malformed payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("invalid login timestamp: {value}")]
    InvalidTimestamp { value: String },

    #[error("login history must contain at least one timestamp")]
    EmptyHistory,
}
