use thiserror::Error;
use uuid::Uuid;

/// Error type that captures store and persistence failures.
///
/// The computation core itself is infallible by design: missing dates,
/// zero denominators, and unparseable numeric input all recover to zero.
#[derive(Debug, Error)]
pub enum LicitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),
}
