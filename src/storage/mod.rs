pub mod json_backend;

use crate::{domain::BiddingRecord, errors::LicitError};

pub type Result<T> = std::result::Result<T, LicitError>;

/// Abstraction over durable backends holding the whole record collection
/// under a single key. The core reads it once at startup and writes the full
/// collection back after every mutation; there is no incremental persistence.
pub trait StorageBackend: Send + Sync {
    fn save(&self, records: &[BiddingRecord]) -> Result<()>;
    fn load(&self) -> Result<Vec<BiddingRecord>>;
}

pub use json_backend::JsonStorage;
