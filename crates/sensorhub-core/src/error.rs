//! Error taxonomy shared by the pipeline layers.

use thiserror::Error;

/// A durable write or read failed.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store is closed")]
    Closed,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// The request shape was rejected before any storage was touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Empty array")]
    EmptyBatch,
    #[error("Payload must be an object or array of objects")]
    InvalidShape,
    #[error("Batch element {index} must be an object")]
    ElementNotObject { index: usize },
}
