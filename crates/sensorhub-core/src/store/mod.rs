//! Store — durable append-only log of [`CanonicalReading`] values.
//!
//! The store is the single source of truth; the coordinator writes through
//! it and the query service reads from it, never from each other.
//!
//! Implementations must serialize concurrent [`ReadingStore::append`] calls
//! so that every successful append receives a distinct id greater than all
//! ids handed out before it, and must never expose a half-written record to
//! [`ReadingStore::query_recent`].

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::StorageError;
use crate::types::{CanonicalReading, NewReading, ReadingId};

/// A durable, append-only, id-ordered table of readings.
///
/// Methods are blocking; async callers should run them on a blocking pool.
pub trait ReadingStore: Send + Sync {
    /// Persist `reading` atomically and return its assigned id.
    fn append(&self, reading: &NewReading) -> Result<ReadingId, StorageError>;

    /// Return at most `limit` readings ordered by id descending.
    fn query_recent(&self, limit: usize) -> Result<Vec<CanonicalReading>, StorageError>;

    /// Number of persisted readings.
    fn count(&self) -> Result<u64, StorageError>;

    /// Release the underlying resources. Later calls fail with
    /// [`StorageError::Closed`].
    fn close(&self) -> Result<(), StorageError>;
}

impl<T: ReadingStore + ?Sized> ReadingStore for std::sync::Arc<T> {
    fn append(&self, reading: &NewReading) -> Result<ReadingId, StorageError> {
        (**self).append(reading)
    }

    fn query_recent(&self, limit: usize) -> Result<Vec<CanonicalReading>, StorageError> {
        (**self).query_recent(limit)
    }

    fn count(&self) -> Result<u64, StorageError> {
        (**self).count()
    }

    fn close(&self) -> Result<(), StorageError> {
        (**self).close()
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StorageError {
    StorageError::Unavailable("store lock poisoned".to_string())
}
