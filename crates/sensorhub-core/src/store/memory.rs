//! In-memory reading store. Not durable; used by tests and benchmarks.

use std::sync::Mutex;

use super::{poisoned, ReadingStore};
use crate::error::StorageError;
use crate::types::{CanonicalReading, NewReading, ReadingId};

#[derive(Debug, Default)]
struct Inner {
    last_id: ReadingId,
    readings: Vec<CanonicalReading>,
    closed: bool,
}

/// `Vec`-backed store with the same ordering guarantees as [`super::SqliteStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadingStore for MemoryStore {
    fn append(&self, reading: &NewReading) -> Result<ReadingId, StorageError> {
        let mut inner = self.inner.lock().map_err(poisoned)?;
        if inner.closed {
            return Err(StorageError::Closed);
        }
        inner.last_id += 1;
        let id = inner.last_id;
        inner.readings.push(reading.clone().with_id(id));
        Ok(id)
    }

    fn query_recent(&self, limit: usize) -> Result<Vec<CanonicalReading>, StorageError> {
        let inner = self.inner.lock().map_err(poisoned)?;
        if inner.closed {
            return Err(StorageError::Closed);
        }
        Ok(inner.readings.iter().rev().take(limit).cloned().collect())
    }

    fn count(&self) -> Result<u64, StorageError> {
        let inner = self.inner.lock().map_err(poisoned)?;
        if inner.closed {
            return Err(StorageError::Closed);
        }
        Ok(inner.readings.len() as u64)
    }

    fn close(&self) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().map_err(poisoned)?;
        if std::mem::replace(&mut inner.closed, true) {
            return Err(StorageError::Closed);
        }
        Ok(())
    }
}
