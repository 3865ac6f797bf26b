//! A [`ReadingStore`] that fails selected appends on purpose.
//!
//! Wraps a [`MemoryStore`]; every append whose normalised reading matches the
//! predicate fails with a storage error and leaves the log untouched. The
//! predicate looks at content rather than call order, so the outcome does not
//! depend on how a concurrent batch happens to be scheduled.

use sensorhub::{
    CanonicalReading, MemoryStore, NewReading, ReadingId, ReadingStore, StorageError,
};

pub const INJECTED_FAILURE: &str = "disk I/O error (injected)";

pub struct FaultyStore {
    inner: MemoryStore,
    fail_when: Box<dyn Fn(&NewReading) -> bool + Send + Sync>,
}

impl FaultyStore {
    pub fn failing_when(pred: impl Fn(&NewReading) -> bool + Send + Sync + 'static) -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_when: Box::new(pred),
        }
    }

    /// Fail every append of an empty payload (`{}`).
    pub fn failing_empty_payloads() -> Self {
        Self::failing_when(|r| r.raw_json == "{}")
    }

    /// Fail every append.
    pub fn broken() -> Self {
        Self::failing_when(|_| true)
    }
}

impl ReadingStore for FaultyStore {
    fn append(&self, reading: &NewReading) -> Result<ReadingId, StorageError> {
        if (self.fail_when)(reading) {
            return Err(StorageError::Unavailable(INJECTED_FAILURE.to_string()));
        }
        self.inner.append(reading)
    }

    fn query_recent(&self, limit: usize) -> Result<Vec<CanonicalReading>, StorageError> {
        self.inner.query_recent(limit)
    }

    fn count(&self) -> Result<u64, StorageError> {
        self.inner.count()
    }

    fn close(&self) -> Result<(), StorageError> {
        self.inner.close()
    }
}
