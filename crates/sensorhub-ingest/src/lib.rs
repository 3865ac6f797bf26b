//! sensorhub-ingest — write and read paths over a shared [`ReadingStore`].
//!
//! [`IngestCoordinator`] turns raw payloads (single objects or best-effort
//! batches) into persisted readings. [`QueryService`] serves the most recent
//! readings, optionally filtered or grouped per sensor type.
//!
//! Both hold the same `Arc<dyn ReadingStore>`, opened once at startup and
//! closed once at shutdown by the binary. Store calls are blocking and run on
//! tokio's blocking pool.
//!
//! [`ReadingStore`]: sensorhub_core::ReadingStore

pub mod coordinator;
pub mod error;
pub mod query;

pub use coordinator::{IngestCoordinator, IngestResult, ItemOutcome};
pub use error::IngestError;
pub use query::QueryService;

use std::sync::Arc;

use sensorhub_core::{ReadingStore, StorageError};

/// Run a blocking store call on the blocking pool. A panicked or cancelled
/// task is reported as an unavailable store.
pub(crate) async fn blocking<T, F>(store: &Arc<dyn ReadingStore>, f: F) -> Result<T, StorageError>
where
    T: Send + 'static,
    F: FnOnce(&dyn ReadingStore) -> Result<T, StorageError> + Send + 'static,
{
    let store = Arc::clone(store);
    tokio::task::spawn_blocking(move || f(store.as_ref()))
        .await
        .map_err(|err| StorageError::Unavailable(format!("store task failed: {err}")))?
}
