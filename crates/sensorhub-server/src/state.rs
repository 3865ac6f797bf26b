//! Shared handler state.

use std::sync::Arc;

use sensorhub_core::ReadingStore;
use sensorhub_ingest::{IngestCoordinator, QueryService};

/// Cloned into every handler. All clones share one store.
#[derive(Clone)]
pub struct AppState {
    pub coordinator: IngestCoordinator,
    pub queries: QueryService,
    pub default_limit: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn ReadingStore>, default_limit: usize) -> Self {
        Self {
            coordinator: IngestCoordinator::new(Arc::clone(&store)),
            queries: QueryService::new(store),
            default_limit,
        }
    }
}
