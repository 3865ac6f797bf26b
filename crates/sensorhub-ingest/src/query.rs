//! Query service — recent readings for the dashboard.

use std::sync::Arc;

use sensorhub_core::aggregate::{filter_readings, group_by_sensor_type};
use sensorhub_core::{CanonicalReading, ReadingGroups, ReadingStore, SensorFilter, StorageError};

#[derive(Clone)]
pub struct QueryService {
    store: Arc<dyn ReadingStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }

    /// Up to `limit` readings, newest first.
    pub async fn recent(&self, limit: usize) -> Result<Vec<CanonicalReading>, StorageError> {
        let readings = crate::blocking(&self.store, move |store| store.query_recent(limit)).await?;
        tracing::debug!(limit, returned = readings.len(), "recent readings queried");
        Ok(readings)
    }

    /// The `limit` most recent readings, narrowed to `filter`. The window is
    /// applied before filtering, so fewer than `limit` readings may return.
    pub async fn filtered(
        &self,
        limit: usize,
        filter: &SensorFilter,
    ) -> Result<Vec<CanonicalReading>, StorageError> {
        Ok(filter_readings(self.recent(limit).await?, filter))
    }

    /// The `limit` most recent readings grouped per sensor type.
    pub async fn recent_grouped(&self, limit: usize) -> Result<ReadingGroups, StorageError> {
        Ok(group_by_sensor_type(self.recent(limit).await?))
    }
}
