use sensorhub_core::{StorageError, ValidationError};
use thiserror::Error;

/// Why an ingest request, or one element of a batch, was not stored.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IngestError {
    /// Validation failures are the caller's fault; storage failures are ours.
    pub fn is_validation(&self) -> bool {
        matches!(self, IngestError::Validation(_))
    }
}
