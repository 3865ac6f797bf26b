//! Ingestion coordinator — normalise, append, report per item.
//!
//! A batch is fanned out as one task per element and joined with
//! [`futures::future::join_all`], which yields results in input order no
//! matter which write finishes first. One element failing never aborts or
//! rolls back the others.

use std::sync::Arc;

use futures::future::join_all;
use serde_json::Value;

use sensorhub_core::normalizer::normalize;
use sensorhub_core::{RawPayload, ReadingId, ReadingStore, ValidationError};

use crate::error::IngestError;

/// Outcome of one batch element, at the same index as the input element.
pub type ItemOutcome = Result<ReadingId, IngestError>;

/// What an ingest call produced.
#[derive(Debug)]
pub enum IngestResult {
    /// A single object was stored under this id.
    Single(ReadingId),
    /// A batch was processed; `outcomes[i]` belongs to input element `i`.
    Batch(Vec<ItemOutcome>),
}

impl IngestResult {
    /// Ids of every stored reading, in input order.
    pub fn inserted_ids(&self) -> Vec<ReadingId> {
        match self {
            IngestResult::Single(id) => vec![*id],
            IngestResult::Batch(outcomes) => {
                outcomes.iter().filter_map(|o| o.as_ref().ok().copied()).collect()
            }
        }
    }
}

/// Accepts single or batch payloads and writes them through the store.
#[derive(Clone)]
pub struct IngestCoordinator {
    store: Arc<dyn ReadingStore>,
}

impl IngestCoordinator {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }

    /// Ingest a request body.
    ///
    /// Objects take the single path and fail as a whole on a storage error.
    /// Arrays take the best-effort batch path. Anything else, and an empty
    /// array, is rejected before the store is touched.
    pub async fn ingest(&self, payload: Value) -> Result<IngestResult, IngestError> {
        match payload {
            Value::Object(raw) => self.ingest_one(raw).await.map(IngestResult::Single),
            Value::Array(items) => self.ingest_batch(items).await.map(IngestResult::Batch),
            _ => Err(ValidationError::InvalidShape.into()),
        }
    }

    /// Normalise and append a single payload.
    pub async fn ingest_one(&self, raw: RawPayload) -> Result<ReadingId, IngestError> {
        match write(&self.store, raw).await {
            Ok(id) => Ok(id),
            Err(err) => {
                tracing::error!(error = %err, "single reading not stored");
                Err(err)
            }
        }
    }

    /// Normalise and append every element independently.
    pub async fn ingest_batch(&self, items: Vec<Value>) -> Result<Vec<ItemOutcome>, IngestError> {
        if items.is_empty() {
            return Err(ValidationError::EmptyBatch.into());
        }

        let len = items.len();
        let tasks = items.into_iter().enumerate().map(|(index, item)| async move {
            let outcome = match item {
                Value::Object(raw) => write(&self.store, raw).await,
                _ => Err(ValidationError::ElementNotObject { index }.into()),
            };
            if let Err(err) = &outcome {
                tracing::warn!(index, error = %err, "batch element not stored");
            }
            outcome
        });

        let outcomes = join_all(tasks).await;
        let stored = outcomes.iter().filter(|o| o.is_ok()).count();
        tracing::debug!(len, stored, "batch ingested");
        Ok(outcomes)
    }
}

async fn write(store: &Arc<dyn ReadingStore>, raw: RawPayload) -> Result<ReadingId, IngestError> {
    let reading = normalize(&raw);
    crate::blocking(store, move |store| store.append(&reading))
        .await
        .map_err(IngestError::from)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
