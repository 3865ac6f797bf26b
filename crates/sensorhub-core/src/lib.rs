//! sensorhub-core — shared pipeline pieces for the sensorhub service.
//!
//! This crate exposes the leaf layers of the ingestion pipeline as public
//! modules, plus the shared types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! RawPayload ──► Normalizer ──► Store.append
//!                                  │
//!                 Store.query_recent ──► Aggregate ──► dashboard
//! ```
//!
//! The ingestion coordinator and query service that drive these layers live
//! in `sensorhub-ingest`; the HTTP boundary lives in `sensorhub-server`.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod store;
pub mod types;

pub use aggregate::{ReadingGroup, ReadingGroups, SensorFilter};
pub use error::{StorageError, ValidationError};
pub use store::{MemoryStore, ReadingStore, SqliteStore};
pub use types::{CanonicalReading, NewReading, RawPayload, ReadingId, ReadingValue};
