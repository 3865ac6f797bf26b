//! sensorhub — IoT sensor reading ingestion, normalization and storage.
//!
//! Accepts loosely-structured readings (single objects or batches, with
//! varying field names), normalises them into a canonical record, appends
//! them to a durable log, and serves recent readings and per-sensor-type
//! statistics to a dashboard. This crate re-exports the layers so that
//! integration tests and the binary can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! POST ──► IngestCoordinator ──► Normalizer ──► ReadingStore
//!                                                   │
//! GET  ◄── QueryService ◄── Aggregate ◄─────────────┘
//! ```
//!
//! The store is opened once at startup, shared by the coordinator and the
//! query service, and closed once after the server stops.

pub use sensorhub_core::aggregate::{self, filter_readings, group_by_sensor_type};
pub use sensorhub_core::config::{self, Config};
pub use sensorhub_core::normalizer::{self, normalize, normalize_at};
pub use sensorhub_core::{
    CanonicalReading, MemoryStore, NewReading, RawPayload, ReadingGroup, ReadingGroups, ReadingId,
    ReadingStore, ReadingValue, SensorFilter, SqliteStore, StorageError, ValidationError,
};
pub use sensorhub_ingest::{IngestCoordinator, IngestError, IngestResult, ItemOutcome, QueryService};
pub use sensorhub_server::{create_router, run, serve, shutdown_signal, ApiError, AppState};
