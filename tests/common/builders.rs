//! Test builders — ergonomic constructors for payloads, readings and stores.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::sync::Arc;

use sensorhub::{CanonicalReading, MemoryStore, RawPayload, ReadingStore, ReadingValue};

// ---------------------------------------------------------------------------
// ReadingBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`CanonicalReading`] fixtures fed straight into the
/// aggregation functions.
///
/// # Example
///
/// ```rust
/// let reading = ReadingBuilder::new(3)
///     .sensor_type("temperature")
///     .value(22.5)
///     .unit("C")
///     .build();
/// ```
pub struct ReadingBuilder {
    id: i64,
    sensor_type: Option<String>,
    value: Option<ReadingValue>,
    unit: Option<String>,
    timestamp: String,
}

impl ReadingBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            sensor_type: None,
            value: None,
            unit: None,
            timestamp: format!("2024-01-15T10:00:{:02}.000Z", id % 60),
        }
    }

    pub fn sensor_type(mut self, sensor_type: impl Into<String>) -> Self {
        self.sensor_type = Some(sensor_type.into());
        self
    }

    pub fn value(mut self, value: impl Into<ReadingValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn build(self) -> CanonicalReading {
        CanonicalReading {
            id: self.id,
            sensor_type: self.sensor_type,
            value: self.value,
            unit: self.unit,
            timestamp: self.timestamp,
            raw_json: "{}".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Unwrap a `json!({...})` literal into a [`RawPayload`].
pub fn payload(value: serde_json::Value) -> RawPayload {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("payload must be a JSON object, got {other}"),
    }
}

/// Build a most-recent-first window of readings for one sensor type, ids
/// counting down from `values.len()`.
pub fn window(sensor_type: &str, values: &[ReadingValue]) -> Vec<CanonicalReading> {
    let n = values.len() as i64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            ReadingBuilder::new(n - i as i64)
                .sensor_type(sensor_type)
                .value(v.clone())
                .build()
        })
        .collect()
}

/// A fresh in-memory store behind the trait object the services expect.
pub fn memory_store() -> Arc<dyn ReadingStore> {
    Arc::new(MemoryStore::new())
}
