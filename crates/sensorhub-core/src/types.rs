//! Core types for sensorhub-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the untyped [`RawPayload`] received at the boundary, the
//! normalised [`NewReading`] awaiting an id, and the persisted
//! [`CanonicalReading`].

use serde::{Deserialize, Serialize};

/// An untyped mapping of string keys to arbitrary JSON values, exactly as
/// received from a producer. No schema is guaranteed.
pub type RawPayload = serde_json::Map<String, serde_json::Value>;

/// Store-assigned identifier of a persisted reading. Strictly increasing in
/// insertion order and never reused.
pub type ReadingId = i64;

/// The measured value of a reading.
///
/// Producers may send anything in the value slot. Numbers (and anything that
/// reads as one) become [`ReadingValue::Number`]; everything else is kept
/// verbatim as [`ReadingValue::Text`] and is ignored by averaging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingValue {
    Number(f64),
    Text(String),
}

impl ReadingValue {
    /// Convert a JSON value into a reading value. `null` yields `None`.
    ///
    /// Booleans become `1.0`/`0.0` and numeric strings are parsed, matching
    /// how a REAL column stores them.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Number(if *b { 1.0 } else { 0.0 })),
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::String(s) => Some(Self::from_text(s)),
            Value::Array(_) | Value::Object(_) => Some(Self::Text(value.to_string())),
        }
    }

    /// Parse text that may hold a number. Non-finite results stay text.
    pub fn from_text(s: &str) -> Self {
        match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(s.to_string()),
        }
    }

    /// The numeric value, if this is a well-formed finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for ReadingValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for ReadingValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl std::fmt::Display for ReadingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadingValue::Number(n) => write!(f, "{n}"),
            ReadingValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A normalised reading that has not been persisted yet.
///
/// Produced by [`crate::normalizer::normalize`]; the store turns it into a
/// [`CanonicalReading`] by assigning an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReading {
    pub sensor_type: Option<String>,
    pub value: Option<ReadingValue>,
    pub unit: Option<String>,
    /// ISO-8601 timestamp, either taken from the payload or defaulted to the
    /// normalisation instant.
    pub timestamp: String,
    /// The original payload serialized verbatim. Never parsed back.
    pub raw_json: String,
}

impl NewReading {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: ReadingId) -> CanonicalReading {
        CanonicalReading {
            id,
            sensor_type: self.sensor_type,
            value: self.value,
            unit: self.unit,
            timestamp: self.timestamp,
            raw_json: self.raw_json,
        }
    }
}

/// A persisted reading, as returned by the store and served to the dashboard.
///
/// Every record has an `id` and a `timestamp`; the remaining fields may be
/// absent and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalReading {
    pub id: ReadingId,
    pub sensor_type: Option<String>,
    pub value: Option<ReadingValue>,
    pub unit: Option<String>,
    pub timestamp: String,
    pub raw_json: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
