//! Normalizer — maps an arbitrary [`RawPayload`] to a [`NewReading`].
//!
//! Producers disagree on key names, so every canonical field has an ordered
//! list of candidate keys and the first present candidate wins. Normalisation
//! is pure and never fails: missing or odd-looking fields degrade to `None`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::types::{NewReading, RawPayload, ReadingValue};

pub const SENSOR_TYPE_KEYS: &[&str] = &["type", "sensor", "sensorType", "sensor_type"];
pub const VALUE_KEYS: &[&str] = &["value", "v"];
pub const UNIT_KEYS: &[&str] = &["unit", "u"];
pub const TIMESTAMP_KEYS: &[&str] = &["timestamp", "time"];

/// Normalise `raw`, defaulting a missing timestamp to the current instant.
pub fn normalize(raw: &RawPayload) -> NewReading {
    normalize_at(raw, Utc::now())
}

/// Normalise `raw`, defaulting a missing timestamp to `now`.
pub fn normalize_at(raw: &RawPayload, now: DateTime<Utc>) -> NewReading {
    NewReading {
        sensor_type: first_text(raw, SENSOR_TYPE_KEYS),
        value: first_value(raw),
        unit: first_text(raw, UNIT_KEYS),
        timestamp: first_text(raw, TIMESTAMP_KEYS).unwrap_or_else(|| iso8601(now)),
        raw_json: Value::Object(raw.clone()).to_string(),
    }
}

/// Format an instant the way producers and the dashboard expect:
/// `2024-01-15T10:00:00.000Z`.
pub fn iso8601(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ---------------------------------------------------------------------------
// Field resolution
// ---------------------------------------------------------------------------

/// The value slot counts as present whenever the key exists, so an explicit
/// `null` under `value` shadows `v`.
fn first_value(raw: &RawPayload) -> Option<ReadingValue> {
    VALUE_KEYS
        .iter()
        .find_map(|key| raw.get(*key))
        .and_then(ReadingValue::from_json)
}

/// Text slots skip falsy values (`null`, `false`, `0`, `""`) and fall
/// through to the next candidate.
fn first_text(raw: &RawPayload, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| raw.get(*key).and_then(as_text))
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
