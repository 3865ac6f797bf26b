//! Domain-specific assertion macros for sensorhub harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *what* pipeline invariant was violated.

use sensorhub::CanonicalReading;

// ---------------------------------------------------------------------------
// Field assertions
// ---------------------------------------------------------------------------

/// Assert the canonical fields of a reading (normalised or persisted).
///
/// ```rust
/// assert_reading!(reading, Some("temperature"), Some(22.5.into()), Some("C"));
/// ```
#[macro_export]
macro_rules! assert_reading {
    ($reading:expr, $sensor_type:expr, $value:expr, $unit:expr) => {{
        let reading = &$reading;
        let expected_type: Option<&str> = $sensor_type;
        let expected_value: Option<sensorhub::ReadingValue> = $value;
        let expected_unit: Option<&str> = $unit;
        pretty_assertions::assert_eq!(
            (
                reading.sensor_type.as_deref(),
                reading.value.clone(),
                reading.unit.as_deref()
            ),
            (expected_type, expected_value, expected_unit),
            "assert_reading! failed for raw payload {}",
            reading.raw_json
        );
    }};
}

/// Assert that a result window is ordered newest first with no duplicates.
#[macro_export]
macro_rules! assert_newest_first {
    ($readings:expr) => {{
        let readings: &[sensorhub::CanonicalReading] = &$readings;
        if let Some(pair) = readings.windows(2).find(|w| w[0].id <= w[1].id) {
            panic!(
                "assert_newest_first! failed: id {} is followed by id {}.\n  ids: {:?}",
                pair[0].id,
                pair[1].id,
                readings.iter().map(|r| r.id).collect::<Vec<_>>()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Ids of a result window, for compact comparisons.
pub fn ids(readings: &[CanonicalReading]) -> Vec<i64> {
    readings.iter().map(|r| r.id).collect()
}

/// Assert the invariants every persisted reading carries: a positive id and
/// a non-empty timestamp.
pub fn assert_persisted_invariants(reading: &CanonicalReading) {
    assert!(reading.id > 0, "persisted reading must have a positive id: {reading:?}");
    assert!(
        !reading.timestamp.is_empty(),
        "persisted reading must have a timestamp: {reading:?}"
    );
}
