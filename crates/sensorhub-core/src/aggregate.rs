//! Aggregation — per-sensor-type statistics over a window of recent readings.
//!
//! Input is always a most-recent-first slice as returned by
//! [`crate::store::ReadingStore::query_recent`]. Groups are recomputed on
//! every call and never cached.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{CanonicalReading, ReadingValue};

/// Derived statistics for one sensor type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingGroup {
    /// `None` collects readings whose sensor type could not be resolved.
    pub sensor_type: Option<String>,
    pub count: usize,
    /// Value of the most recent reading in the group.
    pub latest: Option<ReadingValue>,
    /// Mean over numeric values only; `None` when the group has none.
    pub average: Option<f64>,
    /// Unit of the most recent reading in the group.
    pub unit: Option<String>,
    /// Timestamp of the most recent reading in the group.
    pub timestamp: String,
    /// The group's readings, most recent first.
    #[serde(skip)]
    pub readings: Vec<CanonicalReading>,
}

impl ReadingGroup {
    fn new(first: CanonicalReading) -> Self {
        Self {
            sensor_type: first.sensor_type.clone(),
            count: 0,
            latest: first.value.clone(),
            average: None,
            unit: first.unit.clone(),
            timestamp: first.timestamp.clone(),
            readings: vec![first],
        }
    }

    fn finish(mut self) -> Self {
        self.count = self.readings.len();
        self.average = average(self.readings.iter().filter_map(|r| r.value.as_ref()));
        self
    }
}

/// Reading groups keyed by sensor type, in order of first appearance in the
/// most-recent-first input (so the most recently active type comes first).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReadingGroups(Vec<ReadingGroup>);

impl ReadingGroups {
    /// Look up the group for `sensor_type` (`None` for untyped readings).
    pub fn get(&self, sensor_type: Option<&str>) -> Option<&ReadingGroup> {
        self.0.iter().find(|g| g.sensor_type.as_deref() == sensor_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReadingGroup> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Partition `readings` by sensor type, preserving relative order inside
/// each group, and compute count, latest, average and unit per group.
pub fn group_by_sensor_type(readings: Vec<CanonicalReading>) -> ReadingGroups {
    let mut index: HashMap<Option<String>, usize> = HashMap::new();
    let mut groups: Vec<ReadingGroup> = Vec::new();

    for reading in readings {
        match index.get(&reading.sensor_type) {
            Some(&i) => groups[i].readings.push(reading),
            None => {
                index.insert(reading.sensor_type.clone(), groups.len());
                groups.push(ReadingGroup::new(reading));
            }
        }
    }

    ReadingGroups(groups.into_iter().map(ReadingGroup::finish).collect())
}

/// Arithmetic mean of the well-formed numbers among `values`. Non-numeric
/// values count toward neither sum nor denominator.
pub fn average<'a>(values: impl IntoIterator<Item = &'a ReadingValue>) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .filter_map(ReadingValue::as_number)
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Which readings a dashboard view wants to see.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SensorFilter {
    #[default]
    All,
    Type(String),
}

impl SensorFilter {
    pub fn matches(&self, reading: &CanonicalReading) -> bool {
        match self {
            SensorFilter::All => true,
            SensorFilter::Type(t) => reading.sensor_type.as_deref() == Some(t.as_str()),
        }
    }
}

impl From<&str> for SensorFilter {
    fn from(s: &str) -> Self {
        if s == "all" {
            SensorFilter::All
        } else {
            SensorFilter::Type(s.to_string())
        }
    }
}

/// Keep only the readings matching `filter`, preserving order. `All`
/// returns the input unchanged.
pub fn filter_readings(
    readings: Vec<CanonicalReading>,
    filter: &SensorFilter,
) -> Vec<CanonicalReading> {
    match filter {
        SensorFilter::All => readings,
        _ => readings.into_iter().filter(|r| filter.matches(r)).collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
