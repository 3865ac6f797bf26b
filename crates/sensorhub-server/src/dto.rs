//! Wire shapes of requests and responses.

use serde::{Deserialize, Serialize};

use sensorhub_core::ReadingId;
use sensorhub_ingest::{IngestResult, ItemOutcome};

/// `{ "error": message }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// `{ "inserted": {"id": N} }` or `{ "inserted": [ {"id": N} | {"error": msg}, ... ] }`
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub inserted: Inserted,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Inserted {
    One(InsertedId),
    Many(Vec<ItemResult>),
}

#[derive(Debug, Serialize)]
pub struct InsertedId {
    pub id: ReadingId,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ItemResult {
    Ok(InsertedId),
    Err(ErrorBody),
}

impl From<ItemOutcome> for ItemResult {
    fn from(outcome: ItemOutcome) -> Self {
        match outcome {
            Ok(id) => ItemResult::Ok(InsertedId { id }),
            Err(err) => ItemResult::Err(ErrorBody::new(err.to_string())),
        }
    }
}

impl From<IngestResult> for IngestResponse {
    fn from(result: IngestResult) -> Self {
        let inserted = match result {
            IngestResult::Single(id) => Inserted::One(InsertedId { id }),
            IngestResult::Batch(outcomes) => {
                Inserted::Many(outcomes.into_iter().map(ItemResult::from).collect())
            }
        };
        Self { inserted }
    }
}

/// Query string of `GET /readings` and `GET /readings/summary`. Both fields
/// are kept as text so that junk falls back to defaults instead of a 400.
#[derive(Debug, Default, Deserialize)]
pub struct ReadingsParams {
    pub limit: Option<String>,
    #[serde(rename = "type")]
    pub sensor_type: Option<String>,
}

/// Parse `limit` the way a lenient integer parser would: optional leading
/// whitespace and sign, then digits, ignoring any trailing junk. Missing,
/// digit-less, or negative input yields `default`.
pub fn parse_limit(raw: Option<&str>, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if digits.is_empty() || negative {
        return default;
    }
    digits.parse().unwrap_or(usize::MAX)
}
