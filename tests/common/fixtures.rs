//! Static payload corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of JSON request bodies in the
//! shapes real producers send.

/// One payload per sensor-type alias, each with a different value/unit
/// spelling.
pub const CORPUS_ALIASES: &[&str] = &[
    r#"{"type":"temperature","v":22.5,"u":"C"}"#,
    r#"{"sensor":"humidity","value":41,"unit":"%"}"#,
    r#"{"sensorType":"pressure","value":"1013.2","unit":"hPa","time":"2024-01-15T10:00:00Z"}"#,
    r#"{"sensor_type":"light","v":320,"u":"lx","timestamp":"2024-01-15T10:00:01.000Z"}"#,
];

/// Payloads whose fields are missing or odd; none of them may make
/// normalisation fail.
pub const CORPUS_DEGRADED: &[&str] = &[
    r#"{}"#,
    r#"{"value":"open"}"#,
    r#"{"type":null,"value":null}"#,
    r#"{"type":"","sensor":"","unit":""}"#,
    r#"{"type":["a","b"],"value":{"nested":true}}"#,
    r#"{"type":42,"value":true,"unit":7}"#,
    r#"{"timestamp":null,"time":""}"#,
];

/// The motion/light/temperature mix the dashboard shows.
pub const CORPUS_DASHBOARD: &[&str] = &[
    r#"{"type":"motion","value":1}"#,
    r#"{"type":"temperature","value":21.0,"unit":"C"}"#,
    r#"{"type":"light","value":300,"unit":"lx"}"#,
    r#"{"type":"temperature","value":"sensor fault","unit":"C"}"#,
    r#"{"type":"motion","value":0}"#,
    r#"{"type":"temperature","value":23.0,"unit":"C"}"#,
];

/// Parse a corpus line into a JSON value.
pub fn parse(line: &str) -> serde_json::Value {
    serde_json::from_str(line).expect("fixture must be valid JSON")
}
