//! Route handlers.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde_json::Value;

use sensorhub_core::{CanonicalReading, ReadingGroups, SensorFilter};

use crate::dto::{parse_limit, IngestResponse, ReadingsParams};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/sensor/data - Ingest one reading or a batch
pub async fn ingest(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<IngestResponse>> {
    let Json(payload) = payload?;
    let result = state.coordinator.ingest(payload).await?;
    Ok(Json(result.into()))
}

/// GET /readings - Most recent readings, newest first
pub async fn readings(
    State(state): State<AppState>,
    Query(params): Query<ReadingsParams>,
) -> ApiResult<Json<Vec<CanonicalReading>>> {
    let limit = parse_limit(params.limit.as_deref(), state.default_limit);
    let filter = params
        .sensor_type
        .as_deref()
        .map(SensorFilter::from)
        .unwrap_or_default();
    Ok(Json(state.queries.filtered(limit, &filter).await?))
}

/// GET /readings/summary - Per-sensor-type statistics over recent readings
pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<ReadingsParams>,
) -> ApiResult<Json<ReadingGroups>> {
    let limit = parse_limit(params.limit.as_deref(), state.default_limit);
    Ok(Json(state.queries.recent_grouped(limit).await?))
}

/// GET /health - Liveness probe
pub async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
