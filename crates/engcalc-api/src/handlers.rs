//! Request handlers: one generic calculation pipeline plus the service
//! endpoints (index, health, CORS test, 404 fallback).

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use engcalc_core::RequestParams;
use tracing::{debug, error, warn};

use crate::AppState;
use crate::error::ApiError;
use crate::types::{ApiIndex, CalcResponse, HealthResponse};

/// `GET /` — service banner and endpoint catalog.
pub async fn api_index(State(state): State<Arc<AppState>>) -> Json<ApiIndex> {
    let mut endpoints: BTreeMap<String, String> = state
        .registry
        .iter()
        .map(|formula| {
            (formula.name().to_string(), format!("/api/{}?{}", formula.name(), formula.usage()))
        })
        .collect();
    endpoints.insert("health".to_string(), "/api/health".to_string());
    endpoints.insert("test".to_string(), "/api/test".to_string());

    Json(ApiIndex {
        message: "Engineering Calculator API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

/// `GET /api/health`.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        uptime_seconds: state.uptime_seconds(),
        message: "Engineering Calculator API is running".to_string(),
    })
}

/// `GET /api/test` — connectivity probe for frontend CORS debugging.
pub async fn cors_test() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "CORS works! Backend is running successfully." }))
}

/// `OPTIONS /api/{formula}` — bare preflight, 200 with an empty body.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// `GET /api/{formula}` — the generic validate → compute → format pipeline.
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<CalcResponse>, ApiError> {
    let formula = state
        .registry
        .get(&name)
        .ok_or_else(|| ApiError::unknown_endpoint(state.available_endpoints()))?;

    match formula.evaluate(&RequestParams::new(query)) {
        Ok(evaluation) => {
            debug!(formula = %name, "calculation succeeded");
            Ok(Json(CalcResponse::success(evaluation.result, evaluation.work_shown)))
        }
        Err(err) if err.kind.is_client_error() => {
            warn!(formula = %name, code = err.kind.as_str(), message = %err, "calculation rejected");
            Err(err.into())
        }
        Err(err) => {
            error!(formula = %name, code = err.kind.as_str(), message = %err, "calculation failed");
            Err(err.into())
        }
    }
}

/// Fallback for every unmatched route.
pub async fn endpoint_not_found(State(state): State<Arc<AppState>>) -> ApiError {
    ApiError::unknown_endpoint(state.available_endpoints())
}
