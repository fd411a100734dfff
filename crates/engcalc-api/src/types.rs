//! Wire types for the calculator API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Successful calculation envelope.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcResponse {
    pub status: String,
    pub result: serde_json::Value,
    pub work_shown: String,
}

impl CalcResponse {
    pub fn success(result: serde_json::Value, work_shown: String) -> Self {
        Self { status: "success".to_string(), result, work_shown }
    }
}

/// Error envelope shared by 400, 404, and 500 responses.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
    /// Fault detail, present on 500s only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Endpoint catalog, present on 404s only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_endpoints: Option<Vec<String>>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            error: None,
            available_endpoints: None,
        }
    }
}

/// Payload for `GET /api/health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub message: String,
}

/// Payload for `GET /`: service banner plus the endpoint catalog.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiIndex {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}
