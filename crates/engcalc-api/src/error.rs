//! HTTP-facing error type with automatic status code mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use engcalc_core::{CalcError, ErrorKind};
use thiserror::Error;

use crate::types::ErrorBody;

#[derive(Error, Debug)]
pub enum ApiError {
    /// A formula rejected the request or failed internally. The kind decides
    /// between 400 and 500.
    #[error("{0}")]
    Calculation(#[from] CalcError),

    /// No formula or route matches the request path.
    #[error("Endpoint not found")]
    UnknownEndpoint { available: Vec<String> },

    /// Unexpected fault outside the formula engine.
    #[error("Internal Server Error")]
    Internal { detail: String },
}

impl ApiError {
    pub fn unknown_endpoint(available: Vec<String>) -> Self {
        Self::UnknownEndpoint { available }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal { detail: detail.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Calculation(err) if err.kind.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Calculation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnknownEndpoint { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short code for structured logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Calculation(err) => err.kind.as_str(),
            ApiError::UnknownEndpoint { .. } => "UNKNOWN_ENDPOINT",
            ApiError::Internal { .. } => ErrorKind::Internal.as_str(),
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::Calculation(err) if err.kind.is_client_error() => {
                ErrorBody::new(err.message.clone())
            }
            ApiError::Calculation(err) => ErrorBody {
                error: Some(err.message.clone()),
                ..ErrorBody::new("Internal Server Error")
            },
            ApiError::UnknownEndpoint { available } => ErrorBody {
                available_endpoints: Some(available.clone()),
                ..ErrorBody::new("Endpoint not found")
            },
            ApiError::Internal { detail } => ErrorBody {
                error: Some(detail.clone()),
                ..ErrorBody::new("Internal Server Error")
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_calculation_errors_map_to_400() {
        let err = ApiError::from(CalcError::domain("Run cannot be zero (division by zero)"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let body = err.body();
        assert_eq!(body.status, "error");
        assert_eq!(body.message, "Run cannot be zero (division by zero)");
        assert!(body.error.is_none());
    }

    #[test]
    fn internal_calculation_errors_map_to_500_with_detail() {
        let err = ApiError::from(CalcError::internal("serialization blew up"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.body();
        assert_eq!(body.message, "Internal Server Error");
        assert_eq!(body.error.as_deref(), Some("serialization blew up"));
    }

    #[test]
    fn unknown_endpoint_carries_the_catalog() {
        let err = ApiError::unknown_endpoint(vec!["/api/health".to_string()]);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.body().available_endpoints,
            Some(vec!["/api/health".to_string()])
        );
    }
}
