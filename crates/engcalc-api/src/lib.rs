#![deny(warnings)]
//! HTTP service for the engineering calculator.
//!
//! The router exposes one generic calculation route (`/api/{formula}`)
//! dispatched through the [`engcalc_core::FormulaRegistry`], plus the
//! index, health, and CORS-test endpoints. Every formula shares the same
//! validate → compute → format pipeline in [`handlers::calculate`]; the
//! per-endpoint differences live entirely in `engcalc-core`.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::get,
};
use chrono::{DateTime, Utc};
use engcalc_core::FormulaRegistry;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod types;

use config::ServerConfig;

/// Shared, immutable application state.
pub struct AppState {
    pub start_time: DateTime<Utc>,
    pub registry: FormulaRegistry,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self { start_time: Utc::now(), registry: FormulaRegistry::with_built_in() }
    }

    /// Whole seconds since the process started serving.
    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.start_time).num_seconds().max(0) as u64
    }

    /// Every `/api` path the router serves, sorted, for 404 catalogs.
    pub fn available_endpoints(&self) -> Vec<String> {
        let mut endpoints: Vec<String> =
            self.registry.names().iter().map(|name| format!("/api/{name}")).collect();
        endpoints.push("/api/health".to_string());
        endpoints.push("/api/test".to_string());
        endpoints.sort();
        endpoints
    }
}

/// Build the application router with environment-based configuration.
pub fn create_app() -> anyhow::Result<Router> {
    create_app_with_config(&ServerConfig::from_environment())
}

/// Build the application router for the given configuration.
pub fn create_app_with_config(config: &ServerConfig) -> anyhow::Result<Router> {
    let state = Arc::new(AppState::new());

    let app = Router::new()
        .route("/", get(handlers::api_index))
        .route("/api/health", get(handlers::health))
        .route("/api/test", get(handlers::cors_test))
        .route("/api/{formula}", get(handlers::calculate).options(handlers::preflight))
        .fallback(handlers::endpoint_not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.max_body_size_mb * 1024 * 1024))
                .layer(cors_layer(config)),
        );

    Ok(app)
}

/// CORS policy: reflect allowlisted origins (plus any localhost origin),
/// with credentials, for the methods and headers the frontends use.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let config = config.clone();
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin.to_str().map(|origin| config.is_allowed_origin(origin)).unwrap_or(false)
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
            header::ACCEPT,
            header::ORIGIN,
        ])
        .allow_credentials(true)
}
