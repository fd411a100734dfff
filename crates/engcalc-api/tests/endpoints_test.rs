//! Integration tests for the HTTP surface: envelopes, status codes, the
//! endpoint catalog, CORS behavior, and OPTIONS handling.

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use axum_test::TestServer;
use engcalc_api::create_app;
use engcalc_api::types::{ApiIndex, CalcResponse, ErrorBody, HealthResponse};
use serde_json::Value;
use tower::ServiceExt;

fn test_server() -> TestServer {
    let app = create_app().expect("failed to create app");
    TestServer::new(app).expect("failed to create test server")
}

#[tokio::test]
async fn health_check_reports_service_status() {
    let server = test_server();
    let response = server.get("/api/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let health: HealthResponse = response.json();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.message, "Engineering Calculator API is running");
}

#[tokio::test]
async fn cors_test_endpoint_responds() {
    let server = test_server();
    let response = server.get("/api/test").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["message"], "CORS works! Backend is running successfully.");
}

#[tokio::test]
async fn index_lists_every_calculation_endpoint() {
    let server = test_server();
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let index: ApiIndex = response.json();
    assert_eq!(index.message, "Engineering Calculator API");
    assert_eq!(
        index.endpoints.get("grade-percent").map(String::as_str),
        Some("/api/grade-percent?rise=<value>&run=<value>")
    );
    assert_eq!(index.endpoints.get("health").map(String::as_str), Some("/api/health"));
    assert_eq!(index.endpoints.get("test").map(String::as_str), Some("/api/test"));
    // 11 formulas plus health and test.
    assert_eq!(index.endpoints.len(), 13);
}

#[tokio::test]
async fn grade_percent_returns_the_success_envelope() {
    let server = test_server();
    let response = server.get("/api/grade-percent?rise=5&run=100").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: CalcResponse = response.json();
    assert_eq!(body.status, "success");
    assert_eq!(body.result["gradePercent"], "5.00");
    assert_eq!(body.result["primaryResult"], "5.00%");
    assert!(body.work_shown.starts_with("Given:"));
}

#[tokio::test]
async fn validation_failures_return_400_envelopes() {
    let server = test_server();

    let response = server.get("/api/grade-percent?rise=5&run=0").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json();
    assert_eq!(body.status, "error");
    assert_eq!(body.message, "Run cannot be zero (division by zero)");
    assert!(body.error.is_none());

    let response = server.get("/api/percent-error?experimental=9.8&theoretical=0").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server.get("/api/quadratic-equation?a=0&b=1&c=2").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server.get("/api/trigonometric?angle=90&function=tan").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json();
    assert_eq!(body.message, "Tangent is undefined for this angle (90°, 270°, etc.)");
}

#[tokio::test]
async fn ohms_law_solves_the_missing_quantity() {
    let server = test_server();
    let response = server.get("/api/ohms-law?voltage=12&current=2").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: CalcResponse = response.json();
    assert_eq!(body.result["resistance"], "6.00 Ω");
    assert_eq!(body.result["primaryResult"], "6.00 Ω");
}

#[tokio::test]
async fn quadratic_equation_reports_both_roots() {
    let server = test_server();
    let response = server.get("/api/quadratic-equation?a=1&b=-3&c=2").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: CalcResponse = response.json();
    assert_eq!(body.result["x1"], "2.0000");
    assert_eq!(body.result["x2"], "1.0000");
}

#[tokio::test]
async fn unknown_endpoints_return_the_catalog() {
    let server = test_server();

    for path in ["/api/no-such-formula", "/nowhere"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{path}");

        let body: ErrorBody = response.json();
        assert_eq!(body.message, "Endpoint not found");
        let endpoints = body.available_endpoints.expect("catalog present");
        assert!(endpoints.contains(&"/api/health".to_string()));
        assert!(endpoints.contains(&"/api/grade-percent".to_string()));
        assert_eq!(endpoints.len(), 13);
    }
}

#[tokio::test]
async fn bare_options_returns_200_with_empty_body() {
    let app = create_app().expect("failed to create app");
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/grade-percent")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn preflight_reflects_allowed_origins() {
    let app = create_app().expect("failed to create app");
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/grade-percent")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn simple_requests_carry_cors_headers_for_allowed_origins() {
    let app = create_app().expect("failed to create app");
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/grade-percent?rise=5&run=100")
        .header(header::ORIGIN, "https://engineer-brain-tool.vercel.app")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://engineer-brain-tool.vercel.app"
    );
}

#[tokio::test]
async fn disallowed_origins_get_no_cors_headers() {
    let app = create_app().expect("failed to create app");
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/health")
        .header(header::ORIGIN, "https://evil.example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
