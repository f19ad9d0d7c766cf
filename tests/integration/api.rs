//! HTTP-level tests against the assembled router.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use calculator_api::api::{create_app, create_router, AppState};
use calculator_api::error::HistoryError;
use calculator_api::history::{HistoryRecord, HistorySource};
use calculator_api::Config;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn calculate(body: Value) -> (StatusCode, Value) {
    send(
        create_router(AppState::new()),
        Method::POST,
        "/api/calculator/calculate",
        Some(body),
    )
    .await
}

#[tokio::test]
async fn add_returns_full_payload() {
    let (status, body) =
        calculate(json!({"operand1": 10, "operand2": 5, "operation": "add"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "operand1": 10.0,
            "operand2": 5.0,
            "operation": "add",
            "result": 15.0
        })
    );
}

#[tokio::test]
async fn multiply_with_string_operands() {
    let (status, body) =
        calculate(json!({"operand1": "20", "operand2": "4", "operation": "MULTIPLY"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!(80.0));
    assert_eq!(body["operation"], json!("MULTIPLY"));
}

#[tokio::test]
async fn divide_by_zero_is_400() {
    let (status, body) =
        calculate(json!({"operand1": 10, "operand2": 0, "operation": "divide"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "error": "Cannot divide by zero"}));
}

#[tokio::test]
async fn missing_field_is_400() {
    let (status, body) = calculate(json!({"operand2": 5, "operation": "add"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"success": false, "error": "Missing required fields: operand1, operand2, operation"})
    );
}

#[tokio::test]
async fn non_numeric_operand_is_400() {
    let (status, body) =
        calculate(json!({"operand1": "abc", "operand2": 5, "operation": "add"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("operand1 and operand2 must be valid numbers"));
}

#[tokio::test]
async fn unknown_operation_is_400() {
    let (status, body) =
        calculate(json!({"operand1": 1, "operand2": 2, "operation": "modulo"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Invalid operation. Use: add, subtract, multiply, divide")
    );
}

#[tokio::test]
async fn empty_body_reports_missing_fields() {
    let (status, body) = send(
        create_router(AppState::new()),
        Method::POST,
        "/api/calculator/calculate",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Missing required fields: operand1, operand2, operation")
    );
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = create_router(AppState::new());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/calculator/calculate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"operand1\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Invalid JSON body"));
}

#[tokio::test]
async fn array_body_is_400() {
    let (status, body) = calculate(json!([10, 5, "add"])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": "Invalid JSON body",
            "message": "expected a JSON object, found an array"
        })
    );
}

#[tokio::test]
async fn history_returns_two_records() {
    let (status, body) = send(
        create_router(AppState::new()),
        Method::GET,
        "/api/calculator/history",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(2));

    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["operation"], json!("add"));
    assert_eq!(history[0]["result"], json!(15.0));
    assert_eq!(history[1]["operation"], json!("multiply"));
    assert_eq!(history[1]["result"], json!(80.0));
    assert!(history[0]["timestamp"].is_string());
}

#[tokio::test]
async fn health_lists_endpoints() {
    let (status, body) = send(
        create_router(AppState::new()),
        Method::GET,
        "/api/calculator/health",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Calculator API is running"));
    assert!(body["timestamp"].is_string());
    assert_eq!(
        body["endpoints"],
        json!({
            "calculate": "POST /api/calculator/calculate",
            "history": "GET /api/calculator/history",
            "health": "GET /api/calculator/health"
        })
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = create_router(AppState::new());
    let (status, body) = send(app, Method::GET, "/api/unknown", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": "Route not found", "message": "The requested endpoint does not exist"})
    );
}

struct UnavailableHistory;

impl HistorySource for UnavailableHistory {
    fn history(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        Err(HistoryError::Unavailable("connection refused".to_string()))
    }
}

struct PanickingHistory;

impl HistorySource for PanickingHistory {
    fn history(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        panic!("history backend exploded")
    }
}

#[tokio::test]
async fn failing_history_source_is_500() {
    let state = AppState::with_history(Arc::new(UnavailableHistory));
    let (status, body) =
        send(create_router(state), Method::GET, "/api/calculator/history", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": "Internal server error",
            "message": "history unavailable: connection refused"
        })
    );
}

#[tokio::test]
async fn panicking_handler_is_500() {
    let state = AppState::with_history(Arc::new(PanickingHistory));
    let (status, body) =
        send(create_router(state), Method::GET, "/api/calculator/history", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("Internal server error"));
    assert_eq!(body["message"], json!("history backend exploded"));
}

#[tokio::test]
async fn full_app_serves_calculate_with_middleware() {
    let config = Config {
        cors_permissive: true,
        ..Config::default()
    };
    let (status, body) = send(
        create_app(AppState::new(), &config),
        Method::POST,
        "/api/calculator/calculate",
        Some(json!({"num1": 9, "num2": 3, "operation": "divide"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!(3.0));
}
