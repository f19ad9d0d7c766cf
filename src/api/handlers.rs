//! HTTP API handlers.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;

use super::error::{ApiError, ApiResult, ErrorResponse};
use crate::calculator::{
    perform_calculation, CalculationRequest, CalculationResponse, CalculationResult,
};
use crate::history::{HistoryResponse, HistorySource, StaticHistory};
use crate::metrics::{self, LatencyTimer};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where history records come from.
    pub history: Arc<dyn HistorySource>,
    /// Prometheus handle, present when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state backed by the sample history.
    pub fn new() -> Self {
        Self::with_history(Arc::new(StaticHistory::new()))
    }

    /// Create app state with a specific history source.
    pub fn with_history(history: Arc<dyn HistorySource>) -> Self {
        Self {
            history,
            metrics: None,
        }
    }

    /// Attach a Prometheus handle.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("metrics", &self.metrics.is_some())
            .finish_non_exhaustive()
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable status.
    pub message: String,
    /// Server time.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: OffsetDateTime,
    /// Available endpoints.
    pub endpoints: Endpoints,
}

/// Endpoint listing in the health response.
#[derive(Debug, Serialize, ToSchema)]
pub struct Endpoints {
    /// Calculate endpoint.
    pub calculate: String,
    /// History endpoint.
    pub history: String,
    /// Health endpoint.
    pub health: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            calculate: "POST /api/calculator/calculate".to_string(),
            history: "GET /api/calculator/history".to_string(),
            health: "GET /api/calculator/health".to_string(),
        }
    }
}

/// Parse a calculate body. An empty body counts as `{}`; anything other
/// than a JSON object is malformed.
pub fn parse_request(body: &[u8]) -> ApiResult<CalculationRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CalculationRequest::default());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(CalculationRequest::from_object(object)),
        Ok(other) => Err(ApiError::malformed_body(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ApiError::malformed_body(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Perform a calculation.
#[utoipa::path(
    post,
    path = "/api/calculator/calculate",
    tag = "calculator",
    request_body = CalculationRequest,
    responses(
        (status = 200, description = "Calculation succeeded", body = CalculationResponse),
        (
            status = 400,
            description = "Invalid input, unknown operation or division by zero",
            body = ErrorResponse
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn calculate(body: Bytes) -> ApiResult<Json<CalculationResponse>> {
    let _timer = LatencyTimer::new("calculate");
    let request = parse_request(&body)?;

    info!(
        operand1 = ?request.operand1,
        operand2 = ?request.operand2,
        operation = ?request.operation,
        "Calculation request"
    );

    match perform_calculation(&request) {
        CalculationResult::Success(calc) => {
            metrics::inc_calculations(calc.kind);
            Ok(Json(calc.into()))
        }
        CalculationResult::Failure { message, error } => {
            warn!(reason = error.reason(), "Calculation rejected: {}", message);
            metrics::inc_calculation_failures(error.reason());
            Err(ApiError::BadRequest(message))
        }
    }
}

/// Get calculation history.
#[utoipa::path(
    get,
    path = "/api/calculator/history",
    tag = "calculator",
    responses(
        (status = 200, description = "Calculation history", body = HistoryResponse),
        (status = 500, description = "History source failed", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn history(State(state): State<AppState>) -> ApiResult<Json<HistoryResponse>> {
    let _timer = LatencyTimer::new("history");
    metrics::inc_history_requests();

    let records = state.history.history().map_err(|e| {
        error!("Failed to read history: {}", e);
        ApiError::internal(e.to_string())
    })?;

    Ok(Json(records.into()))
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/api/calculator/health",
    tag = "calculator",
    responses((status = 200, description = "Service is running", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Calculator API is running".to_string(),
        timestamp: OffsetDateTime::now_utc(),
        endpoints: Endpoints::default(),
    })
}

/// Prometheus exposition.
pub async fn metrics_export(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let handle = state.metrics.ok_or(ApiError::NotFound)?;
    Ok(handle.render())
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
