//! OpenAPI document.

use utoipa::OpenApi;

use super::error::ErrorResponse;
use super::handlers::{self, Endpoints, HealthResponse};
use crate::calculator::{CalculationRequest, CalculationResponse, OperationKind};
use crate::history::{HistoryRecord, HistoryResponse};

/// Path the OpenAPI JSON is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";
/// Path Swagger UI is served from.
pub const SWAGGER_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(title = "Calculator API", description = "Four-function arithmetic over HTTP"),
    paths(handlers::calculate, handlers::history, handlers::health),
    components(schemas(
        CalculationRequest,
        CalculationResponse,
        OperationKind,
        HistoryRecord,
        HistoryResponse,
        HealthResponse,
        Endpoints,
        ErrorResponse
    )),
    tags((name = "calculator", description = "Calculation, history and health endpoints"))
)]
pub struct ApiDoc;
