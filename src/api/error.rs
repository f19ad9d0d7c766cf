//! HTTP error responses.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Message sent with every 404.
pub const NOT_FOUND_MESSAGE: &str = "The requested endpoint does not exist";

/// Errors surfaced to HTTP clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request rejected by validation or evaluation.
    #[error("{0}")]
    BadRequest(String),

    /// Body is not a JSON object.
    #[error("Invalid JSON body: {0}")]
    MalformedBody(String),

    /// No route matched.
    #[error("Route not found")]
    NotFound,

    /// Unexpected failure while handling the request.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create a new bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create a new malformed body error.
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody(message.into())
    }

    /// Create a new internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body for this error.
    pub fn body(&self) -> ErrorResponse {
        match self {
            ApiError::BadRequest(message) => ErrorResponse {
                success: Some(false),
                error: message.clone(),
                message: None,
            },
            ApiError::MalformedBody(message) => ErrorResponse {
                success: Some(false),
                error: "Invalid JSON body".to_string(),
                message: Some(message.clone()),
            },
            ApiError::NotFound => ErrorResponse {
                success: None,
                error: "Route not found".to_string(),
                message: Some(NOT_FOUND_MESSAGE.to_string()),
            },
            ApiError::Internal(message) => ErrorResponse {
                success: Some(false),
                error: "Internal server error".to_string(),
                message: Some(message.clone()),
            },
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// `false` for calculator errors; omitted on 404.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Error summary.
    #[schema(example = "Cannot divide by zero")]
    pub error: String,
    /// Additional detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(message) = &self {
            error!("Internal error: {}", message);
        }
        (self.status_code(), Json(self.body())).into_response()
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Turn a caught panic into a 500 response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::internal(message).into_response()
}
