//! HTTP API module for calculate, history, health and metrics endpoints.

pub mod docs;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use handlers::AppState;
pub use routes::{create_app, create_router, API_PREFIX};
