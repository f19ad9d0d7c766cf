//! HTTP API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::{ApiDoc, OPENAPI_PATH, SWAGGER_PATH};
use super::error::panic_response;
use super::handlers::{calculate, health, history, metrics_export, not_found, AppState};
use crate::config::Config;

/// Prefix every calculator route is mounted under.
pub const API_PREFIX: &str = "/api/calculator";

/// Create the API router.
///
/// A known path hit with the wrong method gets the same 404 as an unknown path.
pub fn create_router(state: AppState) -> Router {
    let calculator = Router::new()
        .route("/calculate", post(calculate).fallback(not_found))
        .route("/history", get(history).fallback(not_found))
        .route("/health", get(health).fallback(not_found));

    let mut router = Router::new().nest(API_PREFIX, calculator);

    if state.metrics.is_some() {
        router = router.route("/metrics", get(metrics_export));
    }

    router
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
}

/// Create the full application: routes, docs and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    let mut app = create_router(state);

    if config.enable_docs {
        app = app.merge(SwaggerUi::new(SWAGGER_PATH).url(OPENAPI_PATH, ApiDoc::openapi()));
    }

    let cors = config.cors_permissive.then(CorsLayer::permissive);

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .option_layer(cors),
    )
}
