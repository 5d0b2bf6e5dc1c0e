//! HTTP surface: routes, middleware and the OpenAPI document.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{self, AppState};
use crate::models::TimeWindow;

/// Routes take no request body; anything larger is refused early.
const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health, handlers::trending_movies),
    components(schemas(TimeWindow)),
    tags(
        (name = "tmdb", description = "TMDB proxy endpoints"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Builds the application router with all routes and middleware attached.
pub fn router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/tmdb/trending", get(handlers::trending_movies))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES)));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
