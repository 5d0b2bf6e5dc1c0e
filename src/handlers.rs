use crate::credentials::{resolve_token, CredentialProvider};
use crate::errors::AppError;
use crate::models::TrendingQuery;
use crate::tmdb_client::TmdbClient;
use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Outbound TMDB client.
    pub tmdb_client: TmdbClient,
    /// Source of the TMDB bearer token, consulted on every request.
    pub credentials: Arc<dyn CredentialProvider>,
}

impl AppState {
    pub fn new(tmdb_client: TmdbClient, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            tmdb_client,
            credentials,
        }
    }
}

/// Health check endpoint.
///
/// Returns the service status and version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /api/tmdb/trending
///
/// Proxies TMDB's trending movies list, injecting the server-held bearer token.
/// The upstream payload is returned unmodified.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `query` - Raw query string; only `time_window` is read.
///
/// # Returns
///
/// * `Result<Response, AppError>` - The TMDB payload or an error.
#[utoipa::path(
    get,
    path = "/api/tmdb/trending",
    tag = "tmdb",
    params(TrendingQuery),
    responses(
        (status = 200, description = "TMDB trending movies payload, passed through"),
        (status = 500, description = "TMDB token missing on server side"),
        (status = 502, description = "TMDB unreachable or returned a malformed body")
    )
)]
pub async fn trending_movies(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let token = resolve_token(state.credentials.as_ref()).ok_or(AppError::MissingCredential)?;

    let window = TrendingQuery::from_raw(query.as_deref()).time_window();
    tracing::info!("GET /api/tmdb/trending - time_window: {}", window);

    let body = state.tmdb_client.trending_movies(&token, window).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
