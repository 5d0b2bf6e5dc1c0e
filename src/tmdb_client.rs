use crate::config::Config;
use crate::errors::AppError;
use crate::models::TimeWindow;
use axum::body::Bytes;
use axum::http::header;
use std::time::Duration;

/// Client for the TMDB v3 API.
///
/// Holds no credential: the bearer token is passed in per call.
#[derive(Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
}

impl TmdbClient {
    /// Creates a new `TmdbClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - TMDB API root, e.g. `https://api.themoviedb.org/3`.
    /// * `timeout` - Optional total request timeout. `None` leaves the call unbounded.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create TMDB client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(config.tmdb_base_url.clone(), config.tmdb_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the trending movies list for `window`.
    ///
    /// One attempt only. The body of a successful response is returned byte for
    /// byte once it is known to be JSON.
    ///
    /// # Returns
    ///
    /// * `Result<Bytes, AppError>` - The raw TMDB payload.
    pub async fn trending_movies(&self, token: &str, window: TimeWindow) -> Result<Bytes, AppError> {
        let url = format!("{}/trending/movie/{}", self.base_url, window);
        tracing::info!("Fetching trending movies from TMDB: {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
            let body = match response.bytes().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Failed to read TMDB error body for status {}: {}", status, e);
                    Bytes::new()
                }
            };
            tracing::warn!("TMDB returned non-success status {}", status);
            return Err(AppError::UpstreamStatus {
                status,
                content_type,
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::UpstreamUnreachable(format!("Failed to read TMDB body: {}", e)))?;

        // Validate without reshaping: the caller gets the original bytes.
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)
            .map_err(|e| AppError::UpstreamMalformed(e.to_string()))?;

        tracing::info!(
            "✓ TMDB trending ({}) fetched: {} bytes",
            window,
            body.len()
        );
        Ok(body)
    }
}
