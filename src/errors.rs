use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Message returned when the server holds no TMDB credential.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "TMDB_API_READ_TOKEN missing on server side";

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// No bearer token is configured on the server.
    MissingCredential,
    /// TMDB answered with a non-success status.
    UpstreamStatus {
        /// Status returned by TMDB.
        status: StatusCode,
        /// Content type of the TMDB error body, if any.
        content_type: Option<HeaderValue>,
        /// Raw TMDB error body.
        body: Bytes,
    },
    /// TMDB could not be reached (connect, TLS, timeout).
    UpstreamUnreachable(String),
    /// TMDB answered 2xx with a body that is not JSON.
    UpstreamMalformed(String),
    /// Internal server error.
    Internal(String),
}

impl AppError {
    /// HTTP status this error is surfaced with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingCredential | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::UpstreamStatus { status, .. } => *status,
            AppError::UpstreamUnreachable(_) | AppError::UpstreamMalformed(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingCredential => f.write_str(MISSING_CREDENTIAL_MESSAGE),
            AppError::UpstreamStatus { status, body, .. } => write!(
                f,
                "TMDB returned {}: {}",
                status,
                String::from_utf8_lossy(body)
            ),
            AppError::UpstreamUnreachable(msg) => write!(f, "TMDB request failed: {}", msg),
            AppError::UpstreamMalformed(msg) => write!(f, "Malformed TMDB response: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Upstream status failures are re-surfaced with TMDB's own status and body.
    /// Every other variant gets a `{"statusCode", "message"}` JSON body.
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            AppError::MissingCredential => {
                tracing::error!("Refusing trending request: {}", MISSING_CREDENTIAL_MESSAGE);
                MISSING_CREDENTIAL_MESSAGE.to_string()
            }
            AppError::UpstreamStatus {
                status,
                content_type,
                body,
            } => {
                tracing::error!(
                    "TMDB returned {}: {}",
                    status,
                    String::from_utf8_lossy(&body)
                );
                let mut response = Response::new(Body::from(body));
                *response.status_mut() = status;
                if let Some(content_type) = content_type {
                    response
                        .headers_mut()
                        .insert(header::CONTENT_TYPE, content_type);
                }
                return response;
            }
            AppError::UpstreamUnreachable(msg) => {
                tracing::error!("TMDB request failed: {}", msg);
                format!("TMDB request failed: {}", msg)
            }
            AppError::UpstreamMalformed(msg) => {
                tracing::error!("Malformed TMDB response: {}", msg);
                "Malformed response from TMDB".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "statusCode": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamUnreachable(err.to_string())
    }
}
