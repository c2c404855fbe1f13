//! API error type and response formatting.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use connections_core::{ConnectionsError, ErrorClass};
use serde::Serialize;
use tracing::error;

/// Error returned by every handler; converts to a JSON error response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Failure from the puzzle service.
    #[error(transparent)]
    Service(#[from] ConnectionsError),

    /// The passthrough proxy could not reach the upstream host.
    #[error("bad gateway: {0}")]
    BadGateway(String),
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(err) => match err.class() {
                ErrorClass::Validation => StatusCode::BAD_REQUEST,
                ErrorClass::NotFound => StatusCode::NOT_FOUND,
                ErrorClass::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, message) = match &self {
            Self::Service(err) => match err.class() {
                ErrorClass::Validation => ("bad_request", Some(err.to_string())),
                ErrorClass::NotFound => ("not_found", Some(err.to_string())),
                ErrorClass::Upstream => {
                    error!(error = %err, "request failed");
                    (
                        "internal_error",
                        Some("An internal error occurred".to_string()),
                    )
                }
            },
            Self::BadGateway(detail) => {
                error!(error = %detail, "proxy request failed");
                (
                    "bad_gateway",
                    Some("The upstream service is unreachable".to_string()),
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
