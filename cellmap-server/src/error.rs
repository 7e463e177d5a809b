//! Server error types with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cellmap_core::GeomError;
use serde::Serialize;
use thiserror::Error;

/// Error type for request handling, mapped onto HTTP statuses.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Geometry pipeline error (decode, assembly, combination).
    #[error("{0}")]
    Geometry(#[from] GeomError),

    /// Malformed JSON payload.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic bad request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Unknown document or route target.
    #[error("{0}")]
    NotFound(String),

    /// Server-side failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Map error to HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Geometry errors are client errors: the payload was readable
            // but not combinable.
            ServerError::Geometry(_) => StatusCode::BAD_REQUEST,
            ServerError::Json(_) => StatusCode::BAD_REQUEST,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerError::Geometry(GeomError::InvalidGeometry(_)) => "invalid_geometry",
            ServerError::Geometry(GeomError::DegenerateGeometry(_)) => "degenerate_geometry",
            ServerError::Geometry(GeomError::InsufficientOperands { .. }) => {
                "insufficient_operands"
            }
            ServerError::Json(_) => "decode_error",
            ServerError::BadRequest(_) => "bad_request",
            ServerError::NotFound(_) => "not_found",
            ServerError::Internal(_) => "internal",
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        ServerError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ServerError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ServerError::Internal(msg.into())
    }
}

/// JSON error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error kind.
    pub kind: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            status: status.as_u16(),
            kind: self.kind().to_string(),
        };
        let json = serde_json::to_string(&body).unwrap_or_else(|_| {
            format!(
                r#"{{"error":"{}","status":{},"kind":"{}"}}"#,
                self,
                status.as_u16(),
                self.kind()
            )
        });
        (status, [("content-type", "application/json")], json).into_response()
    }
}

/// Result type alias for request handlers.
pub type Result<T> = std::result::Result<T, ServerError>;
