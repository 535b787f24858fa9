//! Application error type and HTTP status mapping.
//!
//! Errors serialize as a flat `{"error": "<message>"}` body. Persistence
//! failures are logged with full detail and surface a generic 500 message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed request input. Maps to 400.
    #[error("{0}")]
    Validation(String),

    /// Unknown short code. Maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// Insert hit the unique index on `short_code`. The service consumes
    /// this and redraws; it maps to 500 if it ever surfaces.
    #[error("short code already taken")]
    CodeConflict,

    /// Code generation exhausted its attempt budget. Maps to 500.
    #[error("short code space exhausted")]
    CodeSpaceExhausted,

    /// Underlying database failure. Maps to 500.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::CodeConflict | AppError::CodeSpaceExhausted => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Database(ref e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
