//! Unified application error type.
//!
//! Every failure surfaced to a client collapses to `{ "error": message }`
//! with the HTTP status derived from [`ErrorCode`]. The message strings for
//! validation and state conflicts are part of the wire contract consumed by
//! the admin UI and must stay stable.

use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Error taxonomy: validation and state conflicts are client errors,
/// everything store-side is an opaque 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Request payload failed a validation check (400)
    Validation,
    /// Referenced entity does not exist (404)
    NotFound,
    /// Entity exists but is in the wrong state for the operation (400)
    Conflict,
    /// Store or other infrastructure failure (500)
    Internal,
}

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Validation | Self::Conflict => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application error with a code and a single human-readable line.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Validation failure naming the offending field or rule
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }

    /// Missing entity, message echoes the requested id
    pub fn not_found(message: impl std::fmt::Display) -> Self {
        Self::new(ErrorCode::NotFound, message.to_string())
    }

    /// State conflict ("occupied", "not occupied", "finished", ...)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "store error");
        AppError::internal("Internal server error")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.http_status(), Json(json!({ "error": self.message }))).into_response()
    }
}

/// Handler result: JSON body or an error response
pub type ApiResult<T> = Result<T, AppError>;
