//! Application error type shared by every layer.
//!
//! Handlers and services return [`AppError`] directly; axum turns it into a
//! JSON body of the form `{"error": {"code", "message", "details"}}` via the
//! [`IntoResponse`] impl below.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct ErrorEnvelope {
    error: ErrorPayload,
}

#[derive(Serialize)]
struct ErrorPayload {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Gone { message: String, details: Value },
    Conflict { message: String, details: Value },
    TooManyRequests { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation { message: message.into(), details }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound { message: message.into(), details }
    }

    pub fn gone(message: impl Into<String>, details: Value) -> Self {
        Self::Gone { message: message.into(), details }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict { message: message.into(), details }
    }

    pub fn too_many_requests(message: impl Into<String>, details: Value) -> Self {
        Self::TooManyRequests { message: message.into(), details }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal { message: message.into(), details }
    }

    /// HTTP status this error renders as.
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Gone { .. } => StatusCode::GONE,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code carried in the response body.
    fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::Gone { .. } => "gone",
            Self::Conflict { .. } => "conflict",
            Self::TooManyRequests { .. } => "rate_limited",
            Self::Internal { .. } => "internal_error",
        }
    }

    /// Human-readable message, also used by [`Display`](fmt::Display).
    pub fn message(&self) -> &str {
        let (Self::Validation { message, .. }
        | Self::NotFound { message, .. }
        | Self::Gone { message, .. }
        | Self::Conflict { message, .. }
        | Self::TooManyRequests { message, .. }
        | Self::Internal { message, .. }) = self;
        message
    }

    fn into_payload(self) -> (String, Value) {
        let (Self::Validation { message, details }
        | Self::NotFound { message, details }
        | Self::Gone { message, details }
        | Self::Conflict { message, details }
        | Self::TooManyRequests { message, details }
        | Self::Internal { message, details }) = self;
        (message, details)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let (message, details) = self.into_payload();
        let body = ErrorEnvelope {
            error: ErrorPayload { code, message, details },
        };
        (status, Json(body)).into_response()
    }
}

/// Unique violations become `Conflict`; anything else is logged and reported
/// as an opaque internal error.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e.as_database_error() {
            Some(db) if db.is_unique_violation() => AppError::conflict(
                "Alias already exists",
                json!({ "constraint": db.constraint() }),
            ),
            _ => {
                tracing::error!(error = %e, "database error");
                AppError::internal("Database error", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}
