//! Unified error handling for the use-case layer.
//!
//! Use-case bodies produce a raw [`Failure`]; every public use-case method
//! passes it through [`classify`] so callers only ever see an [`AppError`].
//! `AppError` converts to an Axum HTTP response for whichever transport
//! sits on top.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{AdapterError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Generic message shown for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error has occurred. Please try again later.";

/// Application error types returned by every use case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    InternalServerError,
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::InternalServerError => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Use-case boundary
// =============================================================================

/// Anything a use-case body can fail with, before classification.
#[derive(Error, Debug)]
pub enum Failure {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

/// Translate a raw failure into the public taxonomy.
///
/// Validation failures become `BadRequest` with the validator's message,
/// application errors pass through unchanged, and adapter failures collapse
/// into `InternalServerError`. The adapter detail is logged and dropped.
pub fn classify(failure: Failure) -> AppError {
    match failure {
        Failure::Validation(e) => AppError::BadRequest(e.message().to_string()),
        Failure::App(e) => e,
        Failure::Adapter(e) => {
            tracing::error!(error = %e, "Adapter failure");
            AppError::InternalServerError
        }
    }
}

/// Result type alias for public use-case methods
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for use-case bodies
pub type FailureResult<T> = Result<T, Failure>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(message))
    }
}

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }
}
