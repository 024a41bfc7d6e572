//! Error types for the student service
//!
//! Provides unified error handling using thiserror. Every variant maps to
//! exactly one HTTP status code at the API boundary.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Detail message returned when no student matches the requested id.
pub const NOT_FOUND_DETAIL: &str = "Estudiante no encontrado";

// == Student Error Enum ==
/// Unified error type for the student service.
#[derive(Error, Debug)]
pub enum StudentError {
    /// Malformed or missing input fields
    #[error("{0}")]
    Validation(String),

    /// No student row matches the id
    #[error("student {0} not found")]
    NotFound(i64),

    /// Unexpected persistence-layer failure, including lost connectivity
    #[error("{0}")]
    Storage(String),
}

impl StudentError {
    /// Wraps a driver error with the operation that was running.
    pub fn storage(context: &str, err: impl std::fmt::Display) -> Self {
        StudentError::Storage(format!("{}: {}", context, err))
    }

    /// HTTP status for this error class.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StudentError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            StudentError::NotFound(_) => StatusCode::NOT_FOUND,
            StudentError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for StudentError {
    fn from(rejection: JsonRejection) -> Self {
        StudentError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for StudentError {
    fn from(rejection: PathRejection) -> Self {
        StudentError::Validation(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            StudentError::NotFound(_) => NOT_FOUND_DETAIL.to_string(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(%detail, "request failed");
        }

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the student service.
pub type Result<T> = std::result::Result<T, StudentError>;
