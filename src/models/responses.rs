//! Response DTOs for the student API
//!
//! Defines the structure of outgoing HTTP response bodies. Key names follow
//! the public JSON contract, which is in Spanish.

use serde::Serialize;

use crate::models::Student;

/// Service version reported by the root endpoint.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response body for GET /
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub version: String,
}

impl RootResponse {
    pub fn healthy() -> Self {
        Self {
            message: "API de Estudiantes funcionando correctamente".to_string(),
            status: "healthy".to_string(),
            version: API_VERSION.to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse reporting a healthy service
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Response body for GET /estudiantes/
///
/// `count` is always derived from `data`.
#[derive(Debug, Clone, Serialize)]
pub struct StudentListResponse {
    pub data: Vec<Student>,
    pub count: usize,
}

impl StudentListResponse {
    pub fn new(data: Vec<Student>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// Response body for POST /estudiantes/
#[derive(Debug, Clone, Serialize)]
pub struct StudentCreatedResponse {
    /// Success message
    pub mensaje: String,
    /// The created student, including its new id
    pub estudiante: Student,
}

impl StudentCreatedResponse {
    pub fn new(estudiante: Student) -> Self {
        Self {
            mensaje: "Estudiante creado exitosamente.".to_string(),
            estudiante,
        }
    }
}

/// Response body for PUT /estudiantes/:id
#[derive(Debug, Clone, Serialize)]
pub struct StudentUpdatedResponse {
    /// Success message
    pub mensaje: String,
    /// The student after the update
    pub data: Student,
}

impl StudentUpdatedResponse {
    pub fn new(data: Student) -> Self {
        Self {
            mensaje: "Estudiante actualizado exitosamente".to_string(),
            data,
        }
    }
}

/// Response body for DELETE /estudiantes/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub mensaje: String,
}

impl DeleteResponse {
    pub fn new() -> Self {
        Self {
            mensaje: "Estudiante eliminado exitosamente".to_string(),
        }
    }
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong
    pub detail: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
