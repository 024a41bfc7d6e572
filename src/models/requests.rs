//! Request DTOs for the student API
//!
//! Defines the structure of incoming HTTP request bodies and the validation
//! that turns them into a [`StudentInput`].

use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;

use crate::error::{Result, StudentError};
use crate::models::{StudentInput, MAX_NAME_LENGTH};

/// Request body for POST /estudiantes/ and PUT /estudiantes/:id
///
/// Both fields are required; extra fields are ignored. Deserialization
/// already rejects a non-string `nombre` and a non-integer `edad`.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentPayload {
    /// The student's name
    pub nombre: String,
    /// The student's age
    pub edad: i32,
}

impl StudentPayload {
    /// Validates the payload and converts it into a [`StudentInput`].
    pub fn validate(self) -> Result<StudentInput> {
        let length = self.nombre.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(StudentError::Validation(format!(
                "nombre exceeds maximum length of {} characters (got {})",
                MAX_NAME_LENGTH, length
            )));
        }
        Ok(StudentInput::new(self.nombre, self.edad))
    }
}

/// Validates an extracted JSON body.
///
/// Extraction failures (bad JSON, wrong content type, missing or mistyped
/// fields) become [`StudentError::Validation`].
pub fn validate_body(
    body: std::result::Result<Json<StudentPayload>, JsonRejection>,
) -> Result<StudentInput> {
    let Json(payload) = body?;
    payload.validate()
}
