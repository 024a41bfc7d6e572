//! Domain and wire models for the student API
//!
//! This module defines the persisted `Student` entity and the DTOs (Data
//! Transfer Objects) used for serializing/deserializing HTTP bodies.

pub mod requests;
pub mod responses;
pub mod student;

// Re-export commonly used types
pub use requests::{validate_body, StudentPayload};
pub use responses::{
    DeleteResponse, ErrorResponse, HealthResponse, RootResponse, StudentCreatedResponse,
    StudentListResponse, StudentUpdatedResponse,
};
pub use student::{Student, StudentInput, MAX_NAME_LENGTH};
