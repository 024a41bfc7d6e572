//! API Handlers
//!
//! HTTP request handlers for each student endpoint. Handlers only translate
//! between HTTP and the [`StudentStore`]; status codes come from
//! [`StudentError`](crate::error::StudentError).

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::{debug, info};

use crate::error::{Result, StudentError};
use crate::models::{
    validate_body, DeleteResponse, HealthResponse, RootResponse, Student,
    StudentCreatedResponse, StudentListResponse, StudentPayload, StudentUpdatedResponse,
};
use crate::store::{MemoryStudentStore, StudentStore};

/// Application state shared across all handlers.
///
/// Holds the student store behind an `Arc` so every request works against
/// the same pool or in-memory map.
#[derive(Clone)]
pub struct AppState {
    /// Shared student store
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    /// Creates a new AppState with the given store.
    pub fn new(store: impl StudentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates an AppState backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryStudentStore::new())
    }
}

type StudentId = std::result::Result<Path<i64>, PathRejection>;
type StudentBody = std::result::Result<Json<StudentPayload>, JsonRejection>;

/// Resolves the `:id` path segment.
///
/// Text that is not an integer is a validation error. An integer outside
/// the `SERIAL` range cannot match any row, so it is reported as not found.
fn student_id(id: StudentId) -> Result<i32> {
    let Path(id) = id?;
    i32::try_from(id).map_err(|_| StudentError::NotFound(id))
}

/// Handler for GET /
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse::healthy())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /estudiantes/
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<StudentListResponse>> {
    let students = state.store.list_all().await?;
    debug!(count = students.len(), "Listing students");
    Ok(Json(StudentListResponse::new(students)))
}

/// Handler for GET /estudiantes/:id
pub async fn get_student_handler(
    State(state): State<AppState>,
    id: StudentId,
) -> Result<Json<Student>> {
    let id = student_id(id)?;
    let student = state.store.get_by_id(id).await?;
    Ok(Json(student))
}

/// Handler for POST /estudiantes/
///
/// Validation runs before the store is touched.
pub async fn create_student_handler(
    State(state): State<AppState>,
    body: StudentBody,
) -> Result<Json<StudentCreatedResponse>> {
    let input = validate_body(body)?;
    let student = state.store.insert(input).await?;
    info!(id = student.id, "Student created");
    Ok(Json(StudentCreatedResponse::new(student)))
}

/// Handler for PUT /estudiantes/:id
pub async fn update_student_handler(
    State(state): State<AppState>,
    id: StudentId,
    body: StudentBody,
) -> Result<Json<StudentUpdatedResponse>> {
    let id = student_id(id)?;
    let input = validate_body(body)?;
    let student = state.store.update(id, input).await?;
    info!(id, "Student updated");
    Ok(Json(StudentUpdatedResponse::new(student)))
}

/// Handler for DELETE /estudiantes/:id
pub async fn delete_student_handler(
    State(state): State<AppState>,
    id: StudentId,
) -> Result<Json<DeleteResponse>> {
    let id = student_id(id)?;
    state.store.delete(id).await?;
    info!(id, "Student deleted");
    Ok(Json(DeleteResponse::new()))
}
