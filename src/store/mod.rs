//! Store Module
//!
//! Persistence for student rows. [`StudentStore`] is the seam the HTTP layer
//! talks to; [`PgStudentStore`] backs it with PostgreSQL and
//! [`MemoryStudentStore`] keeps rows in process.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Student, StudentInput};

mod memory;
mod postgres;
pub mod schema;


pub use memory::MemoryStudentStore;
pub use postgres::PgStudentStore;
pub use schema::ensure_schema;

// == Operation contexts ==
// Prefixes for storage failure details, one per operation.
pub(crate) const LIST_CONTEXT: &str = "Error al obtener estudiantes";
pub(crate) const GET_CONTEXT: &str = "Error al obtener estudiante";
pub(crate) const CREATE_CONTEXT: &str = "Error al crear estudiante";
pub(crate) const UPDATE_CONTEXT: &str = "Error al actualizar estudiante";
pub(crate) const DELETE_CONTEXT: &str = "Error al eliminar estudiante";

// == Student Store ==
/// Single-row operations over the student collection.
///
/// Implementations are shared across request handlers, so they must be
/// thread safe. Every write is committed before the call returns, and a
/// failed write leaves nothing behind.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Returns every student. Order is implementation-defined.
    async fn list_all(&self) -> Result<Vec<Student>>;

    /// Returns the student with `id`, or `NotFound`.
    async fn get_by_id(&self, id: i32) -> Result<Student>;

    /// Stores a new student and returns it with its assigned id.
    async fn insert(&self, input: StudentInput) -> Result<Student>;

    /// Replaces name and age of student `id`, or fails with `NotFound`.
    async fn update(&self, id: i32, input: StudentInput) -> Result<Student>;

    /// Removes student `id`, or fails with `NotFound`.
    async fn delete(&self, id: i32) -> Result<()>;
}
