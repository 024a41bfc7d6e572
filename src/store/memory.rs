//! In-process student store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, StudentError};
use crate::models::{Student, StudentInput};
use crate::store::{StudentStore, CREATE_CONTEXT};

#[derive(Debug, Default)]
struct Rows {
    /// Rows keyed by id
    by_id: BTreeMap<i32, Student>,
    /// Last id handed out; ids are never reused
    last_id: i32,
}

// == Memory Student Store ==
/// Student storage held in a `BTreeMap`, listed in ascending id order.
///
/// Each operation takes the lock once, so a write is visible to every
/// later read as soon as it returns.
#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    rows: RwLock<Rows>,
}

impl MemoryStudentStore {
    // == Constructor ==
    /// Creates an empty store whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored students.
    pub async fn len(&self) -> usize {
        self.rows.read().await.by_id.len()
    }

    /// Returns true when no students are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list_all(&self) -> Result<Vec<Student>> {
        let rows = self.rows.read().await;
        Ok(rows.by_id.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Student> {
        let rows = self.rows.read().await;
        rows.by_id
            .get(&id)
            .cloned()
            .ok_or(StudentError::NotFound(id.into()))
    }

    async fn insert(&self, input: StudentInput) -> Result<Student> {
        let mut rows = self.rows.write().await;
        let id = rows
            .last_id
            .checked_add(1)
            .ok_or_else(|| StudentError::storage(CREATE_CONTEXT, "id sequence exhausted"))?;

        let student = input.into_student(id);
        rows.by_id.insert(id, student.clone());
        rows.last_id = id;

        Ok(student)
    }

    async fn update(&self, id: i32, input: StudentInput) -> Result<Student> {
        let mut rows = self.rows.write().await;
        let slot = rows.by_id.get_mut(&id).ok_or(StudentError::NotFound(id.into()))?;
        *slot = input.into_student(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut rows = self.rows.write().await;
        rows.by_id
            .remove(&id)
            .map(|_| ())
            .ok_or(StudentError::NotFound(id.into()))
    }
}
