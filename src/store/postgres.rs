//! PostgreSQL student store
//!
//! Each call checks out its own connection from the pool and returns it when
//! the guard drops. Writes run in a transaction that is committed on success
//! and rolled back on every failure path.

use async_trait::async_trait;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool, Postgres, Transaction,
};
use tracing::{debug, warn};

use crate::error::{Result, StudentError};
use crate::models::{Student, StudentInput};
use crate::store::{
    StudentStore, CREATE_CONTEXT, DELETE_CONTEXT, GET_CONTEXT, LIST_CONTEXT, UPDATE_CONTEXT,
};

// == Postgres Student Store ==
/// Student storage backed by a sqlx connection pool.
#[derive(Debug, Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    /// Wraps an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool with at most `max_connections` connections.
    pub async fn connect(
        options: PgConnectOptions,
        max_connections: u32,
    ) -> std::result::Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// The underlying pool, for schema setup and shutdown.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn begin(&self, context: &str) -> Result<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| StudentError::storage(context, e))
    }
}

/// Commits `tx` if `outcome` succeeded, otherwise rolls it back.
async fn finish<T>(
    tx: Transaction<'static, Postgres>,
    outcome: Result<T>,
    context: &str,
) -> Result<T> {
    match outcome {
        Ok(value) => {
            tx.commit()
                .await
                .map_err(|e| StudentError::storage(context, e))?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!(error = %rollback_err, "{}: rollback failed", context);
            }
            Err(err)
        }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list_all(&self) -> Result<Vec<Student>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| StudentError::storage(LIST_CONTEXT, e))?;

        let students = sqlx::query_as::<_, Student>("SELECT id, nombre, edad FROM estudiantes")
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| StudentError::storage(LIST_CONTEXT, e))?;

        debug!(count = students.len(), "Listed students");
        Ok(students)
    }

    async fn get_by_id(&self, id: i32) -> Result<Student> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| StudentError::storage(GET_CONTEXT, e))?;

        sqlx::query_as::<_, Student>("SELECT id, nombre, edad FROM estudiantes WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| StudentError::storage(GET_CONTEXT, e))?
            .ok_or(StudentError::NotFound(id.into()))
    }

    async fn insert(&self, input: StudentInput) -> Result<Student> {
        let mut tx = self.begin(CREATE_CONTEXT).await?;

        let outcome = sqlx::query_as::<_, Student>(
            "INSERT INTO estudiantes (nombre, edad) VALUES ($1, $2) RETURNING id, nombre, edad",
        )
        .bind(&input.name)
        .bind(input.age)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StudentError::storage(CREATE_CONTEXT, e));

        finish(tx, outcome, CREATE_CONTEXT).await
    }

    async fn update(&self, id: i32, input: StudentInput) -> Result<Student> {
        let mut tx = self.begin(UPDATE_CONTEXT).await?;

        let outcome = sqlx::query_as::<_, Student>(
            "UPDATE estudiantes SET nombre = $1, edad = $2 WHERE id = $3 \
             RETURNING id, nombre, edad",
        )
        .bind(&input.name)
        .bind(input.age)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StudentError::storage(UPDATE_CONTEXT, e))
        .and_then(|row| row.ok_or(StudentError::NotFound(id.into())));

        finish(tx, outcome, UPDATE_CONTEXT).await
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.begin(DELETE_CONTEXT).await?;

        let outcome = sqlx::query("DELETE FROM estudiantes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| StudentError::storage(DELETE_CONTEXT, e))
            .and_then(|done| match done.rows_affected() {
                0 => Err(StudentError::NotFound(id.into())),
                _ => Ok(()),
            });

        finish(tx, outcome, DELETE_CONTEXT).await
    }
}
