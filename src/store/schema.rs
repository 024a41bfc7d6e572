//! Table definition for the `estudiantes` table.

use sqlx::PgPool;
use tracing::info;

/// Table holding student rows.
pub const TABLE_NAME: &str = "estudiantes";

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS estudiantes (
        id SERIAL PRIMARY KEY,
        nombre VARCHAR(100) NOT NULL,
        edad INTEGER NOT NULL
    )
"#;

const CREATE_NAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS ix_estudiantes_nombre ON estudiantes (nombre)";

/// Creates the `estudiantes` table and its name index if they do not exist.
///
/// Safe to run on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TABLE).execute(pool).await?;
    sqlx::query(CREATE_NAME_INDEX).execute(pool).await?;
    info!(table = TABLE_NAME, "Schema ready");
    Ok(())
}
