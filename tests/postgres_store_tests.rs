//! PostgreSQL Store Tests
//!
//! Need a reachable database. Run with:
//! `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`
//!
//! CI runs them against a Postgres service container
//! (`.github/workflows/ci.yml`).

use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;
use student_api::{
    error::StudentError,
    models::StudentInput,
    store::{ensure_schema, PgStudentStore, StudentStore},
};

async fn connect() -> PgStudentStore {
    connect_with(2).await
}

async fn connect_with(max_connections: u32) -> PgStudentStore {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let options = PgConnectOptions::from_str(&url).unwrap();
    let store = PgStudentStore::connect(options, max_connections)
        .await
        .unwrap();
    ensure_schema(store.pool()).await.unwrap();
    store
}

#[tokio::test]
#[ignore]
async fn test_schema_is_idempotent() {
    let store = connect().await;
    ensure_schema(store.pool()).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_crud_round_trip() {
    let store = connect().await;

    let created = store.insert(StudentInput::new("Ana", 20)).await.unwrap();
    assert_eq!(store.get_by_id(created.id).await.unwrap(), created);
    assert!(store
        .list_all()
        .await
        .unwrap()
        .iter()
        .any(|s| s.id == created.id));

    let updated = store
        .update(created.id, StudentInput::new("Ana B", 21))
        .await
        .unwrap();
    assert_eq!(updated.name, "Ana B");
    assert_eq!(updated.age, 21);

    store.delete(created.id).await.unwrap();
    assert!(matches!(
        store.get_by_id(created.id).await,
        Err(StudentError::NotFound(_))
    ));
    assert!(matches!(
        store.delete(created.id).await,
        Err(StudentError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore]
async fn test_update_missing_row_creates_nothing() {
    let store = connect().await;

    let result = store.update(i32::MAX, StudentInput::new("Ghost", 1)).await;
    assert!(matches!(result, Err(StudentError::NotFound(_))));
    assert!(matches!(
        store.get_by_id(i32::MAX).await,
        Err(StudentError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore]
async fn test_overlong_name_is_rolled_back() {
    let store = connect().await;
    let name = "x".repeat(101);

    // Bypasses request validation, so the column bound rejects it
    let result = store.insert(StudentInput::new(name.clone(), 1)).await;
    assert!(matches!(result, Err(StudentError::Storage(_))));
    assert!(!store
        .list_all()
        .await
        .unwrap()
        .iter()
        .any(|s| s.name.starts_with(&name[..100])));
}

#[tokio::test]
#[ignore]
async fn test_failed_update_leaves_row_unchanged() {
    let store = connect().await;
    let created = store.insert(StudentInput::new("Ana", 20)).await.unwrap();

    let result = store
        .update(created.id, StudentInput::new("x".repeat(101), 99))
        .await;
    assert!(matches!(result, Err(StudentError::Storage(_))));
    assert_eq!(store.get_by_id(created.id).await.unwrap(), created);

    store.delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_failed_write_releases_connection() {
    // A single connection: a transaction left open would block the next call
    let store = connect_with(1).await;

    let result = store.insert(StudentInput::new("x".repeat(101), 1)).await;
    assert!(matches!(result, Err(StudentError::Storage(_))));
    assert!(matches!(
        store.delete(i32::MAX).await,
        Err(StudentError::NotFound(_))
    ));

    let created = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        store.insert(StudentInput::new("Luis", 22)),
    )
    .await
    .expect("connection was not returned to the pool")
    .unwrap();
    assert_eq!(store.get_by_id(created.id).await.unwrap(), created);
    store.delete(created.id).await.unwrap();
}
