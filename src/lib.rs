//! Student API - A small CRUD service for student records
//!
//! Exposes a JSON REST resource over a single PostgreSQL table, with an
//! in-memory store for local runs and tests.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::StudentError;
