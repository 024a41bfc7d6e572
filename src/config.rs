//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

/// Which [`StudentStore`](crate::store::StudentStore) the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Some(StorageBackend::Postgres),
            "memory" => Some(StorageBackend::Memory),
            _ => None,
        }
    }
}

/// Database connection settings.
///
/// A full `DATABASE_URL` takes precedence over the individual fields.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Builds driver connect options.
    ///
    /// The password is handed to the driver as its own option, so it never
    /// needs URL escaping.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => PgConnectOptions::from_str(url),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .database(&self.name)
                .username(&self.user)
                .password(&self.password)),
        }
    }

    /// Connection target without credentials, for logging.
    pub fn describe(&self) -> String {
        match &self.url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!("{}@{}:{}/{}", self.user, self.host, self.port, self.name),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            name: "estudiantes".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            max_connections: 5,
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// HTTP server port
    pub server_port: u16,
    /// Deployment mode, e.g. "development" or "production"
    pub environment: String,
    /// Storage backend for student rows
    pub storage: StorageBackend,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - Full connection string (overrides the `DB_*` values)
    /// - `DB_HOST` - Database host (default: localhost)
    /// - `DB_PORT` - Database port (default: 5432)
    /// - `DB_NAME` - Database name (default: estudiantes)
    /// - `DB_USER` - Database user (default: postgres)
    /// - `DB_PASSWORD` - Database password (default: postgres)
    /// - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
    /// - `PORT` - HTTP server port (default: 8000)
    /// - `ENVIRONMENT` - Deployment mode (default: development)
    /// - `STORAGE_BACKEND` - `postgres` or `memory` (default: postgres)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let db = defaults.database;

        Self {
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
                host: env::var("DB_HOST").unwrap_or(db.host),
                port: parse_var("DB_PORT").unwrap_or(db.port),
                name: env::var("DB_NAME").unwrap_or(db.name),
                user: env::var("DB_USER").unwrap_or(db.user),
                password: env::var("DB_PASSWORD").unwrap_or(db.password),
                max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(db.max_connections),
            },
            server_port: parse_var("PORT").unwrap_or(defaults.server_port),
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            storage: env::var("STORAGE_BACKEND")
                .ok()
                .and_then(|v| StorageBackend::parse(&v))
                .unwrap_or(defaults.storage),
        }
    }

    /// True when running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Default tracing filter for this environment; `RUST_LOG` overrides it.
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_development() {
            "student_api=debug,tower_http=debug"
        } else {
            "student_api=info,tower_http=info"
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            server_port: 8000,
            environment: "development".to_string(),
            storage: StorageBackend::Postgres,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
