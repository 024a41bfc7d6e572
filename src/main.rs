//! Student API - A small CRUD service for student records
//!
//! Binary entry point: loads configuration, opens the store and serves the
//! HTTP API until a shutdown signal arrives.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use student_api::api::{create_router, AppState};
use student_api::config::{Config, StorageBackend};
use student_api::server;
use student_api::store::{ensure_schema, MemoryStudentStore, PgStudentStore};

/// Main entry point for the student API server.
///
/// # Startup Sequence
/// 1. Load `.env` (if any) and configuration from environment variables
/// 2. Initialize tracing subscriber for logging
/// 3. Bind the configured port
/// 4. Open the configured store and create the table if needed
/// 5. Create Axum router with all endpoints and serve it
/// 6. Handle graceful shutdown on SIGINT/SIGTERM, then close the pool
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // RUST_LOG overrides the environment-dependent default
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Student API");
    info!(
        "Configuration loaded: port={}, environment={}, storage={:?}",
        config.server_port, config.environment, config.storage
    );

    // Bind before opening the store so a busy port leaves no pool behind
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    let (state, pg_store) = match config.storage {
        StorageBackend::Postgres => {
            let options = config
                .database
                .connect_options()
                .context("invalid database configuration")?;
            let store = PgStudentStore::connect(options, config.database.max_connections)
                .await
                .with_context(|| {
                    format!("failed to connect to {}", config.database.describe())
                })?;
            if let Err(e) = ensure_schema(store.pool()).await {
                store.pool().close().await;
                return Err(e).context("failed to create the estudiantes table");
            }
            info!(db = %config.database.describe(), "Database pool ready");

            (AppState::new(store.clone()), Some(store))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on shutdown");
            (AppState::new(MemoryStudentStore::new()), None)
        }
    };

    let app = create_router(state);
    info!("Server listening on http://{}", addr);

    let pool = pg_store.map(|store| store.pool().clone());
    server::serve(listener, app, pool, shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
