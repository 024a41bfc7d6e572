//! Serving loop shared by the binary and tests.

use std::future::Future;

use anyhow::Context;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;

/// Serves `app` until `shutdown` resolves, then closes `pool`.
///
/// The pool is closed whether serving ended cleanly or with an error; the
/// serving error is returned afterwards.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    pool: Option<PgPool>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    if let Some(pool) = pool {
        pool.close().await;
        info!("Database pool closed");
    }

    served.context("server error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::create_router;
    use crate::AppState;
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

    #[tokio::test]
    async fn test_pool_closed_after_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let app = create_router(AppState::in_memory());
        // Lazy pools never dial the database until first use
        let pool = PgPoolOptions::new().connect_lazy_with(PgConnectOptions::new());

        let result = serve(listener, app, Some(pool.clone()), async {}).await;

        assert!(result.is_ok());
        assert!(pool.is_closed());
    }

    #[tokio::test]
    async fn test_serve_without_pool() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let app = create_router(AppState::in_memory());

        assert!(serve(listener, app, None, async {}).await.is_ok());
    }
}
