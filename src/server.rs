//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, state wiring, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{self, SqliteUrlRepository};
use crate::routes::{RateLimitSettings, app_router};
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - URL service and handler state
/// - Axum HTTP server
///
/// Returns after Ctrl-C or SIGTERM, once in-flight requests have finished and
/// the pool is closed.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = Arc::new(persistence::connect(&config).await?);
    tracing::info!("Connected to database");

    let repository = Arc::new(SqliteUrlRepository::new(pool.clone()));
    let state = AppState::new(repository, config.base_host.clone());

    let app = app_router(
        state,
        RateLimitSettings {
            per_minute: config.rate_limit_per_minute,
            behind_proxy: config.behind_proxy,
        },
    );

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }

    tracing::info!("Shutdown signal received");
}
