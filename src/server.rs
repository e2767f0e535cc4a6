//! HTTP server initialization and runtime setup.
//!
//! Opens the storage pool, ensures the schema, wires services, and runs Axum
//! until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::repositories::AliasRepository;
use crate::infrastructure::persistence::{SqliteAliasRepository, connect_pool};
use crate::routes::app_router;
use crate::state::{AppState, Credentials};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (one per process)
/// - Alias schema
/// - Services and Axum HTTP server
///
/// The pool is closed after the server stops accepting connections.
///
/// # Errors
///
/// Returns an error if:
/// - Storage cannot be opened or initialized
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config.storage_path, &config.pool_settings())
        .await
        .context("Failed to open storage")?;
    tracing::info!("Connected to storage");

    let repository = Arc::new(SqliteAliasRepository::new(Arc::new(pool.clone())));
    repository
        .init()
        .await
        .context("Failed to initialize storage schema")?;

    let state = AppState::new(
        repository,
        config.alias_policy(),
        Credentials::new(&config.http_user, &config.http_password),
    );

    let app = app_router(state, config.request_timeout());

    let listener = tokio::net::TcpListener::bind(&config.http_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.http_address))?;
    tracing::info!("Listening on http://{}", config.http_address);

    let served = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    pool.close().await;
    tracing::info!("Storage closed");

    served.context("Server error")
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
