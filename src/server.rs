//! HTTP server initialization and runtime setup.
//!
//! Handles the store and its connection pool, service wiring, the Axum server
//! lifecycle and graceful shutdown.

use crate::application::services::{ShortenerService, ShortenerSettings};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::UrlStore;
use crate::infrastructure::persistence::{MemoryUrlStore, PgUrlStore};
use crate::routes::app_router;
use crate::state::{AppState, BasicCredentials};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - URL store (PostgreSQL pool + schema bootstrap, or in-memory)
/// - Shortener service
/// - Axum HTTP server
///
/// On SIGINT/SIGTERM the server stops accepting connections, waits up to
/// `SHUTDOWN_TIMEOUT` seconds for in-flight requests, then closes the store.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or schema bootstrap fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;

    let shortener_service = Arc::new(ShortenerService::new(
        store.clone(),
        ShortenerSettings {
            max_attempts: config.code_max_attempts,
            ..ShortenerSettings::default()
        },
    ));

    let state = AppState::new(
        shortener_service,
        BasicCredentials {
            user: config.http_user.clone(),
            password: config.http_password.clone(),
        },
        config.base_url.clone(),
    );

    let app = app_router(state, config.http_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .with_graceful_shutdown(async {
                let _ = stop_rx.await;
            })
            .await
    });

    let outcome = tokio::select! {
        joined = &mut server => joined.context("server task panicked")?.context("server error"),
        _ = shutdown_signal() => {
            tracing::info!("Shutting down server");
            let _ = stop_tx.send(());

            match tokio::time::timeout(config.shutdown_timeout(), &mut server).await {
                Ok(joined) => joined.context("server task panicked")?.context("server error"),
                Err(_) => {
                    tracing::warn!(
                        "In-flight requests did not finish within {}s, aborting",
                        config.shutdown_timeout
                    );
                    server.abort();
                    Ok(())
                }
            }
        }
    };

    store.close().await;
    tracing::info!("Server stopped");

    outcome
}

/// Creates the configured [`UrlStore`].
async fn build_store(config: &Config) -> Result<Arc<dyn UrlStore>> {
    match config.storage {
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required when STORAGE=postgres")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(config.db_connect_timeout())
                .idle_timeout(config.db_idle_timeout())
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            let store = PgUrlStore::from_pool(pool)
                .await
                .context("Failed to bootstrap URL store schema")?;
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; links are lost on restart");
            Ok(Arc::new(MemoryUrlStore::new()))
        }
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
