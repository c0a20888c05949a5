//! HTTP server initialization and runtime setup.
//!
//! Opens the file stores, warms the session registry, and drives the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{FileAccountRepository, FileUrlRepository};
use crate::infrastructure::security::InMemorySessionRegistry;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The in-memory session registry
/// - The account store (rebuilds the registry from persisted accounts)
/// - The registered URL store
/// - The Axum HTTP server with graceful Ctrl+C shutdown
///
/// # Errors
///
/// Returns an error if:
/// - A store directory cannot be created or a persisted record is corrupt
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let sessions = Arc::new(InMemorySessionRegistry::new());

    let account_repository = Arc::new(FileAccountRepository::open(
        config.accounts_dir(),
        sessions.clone(),
    )?);
    let url_repository = Arc::new(FileUrlRepository::open(config.urls_dir())?);
    tracing::info!(
        "Stores opened under {} ({} session(s) restored)",
        config.data_dir.display(),
        sessions.session_count()
    );

    let state = AppState::new(
        account_repository,
        url_repository,
        sessions,
        config.base_url.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
