//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, registry loading and the Axum server lifecycle.

use crate::application::services::AuthService;
use crate::config::Config;
use crate::domain::Registry;
use crate::domain::repositories::EntryStore;
use crate::infrastructure::persistence::{JsonFileStore, NullStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Entry store (JSON file, or memory only)
/// - Registry, loaded from the store
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The data file exists but cannot be read or parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config);

    let registry = Registry::load(store)
        .await
        .context("Failed to load registry")?;
    tracing::info!(
        "Registry loaded: {} entries from {}",
        registry.len().await,
        registry.store_description()
    );

    let auth_service = AuthService::new(
        config.auth_user.as_deref(),
        config.auth_password.as_deref(),
    );

    let state = AppState::new(
        Arc::new(registry),
        Arc::new(RandomCodeGenerator),
        auth_service,
        &config.base_url,
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Picks the store for the configured data file.
pub fn build_store(config: &Config) -> Arc<dyn EntryStore> {
    match &config.data_file {
        Some(path) => Arc::new(JsonFileStore::new(path)),
        None => Arc::new(NullStore::new()),
    }
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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
