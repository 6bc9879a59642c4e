//! Listener setup and the serve loop.

use crate::{ServerConfig, router};
use anyhow::{Context, Result};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
///
/// Fails if the address cannot be bound or the server stops with an I/O
/// error.
#[instrument(skip(config), fields(addr = %config.bind_address()))]
pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    serve_with_shutdown(listener, config, shutdown_signal()).await
}

/// Serves on an already bound listener until `signal` resolves.
///
/// # Errors
///
/// Fails if the server stops with an I/O error.
#[instrument(skip_all)]
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    config: ServerConfig,
    signal: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr().context("Listener has no local address")?;
    let app = router(&config);

    info!(addr = %local, "Running...");
    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
        .context("HTTP server failed")?;
    info!(addr = %local, "...ended");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C, shutting down");
    }
}
