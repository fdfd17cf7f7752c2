//! HTTP server lifecycle.
//!
//! Binds the configured address, mounts `api_router()`, and serves until
//! a shutdown signal arrives. Pattern: bind → log the bound address →
//! serve with graceful shutdown.

use std::net::SocketAddr;

use crate::api::router::api_router;

/// Bind `addr` and serve the API until ctrl-c.
pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    tracing::info!(addr = %local, "API server listening");

    axum::serve(listener, api_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
