//! HTTP server startup logic.

use std::net::TcpListener;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{ConfigError, HttpServerConfig};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(#[from] ConfigError),

    #[error("Failed to bind server: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Server error: {0}")]
    Server(#[source] std::io::Error),
}

/// Start the HTTP server on the configured address.
///
/// The listener is bound before serving so an occupied port is reported as
/// [`ServerError::Bind`]. This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr).map_err(ServerError::Bind)?;
    listener.set_nonblocking(true).map_err(ServerError::Bind)?;

    let handle = Handle::new();

    tracing::info!(%addr, "Starting HTTP server");

    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.shutdown_grace_seconds),
    );

    axum_server::from_tcp(listener)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(ServerError::Server)?;

    tracing::info!("Server stopped");
    Ok(())
}
