//! Startup errors.
//!
//! The diagnostic endpoint itself has no failure modes of its own; malformed
//! requests are handled by axum. What can fail is bringing the process up.

use crate::config::ConfigError;
use crate::http::ServerError;
use crate::telemetry::TelemetryError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
