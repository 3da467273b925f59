//! HTTP server module.
//!
//! Serves plain HTTP; TLS termination is left to the reverse proxy or load
//! balancer in front of the probe. The server includes graceful shutdown on
//! SIGTERM/SIGINT with a configurable grace period.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
