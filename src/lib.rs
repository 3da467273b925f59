//! elk-probe: a diagnostic HTTP endpoint for log pipeline verification.
//!
//! Each request to `/api/v1/elk` emits one informational, one warning and one
//! error record and answers `ELK Test`, so operators can confirm that every
//! severity level makes it from the service into their log aggregator.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use error::Error;
