//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Unlike the diagnostic endpoint it emits no log records, so orchestrator polling
//! does not pollute the log pipeline under test.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}
