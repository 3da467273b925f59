//! Diagnostic endpoint for log pipeline verification.
//!
//! Every request writes one informational, one warning and one error record
//! and returns a fixed acknowledgment. Nothing about the request is read, so
//! the route is registered for every method.

use axum::{extract::State, http::StatusCode};

use crate::config::ELK_RESPONSE_BODY;
use crate::diagnostics::emit_probe;
use crate::state::AppState;

/// Diagnostic handler.
pub async fn probe(State(state): State<AppState>) -> (StatusCode, &'static str) {
    emit_probe(state.sink.as_ref());
    (StatusCode::OK, ELK_RESPONSE_BODY)
}
