//! HTTP route table.
//!
//! Routes are registered explicitly at startup. The diagnostic route accepts
//! every method and is never cacheable; the health route is GET only.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of the probe records emitted
//! by a single call.

pub mod elk;
pub mod health;

use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_DIAGNOSTIC, ELK_PATH, HEALTH_PATH};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Diagnostic probe - any method, must reach the origin every time
    let diagnostic_routes = Router::new()
        .route(ELK_PATH, any(elk::probe))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DIAGNOSTIC),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route(HEALTH_PATH, get(health::health));

    Router::new()
        .merge(diagnostic_routes)
        .merge(health_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
