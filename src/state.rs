//! Shared application state for request handlers.

use std::sync::Arc;

use crate::diagnostics::DiagnosticSink;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the sink the diagnostic endpoint writes its probe records to.
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn DiagnosticSink>,
}

impl AppState {
    /// Creates a new application state writing diagnostics to `sink`.
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }
}
