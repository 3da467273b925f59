//! Shared test fixtures.

use std::sync::{Arc, Mutex};

use axum::Router;
use elk_probe::diagnostics::{DiagnosticSink, Severity};
use elk_probe::routes::create_router;
use elk_probe::state::AppState;

/// Sink that captures every record for later inspection.
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<(Severity, String)>>,
}

impl RecordingSink {
    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records.lock().unwrap().clone()
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.records().into_iter().map(|(s, _)| s).collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, severity: Severity, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

/// Build the production router around a fresh recording sink.
pub fn test_app() -> (Router, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let app = create_router(AppState::new(sink.clone()));
    (app, sink)
}
