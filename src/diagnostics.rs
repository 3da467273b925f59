//! Diagnostic logging capability.
//!
//! The diagnostic endpoint never logs through a global directly. It writes to a
//! [`DiagnosticSink`] carried in application state, so handlers can be tested
//! against a recording sink while production wires in [`TracingSink`].

use std::fmt;

use crate::config::{ELK_COMPONENT, ELK_ERROR_MESSAGE, ELK_INFO_MESSAGE, ELK_WARNING_MESSAGE};

/// Severity of a diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// The fixed records emitted on every diagnostic request, in emission order.
pub const PROBE_SEQUENCE: [(Severity, &str); 3] = [
    (Severity::Info, ELK_INFO_MESSAGE),
    (Severity::Warning, ELK_WARNING_MESSAGE),
    (Severity::Error, ELK_ERROR_MESSAGE),
];

/// Destination for diagnostic records.
///
/// Implementations are shared across request tasks and must tolerate
/// concurrent `emit` calls.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, severity: Severity, message: &str);
}

/// Emit the full probe sequence to `sink`.
pub fn emit_probe(sink: &dyn DiagnosticSink) {
    for (severity, message) in PROBE_SEQUENCE {
        sink.emit(severity, message);
    }
}

/// Sink that forwards records to the `tracing` subscriber.
///
/// Records inherit the current span, so inside a request they carry the
/// request's `request_id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => {
                tracing::info!(component = ELK_COMPONENT, severity = %severity, "{}", message)
            }
            Severity::Warning => {
                tracing::warn!(component = ELK_COMPONENT, severity = %severity, "{}", message)
            }
            Severity::Error => {
                tracing::error!(component = ELK_COMPONENT, severity = %severity, "{}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tracing_test::traced_test;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<(Severity, String)>>);

    impl DiagnosticSink for Recorder {
        fn emit(&self, severity: Severity, message: &str) {
            self.0.lock().unwrap().push((severity, message.to_string()));
        }
    }

    #[test]
    fn probe_emits_in_severity_order() {
        let recorder = Recorder::default();
        emit_probe(&recorder);

        let records = recorder.0.into_inner().unwrap();
        assert_eq!(
            records,
            vec![
                (Severity::Info, "ELK INFO TEST".to_string()),
                (Severity::Warning, "ELK WARNING TEST".to_string()),
                (Severity::Error, "ELK SEVERE TEST".to_string()),
            ]
        );
    }

    #[test]
    fn every_probe_message_mentions_elk() {
        assert!(PROBE_SEQUENCE.iter().all(|(_, m)| m.contains("ELK")));
    }

    #[traced_test]
    #[test]
    fn tracing_sink_writes_levelled_events() {
        emit_probe(&TracingSink);

        assert!(logs_contain("ELK INFO TEST"));
        assert!(logs_contain("ELK WARNING TEST"));
        assert!(logs_contain("ELK SEVERE TEST"));
        assert!(logs_contain("component=\"elk\""));
        assert!(logs_contain("severity=warning"));

        logs_assert(|lines: &[&str]| {
            let position = |needle: &str| {
                lines
                    .iter()
                    .position(|line| line.contains(needle))
                    .ok_or_else(|| format!("missing record: {needle}"))
            };
            // The level column precedes the message on each line.
            let level_before = |line: &str, level: &str, message: &str| {
                matches!((line.find(level), line.find(message)), (Some(l), Some(m)) if l < m)
            };
            let info = position("ELK INFO TEST")?;
            let warn = position("ELK WARNING TEST")?;
            let error = position("ELK SEVERE TEST")?;

            if !(level_before(lines[info], " INFO ", "ELK INFO TEST")
                && level_before(lines[warn], " WARN ", "ELK WARNING TEST")
                && level_before(lines[error], " ERROR ", "ELK SEVERE TEST"))
            {
                return Err("records logged at the wrong level".to_string());
            }
            if info < warn && warn < error {
                Ok(())
            } else {
                Err(format!("out of order: {info}, {warn}, {error}"))
            }
        });
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
