//! Forward log lines into `tracing`

use super::Backend;
use crate::color::strip_ansi;
use crate::level::Severity;

/// Re-emits each line as a `tracing` event at a fixed level
///
/// The call site and timestamp travel as fields; the level token is dropped
/// because the event carries its own level.
#[derive(Debug, Clone, Copy)]
pub struct TracingBackend {
    severity: Severity,
}

impl TracingBackend {
    /// Backend emitting events at the level matching `severity`
    pub const fn new(severity: Severity) -> Self {
        Self { severity }
    }

    /// Level events are emitted at
    pub const fn severity(&self) -> Severity {
        self.severity
    }
}

impl Backend for TracingBackend {
    fn write(&self, timestamp: &str, _level: &str, callsite: &str, payload: &str) {
        let callsite = callsite.strip_suffix(':').unwrap_or(callsite);
        let payload = strip_ansi(payload);
        match self.severity {
            Severity::Info => tracing::info!(target: "sitelog", callsite, timestamp, "{payload}"),
            Severity::Warn => tracing::warn!(target: "sitelog", callsite, timestamp, "{payload}"),
            Severity::Error => tracing::error!(target: "sitelog", callsite, timestamp, "{payload}"),
        }
    }
}
