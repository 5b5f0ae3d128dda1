//! `log` facade bridge
//!
//! Forwards records from crates using the `log` macros into a [`Logger`].
//! The record's own file and line become the call site; records without
//! them are attributed to `<unknown>:0`.

use crate::callsite::CallSite;
use crate::core::{LogError, LogResult};
use crate::inspect::Value;
use crate::level::Severity;
use crate::logger::Logger;

/// [`log::Log`] implementation backed by a [`Logger`]
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Logger,
    max_level: log::LevelFilter,
}

impl LogBridge {
    /// Bridge into `logger`, accepting records up to `Info`
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            max_level: log::LevelFilter::Info,
        }
    }

    /// Set the most verbose level that is forwarded
    pub fn max_level(mut self, max_level: log::LevelFilter) -> Self {
        self.max_level = max_level;
        self
    }

    /// Install as the `log` crate's global logger
    pub fn install(self) -> LogResult<()> {
        let max_level = self.max_level;
        log::set_boxed_logger(Box::new(self))
            .map_err(|e| LogError::config(format!("log bridge: {e}")))?;
        log::set_max_level(max_level);
        Ok(())
    }

    /// Severity a `log` level maps to
    pub fn severity(level: log::Level) -> Severity {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warn,
            log::Level::Info | log::Level::Debug | log::Level::Trace => Severity::Info,
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let site = CallSite::from_parts(record.file(), record.line());
        let message = Value::Str(record.args().to_string());
        self.logger
            .log_at(Self::severity(record.level()), &site, &[message]);
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Capture;
    use crate::config::Config;
    use log::Log;

    fn make_bridge() -> (LogBridge, Capture) {
        let capture = Capture::new();
        let logger = Logger::with_config(Config::default().with_backend(capture.clone()));
        (LogBridge::new(logger), capture)
    }

    #[test]
    fn test_forwards_record_location() {
        let (bridge, capture) = make_bridge();
        bridge.log(
            &log::Record::builder()
                .level(log::Level::Warn)
                .file(Some("src/db.rs"))
                .line(Some(42))
                .args(format_args!("pool exhausted"))
                .build(),
        );

        let line = capture.last().unwrap();
        assert_eq!(line.callsite, "src/db.rs:42:");
        assert_eq!(line.payload, "pool exhausted");
    }

    #[test]
    fn test_missing_location_falls_back() {
        let (bridge, capture) = make_bridge();
        bridge.log(
            &log::Record::builder()
                .level(log::Level::Error)
                .args(format_args!("boom"))
                .build(),
        );

        assert_eq!(capture.last().unwrap().callsite, "<unknown>:0:");
    }

    #[test]
    fn test_filters_by_level() {
        let (bridge, capture) = make_bridge();
        bridge.log(
            &log::Record::builder()
                .level(log::Level::Debug)
                .args(format_args!("noise"))
                .build(),
        );
        assert!(capture.is_empty());

        let (bridge, capture) = make_bridge();
        let bridge = bridge.max_level(log::LevelFilter::Trace);
        bridge.log(
            &log::Record::builder()
                .level(log::Level::Debug)
                .args(format_args!("detail"))
                .build(),
        );
        assert_eq!(capture.len(), 1);
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(LogBridge::severity(log::Level::Trace), Severity::Info);
        assert_eq!(LogBridge::severity(log::Level::Warn), Severity::Warn);
        assert_eq!(LogBridge::severity(log::Level::Error), Severity::Error);
    }
}
