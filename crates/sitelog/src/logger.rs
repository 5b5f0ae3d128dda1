//! Logger handle and entry points

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::callsite::CallSite;
use crate::config::Config;
use crate::format::Tokens;
use crate::inspect::Value;
use crate::level::Severity;

/// Shared handle to a live [`Config`]
///
/// Clones share the configuration. Every call loads the configuration
/// currently stored, so changes made through any handle apply to the next
/// call on every handle. Reads are lock-free; updates are read-copy-update.
#[derive(Clone)]
pub struct Logger {
    config: Arc<ArcSwap<Config>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &**self.config.load())
            .finish()
    }
}

impl Logger {
    /// Logger with the default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Logger with `config`
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    // ------------------------------------------------------------------
    // Configuration store
    // ------------------------------------------------------------------

    /// Current configuration
    pub fn config(&self) -> Arc<Config> {
        self.config.load_full()
    }

    /// Modify the configuration in place
    ///
    /// `f` may run more than once when several threads update concurrently.
    pub fn configure(&self, mut f: impl FnMut(&mut Config)) {
        self.config.rcu(|current| {
            let mut next = Config::clone(current);
            f(&mut next);
            next
        });
    }

    /// Replace the whole configuration
    pub fn replace(&self, config: Config) {
        self.config.store(Arc::new(config));
    }

    /// Restore the default configuration
    pub fn reset(&self) {
        self.replace(Config::default());
    }

    /// Request level colors; a no-op without a color terminal
    ///
    /// Returns the resulting state.
    pub fn set_color_enabled(&self, enabled: bool) -> bool {
        let mut state = false;
        self.configure(|config| state = config.set_color_enabled(enabled));
        state
    }

    /// Whether level colors are on
    pub fn is_color_enabled(&self) -> bool {
        self.config.load().is_color_enabled()
    }

    // ------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------

    /// Log at info level
    #[track_caller]
    pub fn info(&self, args: &[Value]) {
        self.log(Severity::Info, args);
    }

    /// Log at warn level
    #[track_caller]
    pub fn warn(&self, args: &[Value]) {
        self.log(Severity::Warn, args);
    }

    /// Log at error level
    #[track_caller]
    pub fn error(&self, args: &[Value]) {
        self.log(Severity::Error, args);
    }

    /// Log at `severity`, attributing the line to the caller
    #[track_caller]
    pub fn log(&self, severity: Severity, args: &[Value]) {
        let site = CallSite::caller();
        self.log_at(severity, &site, args);
    }

    /// Log at `severity` with an explicit call site
    pub fn log_at(&self, severity: Severity, site: &CallSite, args: &[Value]) {
        let config = self.config.load();
        let tokens = Tokens::build(&config, severity, site, args);
        tokens.dispatch(config.backend(severity).as_ref());
    }

    /// Tokens a call from `site` would dispatch, without dispatching
    pub fn format(&self, severity: Severity, site: &CallSite, args: &[Value]) -> Tokens {
        Tokens::build(&self.config.load(), severity, site, args)
    }
}

static GLOBAL: LazyLock<Logger> = LazyLock::new(Logger::new);

/// Process-wide logger used by the free functions and macros
pub fn global() -> &'static Logger {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Capture;
    use crate::timestamp;
    use pretty_assertions::assert_eq;

    fn captured() -> (Logger, Capture) {
        let capture = Capture::new();
        let logger = Logger::with_config(Config::default().with_backend(capture.clone()));
        (logger, capture)
    }

    #[test]
    fn test_entry_point_reports_caller_line() {
        let (logger, capture) = captured();

        let (line, ()) = (line!(), logger.info(&[Value::from("Hello world!")]));

        let record = capture.last().unwrap();
        assert_eq!(
            record.tokens(),
            ["", "", format!("{}:{line}:", file!()).as_str(), "Hello world!"]
        );
    }

    #[test]
    fn test_log_dispatches_by_severity() {
        let info = Capture::new();
        let warn = Capture::new();
        let error = Capture::new();
        let logger = Logger::with_config(
            Config::default()
                .with_info(info.clone())
                .with_warn(warn.clone())
                .with_error(error.clone()),
        );

        logger.info(&[Value::from("i")]);
        logger.warn(&[Value::from("w")]);
        logger.error(&[Value::from("e")]);
        logger.log(Severity::Warn, &[Value::from("w2")]);

        assert_eq!(info.len(), 1);
        assert_eq!(warn.len(), 2);
        assert_eq!(error.len(), 1);
        assert_eq!(warn.last().unwrap().payload, "w2");
    }

    #[test]
    fn test_configure_applies_to_clones() {
        let (logger, capture) = captured();
        let other = logger.clone();

        other.configure(|config| {
            config.show_level = true;
            config.timestamp = Some(timestamp::fixed("T"));
        });
        logger.warn(&[Value::from("disk")]);

        let record = capture.last().unwrap();
        assert_eq!(record.timestamp, "T");
        assert_eq!(record.level, "WARN ");
    }

    #[test]
    fn test_colors_through_logger() {
        let (logger, capture) = captured();
        logger.configure(|config| {
            config.show_level = true;
            config.force_color_enabled(true);
        });
        assert!(logger.is_color_enabled());

        logger.info(&[]);
        logger.error(&[]);
        let lines = capture.take();
        assert_eq!(lines[0].level, "INFO ");
        assert_eq!(lines[1].level, "\x1b[31mERR  \x1b[0m");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let (logger, _capture) = captured();
        logger.configure(|config| config.show_level = true);
        logger.reset();

        let config = logger.config();
        assert!(!config.show_level);
        assert!(!config.is_color_enabled());
    }

    #[test]
    fn test_format_without_dispatch() {
        let (logger, capture) = captured();
        let tokens = logger.format(Severity::Info, &CallSite::unknown(), &[Value::from(1)]);

        assert_eq!(tokens.line(), "<unknown>:0: 1");
        assert!(capture.is_empty());
    }
}
