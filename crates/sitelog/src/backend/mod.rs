//! Output backends
//!
//! A backend receives the four tokens of a log line positionally:
//! timestamp, level, call site and payload. Empty tokens mean "not
//! configured". Backends own their failures: nothing they do is reported
//! back to the code that logged.

mod capture;
mod file;
mod forward;

use std::io::{self, Write};
use std::sync::Arc;

pub use capture::{Capture, Captured};
pub use file::FileBackend;
#[cfg(feature = "file")]
pub use file::Rolling;
pub use forward::TracingBackend;

/// Receiver of formatted log tokens
///
/// Implemented for any `Fn(&str, &str, &str, &str)` closure.
///
/// # Example
///
/// ```rust
/// use sitelog::{Config, Logger, args};
///
/// let logger = Logger::with_config(
///     Config::default().with_info(|_ts: &str, _level: &str, site: &str, msg: &str| {
///         assert!(site.ends_with(':'));
///         assert_eq!(msg, "ready 3");
///     }),
/// );
/// logger.info(&args!["ready", 3]);
/// ```
pub trait Backend: Send + Sync {
    /// Handle one log line
    fn write(&self, timestamp: &str, level: &str, callsite: &str, payload: &str);
}

impl<F> Backend for F
where
    F: Fn(&str, &str, &str, &str) + Send + Sync,
{
    fn write(&self, timestamp: &str, level: &str, callsite: &str, payload: &str) {
        self(timestamp, level, callsite, payload);
    }
}

/// Shared handle to a backend, as stored in [`crate::Config`]
pub type SharedBackend = Arc<dyn Backend>;

/// Join tokens with single spaces, skipping empty ones
pub fn join_tokens(tokens: [&str; 4]) -> String {
    let mut line = String::with_capacity(tokens.iter().map(|t| t.len() + 1).sum());
    for token in tokens.into_iter().filter(|t| !t.is_empty()) {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(token);
    }
    line
}

/// Writes each line to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Backend for Stdout {
    fn write(&self, timestamp: &str, level: &str, callsite: &str, payload: &str) {
        let line = join_tokens([timestamp, level, callsite, payload]);
        let _ = writeln!(io::stdout().lock(), "{line}");
    }
}

/// Writes each line to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl Backend for Stderr {
    fn write(&self, timestamp: &str, level: &str, callsite: &str, payload: &str) {
        let line = join_tokens([timestamp, level, callsite, payload]);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

/// Backend that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Backend for Discard {
    fn write(&self, _timestamp: &str, _level: &str, _callsite: &str, _payload: &str) {}
}
