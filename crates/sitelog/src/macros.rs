//! Variadic logging macros
//!
//! Each macro accepts any number of arguments convertible into [`Value`]
//! and logs through the global logger, or through an explicit one with a
//! leading `logger: <expr>;`. The reported call site is the line the macro
//! invocation starts on.
//!
//! [`Value`]: crate::Value

/// Build a payload array from values convertible into [`crate::Value`]
///
/// ```rust
/// let payload = sitelog::args!["retrying in", 5, "s"];
/// assert_eq!(payload.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::Value::from($arg)),*]
    };
}

/// Log at info level
///
/// ```rust
/// use sitelog::{Capture, Config, Logger};
///
/// let capture = Capture::new();
/// let logger = Logger::with_config(Config::default().with_backend(capture.clone()));
/// sitelog::info!(logger: logger; "listening on", 8080);
/// assert_eq!(capture.last().unwrap().payload, "listening on 8080");
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr; $($arg:expr),* $(,)?) => {
        $logger.info(&$crate::args![$($arg),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::info(&$crate::args![$($arg),*])
    };
}

/// Log at warn level
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr; $($arg:expr),* $(,)?) => {
        $logger.warn(&$crate::args![$($arg),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::warn(&$crate::args![$($arg),*])
    };
}

/// Log at error level
#[macro_export]
macro_rules! error {
    (logger: $logger:expr; $($arg:expr),* $(,)?) => {
        $logger.error(&$crate::args![$($arg),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::error(&$crate::args![$($arg),*])
    };
}

/// Log at a runtime [`crate::Severity`]
#[macro_export]
macro_rules! log {
    (logger: $logger:expr; $severity:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($severity, &$crate::args![$($arg),*])
    };
    ($severity:expr $(, $arg:expr)* $(,)?) => {
        $crate::global().log($severity, &$crate::args![$($arg),*])
    };
}
