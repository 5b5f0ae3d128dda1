//! Result extension traits for logging operations

use crate::core::error::{LogError, LogResult};

/// Extension trait for IO results produced while setting up backends
pub trait LogIoResultExt<T> {
    /// Convert IO error to [`LogResult`] with a fixed context message
    fn or_log_error<S: Into<String>>(self, msg: S) -> LogResult<T>;

    /// Convert IO error to [`LogResult`] with a lazily built context message
    fn with_log_context<S: Into<String>, F>(self, f: F) -> LogResult<T>
    where
        F: FnOnce() -> S;
}

impl<T> LogIoResultExt<T> for Result<T, std::io::Error> {
    fn or_log_error<S: Into<String>>(self, msg: S) -> LogResult<T> {
        self.map_err(|source| LogError::Io {
            context: msg.into(),
            source,
        })
    }

    fn with_log_context<S: Into<String>, F>(self, f: F) -> LogResult<T>
    where
        F: FnOnce() -> S,
    {
        self.map_err(|source| LogError::Io {
            context: f().into(),
            source,
        })
    }
}
