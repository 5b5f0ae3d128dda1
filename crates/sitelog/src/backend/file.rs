//! File backend

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use super::{Backend, join_tokens};
use crate::color::strip_ansi;
use crate::core::{LogIoResultExt, LogResult};

/// File rotation strategy
#[cfg(feature = "file")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rolling {
    /// Never roll files
    #[default]
    Never,
    /// Roll hourly
    Hourly,
    /// Roll daily
    Daily,
}

/// Appends each line to a file
///
/// ANSI escape codes are stripped. A failed write is reported once through
/// `tracing` and later lines keep being attempted; the logging call never
/// sees the error.
pub struct FileBackend {
    sink: Mutex<Box<dyn Write + Send>>,
    name: String,
    failed: AtomicBool,
}

impl std::fmt::Debug for FileBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileBackend")
            .field("name", &self.name)
            .field("failed", &self.failed.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl FileBackend {
    /// Open `path` for appending, creating it and its parent directories
    pub fn open(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_log_context(|| format!("create log directory '{}'", dir.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_log_context(|| format!("open log file '{}'", path.display()))?;

        Ok(Self::from_writer(file, path.display().to_string()))
    }

    /// Write to a rolling file; `path` supplies the directory and file name prefix
    #[cfg(feature = "file")]
    pub fn rolling(path: impl AsRef<Path>, rolling: Rolling) -> LogResult<Self> {
        use tracing_appender::rolling::{RollingFileAppender, Rotation};

        use crate::core::LogError;

        let path = path.as_ref();
        let dir = path
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let prefix = path.file_name().ok_or_else(|| {
            LogError::config(format!(
                "Invalid file path (no filename): '{}'",
                path.display()
            ))
        })?;
        let rotation = match rolling {
            Rolling::Never => Rotation::NEVER,
            Rolling::Hourly => Rotation::HOURLY,
            Rolling::Daily => Rotation::DAILY,
        };
        let appender = RollingFileAppender::builder()
            .rotation(rotation)
            .filename_prefix(prefix.to_string_lossy())
            .build(dir)
            .map_err(|e| LogError::config(format!("rolling file '{}': {e}", path.display())))?;

        Ok(Self::from_writer(appender, path.display().to_string()))
    }

    /// Wrap an arbitrary writer; `name` identifies it in diagnostics
    pub fn from_writer(writer: impl Write + Send + 'static, name: impl Into<String>) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
            name: name.into(),
            failed: AtomicBool::new(false),
        }
    }

    /// Whether any write has failed so far
    pub fn has_failed(&self) -> bool {
        self.failed.load(Ordering::Relaxed)
    }
}

impl Backend for FileBackend {
    fn write(&self, timestamp: &str, level: &str, callsite: &str, payload: &str) {
        let line = strip_ansi(&join_tokens([timestamp, level, callsite, payload]));
        let result = {
            let mut sink = self.sink.lock();
            writeln!(sink, "{line}").and_then(|()| sink.flush())
        };
        if let Err(error) = result {
            if !self.failed.swap(true, Ordering::Relaxed) {
                tracing::warn!(file = %self.name, %error, "log file write failed, lines are being dropped");
            }
        }
    }
}
