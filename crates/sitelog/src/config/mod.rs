//! Configuration types
//!
//! - [`Config`]: the live configuration read on every log call
//! - `settings`: the serializable subset ([`Settings`], [`TimestampMode`])
//! - `presets`: environment loading and ready-made setups

mod presets;
mod settings;

use std::fmt;
use std::sync::Arc;

pub use settings::{Settings, TimestampMode};

use crate::backend::{Backend, SharedBackend, Stderr, Stdout};
use crate::color::{Palette, terminal_supports_color};
use crate::inspect::InspectOptions;
use crate::level::Severity;
use crate::timestamp::TimestampFn;

/// Logging configuration
///
/// Cheap to clone: functions and backends are shared handles.
#[derive(Clone)]
pub struct Config {
    /// Timestamp generator; no timestamp token when `None`
    pub timestamp: Option<TimestampFn>,
    /// Emit the level token
    pub show_level: bool,
    /// Payload rendering options
    pub inspect: InspectOptions,
    /// Backend for info lines
    pub info: SharedBackend,
    /// Backend for warn lines
    pub warn: SharedBackend,
    /// Backend for error lines
    pub error: SharedBackend,
    palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timestamp: None,
            show_level: false,
            inspect: InspectOptions::default(),
            info: Arc::new(Stdout),
            warn: Arc::new(Stderr),
            error: Arc::new(Stderr),
            palette: Palette::PLAIN,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("timestamp", &self.timestamp.is_some())
            .field("show_level", &self.show_level)
            .field("inspect", &self.inspect)
            .field("colors", &self.is_color_enabled())
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Colors
    // ------------------------------------------------------------------

    /// Turn level colors on or off
    ///
    /// Turning colors on without a color-capable terminal on stderr is a
    /// no-op. Returns the resulting state.
    pub fn set_color_enabled(&mut self, enabled: bool) -> bool {
        self.set_color_enabled_with(enabled, terminal_supports_color())
    }

    /// [`Config::set_color_enabled`] with the terminal check already made
    ///
    /// `supported` stands in for terminal detection; turning colors on when
    /// it is false leaves the palette untouched.
    pub fn set_color_enabled_with(&mut self, enabled: bool, supported: bool) -> bool {
        if enabled && !supported {
            tracing::debug!("colors requested but stderr is not a color terminal, ignoring");
            return self.is_color_enabled();
        }
        self.palette = Palette::new(enabled);
        enabled
    }

    /// Turn level colors on or off without terminal detection
    pub fn force_color_enabled(&mut self, enabled: bool) {
        self.palette = Palette::new(enabled);
    }

    /// Whether level colors are on
    pub fn is_color_enabled(&self) -> bool {
        self.palette.is_enabled()
    }

    /// Current escape codes
    pub fn palette(&self) -> Palette {
        self.palette
    }

    // ------------------------------------------------------------------
    // Backends
    // ------------------------------------------------------------------

    /// Backend for `severity`
    pub fn backend(&self, severity: Severity) -> &SharedBackend {
        match severity {
            Severity::Info => &self.info,
            Severity::Warn => &self.warn,
            Severity::Error => &self.error,
        }
    }

    /// Replace the backend for `severity`
    pub fn set_backend(&mut self, severity: Severity, backend: impl Backend + 'static) {
        let backend: SharedBackend = Arc::new(backend);
        match severity {
            Severity::Info => self.info = backend,
            Severity::Warn => self.warn = backend,
            Severity::Error => self.error = backend,
        }
    }

    /// Route all three severities to one backend
    pub fn set_backend_for_all(&mut self, backend: impl Backend + 'static) {
        let backend: SharedBackend = Arc::new(backend);
        self.info = Arc::clone(&backend);
        self.warn = Arc::clone(&backend);
        self.error = backend;
    }

    /// Restore the stdout/stderr backends
    pub fn reset_backends(&mut self) {
        let defaults = Self::default();
        self.info = defaults.info;
        self.warn = defaults.warn;
        self.error = defaults.error;
    }

    // ------------------------------------------------------------------
    // Builder-style setters
    // ------------------------------------------------------------------

    /// Set the timestamp generator
    pub fn with_timestamp(mut self, timestamp: TimestampFn) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set whether the level token is shown
    pub fn with_show_level(mut self, show_level: bool) -> Self {
        self.show_level = show_level;
        self
    }

    /// Set payload rendering options
    pub fn with_inspect(mut self, inspect: InspectOptions) -> Self {
        self.inspect = inspect;
        self
    }

    /// Request colors, subject to terminal detection
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.set_color_enabled(enabled);
        self
    }

    /// Set the info backend
    pub fn with_info(mut self, backend: impl Backend + 'static) -> Self {
        self.set_backend(Severity::Info, backend);
        self
    }

    /// Set the warn backend
    pub fn with_warn(mut self, backend: impl Backend + 'static) -> Self {
        self.set_backend(Severity::Warn, backend);
        self
    }

    /// Set the error backend
    pub fn with_error(mut self, backend: impl Backend + 'static) -> Self {
        self.set_backend(Severity::Error, backend);
        self
    }

    /// Set one backend for every severity
    pub fn with_backend(mut self, backend: impl Backend + 'static) -> Self {
        self.set_backend_for_all(backend);
        self
    }
}
