//! # sitelog - console logging with call sites
//!
//! Every line is prefixed with the `file:line` of the code that logged it,
//! optionally preceded by a timestamp and a severity label.
//!
//! ## Quick Start
//!
//! ```rust
//! use sitelog::prelude::*;
//!
//! sitelog::global().configure(|config| config.show_level = true);
//!
//! info!("Server starting on port", 8080);
//! warn!("cache miss ratio", 0.42);
//! ```
//!
//! prints
//!
//! ```text
//! INFO  src/main.rs:5: Server starting on port 8080
//! WARN  src/main.rs:6: cache miss ratio 0.42
//! ```
//!
//! ## Pieces
//!
//! - [`CallSite`]: where the logging call came from
//! - [`Tokens`]: the four tokens of one line (timestamp, level, call site, payload)
//! - [`Backend`]: where tokens go; stdout/stderr by default
//! - [`Config`] / [`Logger`]: the shared configuration store

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod backend;
pub mod callsite;
pub mod color;
mod config;
mod core;
mod format;
pub mod inspect;
mod level;
mod logger;
mod macros;
pub mod timestamp;

#[cfg(feature = "log-compat")]
mod bridge;

// Public API
pub use backend::{Backend, Capture, Captured, FileBackend, SharedBackend, TracingBackend};
#[cfg(feature = "log-compat")]
pub use bridge::LogBridge;
pub use callsite::CallSite;
pub use config::{Config, Settings, TimestampMode};
pub use crate::core::{LogError, LogIoResultExt, LogResult};
pub use format::{Tokens, level_token};
pub use inspect::{InspectOptions, List, Record, Value};
pub use level::Severity;
pub use logger::{Logger, global};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        CallSite, Config, InspectOptions, Logger, Record, Severity, Value, args, error, global,
        info, log, warn,
    };
}

/// Log at info level through the global logger
#[track_caller]
pub fn info(args: &[Value]) {
    global().info(args);
}

/// Log at warn level through the global logger
#[track_caller]
pub fn warn(args: &[Value]) {
    global().warn(args);
}

/// Log at error level through the global logger
#[track_caller]
pub fn error(args: &[Value]) {
    global().error(args);
}
