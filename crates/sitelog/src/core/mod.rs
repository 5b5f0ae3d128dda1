//! Core components shared by the rest of the crate.
//!
//! ### [`error`] - Error handling
//! [`LogError`] for the few fallible operations (opening a file backend,
//! reading configuration). Logging calls themselves never fail.
//!
//! ### [`result`] - Result types
//! [`LogResult`] alias and extension traits for attaching context to IO errors.

pub mod error;
pub mod result;

pub use error::{LogError, LogResult};
pub use result::LogIoResultExt;
