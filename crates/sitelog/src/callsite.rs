//! Call-site resolution
//!
//! Every public entry point of the crate is `#[track_caller]`, and so is
//! [`CallSite::caller`]. The compiler forwards the location through tracked
//! frames, so the location seen here is the first untracked frame: the code
//! that called the logging function. Macro invocations report the line on
//! which the macro starts.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// File used when no location is available
pub const UNKNOWN_FILE: &str = "<unknown>";

/// Source location of a logging call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: Cow<'static, str>,
    line: u32,
}

impl CallSite {
    /// Location of the code that called the current tracked function
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Build a call site from explicit parts
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Fallback call site, rendered as `<unknown>:0`
    pub const fn unknown() -> Self {
        Self {
            file: Cow::Borrowed(UNKNOWN_FILE),
            line: 0,
        }
    }

    /// Build a call site from optional parts, falling back to [`CallSite::unknown`]
    ///
    /// A missing line with a known file keeps the file and reports line 0.
    pub fn from_parts(file: Option<&str>, line: Option<u32>) -> Self {
        match file {
            Some(file) if !file.is_empty() => Self::new(file.to_owned(), line.unwrap_or(0)),
            _ => Self::unknown(),
        }
    }

    /// Source file path as seen by the compiler
    pub fn file(&self) -> &str {
        &self.file
    }

    /// 1-based line number, 0 when unknown
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Whether this is the fallback location
    pub fn is_unknown(&self) -> bool {
        self.line == 0 && self.file == UNKNOWN_FILE
    }

    /// The call-site token: `file:line:`
    pub fn token(&self) -> String {
        format!("{self}:")
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: Cow::Borrowed(location.file()),
            line: location.line(),
        }
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Resolve the caller's location as a `file:line` string
#[track_caller]
pub fn here() -> String {
    CallSite::caller().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn tracked_entry() -> CallSite {
        CallSite::caller()
    }

    #[test]
    fn test_caller_is_this_line() {
        let (site, line) = (CallSite::caller(), line!());
        assert_eq!(site.file(), file!());
        assert_eq!(site.line(), line);
    }

    #[test]
    fn test_tracked_entry_skips_itself() {
        let (site, line) = (tracked_entry(), line!());
        assert_eq!(site, CallSite::new(file!(), line));
    }

    #[test]
    fn test_here_format() {
        let (site, line) = (here(), line!());
        assert_eq!(site, format!("{}:{line}", file!()));
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(CallSite::unknown().to_string(), "<unknown>:0");
        assert_eq!(CallSite::unknown().token(), "<unknown>:0:");
        assert!(CallSite::from_parts(None, Some(12)).is_unknown());
        assert!(CallSite::from_parts(Some(""), Some(12)).is_unknown());
        assert_eq!(CallSite::from_parts(Some("src/main.rs"), None).to_string(), "src/main.rs:0");
        assert_eq!(CallSite::from_parts(Some("src/main.rs"), Some(7)).token(), "src/main.rs:7:");
    }
}
