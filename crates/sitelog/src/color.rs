//! ANSI color codes for level labels

use std::io::IsTerminal;

/// Yellow foreground
pub const YELLOW: &str = "\x1b[33m";
/// Red foreground
pub const RED: &str = "\x1b[31m";
/// Reset all attributes
pub const RESET: &str = "\x1b[0m";

/// Escape codes used around warn and error labels
///
/// Either all three codes are set or all three are empty; "colors enabled"
/// is derived from the reset code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    warn: &'static str,
    error: &'static str,
    reset: &'static str,
}

impl Palette {
    /// Palette with no escape codes
    pub const PLAIN: Self = Self {
        warn: "",
        error: "",
        reset: "",
    };

    /// Palette with yellow warnings and red errors
    pub const ANSI: Self = Self {
        warn: YELLOW,
        error: RED,
        reset: RESET,
    };

    /// Palette for the requested state
    pub const fn new(enabled: bool) -> Self {
        if enabled { Self::ANSI } else { Self::PLAIN }
    }

    /// Whether colors are on
    pub const fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Code emitted before warn labels
    pub const fn warn(&self) -> &'static str {
        self.warn
    }

    /// Code emitted before error labels
    pub const fn error(&self) -> &'static str {
        self.error
    }

    /// Code emitted after colored labels
    pub const fn reset(&self) -> &'static str {
        self.reset
    }
}

/// Whether colored output can be shown
///
/// Requires the `ansi` feature and a terminal on stderr.
pub fn terminal_supports_color() -> bool {
    cfg!(feature = "ansi") && std::io::stderr().is_terminal()
}

/// Strip ANSI CSI sequences (`ESC [ ... letter`) from a string
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
