//! In-memory backend

use std::sync::Arc;

use parking_lot::Mutex;

use super::{Backend, join_tokens};

/// One dispatched log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// Timestamp token
    pub timestamp: String,
    /// Level token
    pub level: String,
    /// Call-site token (`file:line:`)
    pub callsite: String,
    /// Rendered payload
    pub payload: String,
}

impl Captured {
    /// Tokens in dispatch order
    pub fn tokens(&self) -> [&str; 4] {
        [
            self.timestamp.as_str(),
            self.level.as_str(),
            self.callsite.as_str(),
            self.payload.as_str(),
        ]
    }

    /// The line a console backend would print
    pub fn line(&self) -> String {
        join_tokens(self.tokens())
    }
}

/// Backend that records every line it receives
///
/// Clones share the same buffer, so one handle can be installed in a
/// [`crate::Config`] while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    lines: Arc<Mutex<Vec<Captured>>>,
}

impl Capture {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything captured so far
    pub fn lines(&self) -> Vec<Captured> {
        self.lines.lock().clone()
    }

    /// Remove and return everything captured so far
    pub fn take(&self) -> Vec<Captured> {
        std::mem::take(&mut *self.lines.lock())
    }

    /// Most recent line
    pub fn last(&self) -> Option<Captured> {
        self.lines.lock().last().cloned()
    }

    /// Number of captured lines
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Whether nothing was captured
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Backend for Capture {
    fn write(&self, timestamp: &str, level: &str, callsite: &str, payload: &str) {
        self.lines.lock().push(Captured {
            timestamp: timestamp.to_owned(),
            level: level.to_owned(),
            callsite: callsite.to_owned(),
            payload: payload.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let capture = Capture::new();
        let installed = capture.clone();
        installed.write("", "", "a.rs:1:", "one");
        installed.write("", "", "a.rs:2:", "two");

        assert_eq!(capture.len(), 2);
        assert_eq!(capture.last().unwrap().line(), "a.rs:2: two");
        assert_eq!(capture.take().len(), 2);
        assert!(installed.is_empty());
    }
}
