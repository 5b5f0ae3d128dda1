//! Payload inspection options

use serde::{Deserialize, Serialize};

/// Options controlling how payload values are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectOptions {
    /// Render lists and records on a single line
    pub compact: bool,
    /// Deepest nesting level that is expanded; `None` expands everything
    pub depth: Option<usize>,
    /// Number of list items shown before truncating; `None` shows all
    pub max_list_len: Option<usize>,
    /// Render record keys in sorted order instead of insertion order
    pub sort_keys: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            compact: true,
            depth: Some(2),
            max_list_len: Some(100),
            sort_keys: false,
        }
    }
}

impl InspectOptions {
    /// Options with unlimited depth and list length
    pub fn unlimited() -> Self {
        Self {
            depth: None,
            max_list_len: None,
            ..Self::default()
        }
    }

    /// Set compact rendering
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Set the depth limit
    pub fn depth(mut self, depth: Option<usize>) -> Self {
        self.depth = depth;
        self
    }

    /// Set the list length limit
    pub fn max_list_len(mut self, max: Option<usize>) -> Self {
        self.max_list_len = max;
        self
    }

    /// Set key sorting
    pub fn sort_keys(mut self, sort: bool) -> Self {
        self.sort_keys = sort;
        self
    }
}
