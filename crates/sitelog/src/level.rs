//! Severity levels

use serde::{Deserialize, Serialize};

use crate::core::LogError;

/// Log severity
///
/// Determines the label text, the label color and the default output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, written to stdout by default
    Info,
    /// Warning, written to stderr by default
    Warn,
    /// Error, written to stderr by default
    Error,
}

impl Severity {
    /// All severities in ascending order
    pub const ALL: [Self; 3] = [Self::Info, Self::Warn, Self::Error];

    /// Fixed-width label used for the level token
    ///
    /// Padded to five characters so that messages line up.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERR  ",
        }
    }

    /// Lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Matching `tracing` level
    pub const fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(LogError::config(format!("unknown severity '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("info", Severity::Info)]
    #[case("WARN", Severity::Warn)]
    #[case("warning", Severity::Warn)]
    #[case(" error ", Severity::Error)]
    #[case("err", Severity::Error)]
    fn test_parse(#[case] input: &str, #[case] expected: Severity) {
        assert_eq!(input.parse::<Severity>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown() {
        let error = "fatal".parse::<Severity>().unwrap_err();
        assert!(error.is_config_error());
    }

    #[test]
    fn test_labels_are_aligned() {
        for severity in Severity::ALL {
            assert_eq!(severity.label().len(), 5, "{severity}");
        }
    }
}
