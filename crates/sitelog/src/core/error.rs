//! Error handling for sitelog

/// Result type for fallible sitelog operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for sitelog operations
///
/// Only setup paths return this. Dispatching a log line never produces an
/// error: failures there degrade the output instead.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid value for an environment variable
    #[error("Invalid value '{value}' for {key}")]
    Env {
        /// Variable name
        key: String,
        /// Offending value
        value: String,
    },

    /// IO error with the operation that triggered it
    #[error("{context}: {source}")]
    Io {
        /// What was being done
        context: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be (de)serialized
    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl LogError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an environment variable error
    pub fn env(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Env {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether the error was caused by caller-supplied configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Env { .. } | Self::Settings(_))
    }
}

impl From<std::io::Error> for LogError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            context: "IO error".to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = LogError::config("depth must be positive");
        assert!(error.is_config_error());
        assert_eq!(error.to_string(), "Configuration error: depth must be positive");

        let error = LogError::env("SITELOG_DEPTH", "deep");
        assert!(error.is_config_error());
        assert_eq!(error.to_string(), "Invalid value 'deep' for SITELOG_DEPTH");

        let error = LogError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!error.is_config_error());
        assert_eq!(error.to_string(), "IO error: gone");
    }
}
