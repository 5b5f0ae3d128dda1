//! Serializable configuration subset

use serde::{Deserialize, Serialize};

use super::Config;
use crate::core::LogResult;
use crate::inspect::InspectOptions;
use crate::timestamp::{self, TimestampFn};

/// Built-in timestamp generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampMode {
    /// No timestamp token
    #[default]
    None,
    /// `2021-06-04T11:57:43.175Z`
    Iso8601,
    /// Milliseconds since the Unix epoch
    UnixMillis,
}

impl TimestampMode {
    /// Generator for this mode
    pub fn generator(self) -> Option<TimestampFn> {
        match self {
            Self::None => None,
            Self::Iso8601 => Some(timestamp::iso8601()),
            Self::UnixMillis => Some(timestamp::unix_millis()),
        }
    }
}

/// The part of [`Config`] that can live in a file
///
/// Backends and custom timestamp functions are code, so they stay out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Emit the level token
    pub show_level: bool,
    /// Request level colors (subject to terminal detection)
    pub colors: bool,
    /// Timestamp generator
    pub timestamps: TimestampMode,
    /// Payload rendering options
    pub inspect: InspectOptions,
}

impl Settings {
    /// Parse settings from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> LogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> LogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Config {
    /// Overwrite the serializable fields with `settings`; backends are kept
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.show_level = settings.show_level;
        self.timestamp = settings.timestamps.generator();
        self.inspect = settings.inspect.clone();
        self.set_color_enabled(settings.colors);
    }

    /// Default configuration with `settings` applied
    pub fn from_settings(settings: &Settings) -> Self {
        let mut config = Self::default();
        config.apply_settings(settings);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let settings = Settings::from_json(
            r#"{"show_level": true, "timestamps": "iso8601", "inspect": {"compact": false}}"#,
        )
        .unwrap();

        assert!(settings.show_level);
        assert!(!settings.colors);
        assert_eq!(settings.timestamps, TimestampMode::Iso8601);
        assert!(!settings.inspect.compact);
        assert_eq!(settings.inspect.depth, Some(2));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let error = Settings::from_json(r#"{"timestamps": "sundial"}"#).unwrap_err();
        assert!(error.is_config_error());
    }

    #[test]
    fn test_json_roundtrip_keeps_modes() {
        let settings = Settings {
            timestamps: TimestampMode::UnixMillis,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert!(json.contains("\"unix_millis\""));
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_apply_settings() {
        let settings = Settings {
            show_level: true,
            timestamps: TimestampMode::Iso8601,
            inspect: InspectOptions::unlimited(),
            ..Settings::default()
        };
        let config = Config::from_settings(&settings);

        assert!(config.show_level);
        assert!(config.timestamp.is_some());
        assert_eq!(config.inspect.depth, None);

        let mut config = config;
        config.apply_settings(&Settings::default());
        assert!(config.timestamp.is_none());
    }
}
