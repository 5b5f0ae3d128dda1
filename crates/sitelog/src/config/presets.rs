//! Configuration presets for common scenarios

use super::{Config, Settings, TimestampMode};
use crate::core::{LogError, LogResult};
use crate::inspect::InspectOptions;

impl Config {
    /// Create configuration from environment variables
    ///
    /// Invalid values are reported through `tracing` and ignored. See
    /// [`Config::try_from_env`] for the variables read.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Strict variant of [`Config::from_env`]
    ///
    /// Reads:
    /// - `SITELOG_SHOW_LEVEL`: flag
    /// - `SITELOG_TIME`: `iso8601`, `unix_millis`, or a flag (`1` = ISO-8601)
    /// - `SITELOG_COLORS`: flag, subject to terminal detection
    /// - `SITELOG_DEPTH`: number or `none`
    /// - `SITELOG_COMPACT`: flag
    /// - `NO_COLOR`: any non-empty value disables colors
    pub fn try_from_env() -> LogResult<Self> {
        Self::try_from_lookup(|key| std::env::var(key).ok())
    }

    /// [`Config::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_settings(&settings_from_lookup(&lookup, false).unwrap_or_default())
    }

    /// [`Config::try_from_env`] with a custom variable source
    pub fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> LogResult<Self> {
        Ok(Self::from_settings(&settings_from_lookup(&lookup, true)?))
    }

    /// Development configuration (levels, colors, ISO timestamps, multi-line payloads)
    pub fn development() -> Self {
        Self::from_settings(&Settings {
            show_level: true,
            colors: true,
            timestamps: TimestampMode::Iso8601,
            inspect: InspectOptions::default().compact(false),
        })
    }

    /// Production configuration (levels, ISO timestamps, no colors)
    pub fn production() -> Self {
        Self::from_settings(&Settings {
            show_level: true,
            colors: false,
            timestamps: TimestampMode::Iso8601,
            inspect: InspectOptions::default(),
        })
    }

    /// Test configuration (no timestamps, no colors, levels shown)
    #[cfg(test)]
    pub fn test() -> Self {
        Self::from_settings(&Settings {
            show_level: true,
            ..Settings::default()
        })
    }
}

/// Read settings; with `strict` unset, bad values keep their defaults
fn settings_from_lookup(
    lookup: &impl Fn(&str) -> Option<String>,
    strict: bool,
) -> LogResult<Settings> {
    let mut settings = Settings::default();

    // Lenient mode drops the error after logging it
    let check = |result: LogResult<()>| -> LogResult<()> {
        match result {
            Err(error) if !strict => {
                tracing::warn!(%error, "ignoring invalid sitelog environment variable");
                Ok(())
            }
            other => other,
        }
    };

    if let Some(value) = lookup("SITELOG_SHOW_LEVEL") {
        check(parse_flag("SITELOG_SHOW_LEVEL", &value).map(|v| settings.show_level = v))?;
    }
    if let Some(value) = lookup("SITELOG_TIME") {
        check(parse_timestamp_mode(&value).map(|v| settings.timestamps = v))?;
    }
    if let Some(value) = lookup("SITELOG_COLORS") {
        check(parse_flag("SITELOG_COLORS", &value).map(|v| settings.colors = v))?;
    }
    if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        settings.colors = false;
    }
    if let Some(value) = lookup("SITELOG_DEPTH") {
        check(parse_depth(&value).map(|v| settings.inspect.depth = v))?;
    }
    if let Some(value) = lookup("SITELOG_COMPACT") {
        check(parse_flag("SITELOG_COMPACT", &value).map(|v| settings.inspect.compact = v))?;
    }

    Ok(settings)
}

fn parse_flag(key: &str, value: &str) -> LogResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(LogError::env(key, value)),
    }
}

fn parse_timestamp_mode(value: &str) -> LogResult<TimestampMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "iso8601" | "iso" => Ok(TimestampMode::Iso8601),
        "unix_millis" | "unix" | "millis" => Ok(TimestampMode::UnixMillis),
        "none" => Ok(TimestampMode::None),
        _ => parse_flag("SITELOG_TIME", value).map(|on| {
            if on {
                TimestampMode::Iso8601
            } else {
                TimestampMode::None
            }
        }),
    }
}

fn parse_depth(value: &str) -> LogResult<Option<usize>> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("unlimited") {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| LogError::env("SITELOG_DEPTH", value))
}
