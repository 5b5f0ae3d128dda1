//! Token formatting

use crate::backend::{Backend, join_tokens};
use crate::callsite::CallSite;
use crate::color::Palette;
use crate::config::Config;
use crate::inspect::{Value, format_args};
use crate::level::Severity;

/// The four tokens of one log line, in dispatch order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokens {
    /// Timestamp, empty without a generator
    pub timestamp: String,
    /// Level label, empty unless levels are shown
    pub level: String,
    /// `file:line:`
    pub callsite: String,
    /// Rendered payload
    pub payload: String,
}

impl Tokens {
    /// Build the tokens for one call from the current configuration
    pub fn build(config: &Config, severity: Severity, site: &CallSite, args: &[Value]) -> Self {
        Self {
            timestamp: config.timestamp.as_ref().map(|stamp| stamp()).unwrap_or_default(),
            level: level_token(severity, config.show_level, config.palette()),
            callsite: site.token(),
            payload: format_args(args, &config.inspect),
        }
    }

    /// Tokens as string slices, in dispatch order
    pub fn as_array(&self) -> [&str; 4] {
        [
            self.timestamp.as_str(),
            self.level.as_str(),
            self.callsite.as_str(),
            self.payload.as_str(),
        ]
    }

    /// Space-joined line without empty tokens, as the console backends print it
    pub fn line(&self) -> String {
        join_tokens(self.as_array())
    }

    /// Hand the tokens to `backend`
    pub fn dispatch(&self, backend: &dyn Backend) {
        backend.write(&self.timestamp, &self.level, &self.callsite, &self.payload);
    }
}

/// Level token for `severity`
///
/// Empty when levels are hidden. Warn and error are wrapped in the palette's
/// codes; info never is.
pub fn level_token(severity: Severity, show_level: bool, palette: Palette) -> String {
    if !show_level {
        return String::new();
    }
    let color = match severity {
        Severity::Info => "",
        Severity::Warn => palette.warn(),
        Severity::Error => palette.error(),
    };
    if color.is_empty() {
        severity.label().to_string()
    } else {
        format!("{color}{}{}", severity.label(), palette.reset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Severity::Info, false, false, "")]
    #[case(Severity::Warn, false, true, "")]
    #[case(Severity::Info, true, false, "INFO ")]
    #[case(Severity::Warn, true, false, "WARN ")]
    #[case(Severity::Error, true, false, "ERR  ")]
    #[case(Severity::Info, true, true, "INFO ")]
    #[case(Severity::Warn, true, true, "\x1b[33mWARN \x1b[0m")]
    #[case(Severity::Error, true, true, "\x1b[31mERR  \x1b[0m")]
    fn test_level_token(
        #[case] severity: Severity,
        #[case] show_level: bool,
        #[case] colors: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(level_token(severity, show_level, Palette::new(colors)), expected);
    }

    #[test]
    fn test_build_default_config() {
        let site = CallSite::new("/myApp/start.rs", 4);
        let tokens = Tokens::build(
            &Config::default(),
            Severity::Info,
            &site,
            &[Value::from("Hello world!")],
        );
        assert_eq!(tokens.as_array(), ["", "", "/myApp/start.rs:4:", "Hello world!"]);
        assert_eq!(tokens.line(), "/myApp/start.rs:4: Hello world!");
    }

    #[test]
    fn test_build_with_timestamp_and_level() {
        let config = Config::default()
            .with_timestamp(timestamp::fixed("2021-06-04T11:57:43.175Z"))
            .with_show_level(true);
        let tokens = Tokens::build(
            &config,
            Severity::Error,
            &CallSite::new("src/main.rs", 10),
            &[Value::from("failed:"), Value::from(42)],
        );
        assert_eq!(
            tokens.line(),
            "2021-06-04T11:57:43.175Z ERR   src/main.rs:10: failed: 42"
        );
    }

    #[test]
    fn test_timestamp_is_fresh_per_call() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let counter = Arc::new(AtomicUsize::new(0));
        let generator = {
            let counter = Arc::clone(&counter);
            Arc::new(move || counter.fetch_add(1, Ordering::SeqCst).to_string())
        };
        let config = Config::default().with_timestamp(generator);
        let site = CallSite::unknown();

        let first = Tokens::build(&config, Severity::Info, &site, &[]);
        let second = Tokens::build(&config, Severity::Info, &site, &[]);
        assert_eq!(first.timestamp, "0");
        assert_eq!(second.timestamp, "1");
    }
}
