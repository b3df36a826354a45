//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

impl Config {
    /// Create configuration from environment variables
    ///
    /// `STOCKROOM_LOG` wins over `RUST_LOG`; `STOCKROOM_LOG_FORMAT` selects
    /// the format (unknown values fall back to compact) and
    /// `STOCKROOM_LOG_COLORS=0` disables colors.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup("STOCKROOM_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup("STOCKROOM_LOG_FORMAT") {
            config.format = format.parse().unwrap_or(Format::Compact);
        }

        if let Some(v) = lookup("STOCKROOM_LOG_COLORS") {
            config.display.colors = v != "0" && v != "false";
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    #[case(&[("STOCKROOM_LOG", "stockroom_validator=trace"), ("RUST_LOG", "warn")], "stockroom_validator=trace")]
    #[case(&[("RUST_LOG", "warn")], "warn")]
    #[case(&[], "info")]
    fn test_level_lookup(#[case] vars: &[(&str, &str)], #[case] expected: &str) {
        assert_eq!(Config::from_lookup(lookup(vars)).level, expected);
    }

    #[rstest]
    #[case("0", false)]
    #[case("false", false)]
    #[case("1", true)]
    #[case("true", true)]
    fn test_colors_lookup(#[case] value: &str, #[case] expected: bool) {
        let config = Config::from_lookup(lookup(&[("STOCKROOM_LOG_COLORS", value)]));
        assert_eq!(config.display.colors, expected);
    }

    #[test]
    fn test_format_and_colors() {
        let config = Config::from_lookup(lookup(&[
            ("STOCKROOM_LOG_FORMAT", "json"),
            ("STOCKROOM_LOG_COLORS", "0"),
        ]));
        assert_eq!(config.format, Format::Json);
        assert!(!config.display.colors);

        let config = Config::from_lookup(lookup(&[("STOCKROOM_LOG_FORMAT", "logfmt")]));
        assert_eq!(config.format, Format::Compact);
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            Config::development().display,
            DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            }
        );
        assert_eq!(Config::development().format, Format::Pretty);
        assert_eq!(Config::development().level, "debug");
        assert_eq!(Config::production().format, Format::Json);
        assert!(!Config::production().display.colors);
    }
}
