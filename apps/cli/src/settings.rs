//! Layered CLI settings: defaults, then `stockroom.toml`, then `STOCKROOM_*`
//! environment variables, then flags.

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use stockroom_validator::ValidationConfig;

use crate::cli::{Cli, OutputFormat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputFormat,
    pub log: stockroom_log::Config,
    pub validation: ValidationConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            log: stockroom_log::Config {
                level: "warn".to_string(),
                ..stockroom_log::Config::default()
            },
            validation: ValidationConfig::default(),
        }
    }
}

impl Settings {
    /// Loads settings for a parsed command line.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut settings = Self::figment(&cli.config)
            .extract::<Self>()
            .with_context(|| format!("failed to load settings from {}", cli.config.display()))?;

        settings.apply_log_env(|key| std::env::var(key).ok());

        if let Some(format) = cli.format {
            settings.output = format;
        }
        match cli.verbose {
            0 => {}
            1 => settings.log.level = "debug".to_string(),
            _ => settings.log.level = "trace".to_string(),
        }
        Ok(settings)
    }

    /// Applies the logging variables that are set. `STOCKROOM_LOG` and
    /// `RUST_LOG` carry a bare filter string, so they bypass figment.
    fn apply_log_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_set = |key: &str| lookup(key).is_some();
        let (has_level, has_format, has_colors) = (
            is_set("STOCKROOM_LOG") || is_set("RUST_LOG"),
            is_set("STOCKROOM_LOG_FORMAT"),
            is_set("STOCKROOM_LOG_COLORS"),
        );
        let from_env = stockroom_log::Config::from_lookup(&lookup);

        if has_level {
            self.log.level = from_env.level;
        }
        if has_format {
            self.log.format = from_env.format;
        }
        if has_colors {
            self.log.display.colors = from_env.display.colors;
        }
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(
                Env::prefixed("STOCKROOM_")
                    .ignore(&["log", "log_format", "log_colors", "config"])
                    .split("__"),
            )
    }
}
