//! Configuration resolved from flags and environment.
//!
//! Handles:
//! - Output format (`--format` / `TALLY_FORMAT`)
//! - Log level (`--log-level` / `TALLY_LOG_LEVEL`, overridden by `RUST_LOG`)

use anyhow::Result;

use crate::error::CliError;
use crate::output::OutputFormat;

/// Default log level when neither flag nor environment sets one.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted by `--log-level`.
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output format for command results.
    pub format: OutputFormat,

    /// Log level (off, error, warn, info, debug, trace).
    pub log_level: String,
}

impl Config {
    /// Resolve configuration from optional flag values.
    ///
    /// clap has already folded the `TALLY_*` environment variables into
    /// these values.
    pub fn resolve(format: Option<&str>, log_level: Option<&str>) -> Result<Self> {
        let format = match format {
            None => OutputFormat::default(),
            Some(raw) => raw.parse()?,
        };

        let log_level = match log_level {
            None => DEFAULT_LOG_LEVEL.to_string(),
            Some(raw) => {
                let level = raw.trim().to_ascii_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(CliError::InvalidLogLevel(raw.to_string()).into());
                }
                level
            }
        };

        Ok(Self { format, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::resolve(None, None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::resolve(Some("json"), Some("DEBUG")).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(Config::resolve(Some("yaml"), None).is_err());
        assert!(Config::resolve(None, Some("loud")).is_err());
    }
}
