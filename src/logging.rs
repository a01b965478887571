//! Structured logging for the plugin.
//!
//! protoc reads the serialized response from the plugin's stdout, so every
//! log line goes to **stderr**. protoc relays stderr to the user verbatim.
//!
//! ## Environment Variables
//!
//! - `GRPC_BROWSER_LOG_LEVEL` - `trace`, `debug`, `info`, `warn` (default), `error`
//! - `GRPC_BROWSER_LOG_FORMAT` - `pretty` (default) or `json`
//! - `GRPC_BROWSER_LOG_INCLUDE_LOCATION` - `true` to add file:line to events
//! - `RUST_LOG` - full `EnvFilter` directives, overrides the level above

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: compact human output or one JSON object per event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level used when `RUST_LOG` is not set
    pub log_level: String,
    pub format: LogFormat,
    /// Include file:line location
    pub include_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: env::var("GRPC_BROWSER_LOG_LEVEL").unwrap_or(defaults.log_level),
            format: env::var("GRPC_BROWSER_LOG_FORMAT")
                .map(|s| LogFormat::parse(&s))
                .unwrap_or(defaults.format),
            include_location: env::var("GRPC_BROWSER_LOG_INCLUDE_LOCATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.include_location),
        }
    }

    fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    }
}

/// Install the global subscriber described by `config`
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level().as_str()));

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(false)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("invalid"), LogFormat::Pretty); // Default
    }

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.include_location);
    }

    #[test]
    fn test_level_parse() {
        let mut config = LogConfig::default();
        for (name, level) in [
            ("trace", Level::TRACE),
            ("DEBUG", Level::DEBUG),
            ("info", Level::INFO),
            ("error", Level::ERROR),
            ("bogus", Level::WARN),
        ] {
            config.log_level = name.to_string();
            assert_eq!(config.level(), level);
        }
    }
}
