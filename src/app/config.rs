use crate::domain::Level;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Verbosity of the crate's own diagnostics (handler failures, registration).
///
/// This is distinct from `Level`, which tags the records the logger dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticsLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<DiagnosticsLevel> for tracing::Level {
    fn from(level: DiagnosticsLevel) -> Self {
        match level {
            DiagnosticsLevel::Error => tracing::Level::ERROR,
            DiagnosticsLevel::Warn => tracing::Level::WARN,
            DiagnosticsLevel::Info => tracing::Level::INFO,
            DiagnosticsLevel::Debug => tracing::Level::DEBUG,
            DiagnosticsLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Line layout written by the stream handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{timestamp} {channel}.{LEVEL}: {message}`
    #[default]
    Line,
    /// One JSON object per line
    Json,
}

#[derive(Parser, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
#[serde(default)]
pub struct Config {
    /// Channel name stamped on every record
    #[arg(long, env = "RASK_LOGGER_CHANNEL", default_value = "my-app")]
    pub channel: String,

    /// Minimum level admitted by the stdout handler
    #[arg(long, env = "RASK_LOGGER_MIN_LEVEL", default_value = "debug")]
    pub min_level: Level,

    /// Output format of the stdout handler
    #[arg(long, env = "RASK_LOGGER_FORMAT", default_value = "line")]
    pub format: OutputFormat,

    /// Verbosity of internal diagnostics written to stderr
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub diagnostics_level: DiagnosticsLevel,

    /// Configuration file path (optional, TOML)
    #[arg(long, env = "RASK_LOGGER_CONFIG")]
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: "my-app".to_string(),
            min_level: Level::Debug,
            format: OutputFormat::Line,
            diagnostics_level: DiagnosticsLevel::Warn,
            config_file: None,
        }
    }
}

impl Config {
    /// Parse CLI arguments (falling back to environment variables). When a
    /// config file is named, its contents replace the parsed values.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::parse_from(args);
        if let Some(path) = &config.config_file {
            let mut from_file = Self::from_file(path)?;
            from_file.config_file = Some(path.clone());
            return Ok(from_file);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Channel name cannot be empty".to_string(),
            ));
        }

        // A control character would break the one-record-per-line layout.
        if self.channel.chars().any(char::is_control) {
            return Err(ConfigError::InvalidConfig(format!(
                "Channel name contains control characters: {:?}",
                self.channel
            )));
        }

        Ok(())
    }
}
