pub mod config;
pub mod tracing;

pub use config::{Config, ConfigError, DiagnosticsLevel, OutputFormat};

use crate::domain::{DispatchError, Level};
use crate::formatter::JsonFormatter;
use crate::handler::StreamHandler;
use crate::logger::Logger;
use anyhow::Context;
use std::io::Write;
use std::sync::Arc;

/// Build a logger for `config` with a single stream handler over `sink`.
pub fn build_logger<W>(config: &Config, sink: W) -> Logger
where
    W: Write + Send + 'static,
{
    let handler = StreamHandler::new(sink, config.min_level);
    let logger = Logger::new(config.channel.clone());
    match config.format {
        OutputFormat::Line => logger.push_handler(Arc::new(handler)),
        OutputFormat::Json => logger.push_handler(Arc::new(handler.with_formatter(JsonFormatter))),
    };
    logger
}

/// The demo sequence: one message at each of four increasing levels.
pub fn emit_sample(logger: &Logger) -> Result<(), DispatchError> {
    logger.debug("This is a debug message")?;
    logger.info("Application started successfully")?;
    logger.warning("This is a warning message")?;
    logger.error("An error occurred")?;
    Ok(())
}

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub fn run(config: &Config) -> anyhow::Result<()> {
    let logger = build_logger(config, std::io::stdout());
    ::tracing::debug!(
        channel = %config.channel,
        min_level = %config.min_level,
        format = ?config.format,
        "Logger configured"
    );

    emit_sample(&logger).context("failed to write sample records")?;

    if config.min_level > Level::Error {
        ::tracing::info!(min_level = %config.min_level, "All sample records were below the threshold");
    }

    println!("\nrask-logger example completed successfully!");
    Ok(())
}

// Main entry point for the binary
pub fn main() -> anyhow::Result<()> {
    let config = Config::from_args(std::env::args()).context("invalid configuration")?;

    if let Err(e) = tracing::init_tracing(config.diagnostics_level) {
        eprintln!("Warning: diagnostics subscriber not installed: {e}");
    }

    run(&config)
}
