//! Logging pipeline with JSON/compact formats
//!
//! Configuration comes from the environment, optionally overridden by CLI
//! verbosity:
//! - `ECH_INSPECT_LOG_LEVEL`: `EnvFilter` directive (default `warn`)
//! - `ECH_INSPECT_LOG_FORMAT`: `compact` (default) or `json`
//!
//! Events go to stderr; stdout is reserved for command output.

use anyhow::Result;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Init guard only: set by the first `init_logging`, so a second call fails
/// before building another subscriber.
static LOGGING_INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_LEVEL: &str = "warn";

/// Logging configuration from environment
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Log level filter
    pub level: String,
}

/// Supported log output formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogFormat {
    /// Human-readable compact format
    Compact,
    /// Machine-readable JSON format
    Json,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("ECH_INSPECT_LOG_FORMAT").ok().as_deref(),
            std::env::var("ECH_INSPECT_LOG_LEVEL").ok(),
        )
    }

    fn from_values(format: Option<&str>, level: Option<String>) -> Self {
        let format = match format.unwrap_or("compact") {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        };
        let level = level
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());
        Self { format, level }
    }

    /// `-v` → debug, `-vv` and above → trace. Zero keeps the env level.
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        match verbose {
            0 => {}
            1 => self.level = "debug".to_string(),
            _ => self.level = "trace".to_string(),
        }
        self
    }
}

/// Install the global subscriber. Calling it twice is an error.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    LOGGING_INIT
        .set(())
        .map_err(|_| anyhow::anyhow!("logging already initialized"))?;

    let env_filter = EnvFilter::try_new(&config.level)
        .map_err(|e| anyhow::anyhow!("invalid log level {:?}: {e}", config.level))?;

    match config.format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter);
            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter);
            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
    }

    tracing::debug!(format = ?config.format, level = %config.level, "logging initialized");
    Ok(())
}
