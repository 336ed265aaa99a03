//! Structured logging setup using tracing
//!
//! Console output is always on. A JSON file layer with daily rotation can
//! be added through [`LoggingOptions::directory`].

use crate::domain::{ConfigError, Result};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Where log output goes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingOptions {
    /// Emit console output as JSON instead of human readable lines
    pub json: bool,

    /// Directory for the rotating `tierconf.log` file, disabled when `None`
    pub directory: Option<PathBuf>,
}

/// Guard that must be kept alive for the duration of the program
/// to ensure logs are flushed properly
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }
}

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `log_level_str` when set.
///
/// # Example
///
/// ```no_run
/// use tierconf::logging::{init_logging, LoggingOptions};
///
/// let _guard = init_logging("info", &LoggingOptions::default())
///     .expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level_str: &str, options: &LoggingOptions) -> Result<LoggingGuard> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tierconf={log_level}")));

    let mut layers = Vec::new();

    // Logs go to stderr so command output on stdout stays clean
    let console_layer = if options.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(env_filter.clone())
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(env_filter.clone())
            .boxed()
    };
    layers.push(console_layer);

    let file_guard = match &options.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory).map_err(|e| {
                ConfigError::Configuration(format!(
                    "Failed to create log directory {}: {}",
                    directory.display(),
                    e
                ))
            })?;

            let file_appender = RollingFileAppender::new(Rotation::DAILY, directory, "tierconf.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_writer(non_blocking)
                .with_filter(env_filter);

            layers.push(file_layer.boxed());
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry().with(layers).init();

    tracing::debug!(
        level = %log_level,
        file_logging = options.directory.is_some(),
        "Logging initialized"
    );

    Ok(LoggingGuard::new(file_guard))
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigError::Configuration(format!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ))),
    }
}
