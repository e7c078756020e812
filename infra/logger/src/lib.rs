//! # Logger
//!
//! A centralized logging utility for the project.
//! It provides a unified way to configure console and file logging with
//! rotation, non-blocking I/O, and environment-based filtering.
//!
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"arcana=debug,hyper=info"`), in addition to `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use arcana_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

/// A builder for configuring and initializing the global tracing subscriber.
#[must_use = "The builder must be configured before it can be used to initialize the logger."]
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    name: String,
}

impl LoggerBuilder {
    /// Sets the name of the logger. Required; it prefixes rolling log files.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Configures the minimum log level to be emitted.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `arcana=debug,hyper=info`).
    ///
    /// Environment variables still override via `RUST_LOG`; this is a programmatic default.
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables console logging.
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Sets the path to log files, enabling the rolling file layer.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = Some(path.into());
        self
    }

    /// Configures maximum number of log files to keep.
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Configures the log file rotation strategy.
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Enables JSON output for the file layer.
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. **Note:** This handle contains a [`WorkerGuard`]
    /// that must be kept alive for the duration of the program to ensure
    /// that non-blocking logs are flushed correctly.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = if let Some(path) = self.config.path {
            fs::create_dir_all(&path).map_err(|e| LoggerError::Internal {
                message: format!("Failed to create path {}: {e}", path.display()).into(),
            })?;

            let file_appender = RollingFileAppender::builder()
                .rotation(self.config.rotation)
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.config.max_files)
                .build(path)?;

            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);

            let file_layer = layer().with_writer(non_blocking).with_ansi(false);

            let boxed =
                if self.config.json { file_layer.json().boxed() } else { file_layer.boxed() };

            layers.push(boxed);
            Some(g)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// A handle to the initialized logging system.
///
/// This struct holds the background worker guard. Drop this struct only
/// when the application is shutting down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// The name set via [`LoggerBuilder::name`] serves as the primary
    /// identifier for your logs and is used as a prefix for rolling log
    /// files (e.g., `my-app.2023-10-27.log`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use arcana_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("my-app")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
        });
    }

    if config.path.is_some() && config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be at least 1 when file logging is enabled".into(),
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env()
        .map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid RUST_LOG filter: {e}").into(),
        })?;

    if let Some(directives) = &config.env_filter {
        for directive in directives.split(',').filter(|directive| !directive.trim().is_empty()) {
            filter = filter.add_directive(directive.trim().parse().map_err(|e| {
                LoggerError::InvalidConfiguration {
                    message: format!("Invalid filter directive `{directive}`: {e}").into(),
                }
            })?);
        }
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::builder().init().expect_err("empty name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn zero_max_files_with_path_is_rejected() {
        let err = Logger::builder()
            .name("unit")
            .path("logs")
            .max_files(0)
            .init()
            .expect_err("max_files = 0 must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn bogus_filter_directive_is_rejected() {
        let err = Logger::builder()
            .name("unit")
            .env_filter("not a directive!!!")
            .init()
            .expect_err("invalid directive must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn no_layers_is_rejected() {
        let err = Logger::builder()
            .name("unit")
            .console(false)
            .init()
            .expect_err("nothing to log to must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
