//! Logging setup for the welcome slideshow
//!
//! Human-readable console output plus an optional JSON-lines file, both behind
//! one `EnvFilter`. `RUST_LOG` always wins over the configured level.
//!
//! ```ignore
//! use welcome_logging::{LogConfig, WelcomeSubscriberBuilder};
//!
//! let _guard = WelcomeSubscriberBuilder::new()
//!     .with_config(LogConfig::new("debug").with_log_dir(Some("logs".into())))
//!     .init();
//! ```

pub mod config;

pub use config::{LogConfig, LOG_FILE_NAME};

use std::fs::{self, File};
use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log file: {0}")]
    File(#[from] std::io::Error),

    #[error("Global subscriber already set: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber from a [`LogConfig`].
#[derive(Debug, Default)]
pub struct WelcomeSubscriberBuilder {
    config: LogConfig,
}

impl WelcomeSubscriberBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Initialize the subscriber globally
    ///
    /// Keep the returned guard alive while the program runs, or buffered file
    /// lines are lost. Failures are reported on stderr and leave logging off.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: Failed to initialize logging: {}", e);
                None
            }
        }
    }

    pub fn try_init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.level));

        let console_layer = tracing_subscriber::fmt::layer()
            .with_ansi(self.config.ansi)
            .with_target(true);

        let (file_layer, guard) = match self.config.log_file() {
            Some(path) => {
                let (writer, guard) = jsonl_writer(&path)?;
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(writer)
                    .boxed();
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()?;

        Ok(guard)
    }
}

/// Opens `path` fresh and wraps it in a non-blocking writer.
fn jsonl_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(path)?;
    Ok(tracing_appender::non_blocking(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = WelcomeSubscriberBuilder::new();
        assert_eq!(builder.config, LogConfig::default());
    }

    #[test]
    fn test_builder_with_config() {
        let builder = WelcomeSubscriberBuilder::new().with_config(LogConfig::new("trace"));
        assert_eq!(builder.config.level, "trace");
    }

    #[test]
    fn test_jsonl_writer_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(LOG_FILE_NAME), "stale line\n").unwrap();

        let (_writer, _guard) = jsonl_writer(&nested.join(LOG_FILE_NAME)).unwrap();
        let contents = fs::read_to_string(nested.join(LOG_FILE_NAME)).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_jsonl_writer_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig::default().with_log_dir(Some(dir.path().join("a").join("b")));
        let path = config.log_file().unwrap();

        let (_writer, _guard) = jsonl_writer(&path).unwrap();
        assert!(path.exists());
    }
}
