//! What the viewer can tune about its log output

use std::path::PathBuf;

/// File name used inside the log directory. Truncated on every start.
pub const LOG_FILE_NAME: &str = "welcome-viewer.jsonl";

/// Logging setup for one process.
///
/// The console always gets human-readable output. When a directory is set, the
/// same events are also written as JSON lines to [`LOG_FILE_NAME`] in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `welcome_slides=debug`
    pub level: String,
    /// Colour the console output
    pub ansi: bool,
    /// Directory for the JSONL file, if any
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new("info")
    }
}

impl LogConfig {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ansi: true,
            log_dir: None,
        }
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Also write JSON lines under `dir`
    pub fn with_log_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.log_dir = dir;
        self
    }

    /// Full path of the JSONL file, when file output is on
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_dir.as_deref().map(|dir| dir.join(LOG_FILE_NAME))
    }
}
