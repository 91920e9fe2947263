//! Command-line arguments and the settings they resolve to.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use welcome_logging::LogConfig;
use welcome_slides::{DEFAULT_AUTOPLAY_INTERVAL_MS, SlideCatalog, SlideshowConfig};

use crate::theme::Theme;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "welcome-viewer")]
#[command(about = "Auto-advancing welcome slideshow")]
pub struct Args {
    /// Path to a JSON slide catalog (uses the built-in welcome slides if not provided)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Autoplay period in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_AUTOPLAY_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Start in manual mode instead of autoplaying
    #[arg(long)]
    pub no_autoplay: bool,

    /// Page theme
    #[arg(short, long, value_enum, default_value_t = Theme::Dark)]
    pub theme: Theme,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Also write JSONL logs to this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Disable coloured console logs
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Logging setup selected by the flags.
    pub fn log_config(&self) -> LogConfig {
        LogConfig::new(self.log_level.clone())
            .with_ansi(!self.no_color)
            .with_log_dir(self.log_dir.clone())
    }
}

/// Everything the UI needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    pub catalog: Arc<SlideCatalog>,
    pub config: SlideshowConfig,
    pub theme: Theme,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            catalog: Arc::new(SlideCatalog::builtin()),
            config: SlideshowConfig::default(),
            theme: Theme::default(),
        }
    }
}

impl ViewerSettings {
    /// Loads the catalog and validates the slideshow config.
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let catalog = match &args.catalog {
            Some(path) => SlideCatalog::from_path(path)
                .with_context(|| format!("Failed to load slide catalog from {}", path.display()))?,
            None => SlideCatalog::builtin(),
        };

        let config = SlideshowConfig::default()
            .with_interval(Duration::from_millis(args.interval_ms))
            .with_autoplay(!args.no_autoplay);
        config.validate().context("Invalid --interval-ms")?;

        Ok(Self {
            catalog: Arc::new(catalog),
            config,
            theme: args.theme,
        })
    }
}

/// Global storage for the resolved settings.
static VIEWER_SETTINGS: OnceLock<ViewerSettings> = OnceLock::new();

/// Stores the settings for the UI. Later calls are ignored.
pub fn install(settings: ViewerSettings) {
    VIEWER_SETTINGS.set(settings).ok();
}

/// Returns the installed settings, or defaults if none were installed.
pub fn current() -> ViewerSettings {
    VIEWER_SETTINGS.get().cloned().unwrap_or_default()
}
