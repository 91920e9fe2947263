//! Entry point for the welcome viewer.

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use welcome_viewer::components::App;
use welcome_viewer::settings::{self, Args, ViewerSettings};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _log_guard = welcome_logging::WelcomeSubscriberBuilder::new()
        .with_config(args.log_config())
        .init();

    let settings = ViewerSettings::from_args(&args)?;
    tracing::info!(
        slides = settings.catalog.len(),
        autoplay = settings.config.autoplay,
        interval_ms = settings.config.autoplay_interval_ms,
        theme = settings.theme.display_name(),
        "Starting welcome viewer"
    );
    settings::install(settings);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Welcome")
                        .with_inner_size(LogicalSize::new(1100.0, 780.0)),
                )
                .with_custom_head(format!("<style>{}</style>", STYLES_CSS)),
        )
        .launch(App);

    Ok(())
}
