//! The welcome slideshow component.
//!
//! Mounts a [`Slideshow`] when the component is created and tears it down when
//! the component is dropped. The slideshow's state broadcast is mirrored into a
//! signal, so autoplay ticks and user navigation both re-render through the
//! same path.

use std::sync::Arc;

use dioxus::prelude::*;
use welcome_slides::{PlaybackMode, SlideCatalog, Slideshow, SlideshowConfig, SlideshowState, SlideshowView};

use super::navigation::{ProgressBar, SlideNavigation};
use super::slide_card::SlideCard;

/// A user navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigate {
    Previous,
    Next,
    GoTo(usize),
}

/// Mounts a slideshow, falling back to the default timing if `config` is invalid.
fn mount_slideshow(catalog: Arc<SlideCatalog>, config: SlideshowConfig) -> Option<Arc<Slideshow>> {
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid slideshow config, using default interval");
            SlideshowConfig::default().with_autoplay(config.autoplay)
        }
    };

    match Slideshow::mount(catalog, config) {
        Ok(slideshow) => Some(Arc::new(slideshow)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to mount slideshow");
            None
        }
    }
}

/// Applies a navigation request and stores the resulting state.
fn navigate(
    handle: Signal<Option<Arc<Slideshow>>>,
    mut state: Signal<SlideshowState>,
    action: Navigate,
) {
    let Some(slideshow) = handle.peek().clone() else {
        return;
    };

    let next_state = match action {
        Navigate::Previous => slideshow.previous(),
        Navigate::Next => slideshow.next(),
        Navigate::GoTo(index) => match slideshow.go_to(index) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring navigation request");
                return;
            }
        },
    };
    state.set(next_state);
}

/// Auto-advancing onboarding slideshow.
///
/// `on_get_started` is invoked by the call-to-action button; what it does is
/// up to the host. `catalog` and `config` are read once at mount.
#[component]
pub fn WelcomeSlides(
    catalog: Arc<SlideCatalog>,
    config: SlideshowConfig,
    on_get_started: EventHandler<()>,
) -> Element {
    let mount_catalog = catalog.clone();
    let handle: Signal<Option<Arc<Slideshow>>> =
        use_signal(move || mount_slideshow(mount_catalog, config));

    let mut state = use_signal(move || {
        handle
            .peek()
            .as_ref()
            .map(|s| s.state())
            .unwrap_or_else(|| SlideshowState {
                current_slide: 0,
                is_autoplaying: false,
            })
    });

    // Mirror autoplay ticks into the signal
    use_future(move || {
        let updates = handle.peek().as_ref().map(|s| s.subscribe());
        async move {
            let Some(mut updates) = updates else {
                return;
            };
            while updates.changed().await.is_ok() {
                let latest = *updates.borrow_and_update();
                if *state.peek() != latest {
                    state.set(latest);
                }
            }
        }
    });

    // Release the timer on unmount
    use_drop(move || {
        if let Some(slideshow) = handle.peek().as_ref() {
            slideshow.teardown();
        }
    });

    // Render from the catalog the slideshow was mounted with, so the dots
    // always match the indices `go_to` accepts
    let catalog = handle
        .peek()
        .as_ref()
        .map(|s| s.catalog())
        .unwrap_or(catalog);
    let current = *state.read();
    let view = SlideshowView::new(&catalog, current);
    let slide = view.slide.clone();
    let indicators = view.indicators.clone();
    let percent = view.progress_percent();
    let label = view.position_label();
    let mode = match current.mode() {
        PlaybackMode::Autoplaying => "autoplay",
        PlaybackMode::Manual => "manual",
    };

    rsx! {
        div {
            class: "welcome-slides",
            "data-mode": mode,

            div {
                class: "slide-stage",

                // Background gradient
                div {
                    class: "slide-backdrop {slide.theme.css_class()}",
                }

                SlideCard {
                    slide: slide.clone(),

                    SlideNavigation {
                        indicators,
                        on_previous: move |_| navigate(handle, state, Navigate::Previous),
                        on_next: move |_| navigate(handle, state, Navigate::Next),
                        on_select: move |index: usize| navigate(handle, state, Navigate::GoTo(index)),
                    }

                    div {
                        class: "slide-cta",
                        button {
                            class: "cta-button",
                            onclick: move |_| on_get_started.call(()),
                            "Get Started"
                        }
                    }
                }

                ProgressBar { percent, label }
            }
        }
    }
}
