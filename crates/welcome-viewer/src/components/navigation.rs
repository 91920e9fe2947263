//! Previous/next controls, positional indicators and the progress bar.

use dioxus::prelude::*;
use welcome_slides::Indicator;

use super::icons::{Chevron, ChevronDirection};

/// Row of previous control, one dot per slide, next control.
#[component]
pub fn SlideNavigation(
    indicators: Vec<Indicator>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "slide-nav",

            button {
                class: "nav-button",
                title: "Previous slide",
                onclick: move |_| on_previous.call(()),
                Chevron { direction: ChevronDirection::Left }
            }

            div {
                class: "nav-dots",
                for indicator in indicators {
                    button {
                        key: "{indicator.index}",
                        class: if indicator.active { "nav-dot active" } else { "nav-dot" },
                        title: "Slide {indicator.index + 1}",
                        onclick: move |_| on_select.call(indicator.index),
                    }
                }
            }

            button {
                class: "nav-button",
                title: "Next slide",
                onclick: move |_| on_next.call(()),
                Chevron { direction: ChevronDirection::Right }
            }
        }
    }
}

/// Thin bar filled to the given CSS width.
#[component]
pub fn ProgressBar(percent: String, label: String) -> Element {
    rsx! {
        div {
            class: "progress-track",
            title: "{label}",
            "aria-label": "{label}",
            div {
                class: "progress-fill",
                style: "width: {percent}",
            }
        }
    }
}
