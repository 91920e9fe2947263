//! Root application component for the welcome viewer.

use dioxus::prelude::*;

use crate::settings;
use crate::theme::{ThemedRoot, CURRENT_THEME};

use super::WelcomeSlides;

/// Root application component.
#[component]
pub fn App() -> Element {
    let settings = use_hook(settings::current);

    // Set theme inside component where Dioxus runtime is available
    use_hook(|| {
        *CURRENT_THEME.write() = settings.theme;
    });

    rsx! {
        ThemedRoot {
            main {
                class: "welcome-viewer",

                WelcomeSlides {
                    catalog: settings.catalog.clone(),
                    config: settings.config,
                    on_get_started: move |_| {
                        tracing::info!("Onboarding complete, closing welcome viewer");
                        dioxus::desktop::window().close();
                    },
                }
            }
        }
    }
}
