//! Card showing the content of the visible slide.

use dioxus::prelude::*;
use welcome_slides::Slide;

use super::icons::SlideIconGlyph;

#[component]
pub fn SlideCard(slide: Slide, children: Element) -> Element {
    rsx! {
        div {
            class: "slide-card",
            "data-slide-id": "{slide.id}",

            div {
                class: "slide-icon-wrap",
                div {
                    class: "slide-icon-badge",
                    SlideIconGlyph { icon: slide.icon, class: "slide-icon".to_string() }
                }
            }

            div {
                class: "slide-headings",
                h1 {
                    class: "slide-title",
                    "{slide.title}"
                }
                h2 {
                    class: "slide-subtitle",
                    "{slide.subtitle}"
                }
            }

            p {
                class: "slide-description",
                "{slide.description}"
            }

            {children}
        }
    }
}
