//! Inline SVG glyphs for slides and navigation.

use dioxus::prelude::*;
use welcome_slides::SlideIcon;

/// Direction of a navigation chevron.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChevronDirection {
    Left,
    Right,
}

/// Stroke-style glyph for a slide icon.
#[component]
pub fn SlideIconGlyph(icon: SlideIcon, class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            "data-icon": "{icon.name()}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",

            {match icon {
                SlideIcon::Sparkles => rsx! {
                    path { d: "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z" }
                    path { d: "M5 3v4" }
                    path { d: "M19 17v4" }
                    path { d: "M3 5h4" }
                    path { d: "M17 19h4" }
                },
                SlideIcon::Target => rsx! {
                    circle { cx: "12", cy: "12", r: "10" }
                    circle { cx: "12", cy: "12", r: "6" }
                    circle { cx: "12", cy: "12", r: "2" }
                },
                SlideIcon::Users => rsx! {
                    path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
                    circle { cx: "9", cy: "7", r: "4" }
                    path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
                    path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
                },
                SlideIcon::Zap => rsx! {
                    polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
                },
            }}
        }
    }
}

/// Chevron used by the previous/next controls.
#[component]
pub fn Chevron(direction: ChevronDirection) -> Element {
    let d = match direction {
        ChevronDirection::Left => "m15 18-6-6 6-6",
        ChevronDirection::Right => "m9 18 6-6-6-6",
    };

    rsx! {
        svg {
            class: "chevron",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "{d}" }
        }
    }
}
