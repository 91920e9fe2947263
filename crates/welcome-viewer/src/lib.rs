//! Desktop welcome slideshow
//!
//! This crate provides a Dioxus desktop application that shows an
//! auto-advancing onboarding slideshow with previous/next controls,
//! positional indicators and a progress bar.

pub mod components;
pub mod settings;
pub mod theme;
