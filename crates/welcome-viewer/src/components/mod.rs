//! UI components for the welcome viewer.

mod app;
mod icons;
mod navigation;
mod slide_card;
mod welcome_slides;

pub use app::*;
pub use icons::*;
pub use navigation::*;
pub use slide_card::*;
pub use welcome_slides::*;
