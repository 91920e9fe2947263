//! Welcome slideshow core
//!
//! The state machine behind an auto-advancing onboarding carousel: a fixed
//! catalog of slides, a controller holding the visible index and the autoplay
//! flag, and a scoped autoplay timer.
//!
//! # Modes
//!
//! - **Autoplaying** (initial): a timer advances one slide every period
//!   (5 seconds by default), wrapping at the end.
//! - **Manual**: entered on any of `next`, `previous` or `go_to`. The timer is
//!   released and never re-armed for the lifetime of the instance.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use welcome_slides::{SlideCatalog, Slideshow, SlideshowConfig};
//!
//! let slideshow = Slideshow::mount(Arc::new(SlideCatalog::builtin()), SlideshowConfig::default())?;
//! let mut updates = slideshow.subscribe();
//!
//! slideshow.next(); // manual mode from here on
//! slideshow.teardown();
//! ```

pub mod autoplay;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod slideshow;
pub mod view;

pub use autoplay::{AutoplayTimer, TickOutcome};
pub use catalog::{Slide, SlideCatalog, SlideIcon, SlideTheme};
pub use config::{DEFAULT_AUTOPLAY_INTERVAL, DEFAULT_AUTOPLAY_INTERVAL_MS, SlideshowConfig};
pub use controller::{PlaybackMode, SlideshowController, SlideshowState};
pub use error::{Result, SlideshowError};
pub use slideshow::Slideshow;
pub use view::{Indicator, SlideshowView};
