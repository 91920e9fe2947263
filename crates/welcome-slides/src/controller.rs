//! Slideshow state machine.
//!
//! The controller owns the current slide index and the autoplay flag. It has
//! two modes: `Autoplaying` (initial) and `Manual`. Any user navigation moves
//! it to `Manual`, and nothing moves it back.

use std::sync::Arc;

use crate::catalog::{Slide, SlideCatalog};
use crate::error::{Result, SlideshowError};

/// Runtime state of one slideshow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideshowState {
    /// Index of the visible slide, always `< catalog.len()`.
    pub current_slide: usize,
    /// Whether the autoplay timer should be running.
    pub is_autoplaying: bool,
}

impl SlideshowState {
    /// Mount-time state: first slide, autoplay on.
    pub fn initial() -> Self {
        Self {
            current_slide: 0,
            is_autoplaying: true,
        }
    }

    pub fn mode(&self) -> PlaybackMode {
        if self.is_autoplaying {
            PlaybackMode::Autoplaying
        } else {
            PlaybackMode::Manual
        }
    }
}

impl Default for SlideshowState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Which of the two controller modes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Autoplaying,
    Manual,
}

/// Navigation logic over a shared catalog.
#[derive(Debug, Clone)]
pub struct SlideshowController {
    catalog: Arc<SlideCatalog>,
    state: SlideshowState,
}

impl SlideshowController {
    /// Creates a controller in the initial autoplaying state.
    pub fn new(catalog: Arc<SlideCatalog>) -> Self {
        Self::with_state(catalog, SlideshowState::initial())
    }

    /// Creates a controller starting from `state`. The index is wrapped into range.
    pub fn with_state(catalog: Arc<SlideCatalog>, state: SlideshowState) -> Self {
        let len = catalog.len();
        Self {
            catalog,
            state: SlideshowState {
                current_slide: state.current_slide % len,
                is_autoplaying: state.is_autoplaying,
            },
        }
    }

    /// Timer step: move forward one slide, wrapping. Leaves the autoplay flag alone.
    pub fn advance(&mut self) {
        self.state.current_slide = (self.state.current_slide + 1) % self.len();
    }

    /// User step forward. Suspends autoplay.
    pub fn next(&mut self) {
        self.advance();
        self.enter_manual();
    }

    /// User step back, wrapping to the last slide. Suspends autoplay.
    pub fn previous(&mut self) {
        let len = self.len();
        self.state.current_slide = (self.state.current_slide + len - 1) % len;
        self.enter_manual();
    }

    /// Jump directly to `index`. Suspends autoplay.
    ///
    /// An out-of-range index is rejected and the state is left untouched.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        let len = self.len();
        if index >= len {
            tracing::warn!(index, len, "Rejected jump to nonexistent slide");
            return Err(SlideshowError::IndexOutOfRange { index, len });
        }
        self.state.current_slide = index;
        self.enter_manual();
        Ok(())
    }

    fn enter_manual(&mut self) {
        if self.state.is_autoplaying {
            tracing::debug!(slide = self.state.current_slide, "Autoplay suspended by user navigation");
        }
        self.state.is_autoplaying = false;
    }

    pub fn state(&self) -> SlideshowState {
        self.state
    }

    pub fn mode(&self) -> PlaybackMode {
        self.state.mode()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.state.is_autoplaying
    }

    pub fn current_index(&self) -> usize {
        self.state.current_slide
    }

    /// The visible slide.
    pub fn current_slide(&self) -> &Slide {
        &self.catalog.slides()[self.state.current_slide]
    }

    fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn catalog(&self) -> &Arc<SlideCatalog> {
        &self.catalog
    }
}
