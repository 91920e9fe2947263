//! Render-ready projection of slideshow state.

use crate::catalog::{Slide, SlideCatalog};
use crate::controller::SlideshowState;

/// One positional indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Slide index this dot jumps to.
    pub index: usize,
    /// True for the visible slide.
    pub active: bool,
}

/// Everything the presentation surface needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideshowView<'a> {
    pub slide: &'a Slide,
    pub index: usize,
    pub total: usize,
    pub autoplaying: bool,
    pub indicators: Vec<Indicator>,
}

impl<'a> SlideshowView<'a> {
    /// Projects `state` onto `catalog`. An index past the end wraps.
    pub fn new(catalog: &'a SlideCatalog, state: SlideshowState) -> Self {
        let total = catalog.len();
        let index = state.current_slide % total;
        let indicators = (0..total)
            .map(|i| Indicator { index: i, active: i == index })
            .collect();

        Self {
            slide: &catalog.slides()[index],
            index,
            total,
            autoplaying: state.is_autoplaying,
            indicators,
        }
    }

    /// Filled fraction of the progress bar, `(index + 1) / total`.
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.total as f64
    }

    /// Progress as a CSS percentage, e.g. `"50%"`.
    pub fn progress_percent(&self) -> String {
        format!("{}%", self.progress() * 100.0)
    }

    /// Human-readable position, e.g. `"2 / 4"`.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.total)
    }
}
