//! Error types for the welcome slideshow

use thiserror::Error;

/// Errors raised while building a catalog or driving a slideshow
#[derive(Debug, Error)]
pub enum SlideshowError {
    #[error("Slide catalog must contain at least one slide")]
    EmptyCatalog,

    #[error("Duplicate slide id: {0}")]
    DuplicateSlideId(u32),

    #[error("Slide index {index} out of range for catalog of {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Autoplay interval must be greater than zero")]
    ZeroInterval,

    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using SlideshowError
pub type Result<T> = std::result::Result<T, SlideshowError>;
