//! Slide catalog: the fixed, ordered content of the slideshow.
//!
//! A catalog is validated once on construction (non-empty, unique ids) and
//! never mutated afterwards. Hosts can use the built-in welcome content or
//! load their own from a JSON file.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlideshowError};

/// Glyph rendered at the top of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideIcon {
    Sparkles,
    Target,
    Users,
    Zap,
}

impl SlideIcon {
    /// Returns the stable name used in catalog files.
    pub fn name(&self) -> &'static str {
        match self {
            SlideIcon::Sparkles => "sparkles",
            SlideIcon::Target => "target",
            SlideIcon::Users => "users",
            SlideIcon::Zap => "zap",
        }
    }
}

/// Background gradient applied behind a slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideTheme {
    Hero,
    #[default]
    Primary,
    Accent,
}

impl SlideTheme {
    /// Returns the CSS class for this gradient.
    pub fn css_class(&self) -> &'static str {
        match self {
            SlideTheme::Hero => "gradient-hero",
            SlideTheme::Primary => "gradient-primary",
            SlideTheme::Accent => "gradient-accent",
        }
    }
}

/// A single slide of welcome content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Stable identity, unique within a catalog.
    pub id: u32,
    /// Headline.
    pub title: String,
    /// Secondary headline.
    pub subtitle: String,
    /// Body copy.
    pub description: String,
    /// Which glyph to render.
    pub icon: SlideIcon,
    /// Which background gradient to apply.
    #[serde(default)]
    pub theme: SlideTheme,
}

impl Slide {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
        icon: SlideIcon,
        theme: SlideTheme,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            icon,
            theme,
        }
    }
}

/// Immutable, ordered, non-empty list of slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SlideCatalog {
    slides: Vec<Slide>,
}

impl SlideCatalog {
    /// Builds a catalog, rejecting empty lists and duplicate ids.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(SlideshowError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.id) {
                return Err(SlideshowError::DuplicateSlideId(slide.id));
            }
        }

        Ok(Self { slides })
    }

    /// The four-slide welcome catalog shipped with the viewer.
    pub fn builtin() -> Self {
        Self {
            slides: vec![
                Slide::new(
                    1,
                    "Welcome to Your Journey",
                    "Discover endless possibilities",
                    "Start your amazing adventure with us and unlock your full potential.",
                    SlideIcon::Sparkles,
                    SlideTheme::Hero,
                ),
                Slide::new(
                    2,
                    "Set Your Goals",
                    "Define your success",
                    "Create clear objectives and milestones that will guide you toward achievement.",
                    SlideIcon::Target,
                    SlideTheme::Primary,
                ),
                Slide::new(
                    3,
                    "Build Community",
                    "Connect with others",
                    "Join a vibrant community of like-minded individuals on similar journeys.",
                    SlideIcon::Users,
                    SlideTheme::Accent,
                ),
                Slide::new(
                    4,
                    "Take Action",
                    "Transform your vision",
                    "Turn your ideas into reality with powerful tools and unwavering support.",
                    SlideIcon::Zap,
                    SlideTheme::Primary,
                ),
            ],
        }
    }

    /// Parses a catalog from a JSON array of slides.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let slides: Vec<Slide> = serde_json::from_str(json)?;
        Self::new(slides)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), slides = catalog.len(), "Loaded slide catalog");
        Ok(catalog)
    }

    /// Number of slides. Always at least one.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Returns the slide at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// All slides in display order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

impl Default for SlideCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'de> Deserialize<'de> for SlideCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let slides = Vec::<Slide>::deserialize(deserializer)?;
        SlideCatalog::new(slides).map_err(serde::de::Error::custom)
    }
}
