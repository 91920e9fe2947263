//! Host-facing configuration for a slideshow instance

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlideshowError};

/// Default autoplay period in milliseconds
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5_000;

/// Default autoplay period
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS);

/// Slideshow configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideshowConfig {
    /// Period between autoplay ticks, in milliseconds
    pub autoplay_interval_ms: u64,
    /// Whether the slideshow starts in autoplay mode on mount
    pub autoplay: bool,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            autoplay: true,
        }
    }
}

impl SlideshowConfig {
    /// Set the autoplay period.
    ///
    /// Sub-millisecond precision is rounded down, so anything under 1 ms fails
    /// [`validate`](Self::validate). Periods past `u64::MAX` ms saturate.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Enable or disable autoplay at mount
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Autoplay period as a `Duration`
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    /// Reject configurations the timer cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(SlideshowError::ZeroInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SlideshowConfig::default();
        assert_eq!(config.autoplay_interval(), Duration::from_secs(5));
        assert!(config.autoplay);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SlideshowConfig::default()
            .with_interval(Duration::from_millis(250))
            .with_autoplay(false);
        assert_eq!(config.autoplay_interval_ms, 250);
        assert!(!config.autoplay);
    }

    #[test]
    fn test_interval_rounds_down_and_saturates() {
        let config = SlideshowConfig::default().with_interval(Duration::from_micros(1_999));
        assert_eq!(config.autoplay_interval_ms, 1);

        let config = SlideshowConfig::default().with_interval(Duration::from_micros(500));
        assert!(matches!(config.validate(), Err(SlideshowError::ZeroInterval)));

        let config = SlideshowConfig::default().with_interval(Duration::MAX);
        assert_eq!(config.autoplay_interval_ms, u64::MAX);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = SlideshowConfig::default().with_interval(Duration::ZERO);
        assert!(matches!(config.validate(), Err(SlideshowError::ZeroInterval)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SlideshowConfig = serde_json::from_str(r#"{"autoplay": false}"#).unwrap();
        assert_eq!(config.autoplay_interval_ms, DEFAULT_AUTOPLAY_INTERVAL_MS);
        assert!(!config.autoplay);
    }
}
