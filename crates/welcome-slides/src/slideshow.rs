//! Per-instance slideshow: controller, autoplay timer and state broadcast.
//!
//! A `Slideshow` is the unit a host mounts. It owns its own index and its own
//! timer, so several instances can coexist. The timer is held only while the
//! controller is autoplaying:
//!
//! ```text
//! mount ──(autoplay on)──► timer armed ──tick──► advance() ──► publish
//!                               │
//!              next/previous/go_to or teardown
//!                               ▼
//!                         timer released
//! ```
//!
//! The controller sits behind a mutex, so a tick and a user action are
//! applied one after the other, never interleaved.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::autoplay::{AutoplayTimer, TickOutcome};
use crate::catalog::SlideCatalog;
use crate::config::SlideshowConfig;
use crate::controller::{SlideshowController, SlideshowState};
use crate::error::Result;

/// A mounted slideshow instance.
pub struct Slideshow {
    controller: Arc<Mutex<SlideshowController>>,
    updates: Arc<watch::Sender<SlideshowState>>,
    timer: Mutex<Option<AutoplayTimer>>,
    config: SlideshowConfig,
}

impl Slideshow {
    /// Mounts a slideshow and, if autoplay is enabled, arms its timer.
    ///
    /// Must be called from within a tokio runtime when `config.autoplay` is set.
    pub fn mount(catalog: Arc<SlideCatalog>, config: SlideshowConfig) -> Result<Self> {
        config.validate()?;

        let initial = SlideshowState {
            current_slide: 0,
            is_autoplaying: config.autoplay,
        };
        let controller = SlideshowController::with_state(catalog, initial);
        let (updates, _) = watch::channel(controller.state());

        let slideshow = Self {
            controller: Arc::new(Mutex::new(controller)),
            updates: Arc::new(updates),
            timer: Mutex::new(None),
            config,
        };

        if config.autoplay {
            slideshow.arm_timer();
        }

        tracing::info!(
            slides = slideshow.catalog().len(),
            autoplay = config.autoplay,
            interval_ms = config.autoplay_interval_ms,
            "Slideshow mounted"
        );
        Ok(slideshow)
    }

    /// User step forward.
    pub fn next(&self) -> SlideshowState {
        self.navigate(SlideshowController::next)
    }

    /// User step back.
    pub fn previous(&self) -> SlideshowState {
        self.navigate(SlideshowController::previous)
    }

    /// Jump to `index`. Out-of-range indices are rejected without side effects.
    pub fn go_to(&self, index: usize) -> Result<SlideshowState> {
        let state = {
            let mut controller = self.controller.lock();
            controller.go_to(index)?;
            self.publish(&controller)
        };
        self.settle_timer(state);
        Ok(state)
    }

    /// Current state snapshot.
    pub fn state(&self) -> SlideshowState {
        self.controller.lock().state()
    }

    /// Receiver notified on every state change, ticks included.
    pub fn subscribe(&self) -> watch::Receiver<SlideshowState> {
        self.updates.subscribe()
    }

    /// Whether an autoplay timer is currently held.
    pub fn is_timer_armed(&self) -> bool {
        self.timer.lock().as_ref().is_some_and(AutoplayTimer::is_active)
    }

    /// The catalog this instance was mounted with.
    pub fn catalog(&self) -> Arc<SlideCatalog> {
        self.controller.lock().catalog().clone()
    }

    /// Releases the timer. Safe to call more than once.
    pub fn teardown(&self) {
        if self.timer.lock().take().is_some() {
            tracing::info!("Slideshow torn down, autoplay released");
        }
    }

    fn navigate(&self, op: impl FnOnce(&mut SlideshowController)) -> SlideshowState {
        let state = {
            let mut controller = self.controller.lock();
            let from = controller.current_index();
            op(&mut controller);
            tracing::debug!(from, to = controller.current_index(), "Slide navigation");
            self.publish(&controller)
        };
        self.settle_timer(state);
        state
    }

    /// Broadcasts the controller's state. Callers hold the controller lock, so
    /// publishes land in the same order as the transitions.
    fn publish(&self, controller: &SlideshowController) -> SlideshowState {
        let state = controller.state();
        self.updates.send_replace(state);
        state
    }

    fn settle_timer(&self, state: SlideshowState) {
        if !state.is_autoplaying {
            self.release_timer();
        }
    }

    fn arm_timer(&self) {
        let mut slot = self.timer.lock();
        if slot.as_ref().is_some_and(AutoplayTimer::is_active) {
            return;
        }

        let controller = Arc::clone(&self.controller);
        let updates = Arc::clone(&self.updates);
        *slot = Some(AutoplayTimer::spawn(self.config.autoplay_interval(), move || {
            let mut controller = controller.lock();
            // A user action may have won the race with this tick
            if !controller.is_autoplaying() {
                return TickOutcome::Stop;
            }
            controller.advance();
            let state = controller.state();
            updates.send_replace(state);
            tracing::debug!(slide = state.current_slide, "Autoplay tick");
            TickOutcome::Continue
        }));
    }

    fn release_timer(&self) {
        if let Some(timer) = self.timer.lock().take() {
            timer.cancel();
            tracing::info!("Autoplay disabled, switched to manual mode");
        }
    }
}

impl Drop for Slideshow {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for Slideshow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slideshow")
            .field("state", &self.state())
            .field("timer_armed", &self.is_timer_armed())
            .field("config", &self.config)
            .finish()
    }
}
