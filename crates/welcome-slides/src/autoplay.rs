//! Autoplay timer.
//!
//! A periodic tokio task wrapped in an owning handle. The task is aborted when
//! the handle is cancelled or dropped, so holding an `AutoplayTimer` is the
//! same thing as holding the right to mutate the slideshow on a schedule.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// What the timer should do after a tick callback returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Stop,
}

/// Handle to a running autoplay task.
#[derive(Debug)]
pub struct AutoplayTimer {
    handle: JoinHandle<()>,
}

impl AutoplayTimer {
    /// Spawns the timer on the current tokio runtime.
    ///
    /// The first tick fires one full `period` after this call. `on_tick` runs
    /// on every tick until it returns [`TickOutcome::Stop`] or the handle is
    /// released.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime or if `period` is zero.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> TickOutcome + Send + 'static,
    {
        let start = Instant::now() + period;
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut ticks: u64 = 0;
            loop {
                interval.tick().await;
                ticks += 1;
                if on_tick() == TickOutcome::Stop {
                    tracing::debug!(ticks, "Autoplay timer stopped by callback");
                    break;
                }
            }
        });

        tracing::debug!(?period, "Autoplay timer armed");
        Self { handle }
    }

    /// Whether the underlying task is still scheduled.
    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Releases the timer. No new tick starts after this returns, though a tick
    /// already running on another worker may still finish.
    pub fn cancel(self) {
        // Drop does the work
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::debug!("Autoplay timer released");
        }
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::sleep;

    const PERIOD: Duration = Duration::from_millis(5_000);

    fn counting_timer(count: Arc<AtomicU32>) -> AutoplayTimer {
        AutoplayTimer::spawn(PERIOD, move || {
            count.fetch_add(1, Ordering::SeqCst);
            TickOutcome::Continue
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_full_period() {
        let count = Arc::new(AtomicU32::new(0));
        let _timer = counting_timer(count.clone());

        sleep(PERIOD - Duration::from_millis(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_period() {
        let count = Arc::new(AtomicU32::new(0));
        let timer = counting_timer(count.clone());

        sleep(PERIOD * 3 + Duration::from_millis(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(timer.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let count = Arc::new(AtomicU32::new(0));
        let timer = counting_timer(count.clone());

        sleep(PERIOD + Duration::from_millis(1)).await;
        timer.cancel();

        sleep(PERIOD * 10).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticks() {
        let count = Arc::new(AtomicU32::new(0));
        {
            let _timer = counting_timer(count.clone());
        }
        sleep(PERIOD * 4).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_outcome_ends_task() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let timer = AutoplayTimer::spawn(PERIOD, move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            if n == 2 { TickOutcome::Stop } else { TickOutcome::Continue }
        });

        sleep(PERIOD * 5).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(!timer.is_active());
    }
}
