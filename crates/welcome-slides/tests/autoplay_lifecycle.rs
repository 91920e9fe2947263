//! Autoplay lifecycle tests against a mounted slideshow. Most run on paused
//! tokio time; the race test runs on real time across worker threads.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use welcome_slides::{SlideCatalog, Slideshow, SlideshowConfig, SlideshowState};

const TICK: Duration = Duration::from_millis(5_000);
/// Slack past a tick deadline so the timer task runs before the test resumes.
const EPSILON: Duration = Duration::from_millis(1);

fn state(current_slide: usize, is_autoplaying: bool) -> SlideshowState {
    SlideshowState { current_slide, is_autoplaying }
}

fn mount() -> Slideshow {
    Slideshow::mount(Arc::new(SlideCatalog::builtin()), SlideshowConfig::default()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_autoplay_advances_and_wraps() {
    let slideshow = mount();

    sleep(TICK * 3 + EPSILON).await;
    assert_eq!(slideshow.state(), state(3, true));

    sleep(TICK).await;
    assert_eq!(slideshow.state(), state(0, true));
}

#[tokio::test(start_paused = true)]
async fn test_no_tick_before_period() {
    let slideshow = mount();

    sleep(TICK - EPSILON).await;
    assert_eq!(slideshow.state(), state(0, true));
}

#[tokio::test(start_paused = true)]
async fn test_autoplay_cycles_indefinitely() {
    let slideshow = mount();
    sleep(EPSILON).await;

    for n in 1..=12 {
        sleep(TICK).await;
        assert_eq!(slideshow.state().current_slide, n % 4);
        assert!(slideshow.is_timer_armed());
    }
}

#[tokio::test(start_paused = true)]
async fn test_manual_scenario_stops_timer() {
    let slideshow = mount();

    assert_eq!(slideshow.next(), state(1, false));
    assert_eq!(slideshow.previous(), state(0, false));
    assert_eq!(slideshow.go_to(3).unwrap(), state(3, false));
    assert!(!slideshow.is_timer_armed());

    sleep(TICK * 10).await;
    assert_eq!(slideshow.state(), state(3, false));
}

#[tokio::test(start_paused = true)]
async fn test_manual_navigation_after_ticks() {
    let slideshow = mount();

    sleep(TICK * 2 + EPSILON).await;
    assert_eq!(slideshow.state(), state(2, true));

    assert_eq!(slideshow.previous(), state(1, false));

    sleep(TICK * 4).await;
    assert_eq!(slideshow.state(), state(1, false));
}

#[tokio::test(start_paused = true)]
async fn test_teardown_stops_mutation() {
    let slideshow = mount();
    let mut rx = slideshow.subscribe();

    sleep(TICK + EPSILON).await;
    assert_eq!(slideshow.state(), state(1, true));
    rx.borrow_and_update();

    slideshow.teardown();
    assert!(!slideshow.is_timer_armed());

    sleep(TICK * 5).await;
    assert_eq!(slideshow.state(), state(1, true));
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_drop_releases_timer() {
    let slideshow = mount();
    let mut rx = slideshow.subscribe();
    drop(slideshow);

    sleep(TICK * 3).await;
    // sender is gone and nothing was published after mount
    assert!(rx.has_changed().is_err());
    assert_eq!(rx.borrow_and_update().current_slide, 0);
}

#[tokio::test(start_paused = true)]
async fn test_instances_are_independent() {
    let first = mount();
    sleep(TICK + EPSILON).await;

    let second = mount();
    sleep(TICK + EPSILON).await;
    assert_eq!(first.state(), state(2, true));
    assert_eq!(second.state(), state(1, true));

    first.next();
    assert!(!first.is_timer_armed());
    assert!(second.is_timer_armed());

    sleep(TICK).await;
    assert_eq!(first.state(), state(3, false));
    assert_eq!(second.state(), state(2, true));
}

#[tokio::test(start_paused = true)]
async fn test_custom_interval() {
    let config = SlideshowConfig::default().with_interval(Duration::from_millis(250));
    let slideshow = Slideshow::mount(Arc::new(SlideCatalog::builtin()), config).unwrap();

    sleep(Duration::from_millis(501)).await;
    assert_eq!(slideshow.state(), state(2, true));
}

/// Ticks run on a worker thread while the user navigates from another. The
/// broadcast must always end on the state the controller actually holds.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_ticks_never_publish_over_user_navigation() {
    let config = SlideshowConfig::default().with_interval(Duration::from_millis(1));

    for iteration in 0..200u64 {
        let slideshow = Slideshow::mount(Arc::new(SlideCatalog::builtin()), config).unwrap();
        let rx = slideshow.subscribe();

        // Land the user action at varying offsets around the tick deadlines
        sleep(Duration::from_micros(500 + (iteration % 7) * 300)).await;
        let after_user = match iteration % 3 {
            0 => slideshow.next(),
            1 => slideshow.previous(),
            _ => slideshow.go_to(2).unwrap(),
        };
        assert!(!after_user.is_autoplaying);

        // Give any tick that was already running time to finish
        sleep(Duration::from_millis(5)).await;

        assert_eq!(slideshow.state(), after_user, "iteration {iteration}");
        assert_eq!(*rx.borrow(), after_user, "iteration {iteration}");
        assert!(!slideshow.is_timer_armed());
    }
}
