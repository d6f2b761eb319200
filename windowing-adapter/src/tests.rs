use crate::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use windowing::{GridLayoutParameters, LayoutParameters};

fn recorder() -> (Arc<Mutex<Vec<u64>>>, impl Fn(u64) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::<u64>::new()));
    let sink = {
        let seen = Arc::clone(&seen);
        move |offset: u64| seen.lock().unwrap().push(offset)
    };
    (seen, sink)
}

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let hits = Arc::new(AtomicUsize::new(0));
    let f = {
        let hits = Arc::clone(&hits);
        move || {
            hits.fetch_add(1, Ordering::SeqCst);
        }
    };
    (hits, f)
}

#[test]
fn burst_within_window_notifies_once_with_last_offset() {
    let mut c = ScrollCoordinator::new(10);
    let (seen, sink) = recorder();
    c.subscribe(sink);

    for (offset, now_ms) in [(10u64, 0u64), (20, 2), (30, 4), (40, 6), (50, 8)] {
        assert_eq!(c.on_scroll(offset, now_ms), None);
        // Position queries are never stale.
        assert_eq!(c.offset(), offset);
    }
    assert_eq!(c.pending_deadline_ms(), Some(18));

    assert_eq!(c.tick(9), None);
    assert_eq!(c.tick(17), None);
    assert_eq!(c.tick(18), Some(50));
    assert_eq!(c.tick(40), None);
    assert_eq!(*seen.lock().unwrap(), [50]);
}

#[test]
fn overdue_deadline_is_delivered_before_rescheduling() {
    let mut c = ScrollCoordinator::default();
    let (seen, sink) = recorder();
    c.subscribe(sink);

    c.on_scroll(10, 0);
    // No tick happened at t=10; the next event flushes the elapsed notification first.
    assert_eq!(c.on_scroll(20, 15), Some(10));
    assert_eq!(c.tick(24), None);
    assert_eq!(c.tick(25), Some(20));
    assert_eq!(*seen.lock().unwrap(), [10, 20]);
}

#[test]
fn cancel_and_unsubscribe_stop_notifications() {
    let mut c = ScrollCoordinator::new(10);
    let (seen, sink) = recorder();
    let id = c.subscribe(sink);
    assert_eq!(c.subscriber_count(), 1);

    c.on_scroll(5, 0);
    c.cancel();
    assert!(!c.is_pending());
    assert_eq!(c.tick(100), None);

    assert!(c.unsubscribe(id));
    assert!(!c.unsubscribe(id));
    c.on_scroll(6, 200);
    assert_eq!(c.tick(210), Some(6));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn dispose_cancels_pending_notification() {
    let mut c = ScrollCoordinator::new(10);
    let (seen, sink) = recorder();
    c.subscribe(sink);

    c.on_scroll(42, 0);
    c.dispose();
    assert!(c.is_disposed());
    assert_eq!(c.subscriber_count(), 0);
    assert_eq!(c.tick(100), None);

    // Still recorded, never propagated.
    assert_eq!(c.on_scroll(43, 200), None);
    assert_eq!(c.offset(), 43);
    assert!(!c.is_pending());
    assert_eq!(c.flush(), None);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn is_near_end_compares_viewport_end_to_threshold() {
    assert!(is_near_end(700, 100, 1000, 0.8));
    assert!(!is_near_end(600, 100, 1000, 0.8));
    assert!(is_near_end(0, 100, 0, 0.8));
    assert!(is_near_end(0, 100, 1000, 0.0));
    assert!(!is_near_end(0, 100, 1000, 1.0));
}

#[test]
fn near_end_fires_once_per_crossing() {
    let mut d = NearEndDetector::new(0.8);
    let (hits, f) = counter();
    d.set_on_near_end(Some(f));

    assert!(!d.update(600, 100, 1000));
    assert!(d.update(750, 100, 1000));
    // Stays past the threshold for five more ticks.
    for offset in [760u64, 780, 800, 850, 900] {
        assert!(!d.update(offset, 100, 1000));
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // Dropping below re-arms; the next crossing fires again.
    assert!(!d.update(100, 100, 1000));
    assert!(d.update(800, 100, 1000));
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    d.reset();
    assert!(!d.is_past());
    assert!(d.update(800, 100, 1000));
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[test]
fn options_defaults_and_validation() {
    let o = CoordinatorOptions::default();
    assert_eq!(o.coalesce_window_ms, 10);
    assert_eq!(o.near_end_threshold, 0.8);
    assert_eq!(o.validate(), Ok(()));

    let bad = CoordinatorOptions::new().with_near_end_threshold(1.5);
    assert_eq!(bad.validate(), Err(OptionsError::ThresholdOutOfRange(1.5)));

    let o = CoordinatorOptions::new().with_coalesce_window_ms(32);
    assert_eq!(ScrollCoordinator::from_options(&o).coalesce_window_ms(), 32);
}

#[test]
fn controller_delivers_window_after_coalescing() {
    let layout = LayoutParameters::new(1000, 50).with_overscan(2);
    let mut c = Controller::new(layout, 500, CoordinatorOptions::default());
    assert_eq!(c.window().items.as_inclusive(), Some(0..=12));

    assert_eq!(c.on_scroll(2000, 0), None);
    // Rendering state is unchanged until the update is delivered.
    assert_eq!(c.window().start_index(), 0);
    assert_eq!(c.live_window().items.as_inclusive(), Some(38..=52));

    let w = c.tick(10).unwrap();
    assert_eq!(w.items.as_inclusive(), Some(38..=52));
    assert_eq!(w.total_extent, 50_000);
    assert_eq!(c.window(), w);
    assert_eq!(c.tick(20), None);
}

#[test]
fn controller_clamps_scroll_offsets_upstream() {
    let mut c = Controller::new(
        LayoutParameters::new(10, 10),
        50,
        CoordinatorOptions::default(),
    );
    c.on_scroll(10_000, 0);
    assert_eq!(c.coordinator().offset(), 50);
    assert_eq!(c.tick(10).map(|w| w.last_index()), Some(Some(9)));
}

#[test]
fn controller_near_end_rearms_after_page_load() {
    let options = CoordinatorOptions::default().with_near_end_threshold(0.8);
    let mut c = Controller::new(LayoutParameters::new(100, 10), 100, options);
    let (hits, f) = counter();
    c.set_on_near_end(Some(f));

    c.on_scroll(600, 0);
    c.tick(10);
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    c.on_scroll(750, 20);
    c.tick(30);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    for (i, offset) in [760u64, 780, 800, 850, 900].into_iter().enumerate() {
        let now_ms = 40 + i as u64 * 20;
        c.on_scroll(offset, now_ms);
        assert!(c.tick(now_ms + 10).is_some());
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(c.is_near_end());

    // A page of 100 more items arrives: total extent doubles and the detector is re-armed.
    c.set_layout(LayoutParameters::new(200, 10));
    assert!(!c.check_near_end());
    assert!(!c.is_near_end());

    c.on_scroll(1500, 200);
    c.tick(210);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn controller_scroll_to_index_is_immediate() {
    let grid = GridLayoutParameters::new(97, 4, 80).with_overscan(0);
    let mut c = Controller::new(grid, 400, CoordinatorOptions::default());
    let (seen, sink) = recorder();
    c.subscribe(sink);

    assert_eq!(c.scroll_to_index(96, 0), 1600);
    assert!(c.window().contains(96));
    assert_eq!(c.window().rows.as_inclusive(), Some(20..=24));
    assert!(!c.coordinator().is_pending());
    assert_eq!(*seen.lock().unwrap(), [1600]);
}

#[test]
fn controller_resize_recomputes_synchronously() {
    let mut c = Controller::new(
        LayoutParameters::new(1000, 10).with_overscan(0),
        100,
        CoordinatorOptions::default(),
    );
    assert_eq!(c.window().items.as_inclusive(), Some(0..=10));
    c.on_viewport_extent(200);
    assert_eq!(c.viewport_extent(), 200);
    assert_eq!(c.window().items.as_inclusive(), Some(0..=20));
}

#[test]
fn controller_unmount_drops_pending_update_and_callbacks() {
    let mut c = Controller::new(
        LayoutParameters::new(100, 10),
        100,
        CoordinatorOptions::default(),
    );
    let (seen, sink) = recorder();
    let (hits, f) = counter();
    c.subscribe(sink);
    c.set_on_near_end(Some(f));

    c.on_scroll(900, 0);
    c.unmount();
    assert!(!c.is_mounted());
    assert_eq!(c.tick(100), None);
    assert!(!c.check_near_end());
    assert_eq!(c.on_scroll(0, 200), None);
    assert_eq!(c.tick(300), None);

    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn controller_pending_update_reclamps_after_set_layout() {
    let mut c = Controller::new(
        LayoutParameters::new(1000, 10),
        100,
        CoordinatorOptions::default(),
    );
    c.on_scroll(9000, 0);
    assert_eq!(c.coordinator().offset(), 9000);

    // The content shrinks before the pending update is delivered.
    c.set_layout(LayoutParameters::new(100, 10));
    let w = c.tick(10).unwrap();
    assert_eq!(w, c.live_window());
    assert_eq!(w.last_index(), Some(99));
    assert!(w.len() >= 10);
}

#[test]
fn controller_pending_update_reclamps_after_resize() {
    let mut c = Controller::new(
        LayoutParameters::new(100, 10).with_overscan(0),
        50,
        CoordinatorOptions::default(),
    );
    c.on_scroll(950, 0);

    c.on_viewport_extent(500);
    let w = c.tick(10).unwrap();
    assert_eq!(w, c.live_window());
    assert_eq!(w.items.as_inclusive(), Some(50..=99));
    assert!(w.len() >= 50);
}

#[test]
fn controller_resize_past_threshold_fires_near_end() {
    let mut c = Controller::new(
        LayoutParameters::new(100, 10),
        100,
        CoordinatorOptions::default(),
    );
    let (hits, f) = counter();
    c.set_on_near_end(Some(f));

    c.on_viewport_extent(500);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    c.on_viewport_extent(900);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    // Still past the threshold: no second hit.
    c.on_viewport_extent(950);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn controller_clear_on_near_end_drops_callback() {
    let mut c = Controller::new(
        LayoutParameters::new(100, 10),
        100,
        CoordinatorOptions::default(),
    );
    let (hits, f) = counter();
    c.set_on_near_end(Some(f));
    c.clear_on_near_end();

    c.on_scroll(900, 0);
    c.tick(10);
    assert!(c.near_end_detector().is_past());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
