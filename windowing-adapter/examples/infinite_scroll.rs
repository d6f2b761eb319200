use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use windowing::LayoutParameters;
use windowing_adapter::{Controller, CoordinatorOptions};

fn main() {
    // Example: an adapter that coalesces wheel events and appends a page near the end.
    //
    // An adapter would:
    // - forward raw scroll events with on_scroll(offset, now_ms)
    // - call tick(now_ms) in a frame loop / timer and re-render when it returns a window
    // - fetch the next page when the near-end callback fires, then call set_layout
    const PAGE: usize = 50;

    let wants_page = Arc::new(AtomicBool::new(false));
    let mut c = Controller::new(
        LayoutParameters::new(PAGE, 32).with_overscan(4),
        320,
        CoordinatorOptions::default(),
    );
    c.set_on_near_end(Some({
        let wants_page = Arc::clone(&wants_page);
        move || wants_page.store(true, Ordering::SeqCst)
    }));

    let mut offset = 0u64;
    for now_ms in (0..4_000u64).step_by(4) {
        // Short wheel bursts (three events every 40ms), a frame every 16ms.
        if now_ms % 40 < 12 {
            offset += 24;
            c.on_scroll(offset, now_ms);
        }

        if now_ms % 16 == 0 {
            if let Some(w) = c.tick(now_ms) {
                println!(
                    "t={now_ms} offset={} items={:?} total={}",
                    c.viewport().scroll_offset,
                    w.items.as_inclusive(),
                    w.total_extent
                );
            }
        }

        if wants_page.swap(false, Ordering::SeqCst) {
            let count = c.layout().item_count + PAGE;
            println!("t={now_ms} loading page: item_count -> {count}");
            c.set_layout(c.layout().with_item_count(count));
        }
    }

    c.unmount();
    println!("unmounted: mounted={}", c.is_mounted());
}
