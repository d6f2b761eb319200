// Example: minimal list windowing and scroll-to helper.
use windowing::{LayoutParameters, ViewportState, WindowLayout, list};

fn main() {
    let layout = LayoutParameters::new(1_000_000, 24).with_overscan(3);
    let viewport = ViewportState::new(123_456, 480).clamped(layout.total_extent());

    let w = list::compute_window(viewport, &layout);
    println!("total_extent={}", w.total_extent);
    println!("items={:?}", w.items.as_inclusive());

    let mut rendered = 0usize;
    w.for_each_item(|it| {
        if rendered < 3 {
            println!("  index={} offset={} extent={}", it.index, it.offset, it.extent);
        }
        rendered += 1;
    });
    println!("rendered={rendered}");

    let off = layout.scroll_offset_for_index(999_999, viewport.viewport_extent);
    println!("after scroll_to_index: offset={off}");
}
