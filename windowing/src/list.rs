//! One-dimensional windowing over uniform items.

use crate::extent;
use crate::{LayoutParameters, ViewportState, VisibleWindow};

/// Computes the window of `layout` visible from `viewport`.
///
/// Deterministic and O(1): the cost does not depend on `layout.item_count`.
pub fn compute_window(viewport: ViewportState, layout: &LayoutParameters) -> VisibleWindow {
    let items = extent::visible_range(
        viewport.scroll_offset,
        viewport.viewport_extent,
        layout.item_extent,
        layout.gap,
        layout.item_count,
        layout.overscan,
    );
    vtrace!(
        scroll_offset = viewport.scroll_offset,
        viewport_extent = viewport.viewport_extent,
        start_index = items.start_index,
        end_index = items.end_index,
        "list::compute_window"
    );
    VisibleWindow {
        items,
        rows: items,
        column_count: 1,
        item_extent: layout.item_extent,
        gap: layout.gap,
        total_extent: layout.total_extent(),
    }
}

/// Start offset of the item at `index`.
///
/// Valid for `index < layout.item_count`; the host bounds-checks since this runs per rendered
/// item.
pub fn offset_for_index(index: usize, layout: &LayoutParameters) -> u64 {
    extent::offset_for_index(index, layout.item_extent, layout.gap)
}

/// Scroll offset that brings `index` to the top of the viewport.
///
/// Indexes past the end scroll to the last item; the result is clamped so the viewport stays
/// filled.
pub fn scroll_offset_for_index(
    index: usize,
    viewport_extent: u32,
    layout: &LayoutParameters,
) -> u64 {
    if layout.item_count == 0 {
        return 0;
    }
    let index = index.min(layout.item_count - 1);
    extent::clamp_scroll_offset(
        offset_for_index(index, layout),
        layout.total_extent(),
        viewport_extent,
    )
}
