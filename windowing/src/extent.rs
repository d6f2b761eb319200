//! Pure extent arithmetic shared by the list and grid engines.
//!
//! Every function here is O(1) and side-effect free. Items are laid out back to back with
//! `gap` between neighbours (no trailing gap after the last item), so item `i` starts at
//! `i * (item_extent + gap)`.

use crate::IndexRange;

/// Distance between the starts of two neighbouring items.
///
/// `item_extent + gap` must be non-zero; this is debug-asserted and floored at `1` otherwise so
/// release builds never divide by zero.
pub fn stride(item_extent: u32, gap: u32) -> u64 {
    let stride = item_extent as u64 + gap as u64;
    debug_assert!(stride > 0, "item_extent + gap must be non-zero");
    stride.max(1)
}

/// Total scrollable extent of `item_count` items.
///
/// Returns `0` for an empty list and never decreases as `item_count` grows.
pub fn total_extent(item_count: usize, item_extent: u32, gap: u32) -> u64 {
    if item_count == 0 {
        return 0;
    }
    let n = item_count as u64;
    n.saturating_mul(item_extent as u64)
        .saturating_add((n - 1).saturating_mul(gap as u64))
}

/// Start offset of the item at `index`. Not bounds-checked.
pub fn offset_for_index(index: usize, item_extent: u32, gap: u32) -> u64 {
    (index as u64).saturating_mul(item_extent as u64 + gap as u64)
}

/// Index of the item covering `offset`, clamped to the last item.
///
/// Offsets inside a gap map to the preceding item. Returns `None` for an empty list.
pub fn index_at_offset(offset: u64, item_extent: u32, gap: u32, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    Some(to_index(offset / stride(item_extent, gap)).min(item_count - 1))
}

/// The window of items intersecting `[scroll_offset, scroll_offset + viewport_extent]`, padded by
/// `overscan` items on each side and clamped to `[0, item_count)`.
///
/// The caller clamps `scroll_offset` upstream (see [`clamp_scroll_offset`]). An empty range is
/// returned when there are no items.
pub fn visible_range(
    scroll_offset: u64,
    viewport_extent: u32,
    item_extent: u32,
    gap: u32,
    item_count: usize,
    overscan: usize,
) -> IndexRange {
    if item_count == 0 {
        return IndexRange::EMPTY;
    }

    let stride = stride(item_extent, gap);
    let raw_start = to_index(scroll_offset / stride);
    let raw_end = to_index(scroll_offset.saturating_add(viewport_extent as u64) / stride);

    let last = item_count - 1;
    let start = raw_start.saturating_sub(overscan).min(last);
    let end = raw_end.saturating_add(overscan).min(last);

    IndexRange {
        start_index: start,
        end_index: end + 1,
    }
}

/// Largest scroll offset that still fills the viewport.
pub fn max_scroll_offset(total_extent: u64, viewport_extent: u32) -> u64 {
    total_extent.saturating_sub(viewport_extent as u64)
}

pub fn clamp_scroll_offset(scroll_offset: u64, total_extent: u64, viewport_extent: u32) -> u64 {
    scroll_offset.min(max_scroll_offset(total_extent, viewport_extent))
}

fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
