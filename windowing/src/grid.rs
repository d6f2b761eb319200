//! Two-dimensional windowing: rows are windowed like list items, then expanded to the item
//! indexes they hold.

use crate::extent;
use crate::{GridLayoutParameters, IndexRange, ViewportState, VisibleWindow};

pub fn row_for_index(index: usize, column_count: usize) -> usize {
    debug_assert!(column_count > 0, "column_count must be at least one");
    index / column_count.max(1)
}

pub fn column_for_index(index: usize, column_count: usize) -> usize {
    debug_assert!(column_count > 0, "column_count must be at least one");
    index % column_count.max(1)
}

/// Number of rows needed for `item_count` items; the last row may be partially filled.
pub fn row_count(item_count: usize, column_count: usize) -> usize {
    debug_assert!(column_count > 0, "column_count must be at least one");
    item_count.div_ceil(column_count.max(1))
}

/// Computes the window of `grid` visible from `viewport`.
///
/// `items` never extends past `item_count`; filling the rest of a partial final row is left to
/// the host (see [`VisibleWindow::for_each_cell`]).
pub fn compute_window(viewport: ViewportState, grid: &GridLayoutParameters) -> VisibleWindow {
    let layout = &grid.layout;
    let columns = grid.column_count.max(1);
    if grid.column_count == 0 {
        vwarn!("grid::compute_window: column_count is zero, treating as one column");
    }
    let row_count = row_count(layout.item_count, columns);

    let rows = extent::visible_range(
        viewport.scroll_offset,
        viewport.viewport_extent,
        layout.item_extent,
        layout.gap,
        row_count,
        layout.overscan,
    );

    let items = if rows.is_empty() {
        IndexRange::EMPTY
    } else {
        IndexRange {
            start_index: rows.start_index.saturating_mul(columns),
            end_index: rows
                .end_index
                .saturating_mul(columns)
                .min(layout.item_count),
        }
    };
    vtrace!(
        scroll_offset = viewport.scroll_offset,
        viewport_extent = viewport.viewport_extent,
        start_row = rows.start_index,
        end_row = rows.end_index,
        start_index = items.start_index,
        end_index = items.end_index,
        "grid::compute_window"
    );

    VisibleWindow {
        items,
        rows,
        column_count: columns,
        item_extent: layout.item_extent,
        gap: layout.gap,
        total_extent: extent::total_extent(row_count, layout.item_extent, layout.gap),
    }
}

/// Start offset of `row`. Not bounds-checked.
pub fn offset_for_row(row: usize, grid: &GridLayoutParameters) -> u64 {
    extent::offset_for_index(row, grid.layout.item_extent, grid.layout.gap)
}

/// Scroll offset that brings the row holding `index` to the top of the viewport, clamped so the
/// viewport stays filled.
pub fn scroll_offset_for_index(
    index: usize,
    viewport_extent: u32,
    grid: &GridLayoutParameters,
) -> u64 {
    let item_count = grid.layout.item_count;
    if item_count == 0 {
        return 0;
    }
    let row = row_for_index(index.min(item_count - 1), grid.column_count);
    extent::clamp_scroll_offset(
        offset_for_row(row, grid),
        grid.total_extent(),
        viewport_extent,
    )
}
