use crate::extent;
use crate::{LayoutError, ViewportState, VisibleWindow};

/// Overscan used by [`LayoutParameters::new`].
pub const DEFAULT_LIST_OVERSCAN: usize = 5;

/// Overscan used by [`GridLayoutParameters::new`] (counted in rows).
pub const DEFAULT_GRID_OVERSCAN: usize = 2;

/// Layout of a uniform-extent list for one render pass.
///
/// This is plain data: adapters rebuild it (or tweak a field) whenever the host's item count or
/// sizing changes, then recompute the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutParameters {
    /// Extent of every item in the scroll axis (excludes `gap`).
    pub item_extent: u32,
    pub item_count: usize,
    /// Extra items materialized beyond each viewport edge.
    pub overscan: usize,
    /// Space between neighbouring items.
    pub gap: u32,
}

impl LayoutParameters {
    pub fn new(item_count: usize, item_extent: u32) -> Self {
        Self {
            item_extent,
            item_count,
            overscan: DEFAULT_LIST_OVERSCAN,
            gap: 0,
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.item_extent == 0 {
            return Err(LayoutError::ZeroItemExtent);
        }
        Ok(())
    }

    pub fn stride(&self) -> u64 {
        extent::stride(self.item_extent, self.gap)
    }

    pub fn total_extent(&self) -> u64 {
        extent::total_extent(self.item_count, self.item_extent, self.gap)
    }

    pub fn max_scroll_offset(&self, viewport_extent: u32) -> u64 {
        extent::max_scroll_offset(self.total_extent(), viewport_extent)
    }
}

/// Layout of a uniform-extent grid.
///
/// `layout.item_extent` is the row height and `layout.item_count` counts items, not rows.
/// `layout.overscan` is counted in rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayoutParameters {
    pub layout: LayoutParameters,
    pub column_count: usize,
}

impl GridLayoutParameters {
    pub fn new(item_count: usize, column_count: usize, row_extent: u32) -> Self {
        Self {
            layout: LayoutParameters::new(item_count, row_extent)
                .with_overscan(DEFAULT_GRID_OVERSCAN),
            column_count,
        }
    }

    pub fn from_layout(layout: LayoutParameters, column_count: usize) -> Self {
        Self {
            layout,
            column_count,
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.layout.item_count = item_count;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.layout.overscan = overscan;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.layout.gap = gap;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.column_count == 0 {
            return Err(LayoutError::ZeroColumnCount);
        }
        self.layout.validate()
    }

    pub fn row_count(&self) -> usize {
        crate::grid::row_count(self.layout.item_count, self.column_count)
    }

    pub fn total_extent(&self) -> u64 {
        extent::total_extent(self.row_count(), self.layout.item_extent, self.layout.gap)
    }

    pub fn max_scroll_offset(&self, viewport_extent: u32) -> u64 {
        extent::max_scroll_offset(self.total_extent(), viewport_extent)
    }

    /// Cross-axis placement of `column` when `cross_extent` is shared evenly between the
    /// columns, with `gap` between neighbouring columns.
    ///
    /// Returns `(offset, width)`. Widths differ by at most one unit and always add up to the
    /// space left after gaps.
    pub fn column_span(&self, column: usize, cross_extent: u32) -> (u64, u32) {
        let columns = self.column_count.max(1) as u64;
        let column = (column as u64).min(columns - 1);
        let gaps = (columns - 1).saturating_mul(self.layout.gap as u64);
        let available = (cross_extent as u64).saturating_sub(gaps);

        let start = available * column / columns;
        let end = available * (column + 1) / columns;
        let offset = start.saturating_add(column.saturating_mul(self.layout.gap as u64));
        (offset, (end - start) as u32)
    }
}

/// The seam between a layout and the code that drives it.
///
/// Implemented by [`LayoutParameters`] (list) and [`GridLayoutParameters`] (grid), so
/// adapters can be generic over the windowing engine.
pub trait WindowLayout {
    fn compute_window(&self, viewport: ViewportState) -> VisibleWindow;

    fn total_extent(&self) -> u64;

    fn item_count(&self) -> usize;

    /// Scroll offset that brings `index` to the start of the viewport, clamped so the viewport
    /// stays filled.
    fn scroll_offset_for_index(&self, index: usize, viewport_extent: u32) -> u64;

    fn max_scroll_offset(&self, viewport_extent: u32) -> u64 {
        extent::max_scroll_offset(self.total_extent(), viewport_extent)
    }

    fn validate(&self) -> Result<(), LayoutError>;
}

impl WindowLayout for LayoutParameters {
    fn compute_window(&self, viewport: ViewportState) -> VisibleWindow {
        crate::list::compute_window(viewport, self)
    }

    fn total_extent(&self) -> u64 {
        LayoutParameters::total_extent(self)
    }

    fn item_count(&self) -> usize {
        self.item_count
    }

    fn scroll_offset_for_index(&self, index: usize, viewport_extent: u32) -> u64 {
        crate::list::scroll_offset_for_index(index, viewport_extent, self)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        LayoutParameters::validate(self)
    }
}

impl WindowLayout for GridLayoutParameters {
    fn compute_window(&self, viewport: ViewportState) -> VisibleWindow {
        crate::grid::compute_window(viewport, self)
    }

    fn total_extent(&self) -> u64 {
        GridLayoutParameters::total_extent(self)
    }

    fn item_count(&self) -> usize {
        self.layout.item_count
    }

    fn scroll_offset_for_index(&self, index: usize, viewport_extent: u32) -> u64 {
        crate::grid::scroll_offset_for_index(index, viewport_extent, self)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        GridLayoutParameters::validate(self)
    }
}
