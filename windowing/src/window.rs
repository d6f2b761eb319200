use alloc::vec::Vec;

use crate::extent;
use crate::{GridCell, GridRow, IndexRange, WindowItem};

/// The set of items a host must materialize for one viewport snapshot.
///
/// Windows are values: each recomputation produces a fresh one, so two computations with equal
/// inputs compare equal. For lists, `rows == items` and `column_count == 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub items: IndexRange,
    pub rows: IndexRange,
    pub column_count: usize,
    /// Extent of one item (list) or one row (grid) in the scroll axis.
    pub item_extent: u32,
    pub gap: u32,
    /// Extent of the whole scrollable content, used to size the host's scroll container.
    pub total_extent: u64,
}

impl VisibleWindow {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn start_index(&self) -> usize {
        self.items.start_index
    }

    /// Exclusive end of the materialized items.
    pub fn end_index(&self) -> usize {
        self.items.end_index
    }

    pub fn last_index(&self) -> Option<usize> {
        self.items.last_index()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.items.contains(index)
    }

    pub fn row_for_index(&self, index: usize) -> usize {
        index / self.column_count.max(1)
    }

    pub fn offset_for_row(&self, row: usize) -> u64 {
        extent::offset_for_index(row, self.item_extent, self.gap)
    }

    /// Absolute offset of the row holding `index`. Not bounds-checked.
    pub fn offset_for_index(&self, index: usize) -> u64 {
        self.offset_for_row(self.row_for_index(index))
    }

    /// Placement of `index`. Not bounds-checked.
    pub fn item(&self, index: usize) -> WindowItem {
        let columns = self.column_count.max(1);
        let row = index / columns;
        WindowItem {
            index,
            row,
            column: index % columns,
            offset: self.offset_for_row(row),
            extent: self.item_extent,
        }
    }

    /// Iterates over the materialized items in ascending index order without allocations.
    pub fn for_each_item(&self, mut f: impl FnMut(WindowItem)) {
        for index in self.items.iter() {
            f(self.item(index));
        }
    }

    /// Iterates over the materialized rows. For lists this yields one row per item.
    pub fn for_each_row(&self, mut f: impl FnMut(GridRow)) {
        if self.is_empty() {
            return;
        }
        let columns = self.column_count.max(1);
        for row in self.rows.iter() {
            let start = row.saturating_mul(columns);
            let end = start.saturating_add(columns).min(self.items.end_index);
            if start >= end {
                continue;
            }
            f(GridRow {
                row,
                offset: self.offset_for_row(row),
                extent: self.item_extent,
                items: IndexRange::new(start, end),
            });
        }
    }

    /// Iterates over every column slot of the materialized rows.
    ///
    /// Slots past the last item of a partially filled final row are reported with
    /// `index == None` so the host can render placeholders.
    pub fn for_each_cell(&self, mut f: impl FnMut(GridCell)) {
        let columns = self.column_count.max(1);
        self.for_each_row(|row| {
            for column in 0..columns {
                let index = row.items.start_index + column;
                f(GridCell {
                    row: row.row,
                    column,
                    index: row.items.contains(index).then_some(index),
                });
            }
        });
    }

    /// Collects the materialized items into `out` (clears `out` first).
    ///
    /// Prefer [`Self::for_each_item`] with a reused scratch buffer on hot paths.
    pub fn collect_items(&self, out: &mut Vec<WindowItem>) {
        out.clear();
        out.reserve(self.len());
        self.for_each_item(|it| out.push(it));
    }
}
