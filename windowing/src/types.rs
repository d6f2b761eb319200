use crate::LayoutError;

/// A snapshot of the host's scroll container along the windowed axis.
///
/// The host owns the live state and passes a copy into every window computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: u64,
    pub viewport_extent: u32,
}

impl ViewportState {
    pub fn new(scroll_offset: u64, viewport_extent: u32) -> Self {
        Self {
            scroll_offset,
            viewport_extent,
        }
    }

    /// Returns the end of the viewport in the scroll axis (exclusive).
    pub fn end(&self) -> u64 {
        self.scroll_offset
            .saturating_add(self.viewport_extent as u64)
    }

    /// Applies the host clamping contract: the offset is limited to
    /// `total_extent - viewport_extent` (or `0` when the content fits).
    pub fn clamped(self, total_extent: u64) -> Self {
        Self {
            scroll_offset: crate::extent::clamp_scroll_offset(
                self.scroll_offset,
                total_extent,
                self.viewport_extent,
            ),
            viewport_extent: self.viewport_extent,
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.viewport_extent == 0 {
            return Err(LayoutError::ZeroViewportExtent);
        }
        Ok(())
    }
}

/// A half-open range of indexes (`end_index` is exclusive).
///
/// An empty range means "render nothing".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl IndexRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    /// The last index in the range, if any.
    pub fn last_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }

    /// The range as `start..=last`, or `None` when empty.
    pub fn as_inclusive(&self) -> Option<core::ops::RangeInclusive<usize>> {
        self.last_index().map(|last| self.start_index..=last)
    }

    pub fn iter(&self) -> core::ops::Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }
}

/// A materialized item of a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub index: usize,
    /// Row holding the item. Equal to `index` for lists.
    pub row: usize,
    /// Column holding the item. Always `0` for lists.
    pub column: usize,
    /// Absolute start offset of the item's row in the scroll axis.
    pub offset: u64,
    /// Extent in the scroll axis (excludes `gap`).
    pub extent: u32,
}

impl WindowItem {
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.extent as u64)
    }
}

/// A materialized row of a grid window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRow {
    pub row: usize,
    pub offset: u64,
    pub extent: u32,
    /// Items placed in this row. Shorter than `column_count` only on a partial final row.
    pub items: IndexRange,
}

/// A column slot of a grid row.
///
/// `index` is `None` for the placeholder slots that pad a partially filled final row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
    pub index: Option<usize>,
}
