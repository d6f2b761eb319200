//! A headless windowing engine for lists and grids of uniform items.
//!
//! Given a scroll offset, a viewport extent and a fixed item extent, the engine computes which
//! indexes must be materialized (plus overscan) and the total scrollable extent the host needs
//! so native scrollbars behave. Everything is O(1) in the item count.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the viewport extent along the scroll axis
//! - the (clamped) scroll offset
//! - the layout: item count, item extent, gap, overscan and, for grids, the column count
//!
//! For scroll-event coalescing and incremental-loading triggers, see the `windowing-adapter`
//! crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod layout;
mod types;
mod window;

pub mod extent;
pub mod grid;
pub mod list;


pub use error::LayoutError;
pub use layout::{
    DEFAULT_GRID_OVERSCAN, DEFAULT_LIST_OVERSCAN, GridLayoutParameters, LayoutParameters,
    WindowLayout,
};
pub use types::{GridCell, GridRow, IndexRange, ViewportState, WindowItem};
pub use window::VisibleWindow;
