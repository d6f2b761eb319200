//! Adapter utilities for the `windowing` crate.
//!
//! The `windowing` crate is pure arithmetic. This crate provides the small, framework-neutral
//! pieces with temporal behavior that a host needs around it:
//!
//! - Scroll-event coalescing (trailing-edge, adapter-driven timing)
//! - Rising-edge "near end" detection for incremental loading
//! - A [`Controller`] that binds a list or grid layout to both
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod coordinator;
mod near_end;
mod options;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use coordinator::{ScrollCallback, ScrollCoordinator, SubscriptionId};
pub use near_end::{NearEndCallback, NearEndDetector, is_near_end};
pub use options::{
    CoordinatorOptions, DEFAULT_COALESCE_WINDOW_MS, DEFAULT_NEAR_END_THRESHOLD, OptionsError,
};
