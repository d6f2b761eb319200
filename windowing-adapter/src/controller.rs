use windowing::{ViewportState, VisibleWindow, WindowLayout, extent};

use crate::{CoordinatorOptions, NearEndDetector, ScrollCoordinator, SubscriptionId};

/// A framework-neutral controller that binds a list or grid layout to scroll events.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_extent` / `on_scroll` when UI events occur
/// - `tick(now_ms)` each frame/timer tick to deliver coalesced updates
/// - `unmount()` when the host surface goes away
///
/// Rendering reads [`Self::window`], which changes only when a coalesced update is delivered.
#[derive(Clone, Debug)]
pub struct Controller<L> {
    layout: L,
    viewport_extent: u32,
    coordinator: ScrollCoordinator,
    near_end: NearEndDetector,
    window: VisibleWindow,
}

impl<L: WindowLayout> Controller<L> {
    pub fn new(layout: L, viewport_extent: u32, options: CoordinatorOptions) -> Self {
        debug_assert!(layout.validate().is_ok(), "invalid layout");
        let window = layout.compute_window(ViewportState::new(0, viewport_extent));
        Self {
            layout,
            viewport_extent,
            coordinator: ScrollCoordinator::from_options(&options),
            near_end: NearEndDetector::new(options.near_end_threshold),
            window,
        }
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Replaces the layout and recomputes the window immediately.
    ///
    /// A change in item count (e.g. a page appended by incremental loading) re-arms the near-end
    /// detector.
    pub fn set_layout(&mut self, layout: L) {
        let count_changed = layout.item_count() != self.layout.item_count();
        self.layout = layout;
        if count_changed {
            self.near_end.reset();
        }
        self.window = self.live_window();
    }

    pub fn coordinator(&self) -> &ScrollCoordinator {
        &self.coordinator
    }

    pub fn near_end_detector(&self) -> &NearEndDetector {
        &self.near_end
    }

    pub fn viewport_extent(&self) -> u32 {
        self.viewport_extent
    }

    /// Current viewport snapshot, clamped to the current layout.
    pub fn viewport(&self) -> ViewportState {
        ViewportState::new(self.coordinator.offset(), self.viewport_extent)
            .clamped(self.layout.total_extent())
    }

    /// The window from the last delivered update.
    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    /// The window for the latest recorded offset, ignoring coalescing.
    pub fn live_window(&self) -> VisibleWindow {
        self.layout.compute_window(self.viewport())
    }

    /// Call this when the host's viewport is resized.
    ///
    /// The window is recomputed immediately and the near-end detector is re-evaluated, so a
    /// viewport grown past the threshold fires the callback without waiting for a scroll.
    pub fn on_viewport_extent(&mut self, viewport_extent: u32) {
        if self.viewport_extent == viewport_extent {
            return;
        }
        self.viewport_extent = viewport_extent;
        self.window = self.live_window();
        self.check_near_end();
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// The offset is clamped to the layout before it reaches the engine. Returns a window only if
    /// an overdue update was delivered on the way (see [`ScrollCoordinator::on_scroll`]).
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) -> Option<VisibleWindow> {
        let clamped = extent::clamp_scroll_offset(
            scroll_offset,
            self.layout.total_extent(),
            self.viewport_extent,
        );
        let flushed = self.coordinator.on_scroll(clamped, now_ms)?;
        Some(self.apply(flushed))
    }

    /// Advances the controller. Returns the new window when a coalesced update is delivered.
    pub fn tick(&mut self, now_ms: u64) -> Option<VisibleWindow> {
        let offset = self.coordinator.tick(now_ms)?;
        Some(self.apply(offset))
    }

    /// Jumps to `index` (no animation) and delivers the update immediately.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, now_ms: u64) -> u64 {
        let offset = self
            .layout
            .scroll_offset_for_index(index, self.viewport_extent);
        // An overdue update, if any, is superseded by the jump below.
        let _ = self.coordinator.on_scroll(offset, now_ms);
        if let Some(offset) = self.coordinator.flush() {
            self.apply(offset);
        }
        offset
    }

    /// Whether the current position is past the near-end threshold (level, not edge).
    pub fn is_near_end(&self) -> bool {
        let v = self.viewport();
        crate::is_near_end(
            v.scroll_offset,
            v.viewport_extent,
            self.layout.total_extent(),
            self.near_end.threshold(),
        )
    }

    /// Evaluates the near-end detector against the current position, firing the callback on a
    /// rising edge.
    ///
    /// Useful right after [`Self::set_layout`] when an appended page still leaves the viewport
    /// past the threshold.
    pub fn check_near_end(&mut self) -> bool {
        if self.coordinator.is_disposed() {
            return false;
        }
        let v = self.viewport();
        self.near_end
            .update(v.scroll_offset, v.viewport_extent, self.layout.total_extent())
    }

    pub fn set_on_near_end(&mut self, on_near_end: Option<impl Fn() + Send + Sync + 'static>) {
        self.near_end.set_on_near_end(on_near_end);
    }

    pub fn clear_on_near_end(&mut self) {
        self.near_end.clear_on_near_end();
    }

    pub fn subscribe(&mut self, f: impl Fn(u64) + Send + Sync + 'static) -> SubscriptionId {
        self.coordinator.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.coordinator.unsubscribe(id)
    }

    pub fn is_mounted(&self) -> bool {
        !self.coordinator.is_disposed()
    }

    /// Unmount cleanup: cancels any pending update and drops all callbacks.
    pub fn unmount(&mut self) {
        self.coordinator.dispose();
        self.clear_on_near_end();
    }

    fn apply(&mut self, offset: u64) -> VisibleWindow {
        // The layout or viewport may have changed since `offset` was recorded.
        let viewport =
            ViewportState::new(offset, self.viewport_extent).clamped(self.layout.total_extent());
        let window = self.layout.compute_window(viewport);
        self.near_end.update(
            viewport.scroll_offset,
            viewport.viewport_extent,
            window.total_extent,
        );
        self.window = window;
        window
    }
}
