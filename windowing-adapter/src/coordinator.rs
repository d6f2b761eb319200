use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::CoordinatorOptions;

/// A callback notified with the latest coalesced scroll offset.
pub type ScrollCallback = Arc<dyn Fn(u64) + Send + Sync>;

/// Handle returned by [`ScrollCoordinator::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Turns a high-frequency scroll signal into a coalesced notification stream.
///
/// The coordinator holds no timers of its own. Adapters drive it by calling:
/// - `on_scroll(offset, now_ms)` for every raw scroll event
/// - `tick(now_ms)` from their frame loop or timer
///
/// The latest offset is recorded immediately, so [`Self::offset`] is never stale. Notifications
/// are trailing-edge debounced: each scroll event (re)schedules the single pending deadline at
/// `now_ms + coalesce_window_ms`, and offsets superseded before it elapses are dropped.
#[derive(Clone)]
pub struct ScrollCoordinator {
    coalesce_window_ms: u64,
    offset: u64,
    deadline_ms: Option<u64>,
    subscribers: Vec<(SubscriptionId, ScrollCallback)>,
    next_id: u64,
    disposed: bool,
}

impl ScrollCoordinator {
    pub fn new(coalesce_window_ms: u64) -> Self {
        Self {
            coalesce_window_ms,
            offset: 0,
            deadline_ms: None,
            subscribers: Vec::new(),
            next_id: 0,
            disposed: false,
        }
    }

    pub fn from_options(options: &CoordinatorOptions) -> Self {
        Self::new(options.coalesce_window_ms)
    }

    /// The most recently recorded offset (propagated or not).
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn coalesce_window_ms(&self) -> u64 {
        self.coalesce_window_ms
    }

    /// Takes effect from the next scroll event; a pending deadline is kept as scheduled.
    pub fn set_coalesce_window_ms(&mut self, coalesce_window_ms: u64) {
        self.coalesce_window_ms = coalesce_window_ms;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn pending_deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn subscribe(&mut self, f: impl Fn(u64) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Arc::new(f)));
        id
    }

    /// Returns `true` if `id` was subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Records a raw scroll offset and (re)schedules the pending notification.
    ///
    /// If the previous deadline had already elapsed without a `tick`, that notification is
    /// delivered first and its offset returned.
    pub fn on_scroll(&mut self, raw_offset: u64, now_ms: u64) -> Option<u64> {
        let flushed = self.tick(now_ms);
        self.offset = raw_offset;
        if self.disposed {
            return flushed;
        }
        let deadline = now_ms.saturating_add(self.coalesce_window_ms);
        vtrace!(raw_offset, now_ms, deadline, "ScrollCoordinator::on_scroll");
        self.deadline_ms = Some(deadline);
        flushed
    }

    /// Delivers the pending notification once its deadline has elapsed.
    ///
    /// Returns the propagated offset, or `None` when nothing was due.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => self.flush(),
            _ => None,
        }
    }

    /// Delivers the pending notification immediately, regardless of its deadline.
    pub fn flush(&mut self) -> Option<u64> {
        self.deadline_ms.take()?;
        if self.disposed {
            return None;
        }
        let offset = self.offset;
        vtrace!(offset, subscribers = self.subscribers.len(), "ScrollCoordinator::flush");
        for (_, f) in &self.subscribers {
            f(offset);
        }
        Some(offset)
    }

    /// Drops the pending notification without delivering it.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// Unmount cleanup: cancels the pending notification and drops every subscriber.
    ///
    /// Afterwards offsets are still recorded but never propagated.
    pub fn dispose(&mut self) {
        vdebug!(
            pending = self.deadline_ms.is_some(),
            subscribers = self.subscribers.len(),
            "ScrollCoordinator::dispose"
        );
        self.cancel();
        self.subscribers.clear();
        self.disposed = true;
    }
}

impl Default for ScrollCoordinator {
    fn default() -> Self {
        Self::from_options(&CoordinatorOptions::default())
    }
}

impl core::fmt::Debug for ScrollCoordinator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollCoordinator")
            .field("coalesce_window_ms", &self.coalesce_window_ms)
            .field("offset", &self.offset)
            .field("deadline_ms", &self.deadline_ms)
            .field("subscribers", &self.subscribers.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}
