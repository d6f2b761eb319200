use alloc::sync::Arc;

/// A callback fired once per crossing into the "near end" region.
pub type NearEndCallback = Arc<dyn Fn() + Send + Sync>;

/// Returns `true` when the viewport end has reached `threshold` of the total extent.
///
/// Equivalent to `(scroll_offset + viewport_extent) / total_extent >= threshold`, evaluated
/// without dividing so empty content (`total_extent == 0`) counts as reached.
pub fn is_near_end(
    scroll_offset: u64,
    viewport_extent: u32,
    total_extent: u64,
    threshold: f64,
) -> bool {
    let reached = scroll_offset.saturating_add(viewport_extent as u64) as f64;
    reached >= total_extent as f64 * threshold
}

/// Rising-edge detector over [`is_near_end`], used to trigger incremental loading.
///
/// The callback fires on the transition into the near-end region only; staying past the
/// threshold does not fire again. Dropping back below the threshold (for example after more
/// items were appended) re-arms the detector.
#[derive(Clone)]
pub struct NearEndDetector {
    threshold: f64,
    past: bool,
    on_near_end: Option<NearEndCallback>,
}

impl NearEndDetector {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: sanitize_threshold(threshold),
            past: false,
            on_near_end: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = sanitize_threshold(threshold);
    }

    pub fn set_on_near_end(&mut self, on_near_end: Option<impl Fn() + Send + Sync + 'static>) {
        self.on_near_end = on_near_end.map(|f| Arc::new(f) as NearEndCallback);
    }

    pub fn clear_on_near_end(&mut self) {
        self.on_near_end = None;
    }

    /// Whether the last update was past the threshold.
    pub fn is_past(&self) -> bool {
        self.past
    }

    /// Feeds a new position. Returns `true` (and fires the callback) on a rising edge.
    pub fn update(&mut self, scroll_offset: u64, viewport_extent: u32, total_extent: u64) -> bool {
        let now_past = is_near_end(scroll_offset, viewport_extent, total_extent, self.threshold);
        let rising = now_past && !self.past;
        self.past = now_past;
        if rising {
            vdebug!(
                scroll_offset,
                viewport_extent,
                total_extent,
                "NearEndDetector: threshold crossed"
            );
            if let Some(f) = &self.on_near_end {
                f();
            }
        }
        rising
    }

    /// Re-arms the detector so the next update past the threshold fires again.
    pub fn reset(&mut self) {
        self.past = false;
    }
}

fn sanitize_threshold(threshold: f64) -> f64 {
    if !(0.0..=1.0).contains(&threshold) {
        vwarn!(threshold, "NearEndDetector: threshold outside 0.0..=1.0, clamping");
        debug_assert!(
            (0.0..=1.0).contains(&threshold),
            "near-end threshold must be within 0.0..=1.0 (got {threshold})"
        );
        // NaN falls through `clamp` unchanged; treat it as "never near the end".
        return if threshold.is_nan() {
            f64::INFINITY
        } else {
            threshold.clamp(0.0, 1.0)
        };
    }
    threshold
}

impl core::fmt::Debug for NearEndDetector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NearEndDetector")
            .field("threshold", &self.threshold)
            .field("past", &self.past)
            .finish_non_exhaustive()
    }
}
