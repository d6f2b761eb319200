/// Coalescing window used by [`CoordinatorOptions::default`].
pub const DEFAULT_COALESCE_WINDOW_MS: u64 = 10;

/// Near-end threshold used by [`CoordinatorOptions::default`].
pub const DEFAULT_NEAR_END_THRESHOLD: f64 = 0.8;

/// Configuration for [`crate::ScrollCoordinator`] and [`crate::Controller`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinatorOptions {
    /// Quiet period after the last scroll event before subscribers are notified.
    pub coalesce_window_ms: u64,
    /// Fraction of the total extent (`0.0..=1.0`) the viewport end must reach to count as
    /// "near the end".
    pub near_end_threshold: f64,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            coalesce_window_ms: DEFAULT_COALESCE_WINDOW_MS,
            near_end_threshold: DEFAULT_NEAR_END_THRESHOLD,
        }
    }
}

impl CoordinatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coalesce_window_ms(mut self, coalesce_window_ms: u64) -> Self {
        self.coalesce_window_ms = coalesce_window_ms;
        self
    }

    pub fn with_near_end_threshold(mut self, near_end_threshold: f64) -> Self {
        self.near_end_threshold = near_end_threshold;
        self
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(0.0..=1.0).contains(&self.near_end_threshold) {
            return Err(OptionsError::ThresholdOutOfRange(self.near_end_threshold));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("near-end threshold must be within 0.0..=1.0 (got {0})")]
    ThresholdOutOfRange(f64),
}
