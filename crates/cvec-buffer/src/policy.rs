//! Buffer growth configuration.

use cvec_core::{Result, VectorError};

/// Capacity growth rule for a [`Buffer`](crate::Buffer).
///
/// Validated at construction; immutable afterwards. The default policy
/// doubles the capacity with a floor of four slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    min_capacity: usize,
    growth_factor: usize,
}

impl GrowthPolicy {
    /// Smallest capacity a growing buffer is given.
    pub const DEFAULT_MIN_CAPACITY: usize = 4;

    /// Multiplier applied to the current capacity on growth.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a validated policy.
    ///
    /// `growth_factor` must be at least 2 (anything smaller loses the
    /// amortized O(1) append guarantee) and `min_capacity` at least 1.
    pub fn new(min_capacity: usize, growth_factor: usize) -> Result<Self> {
        if min_capacity == 0 {
            return Err(VectorError::InvalidPolicy {
                reason: "min_capacity must be at least 1".into(),
            });
        }
        if growth_factor < 2 {
            return Err(VectorError::InvalidPolicy {
                reason: format!("growth_factor must be at least 2, got {growth_factor}"),
            });
        }
        Ok(Self {
            min_capacity,
            growth_factor,
        })
    }

    /// Floor applied when growing from an empty or small buffer.
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Multiplier applied to the current capacity.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Capacity to grow to when `needed` slots are required and
    /// `current` are available.
    ///
    /// Returns `current` unchanged when it already suffices. Otherwise
    /// the result is the larger of `needed` and
    /// `growth_factor × current`, with a floor of `min_capacity`. If
    /// the multiplication would overflow, falls back to exact fit.
    pub fn next_capacity(&self, current: usize, needed: usize) -> usize {
        if needed <= current {
            return current;
        }
        let grown = current.checked_mul(self.growth_factor).unwrap_or(needed);
        grown.max(needed).max(self.min_capacity)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }
}
