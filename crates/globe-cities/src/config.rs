//! Selector settings.

use serde::{Deserialize, Serialize};

use crate::error::{InvalidArgument, SelectResult};

/// Number of cities placed on the world by default.
pub const DEFAULT_TARGET_COUNT: usize = 8;
/// Default minimum distance between two cities, in mesh units.
pub const DEFAULT_MIN_SEPARATION: f32 = 0.3;
/// Rejected draws allowed per vertex before sampling is declared infeasible.
pub const DEFAULT_REJECTION_FACTOR: usize = 64;

/// Settings for a [`Selector`](crate::Selector).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Number of samples to place.
    pub target_count: usize,
    /// Minimum Euclidean distance between any two samples.
    pub min_separation: f32,
    /// Rejected draws allowed per vertex in the buffer.
    pub rejection_factor: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
            min_separation: DEFAULT_MIN_SEPARATION,
            rejection_factor: DEFAULT_REJECTION_FACTOR,
        }
    }
}

impl SelectorConfig {
    /// Settings for `target_count` samples at `min_separation`, with the
    /// default rejection factor.
    #[must_use]
    pub fn new(target_count: usize, min_separation: f32) -> Self {
        Self {
            target_count,
            min_separation,
            ..Self::default()
        }
    }

    /// Check the target count and separation.
    pub fn validate(&self) -> SelectResult<()> {
        if self.target_count == 0 {
            return Err(InvalidArgument::ZeroTargetCount.into());
        }
        if self.min_separation.is_nan() || self.min_separation < 0.0 {
            return Err(InvalidArgument::Separation(self.min_separation).into());
        }
        Ok(())
    }

    /// Rejected draws allowed for a buffer of `vector_count` vertices.
    ///
    /// Always at least one.
    #[must_use]
    pub fn rejection_budget(&self, vector_count: usize) -> usize {
        self.rejection_factor.saturating_mul(vector_count).max(1)
    }
}
