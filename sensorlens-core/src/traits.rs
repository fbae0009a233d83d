//! Core trait for sampling strategies
//!
//! Every strategy turns a chronologically sorted series into candidate
//! points. Candidates may be unsorted, duplicated or over budget; the
//! post-processor normalizes them afterwards.

use crate::errors::OptimizeResult;
use crate::types::{OptimizedPoint, StrategyTag};

/// A downsampling strategy
pub trait Downsample {
    /// Tag reported in the result envelope
    fn tag(&self) -> StrategyTag;

    /// Produce candidate points from `points`
    ///
    /// `points` is sorted ascending by timestamp and non-empty.
    fn sample(&self, points: &[OptimizedPoint]) -> OptimizeResult<Vec<OptimizedPoint>>;
}
