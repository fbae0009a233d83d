//! Pass-through strategy
//!
//! Used when the series already fits the budget. Every point survives.

use crate::errors::OptimizeResult;
use crate::traits::Downsample;
use crate::types::{OptimizedPoint, StrategyTag};

/// Returns the series unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Downsample for PassThrough {
    fn tag(&self) -> StrategyTag {
        StrategyTag::None
    }

    fn sample(&self, points: &[OptimizedPoint]) -> OptimizeResult<Vec<OptimizedPoint>> {
        Ok(points.to_vec())
    }
}
