//! Sliding-window strategy for live dashboards
//!
//! Keeps only the most recent `window` readings. Volume, span and shape are
//! ignored: live views need a hard bound on payload size per refresh.

use crate::errors::OptimizeResult;
use crate::traits::Downsample;
use crate::types::{OptimizedPoint, StrategyTag};

/// Most recent `window` points, ascending
#[derive(Debug, Clone, Copy)]
pub struct SlidingWindow {
    window: usize,
}

impl SlidingWindow {
    /// Keep the latest `window` points
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl Downsample for SlidingWindow {
    fn tag(&self) -> StrategyTag {
        StrategyTag::SlidingWindow
    }

    fn sample(&self, points: &[OptimizedPoint]) -> OptimizeResult<Vec<OptimizedPoint>> {
        let start = points.len().saturating_sub(self.window);
        Ok(points[start..].to_vec())
    }
}
