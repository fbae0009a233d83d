//! Statistical sampling
//!
//! Keeps the overall shape of smoothly varying series. The series is cut into
//! contiguous groups of `ceil(n / target)` points; each group contributes the
//! point closest to its mean, plus its minimum and maximum when they stray far
//! enough from the mean that dropping them would flatten a real excursion.
//!
//! ```text
//! group:   ·  ·  ▲  ·  ·        mean ─ ─ ─
//!          representative = point nearest the mean
//!          max ▲ kept: |max - mean| > 10% of |rep - mean|
//! ```
//!
//! The first and last points are always emitted. The candidate set can
//! exceed the budget (up to three points per group); the post-processor thins
//! it while keeping both ends.

use crate::constants::sampling::EXTREME_KEEP_RATIO;
use crate::errors::OptimizeResult;
use crate::traits::Downsample;
use crate::types::{OptimizedPoint, StrategyTag};

use super::utils::GroupStats;

/// Mean-representative sampling over fixed-size index groups
#[derive(Debug, Clone, Copy)]
pub struct StatisticalSampling {
    target: usize,
}

impl StatisticalSampling {
    /// Sample down to roughly `target` points
    pub fn new(target: usize) -> Self {
        Self { target }
    }

    /// Points per group for a series of `len` points
    pub fn group_size(&self, len: usize) -> usize {
        len.div_ceil(self.target.max(1)).max(1)
    }
}

impl Downsample for StatisticalSampling {
    fn tag(&self) -> StrategyTag {
        StrategyTag::StatisticalSampling
    }

    fn sample(&self, points: &[OptimizedPoint]) -> OptimizeResult<Vec<OptimizedPoint>> {
        let n = points.len();
        if n <= self.target || n == 0 {
            return Ok(points.to_vec());
        }

        let tag = self.tag().as_str();
        let mut out = Vec::with_capacity(self.target * 3 + 2);
        out.push(points[0]);

        for group in points.chunks(self.group_size(n)) {
            let stats = GroupStats::of(group, tag)?;
            let rep = stats.representative;
            out.push(rep);

            let keep_beyond = EXTREME_KEEP_RATIO * (rep.value - stats.mean).abs();
            for extreme in [stats.min, stats.max] {
                if extreme.timestamp != rep.timestamp
                    && (extreme.value - stats.mean).abs() > keep_beyond
                {
                    out.push(extreme);
                }
            }
        }

        out.push(points[n - 1]);
        Ok(out)
    }
}
