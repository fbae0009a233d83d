//! Smart time-bucket aggregation for long spans
//!
//! For spans over a day, sampling by index hides gaps and bunches points
//! where the sensor happened to report more often. This strategy groups by
//! wall-clock time instead, while still honouring the caller's point budget.
//!
//! ## Algorithm
//!
//! 1. Ideal width `W = max(span / target, 1 minute)`.
//! 2. Snap `W` to the nearest entry of
//!    [`BUCKET_WIDTH_LADDER_MS`](crate::constants::time::BUCKET_WIDTH_LADDER_MS)
//!    so boundaries land on familiar gridlines (ties go to the smaller width).
//! 3. Bucket key is `floor(ts / W) * W`.
//! 4. Too many buckets: pick buckets by even stride, one mean-closest point
//!    each.
//! 5. Otherwise every bucket gets `budget / buckets` slots: the mean-closest
//!    point, then outlying extremes, then evenly spaced raw points.
//! 6. The first and last raw points are added unless an emitted point already
//!    sits within half a bucket of them.
//!
//! Two slots of the budget are held back for step 6, so boundary points never
//! push the output over `target`.
//!
//! ## Example
//!
//! ```text
//! 30 days, target 800 → ideal 54 min → snapped to 1 h → 720 buckets
//! 720 ≤ 798 → one representative per hour, plus boundary points
//! ```

use crate::constants::sampling::EXTREME_KEEP_RATIO;
use crate::constants::time::{BUCKET_WIDTH_LADDER_MS, MIN_BUCKET_WIDTH_MS};
use crate::errors::OptimizeResult;
use crate::time::bucket_start;
use crate::traits::Downsample;
use crate::types::{OptimizedPoint, StrategyTag};

use super::utils::{even_indices, GroupStats};

/// Slots reserved for the first and last raw point
const BOUNDARY_SLOTS: usize = 2;

/// Snap an ideal width to the nearest ladder entry
pub fn snap_to_ladder(ideal_ms: i64) -> i64 {
    BUCKET_WIDTH_LADDER_MS
        .iter()
        .copied()
        .min_by_key(|width| (width - ideal_ms).abs())
        .unwrap_or(MIN_BUCKET_WIDTH_MS)
}

/// Bucket width for a series spanning `span_ms` with a budget of `target`
pub fn bucket_width_for(span_ms: i64, target: usize) -> i64 {
    let ideal = (span_ms / target.max(1) as i64).max(MIN_BUCKET_WIDTH_MS);
    snap_to_ladder(ideal)
}

/// Time-bucketed sampling
#[derive(Debug, Clone, Copy)]
pub struct TimeBucketAggregation {
    target: usize,
}

impl TimeBucketAggregation {
    /// Aggregate down to at most `target` points
    pub fn new(target: usize) -> Self {
        Self { target }
    }

    /// Bucket width this strategy would use for `points`
    pub fn width_for(&self, points: &[OptimizedPoint]) -> i64 {
        match (points.first(), points.last()) {
            (Some(first), Some(last)) => bucket_width_for(last.millis() - first.millis(), self.target),
            _ => MIN_BUCKET_WIDTH_MS,
        }
    }

    /// One mean-closest point from each of `budget` evenly strided buckets
    fn stride_buckets(
        &self,
        buckets: &[&[OptimizedPoint]],
        budget: usize,
        out: &mut Vec<OptimizedPoint>,
    ) -> OptimizeResult<()> {
        let tag = self.tag().as_str();
        for idx in even_indices(buckets.len(), budget) {
            out.push(GroupStats::of(buckets[idx], tag)?.representative);
        }
        Ok(())
    }

    /// Up to `slots` points from one bucket
    fn fill_bucket(
        &self,
        bucket: &[OptimizedPoint],
        slots: usize,
        out: &mut Vec<OptimizedPoint>,
    ) -> OptimizeResult<()> {
        let stats = GroupStats::of(bucket, self.tag().as_str())?;
        let mut picked = Vec::with_capacity(slots);
        picked.push(stats.representative);

        let cutoff = EXTREME_KEEP_RATIO * stats.spread();
        for extreme in [stats.min, stats.max] {
            if picked.len() < slots
                && (extreme.value - stats.mean).abs() > cutoff
                && !picked.iter().any(|p| p.timestamp == extreme.timestamp)
            {
                picked.push(extreme);
            }
        }

        for idx in even_indices(bucket.len(), slots) {
            if picked.len() >= slots {
                break;
            }
            let candidate = bucket[idx];
            if !picked.iter().any(|p| p.timestamp == candidate.timestamp) {
                picked.push(candidate);
            }
        }

        out.extend(picked);
        Ok(())
    }
}

impl Downsample for TimeBucketAggregation {
    fn tag(&self) -> StrategyTag {
        StrategyTag::TimeBucketAggregation
    }

    fn sample(&self, points: &[OptimizedPoint]) -> OptimizeResult<Vec<OptimizedPoint>> {
        let n = points.len();
        if n <= self.target || n == 0 {
            return Ok(points.to_vec());
        }

        let first = points[0];
        let last = points[n - 1];
        let width = self.width_for(points);

        let buckets: Vec<&[OptimizedPoint]> = points
            .chunk_by(|a, b| bucket_start(a.millis(), width) == bucket_start(b.millis(), width))
            .collect();

        let budget = self.target.saturating_sub(BOUNDARY_SLOTS);
        log::trace!(
            "time-bucket-aggregation: width {}ms, {} buckets, budget {}",
            width,
            buckets.len(),
            budget
        );

        let mut out = Vec::with_capacity(self.target);
        if budget > 0 {
            if buckets.len() > budget {
                self.stride_buckets(&buckets, budget, &mut out)?;
            } else {
                let slots = budget / buckets.len();
                for bucket in &buckets {
                    self.fill_bucket(bucket, slots, &mut out)?;
                }
            }
        }

        let half_width = width / 2;
        for boundary in [first, last] {
            let covered = out
                .iter()
                .any(|p| (p.millis() - boundary.millis()).abs() < half_width);
            if !covered {
                out.push(boundary);
            }
        }

        Ok(out)
    }
}
