//! Public entry point of the downsampling engine
//!
//! ## Flow
//!
//! ```text
//! &[RawSample] ──copy+sort+dedupe──► Vec<OptimizedPoint>
//!                                   │
//!                          profiler::select ──► Plan
//!                                   │
//!                            Plan::execute ──► candidates
//!                                   │
//!                         postprocess::normalize ──► OptimizationResult
//! ```
//!
//! The caller's slice is only read. Sorting happens on a private copy, once,
//! so every strategy sees chronological input regardless of how the storage
//! layer returned it. Repeated timestamps collapse to their first reading
//! before profiling, so the profiler and the strategies only see distinct
//! instants. `original_count` still reports every raw sample.
//!
//! ## Usage Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use sensorlens_core::{Optimizer, OptimizationConfig, RawSample, StrategyTag};
//!
//! let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
//! let samples: Vec<_> = (0..5)
//!     .map(|i| RawSample::new(start + Duration::seconds(30 * i), 20.0 + i as f64, "temp-1"))
//!     .collect();
//!
//! let result = Optimizer::new().optimize(&samples, &OptimizationConfig::new(200))?;
//! assert_eq!(result.strategy, StrategyTag::None);
//! assert_eq!(result.optimized_count, 5);
//! # Ok::<(), sensorlens_core::OptimizeError>(())
//! ```

use crate::config::OptimizationConfig;
use crate::errors::OptimizeResult;
use crate::postprocess::normalize;
use crate::profiler::{self, Plan};
use crate::types::{OptimizationResult, OptimizedPoint, RawSample};

/// Stateless optimizer, safe to share across threads
#[derive(Debug, Clone, Copy, Default)]
pub struct Optimizer;

impl Optimizer {
    /// Create an optimizer
    pub fn new() -> Self {
        Self
    }

    /// Reduce one sensor's series to a chart-sized sample
    ///
    /// Never reorders or modifies `samples`.
    pub fn optimize(
        &self,
        samples: &[RawSample],
        config: &OptimizationConfig,
    ) -> OptimizeResult<OptimizationResult> {
        if samples.is_empty() {
            return Ok(OptimizationResult::empty());
        }

        let points = sorted_points(samples);
        let plan = profiler::select(&points, config);
        let data = self.run(&plan, &points)?;

        Ok(OptimizationResult::new(data, samples.len(), plan.tag()))
    }

    /// Execute an already selected plan on a sorted series
    pub fn run(&self, plan: &Plan, points: &[OptimizedPoint]) -> OptimizeResult<Vec<OptimizedPoint>> {
        let budget = plan.budget();
        if budget == 0 || points.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = plan.execute(points)?;
        let candidate_count = candidates.len();
        let data = normalize(candidates, budget);

        log::debug!(
            "{}: {} points -> {} candidates -> {} kept (budget {})",
            plan.tag(),
            points.len(),
            candidate_count,
            data.len(),
            budget
        );
        Ok(data)
    }
}

/// Private chronological copy of the caller's samples, one point per instant
fn sorted_points(samples: &[RawSample]) -> Vec<OptimizedPoint> {
    let mut points: Vec<OptimizedPoint> = samples.iter().map(OptimizedPoint::from).collect();
    points.sort_by_key(|p| p.timestamp);
    points.dedup_by_key(|p| p.timestamp);
    points
}

/// Shorthand for [`Optimizer::optimize`]
pub fn optimize(
    samples: &[RawSample],
    config: &OptimizationConfig,
) -> OptimizeResult<OptimizationResult> {
    Optimizer::new().optimize(samples, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceType;
    use crate::time::from_millis;
    use crate::types::StrategyTag;

    fn samples(stamps: &[i64]) -> Vec<RawSample> {
        stamps
            .iter()
            .map(|&ms| RawSample::new(from_millis(ms), ms as f64, "s1"))
            .collect()
    }

    #[test]
    fn empty_input_is_none() {
        let result = optimize(&[], &OptimizationConfig::new(100)).unwrap();
        assert_eq!(result, OptimizationResult::empty());
    }

    #[test]
    fn input_is_not_reordered() {
        let input = samples(&[3000, 1000, 2000]);
        let before = input.clone();

        let result = optimize(&input, &OptimizationConfig::new(100)).unwrap();

        assert_eq!(input, before);
        let stamps: Vec<_> = result.data.iter().map(|p| p.millis()).collect();
        assert_eq!(stamps, vec![1000, 2000, 3000]);
    }

    #[test]
    fn duplicate_timestamps_collapse() {
        let input = samples(&[1000, 1000, 2000]);
        let result = optimize(&input, &OptimizationConfig::new(100)).unwrap();

        assert_eq!(result.original_count, 3);
        assert_eq!(result.optimized_count, 2);
        assert_eq!(result.strategy, StrategyTag::None);
    }

    #[test]
    fn live_window_counts_distinct_instants() {
        // 200 instants, each reported twice
        let stamps: Vec<i64> = (0..200).flat_map(|i| [i * 1000, i * 1000]).collect();
        let input = samples(&stamps);
        let config = OptimizationConfig::new(100).with_live_window(50);

        let result = optimize(&input, &config).unwrap();

        assert_eq!(result.strategy, StrategyTag::SlidingWindow);
        assert_eq!(result.original_count, 400);
        assert_eq!(result.optimized_count, 50);
        let expected: Vec<i64> = (150..200).map(|i| i * 1000).collect();
        let got: Vec<i64> = result.data.iter().map(|p| p.millis()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn duplicates_do_not_inflate_profile_size() {
        // 600 distinct instants doubled: fits a 700 budget once collapsed
        let stamps: Vec<i64> = (0..600).flat_map(|i| [i * 1000, i * 1000]).collect();
        let result = optimize(&samples(&stamps), &OptimizationConfig::new(700)).unwrap();

        assert_eq!(result.strategy, StrategyTag::None);
        assert_eq!(result.optimized_count, 600);
    }

    #[test]
    fn huge_mobile_target_does_not_overflow() {
        let input = samples(&(0..20).map(|i| i * 1000).collect::<Vec<_>>());
        let config = OptimizationConfig::new(usize::MAX / 10).with_device(DeviceType::Mobile);

        let result = optimize(&input, &config).unwrap();
        assert_eq!(result.strategy, StrategyTag::None);
        assert_eq!(result.optimized_count, 20);
    }

    #[test]
    fn zero_budget_yields_no_points() {
        let input = samples(&[1000, 2000]);
        let result = optimize(&input, &OptimizationConfig::new(0)).unwrap();

        assert!(result.data.is_empty());
        assert_eq!(result.original_count, 2);
    }

    #[test]
    fn single_sample_passes_through() {
        let result = optimize(&samples(&[42]), &OptimizationConfig::new(50)).unwrap();
        assert_eq!(result.strategy, StrategyTag::None);
        assert_eq!(result.data.len(), 1);
    }
}
