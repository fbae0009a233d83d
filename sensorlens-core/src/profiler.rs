//! Series profiling and strategy selection
//!
//! The profiler looks at a series once (size, time span, shape) and returns a
//! [`Plan`]: a tagged union naming exactly one strategy and its budget. It is
//! a pure function of its inputs, so it can be tested without running any
//! strategy.
//!
//! ## Decision Table
//!
//! ```text
//! live mode enabled                        → SlidingWindow (overrides all)
//! size ≤ 1000 and size ≤ adjusted target   → PassThrough
//! size ≤ 1000                              → Statistical
//! size > 1000, span ≤ 24h, spiky           → Lod
//! size > 1000, span ≤ 24h, not spiky       → Statistical
//! size > 1000, span > 24h                  → TimeBucket
//! ```
//!
//! The adjusted target is the request budget after the device adjustment
//! (mobile clients get 80%).
//!
//! ## Shape Classification
//!
//! For series of at least ten points, with `d[i] = |v[i] - v[i-1]|`:
//! - `change_ratio`: share of steps where `d[i] > 2·d[i-1]` or `d[i] < 0.5·d[i-1]`
//! - `avg_variation`: mean of `d`
//! - `range`: `max(v) - min(v)`
//!
//! Spiky when `change_ratio > 0.30` or `avg_variation > 10%` of range,
//! gradual when `avg_variation < 1%` of range, smooth otherwise.

use crate::config::OptimizationConfig;
use crate::constants::sampling::{
    GRADUAL_VARIATION_RATIO, MIN_POINTS_FOR_SHAPE, PASSTHROUGH_MAX_POINTS, RATE_SHIFT_DOWN,
    RATE_SHIFT_UP, SHORT_SPAN_MAX_HOURS, SPIKY_CHANGE_RATIO, SPIKY_VARIATION_RATIO,
};
use crate::errors::OptimizeResult;
use crate::strategies::{
    LodSampling, PassThrough, SlidingWindow, StatisticalSampling, TimeBucketAggregation,
};
use crate::strategies::utils::value_range;
use crate::time::{ms_to_hours, span_ms};
use crate::traits::Downsample;
use crate::types::{OptimizedPoint, StrategyTag};

/// Coarse label for how a series moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Moderate, regular movement
    Smooth,
    /// Slow drift relative to the range
    Gradual,
    /// Abrupt rate changes or large steps
    Spiky,
}

/// Raw numbers behind a [`Shape`] verdict
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeMetrics {
    /// Share of steps that jump or drop abruptly against the previous step
    pub change_ratio: f64,
    /// Mean absolute step between neighbours
    pub avg_variation: f64,
    /// max - min of the values
    pub range: f64,
}

impl ShapeMetrics {
    /// Measure a series (`None` below [`MIN_POINTS_FOR_SHAPE`] points)
    pub fn measure(points: &[OptimizedPoint]) -> Option<Self> {
        if points.len() < MIN_POINTS_FOR_SHAPE {
            return None;
        }

        let diffs: Vec<f64> = points
            .windows(2)
            .map(|w| (w[1].value - w[0].value).abs())
            .collect();

        let shifts = diffs
            .windows(2)
            .filter(|w| w[1] > RATE_SHIFT_UP * w[0] || w[1] < RATE_SHIFT_DOWN * w[0])
            .count();
        let comparisons = diffs.len() - 1;

        Some(Self {
            change_ratio: shifts as f64 / comparisons as f64,
            avg_variation: diffs.iter().sum::<f64>() / diffs.len() as f64,
            range: value_range(points),
        })
    }

    /// Label these metrics
    pub fn shape(&self) -> Shape {
        if self.change_ratio > SPIKY_CHANGE_RATIO
            || self.avg_variation > SPIKY_VARIATION_RATIO * self.range
        {
            Shape::Spiky
        } else if self.avg_variation < GRADUAL_VARIATION_RATIO * self.range {
            Shape::Gradual
        } else {
            Shape::Smooth
        }
    }
}

/// Classify a series; short series default to [`Shape::Smooth`]
pub fn classify_shape(points: &[OptimizedPoint]) -> Shape {
    ShapeMetrics::measure(points).map_or(Shape::Smooth, |m| m.shape())
}

/// Everything the decision table looks at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    /// Number of distinct points
    pub size: usize,
    /// Time from first to last point
    pub span_hours: f64,
    /// Classified shape
    pub shape: Shape,
    /// Budget after the device adjustment
    pub adjusted_target: usize,
}

impl Profile {
    /// Profile sorted `points` under `config`
    pub fn of(points: &[OptimizedPoint], config: &OptimizationConfig) -> Self {
        let span = match (points.first(), points.last()) {
            (Some(first), Some(last)) => span_ms(&first.timestamp, &last.timestamp),
            _ => 0,
        };

        Self {
            size: points.len(),
            span_hours: ms_to_hours(span),
            shape: classify_shape(points),
            adjusted_target: config.device_adjusted_target(),
        }
    }
}

/// Chosen strategy with its point budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Return the series unchanged
    PassThrough {
        /// Point budget
        target: usize,
    },
    /// Mean-representative sampling
    Statistical {
        /// Point budget
        target: usize,
    },
    /// Event-first sampling
    Lod {
        /// Point budget
        target: usize,
    },
    /// Wall-clock bucket aggregation
    TimeBucket {
        /// Point budget
        target: usize,
    },
    /// Latest readings only
    SlidingWindow {
        /// Readings to keep
        window: usize,
    },
}

impl Plan {
    /// Tag reported in the result envelope
    pub fn tag(&self) -> StrategyTag {
        match self {
            Plan::PassThrough { .. } => StrategyTag::None,
            Plan::Statistical { .. } => StrategyTag::StatisticalSampling,
            Plan::Lod { .. } => StrategyTag::LodSampling,
            Plan::TimeBucket { .. } => StrategyTag::TimeBucketAggregation,
            Plan::SlidingWindow { .. } => StrategyTag::SlidingWindow,
        }
    }

    /// Maximum number of points the plan may return
    pub fn budget(&self) -> usize {
        match *self {
            Plan::PassThrough { target }
            | Plan::Statistical { target }
            | Plan::Lod { target }
            | Plan::TimeBucket { target } => target,
            Plan::SlidingWindow { window } => window,
        }
    }

    /// Run the chosen strategy on a sorted series
    pub fn execute(&self, points: &[OptimizedPoint]) -> OptimizeResult<Vec<OptimizedPoint>> {
        match *self {
            Plan::PassThrough { .. } => PassThrough.sample(points),
            Plan::Statistical { target } => StatisticalSampling::new(target).sample(points),
            Plan::Lod { target } => LodSampling::new(target).sample(points),
            Plan::TimeBucket { target } => TimeBucketAggregation::new(target).sample(points),
            Plan::SlidingWindow { window } => SlidingWindow::new(window).sample(points),
        }
    }
}

/// Apply the decision table to a profile
pub fn plan_for(profile: &Profile) -> Plan {
    let target = profile.adjusted_target;

    if profile.size <= PASSTHROUGH_MAX_POINTS {
        return if profile.size <= target {
            Plan::PassThrough { target }
        } else {
            Plan::Statistical { target }
        };
    }

    match (profile.span_hours <= SHORT_SPAN_MAX_HOURS, profile.shape) {
        (true, Shape::Spiky) => Plan::Lod { target },
        (true, _) => Plan::Statistical { target },
        (false, _) => Plan::TimeBucket { target },
    }
}

/// Pick a plan for `points` under `config`
///
/// Live mode short-circuits before the series is profiled.
pub fn select(points: &[OptimizedPoint], config: &OptimizationConfig) -> Plan {
    if let Some(max_readings) = config.live_window() {
        return Plan::SlidingWindow {
            window: max_readings.min(config.target_points),
        };
    }

    let profile = Profile::of(points, config);
    let plan = plan_for(&profile);
    log::debug!("profile {:?} -> {}", profile, plan.tag());
    plan
}
