//! Sampling Thresholds
//!
//! Numbers that drive strategy selection and the per-strategy heuristics.
//! Ratios are fractions of the series' value range unless noted.

// ===== PROFILER =====

/// Series at or below this size are handled without the time-span rules.
pub const PASSTHROUGH_MAX_POINTS: usize = 1000;

/// Spans at or below this many hours use index-based sampling.
///
/// Longer spans switch to time-bucket aggregation.
pub const SHORT_SPAN_MAX_HOURS: f64 = 24.0;

/// Share of the requested budget that mobile clients receive (percent).
pub const MOBILE_TARGET_PERCENT: usize = 80;

// ===== SHAPE CLASSIFIER =====

/// Series shorter than this are assumed smooth.
pub const MIN_POINTS_FOR_SHAPE: usize = 10;

/// A step counts as an abrupt rate change when it grows past this multiple of
/// the previous step.
pub const RATE_SHIFT_UP: f64 = 2.0;

/// A step counts as an abrupt rate change when it shrinks below this multiple
/// of the previous step.
pub const RATE_SHIFT_DOWN: f64 = 0.5;

/// Fraction of abrupt rate changes above which a series is spiky.
pub const SPIKY_CHANGE_RATIO: f64 = 0.30;

/// Mean step (as a fraction of range) above which a series is spiky.
pub const SPIKY_VARIATION_RATIO: f64 = 0.10;

/// Mean step (as a fraction of range) below which a series is gradual.
pub const GRADUAL_VARIATION_RATIO: f64 = 0.01;

// ===== STRATEGIES =====

/// Extremes are kept when they stray from the mean by more than this fraction
/// of the reference deviation (representative deviation for statistical
/// sampling, bucket spread for time buckets).
pub const EXTREME_KEEP_RATIO: f64 = 0.10;

/// Peaks, valleys and slope reversals must exceed this fraction of the range
/// to count as LOD events.
pub const LOD_EVENT_RATIO: f64 = 0.05;
