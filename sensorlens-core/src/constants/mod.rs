//! Constants for SensorLens Core
//!
//! Every tunable number the optimizer uses lives here, with a short note on
//! what it controls. Strategies refer to these names instead of inlining
//! literals.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Time**: Unit conversions and the bucket-width ladder
//! - **Limits**: Request bounds enforced by config validation
//! - **Sampling**: Thresholds used by the profiler and the strategies

/// Time unit conversions and the ladder of chart-friendly bucket widths.
pub mod time;

/// Request bounds (point budgets, live window caps).
pub mod limits;

/// Profiler and strategy thresholds.
pub mod sampling;

// Re-export commonly used constants for convenience
pub use time::{MS_PER_SECOND, MS_PER_MINUTE, MS_PER_HOUR, MS_PER_DAY, BUCKET_WIDTH_LADDER_MS};

pub use limits::{
    MIN_TARGET_POINTS, MAX_TARGET_POINTS, DEFAULT_TARGET_POINTS, MAX_LIVE_READINGS,
};

pub use sampling::{
    PASSTHROUGH_MAX_POINTS, SHORT_SPAN_MAX_HOURS, MIN_POINTS_FOR_SHAPE,
    MOBILE_TARGET_PERCENT,
};
