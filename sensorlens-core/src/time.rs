//! Time handling for sensor series
//!
//! Timestamps are `chrono::DateTime<Utc>` at the API boundary and
//! milliseconds since the Unix epoch inside the strategies. Bucket arithmetic
//! is integer-only so results never depend on float rounding.

use chrono::{DateTime, TimeZone, Utc};

use crate::constants::time::MS_PER_HOUR;

/// Wall-clock instant of a reading
pub type Timestamp = DateTime<Utc>;

/// Milliseconds since the Unix epoch
#[inline]
pub fn to_millis(ts: &Timestamp) -> i64 {
    ts.timestamp_millis()
}

/// Instant from milliseconds since the Unix epoch
///
/// Out-of-range values saturate to the Unix epoch.
pub fn from_millis(ms: i64) -> Timestamp {
    Utc.timestamp_millis_opt(ms).single().unwrap_or_default()
}

/// Elapsed milliseconds from `earlier` to `later` (zero if reversed)
#[inline]
pub fn span_ms(earlier: &Timestamp, later: &Timestamp) -> i64 {
    (to_millis(later) - to_millis(earlier)).max(0)
}

/// Convert a millisecond span to fractional hours
#[inline]
pub fn ms_to_hours(ms: i64) -> f64 {
    ms as f64 / MS_PER_HOUR as f64
}

/// Start of the bucket of width `width_ms` containing `ms`
///
/// Floors toward negative infinity, so pre-1970 readings bucket correctly.
#[inline]
pub fn bucket_start(ms: i64, width_ms: i64) -> i64 {
    ms.div_euclid(width_ms) * width_ms
}
