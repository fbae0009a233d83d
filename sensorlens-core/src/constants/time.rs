//! Time-Related Constants
//!
//! Conversion factors and the fixed ladder of bucket widths used by the
//! time-bucket aggregation strategy. All durations are in milliseconds.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: i64 = 1000;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;

/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Milliseconds per day.
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Milliseconds per week.
pub const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

// ===== BUCKET WIDTHS =====

/// Smallest bucket width the aggregation strategy will consider (milliseconds).
///
/// Below one minute the buckets stop lining up with chart gridlines.
pub const MIN_BUCKET_WIDTH_MS: i64 = MS_PER_MINUTE;

/// Chart-friendly bucket widths, ascending.
///
/// The ideal width for a request is snapped to the nearest entry so that
/// bucket boundaries fall on intuitive gridlines (1m, 5m, 15m, 30m, 1h, 2h,
/// 4h, 6h, 12h, 1d, 2d, 1w, 2w, 30d).
pub const BUCKET_WIDTH_LADDER_MS: [i64; 14] = [
    MS_PER_MINUTE,
    5 * MS_PER_MINUTE,
    15 * MS_PER_MINUTE,
    30 * MS_PER_MINUTE,
    MS_PER_HOUR,
    2 * MS_PER_HOUR,
    4 * MS_PER_HOUR,
    6 * MS_PER_HOUR,
    12 * MS_PER_HOUR,
    MS_PER_DAY,
    2 * MS_PER_DAY,
    MS_PER_WEEK,
    2 * MS_PER_WEEK,
    30 * MS_PER_DAY,
];
