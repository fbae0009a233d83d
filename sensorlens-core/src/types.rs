//! Data contract of the optimizer
//!
//! Input is a borrowed slice of [`RawSample`]s for one sensor. Output is an
//! [`OptimizationResult`] whose JSON form is what the dashboard endpoint
//! ships to clients:
//!
//! ```json
//! {
//!   "data": [{ "timestamp": "2024-03-01T00:00:00Z", "value": 21.5 }],
//!   "originalCount": 1,
//!   "optimizedCount": 1,
//!   "strategy": "none"
//! }
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::time::{self, Timestamp};

/// One stored reading, as returned by the storage layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSample {
    /// When the reading was taken
    pub timestamp: Timestamp,
    /// Measured value
    pub value: f64,
    /// Sensor that produced the reading
    pub sensor_id: String,
}

impl RawSample {
    /// Create a new raw sample
    pub fn new(timestamp: Timestamp, value: f64, sensor_id: impl Into<String>) -> Self {
        Self {
            timestamp,
            value,
            sensor_id: sensor_id.into(),
        }
    }
}

/// One point of the chart-ready output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizedPoint {
    /// Serialized as an ISO-8601 string
    pub timestamp: Timestamp,
    /// Reading at `timestamp`
    pub value: f64,
}

impl OptimizedPoint {
    /// Create a point
    pub fn new(timestamp: Timestamp, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Milliseconds since the Unix epoch
    #[inline]
    pub fn millis(&self) -> i64 {
        time::to_millis(&self.timestamp)
    }
}

impl From<&RawSample> for OptimizedPoint {
    fn from(sample: &RawSample) -> Self {
        Self {
            timestamp: sample.timestamp,
            value: sample.value,
        }
    }
}

/// Which strategy produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyTag {
    /// Series returned unchanged
    None,
    /// Group representatives with outlying extremes
    StatisticalSampling,
    /// Peaks, valleys and reversals first
    LodSampling,
    /// Per-bucket representatives over wall-clock buckets
    TimeBucketAggregation,
    /// Latest readings of a live view
    SlidingWindow,
}

impl StrategyTag {
    /// Wire name of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::StatisticalSampling => "statistical-sampling",
            Self::LodSampling => "lod-sampling",
            Self::TimeBucketAggregation => "time-bucket-aggregation",
            Self::SlidingWindow => "sliding-window",
        }
    }
}

impl fmt::Display for StrategyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Envelope returned for one sensor
///
/// `optimized_count` always equals `data.len()` and `data` is strictly
/// ascending by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// Chart points, strictly ascending
    pub data: Vec<OptimizedPoint>,
    /// Number of raw samples handed to the optimizer
    pub original_count: usize,
    /// Length of `data`
    pub optimized_count: usize,
    /// Strategy that produced `data`
    pub strategy: StrategyTag,
}

impl OptimizationResult {
    /// Build a result, deriving `optimized_count` from `data`
    pub fn new(data: Vec<OptimizedPoint>, original_count: usize, strategy: StrategyTag) -> Self {
        Self {
            optimized_count: data.len(),
            data,
            original_count,
            strategy,
        }
    }

    /// Result for an empty input series
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, StrategyTag::None)
    }

    /// Fraction of the original points kept (1.0 for empty input)
    pub fn reduction_ratio(&self) -> f64 {
        if self.original_count == 0 {
            return 1.0;
        }
        self.optimized_count as f64 / self.original_count as f64
    }
}
