//! Descriptive statistics for the dashboard header
//!
//! The dashboard shows min/max/average/current next to each chart. These are
//! computed from the *original* raw series: the optimizer's output is lossy
//! and would understate extremes.

use serde::{Deserialize, Serialize};

use crate::types::RawSample;

/// Summary of one sensor's raw readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    /// Number of raw readings
    pub count: usize,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub avg: f64,
    /// Value of the most recent reading
    pub current: f64,
}

impl SeriesSummary {
    /// Summarize `samples`, or `None` when empty
    pub fn from_samples(samples: &[RawSample]) -> Option<Self> {
        let latest = samples.iter().max_by_key(|s| s.timestamp)?;

        let (min, max, sum) = samples.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(lo, hi, sum), s| (lo.min(s.value), hi.max(s.value), sum + s.value),
        );

        Some(Self {
            count: samples.len(),
            min,
            max,
            avg: sum / samples.len() as f64,
            current: latest.value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::from_millis;

    #[test]
    fn summarizes_unsorted_input() {
        let samples = vec![
            RawSample::new(from_millis(3000), 4.0, "s"),
            RawSample::new(from_millis(1000), -2.0, "s"),
            RawSample::new(from_millis(2000), 10.0, "s"),
        ];
        let summary = SeriesSummary::from_samples(&samples).unwrap();

        assert_eq!(summary.count, 3);
        assert_eq!(summary.min, -2.0);
        assert_eq!(summary.max, 10.0);
        assert_eq!(summary.avg, 4.0);
        assert_eq!(summary.current, 4.0);
    }

    #[test]
    fn empty_has_no_summary() {
        assert!(SeriesSummary::from_samples(&[]).is_none());
    }
}
