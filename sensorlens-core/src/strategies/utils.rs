//! Shared helpers for the sampling strategies
//!
//! All helpers are pure and work on borrowed, sorted slices. Group
//! statistics fail with [`OptimizeError::EmptyGroup`] rather than inventing a
//! value, since every group a strategy builds is non-empty by construction.

use crate::errors::{OptimizeError, OptimizeResult};
use crate::types::OptimizedPoint;

/// Summary of one contiguous group of points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupStats {
    /// Arithmetic mean of the values
    pub mean: f64,
    /// Point whose value is closest to the mean (earliest on ties)
    pub representative: OptimizedPoint,
    /// Point with the smallest value (earliest on ties)
    pub min: OptimizedPoint,
    /// Point with the largest value (earliest on ties)
    pub max: OptimizedPoint,
}

impl GroupStats {
    /// Compute statistics for `group`
    pub fn of(group: &[OptimizedPoint], strategy: &'static str) -> OptimizeResult<Self> {
        let first = *group.first().ok_or(OptimizeError::EmptyGroup { strategy })?;

        let mean = mean(group);
        let mut representative = first;
        let mut min = first;
        let mut max = first;

        for &point in &group[1..] {
            if (point.value - mean).abs() < (representative.value - mean).abs() {
                representative = point;
            }
            if point.value < min.value {
                min = point;
            }
            if point.value > max.value {
                max = point;
            }
        }

        Ok(Self { mean, representative, min, max })
    }

    /// Value spread (max - min)
    #[inline]
    pub fn spread(&self) -> f64 {
        self.max.value - self.min.value
    }
}

/// Mean value of a slice (0.0 when empty)
pub fn mean(points: &[OptimizedPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|p| p.value).sum::<f64>() / points.len() as f64
}

/// (min, max) of the values, or `None` when empty
pub fn value_bounds(points: &[OptimizedPoint]) -> Option<(f64, f64)> {
    let first = points.first()?.value;
    Some(points.iter().fold((first, first), |(lo, hi), p| {
        (lo.min(p.value), hi.max(p.value))
    }))
}

/// max - min of the values (0.0 when empty)
pub fn value_range(points: &[OptimizedPoint]) -> f64 {
    value_bounds(points).map_or(0.0, |(lo, hi)| hi - lo)
}

/// `count` indices spread evenly over `0..len`
///
/// Returns every index when `count >= len`.
pub fn even_indices(len: usize, count: usize) -> impl Iterator<Item = usize> {
    let count = count.min(len);
    (0..count).map(move |j| j * len / count)
}
