//! Output normalization
//!
//! Every strategy's candidates pass through [`normalize`] before they reach
//! the caller. It guarantees the output invariants: ascending, unique
//! timestamps and at most `target` points.
//!
//! Trimming keeps the first and last point and thins the interior at evenly
//! spaced indices. Cutting from the end instead would silently drop the
//! trailing boundary point whenever a strategy overshoots its budget.

use crate::types::OptimizedPoint;

/// Sort ascending, drop duplicate timestamps, trim to `target`
pub fn normalize(mut points: Vec<OptimizedPoint>, target: usize) -> Vec<OptimizedPoint> {
    sort_and_dedupe(&mut points);
    trim_keeping_bounds(points, target)
}

/// Stable sort by timestamp, then drop later points sharing a timestamp
///
/// The first candidate emitted for a timestamp wins.
pub fn sort_and_dedupe(points: &mut Vec<OptimizedPoint>) {
    points.sort_by_key(|p| p.timestamp);
    points.dedup_by_key(|p| p.timestamp);
}

/// Reduce a sorted series to `target` points, keeping both ends
pub fn trim_keeping_bounds(points: Vec<OptimizedPoint>, target: usize) -> Vec<OptimizedPoint> {
    let n = points.len();
    if n <= target {
        return points;
    }

    match target {
        0 => Vec::new(),
        1 => vec![points[0]],
        _ => {
            let interior = n - 2;
            let keep = target - 2;
            let mut out = Vec::with_capacity(target);

            out.push(points[0]);
            // interior > keep, so the indices are strictly increasing
            out.extend((0..keep).map(|j| points[1 + j * interior / keep]));
            out.push(points[n - 1]);
            out
        }
    }
}
