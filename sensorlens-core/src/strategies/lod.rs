//! Level-of-detail sampling for spiky series
//!
//! Even time coverage matters less than the moments a viewer actually looks
//! for: peaks, valleys and trend reversals. This strategy flags those
//! "events" first and spends whatever budget is left on quiet stretches.
//!
//! ## Events
//!
//! With `threshold = 5% of the value range`, a point is an event when it is:
//! - the first or last point
//! - a local peak or valley whose rise and fall both exceed the threshold
//! - a slope reversal whose slope swing `|next - prev|` exceeds the threshold
//!
//! All events are emitted. If they exceed the budget the post-processor thins
//! them evenly, keeping both ends.

use crate::constants::sampling::LOD_EVENT_RATIO;
use crate::errors::OptimizeResult;
use crate::traits::Downsample;
use crate::types::{OptimizedPoint, StrategyTag};

use super::utils::value_range;

/// Event-first sampling
#[derive(Debug, Clone, Copy)]
pub struct LodSampling {
    target: usize,
}

impl LodSampling {
    /// Sample down to roughly `target` points
    pub fn new(target: usize) -> Self {
        Self { target }
    }
}

/// Whether the interior point at `i` is a significant event
fn is_event(points: &[OptimizedPoint], i: usize, threshold: f64) -> bool {
    let slope_in = points[i].value - points[i - 1].value;
    let slope_out = points[i + 1].value - points[i].value;

    let peak = slope_in > threshold && -slope_out > threshold;
    let valley = -slope_in > threshold && slope_out > threshold;
    let reversal = slope_in * slope_out < 0.0 && (slope_out - slope_in).abs() > threshold;

    peak || valley || reversal
}

/// Flag every significant event in `points`
///
/// Returned mask has one entry per point.
pub fn event_mask(points: &[OptimizedPoint]) -> Vec<bool> {
    let n = points.len();
    let mut mask = vec![false; n];
    if n == 0 {
        return mask;
    }

    mask[0] = true;
    mask[n - 1] = true;

    let threshold = LOD_EVENT_RATIO * value_range(points);
    for i in 1..n.saturating_sub(1) {
        mask[i] = is_event(points, i, threshold);
    }
    mask
}

impl Downsample for LodSampling {
    fn tag(&self) -> StrategyTag {
        StrategyTag::LodSampling
    }

    fn sample(&self, points: &[OptimizedPoint]) -> OptimizeResult<Vec<OptimizedPoint>> {
        if points.len() <= self.target {
            return Ok(points.to_vec());
        }

        let mask = event_mask(points);
        let (events, quiet): (Vec<_>, Vec<_>) = points
            .iter()
            .zip(&mask)
            .partition(|(_, flagged)| **flagged);

        let mut out: Vec<OptimizedPoint> = events.iter().map(|(p, _)| **p).collect();

        let remaining = self.target.saturating_sub(out.len());
        if remaining > 0 && !quiet.is_empty() {
            let stride = (quiet.len() / remaining).max(1);
            out.extend(
                quiet
                    .iter()
                    .step_by(stride)
                    .take(remaining)
                    .map(|(p, _)| **p),
            );
        }

        log::trace!(
            "lod-sampling: {} events, {} quiet points, budget {}",
            events.len(),
            quiet.len(),
            self.target
        );

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::from_millis;

    fn series(values: &[f64]) -> Vec<OptimizedPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| OptimizedPoint::new(from_millis(i as i64 * 1000), v))
            .collect()
    }

    #[test]
    fn flags_peaks_valleys_and_bounds() {
        //                 0    1    2      3    4    5     6    7
        let points = series(&[0.0, 0.0, 100.0, 0.0, 0.0, -100.0, 0.0, 0.0]);
        let mask = event_mask(&points);

        assert!(mask[0] && mask[7], "boundaries are always events");
        assert!(mask[2], "peak");
        assert!(mask[5], "valley");
        assert!(!mask[1] && !mask[4] && !mask[6]);
    }

    #[test]
    fn small_wiggles_are_quiet() {
        let points = series(&[0.0, 100.0, 100.5, 100.0, 100.5, 100.0, 50.0]);
        let mask = event_mask(&points);

        // 0.5 swings are below 5% of a 100 range
        assert!(!mask[2] && !mask[3] && !mask[4]);
    }

    #[test]
    fn fills_remaining_budget_with_quiet_points() {
        let mut values = vec![1.0; 200];
        values[100] = 50.0;
        let points = series(&values);

        let out = LodSampling::new(20).sample(&points).unwrap();

        assert!(out.iter().any(|p| p.value == 50.0));
        assert_eq!(out.len(), 20);
    }
}
