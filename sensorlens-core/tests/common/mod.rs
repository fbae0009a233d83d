//! Common test utilities and series generators for integration tests
//!
//! This module provides:
//! - Deterministic sensor series generators (ramps, sines, swings, noise)
//! - Assertion helpers for the output invariants
//!
//! Generators use a fixed-seed LCG so every run sees identical data.

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};

use sensorlens_core::{time::Timestamp, OptimizationResult, RawSample};

pub mod scenarios;

/// Fixed start instant for generated series (2024-03-01T00:00:00Z)
pub fn start_time() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
}

/// Deterministic series generator
pub struct SeriesGenerator {
    sensor_id: String,
    start: Timestamp,
    seed: u32,
}

impl SeriesGenerator {
    /// Create a generator for one sensor
    pub fn new(sensor_id: &str) -> Self {
        Self {
            sensor_id: sensor_id.to_string(),
            start: start_time(),
            seed: 42,
        }
    }

    /// Override the start instant
    pub fn starting_at(mut self, start: Timestamp) -> Self {
        self.start = start;
        self
    }

    /// `count` evenly spaced readings over `span`, values from `f(i)`
    pub fn series(&self, count: usize, span: Duration, f: impl Fn(usize) -> f64) -> Vec<RawSample> {
        let step_ms = if count > 1 {
            span.num_milliseconds() / (count as i64 - 1)
        } else {
            0
        };

        (0..count)
            .map(|i| {
                let ts = self.start + Duration::milliseconds(step_ms * i as i64);
                RawSample::new(ts, f(i), self.sensor_id.clone())
            })
            .collect()
    }

    /// Slow linear drift, e.g. a tank level
    pub fn ramp(&self, count: usize, span: Duration) -> Vec<RawSample> {
        self.series(count, span, |i| 10.0 + i as f64 * 0.01)
    }

    /// Diurnal-style sine with `points_per_period` resolution
    pub fn sine(&self, count: usize, span: Duration, points_per_period: usize) -> Vec<RawSample> {
        let w = 2.0 * std::f64::consts::PI / points_per_period as f64;
        self.series(count, span, |i| 20.0 + 5.0 * (i as f64 * w).sin())
    }

    /// Large, irregular swings (e.g. a vibration sensor)
    pub fn swings(&self, count: usize, span: Duration) -> Vec<RawSample> {
        const PATTERN: [f64; 3] = [0.0, 100.0, 95.0];
        self.series(count, span, |i| PATTERN[i % 3])
    }

    /// Base level plus uniform noise of ±`amplitude`
    pub fn noisy(&mut self, count: usize, span: Duration, base: f64, amplitude: f64) -> Vec<RawSample> {
        let noise: Vec<f64> = (0..count).map(|_| self.random_noise(amplitude)).collect();
        self.series(count, span, |i| base + noise[i])
    }

    fn random_noise(&mut self, amplitude: f64) -> f64 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let uniform = self.seed as f64 / u32::MAX as f64;
        (uniform - 0.5) * 2.0 * amplitude
    }
}

/// Reverse a series (storage layers may return newest first)
pub fn newest_first(mut samples: Vec<RawSample>) -> Vec<RawSample> {
    samples.reverse();
    samples
}

/// Check the envelope invariants every result must satisfy
pub fn assert_invariants(result: &OptimizationResult, input_len: usize, target: usize) {
    assert_eq!(result.original_count, input_len, "originalCount");
    assert_eq!(result.optimized_count, result.data.len(), "optimizedCount");
    assert!(
        result.data.len() <= target,
        "{} points exceed budget {}",
        result.data.len(),
        target
    );
    assert!(
        result.data.windows(2).all(|w| w[0].timestamp < w[1].timestamp),
        "timestamps must be strictly ascending"
    );
}
