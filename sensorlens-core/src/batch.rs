//! Parallel optimization across sensors
//!
//! A dashboard query usually asks for several sensors at once. Each
//! optimization is pure and independent, so the batch runs them on a bounded
//! `rayon` pool and returns results in request order. One sensor's failure
//! stays in its own [`SensorOutcome`].
//!
//! ```rust
//! use sensorlens_core::batch::{BatchOptimizer, SensorSeries};
//! use sensorlens_core::time::from_millis;
//! use sensorlens_core::{OptimizationConfig, RawSample};
//!
//! let temp: Vec<_> = (0..10).map(|i| RawSample::new(from_millis(i * 1000), 20.0, "temp")).collect();
//! let hum: Vec<_> = (0..10).map(|i| RawSample::new(from_millis(i * 1000), 55.0, "hum")).collect();
//!
//! let batch = BatchOptimizer::with_max_concurrency(2);
//! let outcomes = batch.optimize_all(
//!     &[SensorSeries::new("temp", &temp), SensorSeries::new("hum", &hum)],
//!     &OptimizationConfig::new(100),
//! );
//! assert_eq!(outcomes[1].sensor_id, "hum");
//! ```

use std::collections::HashMap;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::OptimizationConfig;
use crate::engine::Optimizer;
use crate::errors::OptimizeResult;
use crate::types::{OptimizationResult, RawSample};

/// One sensor's readings, borrowed from the caller
#[derive(Debug, Clone, Copy)]
pub struct SensorSeries<'a> {
    /// Sensor the readings belong to
    pub sensor_id: &'a str,
    /// Raw readings, any order
    pub samples: &'a [RawSample],
}

impl<'a> SensorSeries<'a> {
    /// Pair a sensor id with its readings
    pub fn new(sensor_id: &'a str, samples: &'a [RawSample]) -> Self {
        Self { sensor_id, samples }
    }
}

/// Result for one sensor of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct SensorOutcome {
    /// Sensor this outcome belongs to
    pub sensor_id: String,
    /// Optimization result or engine failure for this sensor alone
    pub result: OptimizeResult<OptimizationResult>,
}

/// Fan-out optimizer with bounded concurrency
pub struct BatchOptimizer {
    optimizer: Optimizer,
    /// `None` means the global rayon pool
    pool: Option<ThreadPool>,
}

impl Default for BatchOptimizer {
    fn default() -> Self {
        let threads = std::thread::available_parallelism().map_or(1, |n| n.get());
        Self::with_max_concurrency(threads)
    }
}

impl BatchOptimizer {
    /// Batch optimizer sized to the machine
    pub fn new() -> Self {
        Self::default()
    }

    /// Batch optimizer running at most `max_concurrency` sensors at once
    pub fn with_max_concurrency(max_concurrency: usize) -> Self {
        let pool = ThreadPoolBuilder::new()
            .num_threads(max_concurrency.max(1))
            .thread_name(|i| format!("sensorlens-batch-{i}"))
            .build();

        let pool = match pool {
            Ok(pool) => Some(pool),
            Err(e) => {
                log::warn!("Batch pool unavailable, using global rayon pool: {}", e);
                None
            }
        };

        Self { optimizer: Optimizer::new(), pool }
    }

    /// Number of worker threads in use
    pub fn max_concurrency(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, ThreadPool::current_num_threads)
    }

    /// Optimize every series with the same config, preserving input order
    pub fn optimize_all(
        &self,
        series: &[SensorSeries<'_>],
        config: &OptimizationConfig,
    ) -> Vec<SensorOutcome> {
        let work = || {
            series
                .par_iter()
                .map(|s| SensorOutcome {
                    sensor_id: s.sensor_id.to_string(),
                    result: self.optimizer.optimize(s.samples, config),
                })
                .collect::<Vec<_>>()
        };

        match &self.pool {
            Some(pool) => pool.install(work),
            None => work(),
        }
    }

    /// Split a mixed slice by sensor and optimize each group
    pub fn optimize_mixed(
        &self,
        samples: &[RawSample],
        config: &OptimizationConfig,
    ) -> Vec<SensorOutcome> {
        let groups = group_by_sensor(samples);
        let series: Vec<_> = groups
            .iter()
            .map(|(id, readings)| SensorSeries::new(id, readings))
            .collect();

        self.optimize_all(&series, config)
    }
}

/// Group samples by `sensor_id`, in order of first appearance
pub fn group_by_sensor(samples: &[RawSample]) -> Vec<(String, Vec<RawSample>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<RawSample>)> = Vec::new();

    for sample in samples {
        let slot = *index.entry(sample.sensor_id.as_str()).or_insert_with(|| {
            groups.push((sample.sensor_id.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(sample.clone());
    }

    groups
}
