//! Batch Optimization Example
//!
//! A dashboard with several charts optimizes each sensor in parallel.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_batch_sensors
//! ```

use chrono::{Duration, TimeZone, Utc};
use sensorlens_core::batch::BatchOptimizer;
use sensorlens_core::{OptimizationConfig, RawSample};

fn main() {
    println!("SensorLens Batch Example");
    println!("========================\n");

    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let sensors: [(&str, i64, i64); 3] = [("temp-1", 2_000, 6), ("hum-1", 40_000, 24 * 14), ("door-1", 300, 2)];

    let mut mixed = Vec::new();
    for (sensor, count, span_hours) in sensors {
        let step = Duration::hours(span_hours).num_milliseconds() / count;
        mixed.extend((0..count).map(|i| {
            let value = if sensor == "door-1" { (i % 2) as f64 } else { 50.0 + (i as f64 / 50.0).sin() };
            RawSample::new(start + Duration::milliseconds(step * i), value, sensor)
        }));
    }

    let batch = BatchOptimizer::with_max_concurrency(4);
    println!("Workers: {}\n", batch.max_concurrency());

    for outcome in batch.optimize_mixed(&mixed, &OptimizationConfig::new(400)) {
        match outcome.result {
            Ok(result) => println!(
                "{:8} {:6} → {:4} points via {}",
                outcome.sensor_id, result.original_count, result.optimized_count, result.strategy
            ),
            Err(e) => println!("{:8} failed: {}", outcome.sensor_id, e),
        }
    }
}
