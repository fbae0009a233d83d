//! Live Dashboard Example
//!
//! In live mode only the most recent readings are shipped, no matter how
//! much history the query window covers.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_live_dashboard
//! ```

use chrono::{Duration, TimeZone, Utc};
use sensorlens_core::{optimize, OptimizationConfig, RawSample};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("SensorLens Live Dashboard Example");
    println!("=================================\n");

    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let mut samples: Vec<RawSample> = (0..10_000i64)
        .map(|i| RawSample::new(start + Duration::seconds(10 * i), 400.0 + (i % 60) as f64, "co2-lab"))
        .collect();

    // Storage returned newest first
    samples.reverse();

    let config = OptimizationConfig::new(100).with_live_window(50);
    config.validate()?;

    let result = optimize(&samples, &config)?;
    println!("Strategy: {}", result.strategy);
    println!("Points:   {} of {}", result.optimized_count, result.original_count);

    if let (Some(first), Some(last)) = (result.data.first(), result.data.last()) {
        println!("Window:   {} → {}", first.timestamp.to_rfc3339(), last.timestamp.to_rfc3339());
    }

    Ok(())
}
