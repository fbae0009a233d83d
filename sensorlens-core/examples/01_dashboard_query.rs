//! Dashboard Query Example
//!
//! Shows what the dashboard endpoint does for one chart: parse the request,
//! optimize the raw readings, and attach summary stats computed from the
//! original series.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_dashboard_query
//! ```

use chrono::{Duration, TimeZone, Utc};
use sensorlens_core::{optimize, OptimizationConfig, RawSample, SeriesSummary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("SensorLens Dashboard Query Example");
    println!("==================================\n");

    // Two days of temperature readings, one every 30 seconds
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let samples: Vec<RawSample> = (0..5760i64)
        .map(|i| {
            let hours = i as f64 / 120.0;
            let value = 21.0 + 3.0 * (hours * std::f64::consts::PI / 12.0).sin();
            RawSample::new(start + Duration::seconds(30 * i), value, "temp-lobby")
        })
        .collect();

    for body in [
        r#"{ "targetPoints": 500 }"#,
        r#"{ "targetPoints": 500, "deviceType": "mobile" }"#,
        r#"{ "targetPoints": 10 }"#,
    ] {
        println!("Request: {}", body);
        let config = match OptimizationConfig::from_json(body) {
            Ok(config) => config,
            Err(e) => {
                println!("  ✗ rejected: {}\n", e);
                continue;
            }
        };

        let result = optimize(&samples, &config)?;
        println!(
            "  ✓ {} → {} points via {} ({:.1}% kept)\n",
            result.original_count,
            result.optimized_count,
            result.strategy,
            result.reduction_ratio() * 100.0
        );
    }

    if let Some(summary) = SeriesSummary::from_samples(&samples) {
        println!("Summary (raw series):");
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
