//! Core downsampling engine for SensorLens
//!
//! Turns a sensor's raw readings over a time window into a bounded,
//! visually faithful sample for charting. The engine picks one of five
//! strategies based on data volume, time span, data shape, client device
//! and live-streaming mode.
//!
//! Key properties:
//! - Pure and synchronous: no I/O, no clocks, no randomness
//! - Never mutates the caller's readings
//! - Output is strictly ascending, duplicate-free and within budget
//!
//! ```no_run
//! use sensorlens_core::{optimize, OptimizationConfig, RawSample};
//!
//! # fn load_readings() -> Vec<RawSample> { Vec::new() }
//! let samples: Vec<RawSample> = load_readings();
//! let config = OptimizationConfig::from_json(r#"{"targetPoints": 500, "deviceType": "mobile"}"#)?;
//!
//! let result = optimize(&samples, &config)?;
//! println!("{} of {} points via {}", result.optimized_count, result.original_count, result.strategy);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod postprocess;
pub mod profiler;
pub mod strategies;
pub mod summary;
pub mod time;
pub mod traits;
pub mod types;

#[cfg(feature = "parallel")]
pub mod batch;

// Public API
pub use config::{DeviceType, LiveMode, OptimizationConfig};
pub use engine::{optimize, Optimizer};
pub use errors::{ConfigError, ConfigResult, OptimizeError, OptimizeResult};
pub use profiler::{Plan, Profile, Shape};
pub use summary::SeriesSummary;
pub use traits::Downsample;
pub use types::{OptimizationResult, OptimizedPoint, RawSample, StrategyTag};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
