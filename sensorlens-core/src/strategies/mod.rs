//! Sampling Strategies
//!
//! ## Overview
//!
//! Each strategy reduces one sensor's sorted series to a chart-sized set of
//! candidate points. They share no state and can be used on their own, but
//! normally the [`profiler`](crate::profiler) picks exactly one per call.
//!
//! | Strategy | Picked when | Keeps |
//! |---|---|---|
//! | [`PassThrough`] | series fits the budget | everything |
//! | [`StatisticalSampling`] | ≤1000 points, or ≤24h and not spiky | group means + outlying extremes |
//! | [`LodSampling`] | >1000 points, ≤24h, spiky | peaks, valleys, reversals |
//! | [`TimeBucketAggregation`] | >1000 points, >24h | per-bucket representatives |
//! | [`SlidingWindow`] | live mode | the latest N points |
//!
//! ## Contract
//!
//! Strategies receive a non-empty, ascending slice and may return candidates
//! in any order, with duplicates, and over budget. The
//! [`postprocess`](crate::postprocess) step fixes all three.
//!
//! ## Usage Example
//!
//! ```rust
//! use sensorlens_core::strategies::LodSampling;
//! use sensorlens_core::traits::Downsample;
//! use sensorlens_core::time::from_millis;
//! use sensorlens_core::OptimizedPoint;
//!
//! let points: Vec<_> = (0..100)
//!     .map(|i| OptimizedPoint::new(from_millis(i * 1000), if i == 50 { 9.0 } else { 1.0 }))
//!     .collect();
//!
//! let out = LodSampling::new(10).sample(&points)?;
//! assert!(out.iter().any(|p| p.value == 9.0));
//! # Ok::<(), sensorlens_core::OptimizeError>(())
//! ```

mod bucket;
mod lod;
mod passthrough;
mod sliding;
mod statistical;
pub mod utils;

pub use bucket::{bucket_width_for, snap_to_ladder, TimeBucketAggregation};
pub use lod::{event_mask, LodSampling};
pub use passthrough::PassThrough;
pub use sliding::SlidingWindow;
pub use statistical::StatisticalSampling;
