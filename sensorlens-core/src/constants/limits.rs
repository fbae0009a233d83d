//! Request Limits
//!
//! Bounds enforced by [`OptimizationConfig::validate`](crate::OptimizationConfig::validate).
//! The engine itself never checks these; it trusts the request layer.

/// Smallest point budget a client may request.
///
/// Fewer points than this make even a sparkline misleading.
pub const MIN_TARGET_POINTS: usize = 50;

/// Largest point budget a client may request.
///
/// Beyond ~2000 points a typical chart canvas has more points than pixels.
pub const MAX_TARGET_POINTS: usize = 2000;

/// Budget used when a request omits `targetPoints`.
pub const DEFAULT_TARGET_POINTS: usize = 500;

/// Upper bound on the live-mode window.
///
/// Live dashboards redraw continuously, so the window stays small enough to
/// ship on every tick.
pub const MAX_LIVE_READINGS: usize = 100;
