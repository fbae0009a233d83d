//! Error Types for the Downsampling Engine
//!
//! ## Design Philosophy
//!
//! The optimizer is a pure function over pre-validated input, so its error
//! surface is small:
//!
//! 1. **Small Size**: Variants carry only numbers and `&'static str`, so both
//!    enums are `Copy`.
//!
//! 2. **Two Layers**: Request validation ([`ConfigError`]) happens before the
//!    engine runs. The engine itself ([`OptimizeError`]) only reports broken
//!    internal invariants.
//!
//! 3. **Never Hidden**: An invariant breach is returned as an error for that
//!    single call. It is never papered over with an empty result.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use sensorlens_core::{ConfigError, OptimizationConfig};
//!
//! let body = r#"{ "targetPoints": 10 }"#;
//! match OptimizationConfig::from_json(body) {
//!     Ok(config) => { /* run the optimizer */ let _ = config; }
//!     Err(ConfigError::TargetOutOfRange { value, min, max }) => {
//!         // Reject the request with a 400
//!         assert_eq!((value, min, max), (10, 50, 2000));
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for optimizer operations
pub type OptimizeResult<T> = Result<T, OptimizeError>;

/// Result type for request validation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Engine failures. These indicate a programming error, not bad input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizeError {
    /// A strategy was asked to pick a representative from an empty group
    #[error("{strategy}: cannot pick a representative from an empty group")]
    EmptyGroup {
        /// Strategy that hit the empty group
        strategy: &'static str,
    },
}

/// Request validation failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Requested point budget outside the supported range
    #[error("targetPoints {value} outside range [{min}, {max}]")]
    TargetOutOfRange {
        /// Requested budget
        value: usize,
        /// Smallest accepted budget
        min: usize,
        /// Largest accepted budget
        max: usize,
    },

    /// Live window larger than the streaming cap (or zero)
    #[error("liveMode.maxReadings {value} outside range [1, {max}]")]
    LiveWindowOutOfRange {
        /// Requested window
        value: usize,
        /// Largest accepted window
        max: usize,
    },

    /// Request body could not be parsed
    #[error("Malformed optimization config: {reason}")]
    Malformed {
        /// Category of the parse failure
        reason: &'static str,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let reason = match err.classify() {
            Category::Io => "io error",
            Category::Syntax => "invalid JSON syntax",
            Category::Data => "unexpected field type or value",
            Category::Eof => "unexpected end of input",
        };
        ConfigError::Malformed { reason }
    }
}
