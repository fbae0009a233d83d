//! Per-request optimizer configuration
//!
//! Deserialized from the dashboard query body:
//!
//! ```json
//! {
//!   "targetPoints": 500,
//!   "deviceType": "mobile",
//!   "liveMode": { "enabled": true, "maxReadings": 50 }
//! }
//! ```
//!
//! [`OptimizationConfig::validate`] applies the bounds the public API
//! promises. The engine itself accepts any config and never re-validates.

use serde::{Deserialize, Serialize};

use crate::constants::limits::{
    DEFAULT_TARGET_POINTS, MAX_LIVE_READINGS, MAX_TARGET_POINTS, MIN_TARGET_POINTS,
};
use crate::constants::sampling::MOBILE_TARGET_PERCENT;
use crate::errors::{ConfigError, ConfigResult};

/// Client device class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// Phone or small screen; gets a reduced budget
    Mobile,
    /// Full budget
    #[default]
    Desktop,
}

/// Live-streaming window settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMode {
    /// Whether the live window applies
    pub enabled: bool,
    /// Most recent readings to keep
    pub max_readings: usize,
}

impl LiveMode {
    /// Enabled live window of `max_readings`
    pub fn window(max_readings: usize) -> Self {
        Self {
            enabled: true,
            max_readings,
        }
    }
}

/// Options for one optimization call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationConfig {
    /// Maximum points the caller wants back
    #[serde(default = "default_target_points")]
    pub target_points: usize,

    /// Client device class
    #[serde(default)]
    pub device_type: DeviceType,

    /// Live-streaming window, if requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<LiveMode>,
}

fn default_target_points() -> usize {
    DEFAULT_TARGET_POINTS
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_POINTS)
    }
}

impl OptimizationConfig {
    /// Desktop config with no live window
    pub fn new(target_points: usize) -> Self {
        Self {
            target_points,
            device_type: DeviceType::Desktop,
            live_mode: None,
        }
    }

    /// Set device class
    pub fn with_device(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }

    /// Enable live mode with the given window
    pub fn with_live_window(mut self, max_readings: usize) -> Self {
        self.live_mode = Some(LiveMode::window(max_readings));
        self
    }

    /// Parse a request body and validate it
    pub fn from_json(body: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(body)?;
        config.validate()?;
        Ok(config)
    }

    /// Check request bounds
    pub fn validate(&self) -> ConfigResult<()> {
        if !(MIN_TARGET_POINTS..=MAX_TARGET_POINTS).contains(&self.target_points) {
            return Err(ConfigError::TargetOutOfRange {
                value: self.target_points,
                min: MIN_TARGET_POINTS,
                max: MAX_TARGET_POINTS,
            });
        }

        if let Some(live) = self.live_mode {
            if live.max_readings == 0 || live.max_readings > MAX_LIVE_READINGS {
                return Err(ConfigError::LiveWindowOutOfRange {
                    value: live.max_readings,
                    max: MAX_LIVE_READINGS,
                });
            }
        }

        Ok(())
    }

    /// Live window size if live mode is switched on
    pub fn live_window(&self) -> Option<usize> {
        self.live_mode
            .filter(|live| live.enabled)
            .map(|live| live.max_readings)
    }

    /// Budget after the device-class adjustment
    ///
    /// Mobile clients get 80% of the request (floored). Exact for every
    /// `usize` target.
    pub fn device_adjusted_target(&self) -> usize {
        match self.device_type {
            DeviceType::Mobile => {
                let t = self.target_points;
                t / 100 * MOBILE_TARGET_PERCENT + t % 100 * MOBILE_TARGET_PERCENT / 100
            }
            DeviceType::Desktop => self.target_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_desktop_without_live_mode() {
        let config: OptimizationConfig = serde_json::from_str(r#"{"targetPoints": 300}"#).unwrap();
        assert_eq!(config, OptimizationConfig::new(300));
        assert_eq!(config.live_window(), None);

        let config: OptimizationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.target_points, DEFAULT_TARGET_POINTS);
    }

    #[test]
    fn parses_full_request() {
        let body = r#"{
            "targetPoints": 100,
            "deviceType": "mobile",
            "liveMode": { "enabled": true, "maxReadings": 50 }
        }"#;
        let config = OptimizationConfig::from_json(body).unwrap();

        assert_eq!(config.device_type, DeviceType::Mobile);
        assert_eq!(config.live_window(), Some(50));
    }

    #[test]
    fn disabled_live_mode_has_no_window() {
        let mut config = OptimizationConfig::new(100).with_live_window(20);
        config.live_mode = Some(LiveMode { enabled: false, max_readings: 20 });
        assert_eq!(config.live_window(), None);
    }

    #[test]
    fn mobile_budget_is_floored_eighty_percent() {
        let config = OptimizationConfig::new(501).with_device(DeviceType::Mobile);
        assert_eq!(config.device_adjusted_target(), 400);
        assert_eq!(OptimizationConfig::new(501).device_adjusted_target(), 501);
    }

    #[test]
    fn mobile_budget_survives_huge_targets() {
        for target in [usize::MAX, usize::MAX / 10, 12_345] {
            let config = OptimizationConfig::new(target).with_device(DeviceType::Mobile);
            let expected = (target as u128 * 80 / 100) as usize;
            assert_eq!(config.device_adjusted_target(), expected);
        }
    }

    #[test]
    fn rejects_out_of_range_requests() {
        assert_eq!(
            OptimizationConfig::new(49).validate(),
            Err(ConfigError::TargetOutOfRange { value: 49, min: 50, max: 2000 })
        );
        assert!(OptimizationConfig::new(2001).validate().is_err());
        assert!(OptimizationConfig::new(50).validate().is_ok());
        assert!(OptimizationConfig::new(2000).validate().is_ok());

        assert_eq!(
            OptimizationConfig::new(100).with_live_window(101).validate(),
            Err(ConfigError::LiveWindowOutOfRange { value: 101, max: 100 })
        );
        assert!(OptimizationConfig::new(100).with_live_window(0).validate().is_err());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = OptimizationConfig::from_json(r#"{"deviceType": "tablet"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }
}
