//! Pre-built dashboard scenarios
//!
//! Each scenario pairs a generated series with the config a client would
//! send and the strategy the profiler is expected to choose.

use chrono::Duration;

use sensorlens_core::{OptimizationConfig, RawSample, StrategyTag};

use super::SeriesGenerator;

/// Series, request and expected strategy
pub struct Scenario {
    pub name: &'static str,
    pub samples: Vec<RawSample>,
    pub config: OptimizationConfig,
    pub expected: StrategyTag,
}

/// A: a handful of points over two minutes
pub fn few_points() -> Scenario {
    Scenario {
        name: "few_points",
        samples: SeriesGenerator::new("temp-1").ramp(5, Duration::minutes(2)),
        config: OptimizationConfig::new(200),
        expected: StrategyTag::None,
    }
}

/// B: 3000 gently drifting points over six hours
pub fn gradual_six_hours() -> Scenario {
    Scenario {
        name: "gradual_six_hours",
        samples: SeriesGenerator::new("level-1").ramp(3000, Duration::hours(6)),
        config: OptimizationConfig::new(500),
        expected: StrategyTag::StatisticalSampling,
    }
}

/// C: 3000 violently swinging points over six hours
pub fn spiky_six_hours() -> Scenario {
    Scenario {
        name: "spiky_six_hours",
        samples: SeriesGenerator::new("vib-1").swings(3000, Duration::hours(6)),
        config: OptimizationConfig::new(500),
        expected: StrategyTag::LodSampling,
    }
}

/// D: 50,000 points over thirty days
pub fn thirty_days() -> Scenario {
    Scenario {
        name: "thirty_days",
        samples: SeriesGenerator::new("temp-2").sine(50_000, Duration::days(30), 1667),
        config: OptimizationConfig::new(800),
        expected: StrategyTag::TimeBucketAggregation,
    }
}

/// E: 10,000 historical points watched live
pub fn live_window() -> Scenario {
    Scenario {
        name: "live_window",
        samples: SeriesGenerator::new("co2-1").sine(10_000, Duration::days(7), 500),
        config: OptimizationConfig::new(100).with_live_window(50),
        expected: StrategyTag::SlidingWindow,
    }
}

/// Every scenario above
pub fn all() -> Vec<Scenario> {
    vec![
        few_points(),
        gradual_six_hours(),
        spiky_six_hours(),
        thirty_days(),
        live_window(),
    ]
}
