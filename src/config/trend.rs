//! Trend classification calibration

use crate::error::SkillEngineError;
use serde::{Deserialize, Serialize};

/// Fewest history points that produce a slope
pub const MIN_TREND_POINTS: usize = 3;
pub const ACCELERATING_SLOPE: f64 = 5.0;
pub const IMPROVING_SLOPE: f64 = 1.0;
pub const DECLINING_SLOPE: f64 = -3.0;

/// Slope thresholds for the trend analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    pub min_points: usize,
    pub accelerating_slope: f64,
    pub improving_slope: f64,
    pub declining_slope: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            min_points: MIN_TREND_POINTS,
            accelerating_slope: ACCELERATING_SLOPE,
            improving_slope: IMPROVING_SLOPE,
            declining_slope: DECLINING_SLOPE,
        }
    }
}

impl TrendConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.min_points < 2 {
            return Err(SkillEngineError::ConfigurationError {
                message: "min_points must be at least 2 to fit a slope".to_string(),
            }
            .into());
        }

        let ordered = self.accelerating_slope > self.improving_slope
            && self.improving_slope > self.declining_slope;
        if !ordered {
            return Err(SkillEngineError::ConfigurationError {
                message: "slope thresholds must satisfy accelerating > improving > declining"
                    .to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TrendConfig::default().validate().is_ok());
    }

    #[test]
    fn test_min_points_lower_bound() {
        let config = TrendConfig {
            min_points: 1,
            ..TrendConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_threshold_order() {
        let config = TrendConfig {
            improving_slope: 6.0,
            ..TrendConfig::default()
        };
        assert!(config.validate().is_err());

        let config = TrendConfig {
            accelerating_slope: f64::NAN,
            ..TrendConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
