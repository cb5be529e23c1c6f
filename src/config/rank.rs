//! Rank projection calibration

use crate::config::band::{validate_weights, Band};
use crate::error::SkillEngineError;
use serde::{Deserialize, Serialize};

/// Ascending GSI thresholds marking each rank tier
pub const RANK_THRESHOLDS: [u32; 5] = [600, 750, 900, 1050, 1200];
/// Target reported once the current GSI has passed every threshold
pub const RANK_CEILING: u32 = 1400;

pub const DISCIPLINE_BAND: Band = Band::new(0.0, 100.0);
/// Headshot band for growth scoring, calibrated separately from the aim band
pub const TRAINING_HEADSHOT_BAND: Band = Band::new(5.0, 30.0);

pub const DISCIPLINE_WEIGHT: f64 = 0.6;
pub const TRAINING_WEIGHT: f64 = 0.4;

/// GSI points gained per day for each point of growth rate
pub const PROGRESS_PER_GROWTH_POINT: f64 = 0.5;

/// Thresholds, bands and weights for the rank projector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    pub thresholds: Vec<u32>,
    pub ceiling: u32,
    pub discipline_band: Band,
    pub training_band: Band,
    pub discipline_weight: f64,
    pub training_weight: f64,
    pub progress_per_growth_point: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            thresholds: RANK_THRESHOLDS.to_vec(),
            ceiling: RANK_CEILING,
            discipline_band: DISCIPLINE_BAND,
            training_band: TRAINING_HEADSHOT_BAND,
            discipline_weight: DISCIPLINE_WEIGHT,
            training_weight: TRAINING_WEIGHT,
            progress_per_growth_point: PROGRESS_PER_GROWTH_POINT,
        }
    }
}

impl RankConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.thresholds.is_empty() {
            return Err(SkillEngineError::InvalidThresholds {
                reason: "at least one threshold is required".to_string(),
            }
            .into());
        }

        if self.thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(SkillEngineError::InvalidThresholds {
                reason: "thresholds must be strictly ascending".to_string(),
            }
            .into());
        }

        if let Some(&last) = self.thresholds.last() {
            if self.ceiling <= last {
                return Err(SkillEngineError::InvalidThresholds {
                    reason: format!(
                        "ceiling {} must exceed the highest threshold {}",
                        self.ceiling, last
                    ),
                }
                .into());
            }
        }

        self.discipline_band.validate("discipline")?;
        self.training_band.validate("training")?;
        validate_weights("growth", &[self.discipline_weight, self.training_weight])?;

        if !self.progress_per_growth_point.is_finite() || self.progress_per_growth_point <= 0.0 {
            return Err(SkillEngineError::ConfigurationError {
                message: "progress_per_growth_point must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
