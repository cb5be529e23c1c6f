//! Skill profile calibration

use crate::config::band::{validate_weights, Band};
use serde::{Deserialize, Serialize};

/// Headshot band for the aim dimension. Not shared with the growth-rate band.
pub const AIM_HEADSHOT_BAND: Band = Band::new(5.0, 35.0);
pub const AIM_KD_BAND: Band = Band::new(0.5, 1.5);
pub const IMPACT_ADR_BAND: Band = Band::new(80.0, 180.0);
pub const IMPACT_WINRATE_BAND: Band = Band::new(40.0, 65.0);
pub const CONSISTENCY_BAND: Band = Band::new(0.0, 100.0);

pub const AIM_HEADSHOT_WEIGHT: f64 = 0.6;
pub const AIM_KD_WEIGHT: f64 = 0.4;
pub const IMPACT_ADR_WEIGHT: f64 = 0.7;
pub const IMPACT_WINRATE_WEIGHT: f64 = 0.3;

pub const GSI_AIM_WEIGHT: f64 = 0.35;
pub const GSI_IMPACT_WEIGHT: f64 = 0.4;
pub const GSI_CONSISTENCY_WEIGHT: f64 = 0.25;

/// Bands and weights for the skill profile calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub headshot_band: Band,
    pub kd_band: Band,
    pub adr_band: Band,
    pub winrate_band: Band,
    pub consistency_band: Band,
    pub headshot_weight: f64,
    pub kd_weight: f64,
    pub adr_weight: f64,
    pub winrate_weight: f64,
    pub gsi_aim_weight: f64,
    pub gsi_impact_weight: f64,
    pub gsi_consistency_weight: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            headshot_band: AIM_HEADSHOT_BAND,
            kd_band: AIM_KD_BAND,
            adr_band: IMPACT_ADR_BAND,
            winrate_band: IMPACT_WINRATE_BAND,
            consistency_band: CONSISTENCY_BAND,
            headshot_weight: AIM_HEADSHOT_WEIGHT,
            kd_weight: AIM_KD_WEIGHT,
            adr_weight: IMPACT_ADR_WEIGHT,
            winrate_weight: IMPACT_WINRATE_WEIGHT,
            gsi_aim_weight: GSI_AIM_WEIGHT,
            gsi_impact_weight: GSI_IMPACT_WEIGHT,
            gsi_consistency_weight: GSI_CONSISTENCY_WEIGHT,
        }
    }
}

impl ProfileConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        self.headshot_band.validate("headshot")?;
        self.kd_band.validate("kd")?;
        self.adr_band.validate("adr")?;
        self.winrate_band.validate("winrate")?;
        self.consistency_band.validate("consistency")?;

        validate_weights("aim", &[self.headshot_weight, self.kd_weight])?;
        validate_weights("impact", &[self.adr_weight, self.winrate_weight])?;
        validate_weights(
            "gsi",
            &[
                self.gsi_aim_weight,
                self.gsi_impact_weight,
                self.gsi_consistency_weight,
            ],
        )?;

        Ok(())
    }
}
