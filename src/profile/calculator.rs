//! Weighted skill profile calculator

use crate::config::ProfileConfig;
use crate::types::{PlayerStats, SkillProfile};
use crate::utils::round2;
use tracing::{debug, warn};

/// Calculator for aim, impact, consistency and GSI scores
#[derive(Debug, Clone, Default)]
pub struct SkillProfileCalculator {
    config: ProfileConfig,
}

impl SkillProfileCalculator {
    /// Create a calculator from a validated configuration
    pub fn new(config: ProfileConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    /// Unrounded aim dimension: headshot percentage and K/D ratio
    pub fn aim_score(&self, stats: &PlayerStats) -> f64 {
        let headshot = self.config.headshot_band.normalize(stats.headshot);
        let kd = self.config.kd_band.normalize(stats.kd);
        headshot * self.config.headshot_weight + kd * self.config.kd_weight
    }

    /// Unrounded impact dimension: damage per round and win rate
    pub fn impact_score(&self, stats: &PlayerStats) -> f64 {
        let adr = self.config.adr_band.normalize(stats.adr);
        let winrate = self.config.winrate_band.normalize(stats.winrate);
        adr * self.config.adr_weight + winrate * self.config.winrate_weight
    }

    /// Unrounded consistency dimension
    pub fn consistency_score(&self, stats: &PlayerStats) -> f64 {
        self.config.consistency_band.normalize(stats.consistency)
    }

    /// Calculate the full profile.
    ///
    /// The GSI is blended from the unrounded dimension scores; rounding only
    /// happens on the returned values.
    pub fn calculate(&self, stats: &PlayerStats) -> SkillProfile {
        if !stats.is_finite() {
            warn!(?stats, "Player stats contain non-finite values");
        }

        let aim = self.aim_score(stats);
        let impact = self.impact_score(stats);
        let consistency = self.consistency_score(stats);

        let gsi = aim * self.config.gsi_aim_weight
            + impact * self.config.gsi_impact_weight
            + consistency * self.config.gsi_consistency_weight;

        debug!(aim, impact, consistency, gsi, "Calculated skill profile");

        SkillProfile {
            aim_score: round2(aim),
            impact_score: round2(impact),
            consistency_score: round2(consistency),
            gsi: round2(gsi),
        }
    }
}

/// Calculate a skill profile with the default calibration
pub fn calculate_skill_profile(stats: &PlayerStats) -> SkillProfile {
    SkillProfileCalculator::default().calculate(stats)
}
