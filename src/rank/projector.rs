//! Growth-based rank projector
//!
//! Rank thresholds start at 600 while the GSI is bounded to 0..=100 by its
//! weighting, so under the default calibration every player targets the
//! first threshold. The scales are kept as they are.

use crate::config::RankConfig;
use crate::types::{PlayerStats, RankProjection, SkillProfile};
use crate::utils::round2;
use tracing::{debug, warn};

/// Projector for next rank target and time to reach it
#[derive(Debug, Clone, Default)]
pub struct RankProjector {
    config: RankConfig,
}

impl RankProjector {
    /// Create a projector from a validated configuration
    pub fn new(config: RankConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Unrounded growth rate from discipline (consistency) and training (headshot)
    pub fn growth_rate(&self, stats: &PlayerStats) -> f64 {
        let discipline = self.config.discipline_band.normalize(stats.consistency);
        let training = self.config.training_band.normalize(stats.headshot);
        discipline * self.config.discipline_weight + training * self.config.training_weight
    }

    /// First threshold strictly above `gsi`, or the ceiling once all are passed
    pub fn next_rank_target(&self, gsi: f64) -> u32 {
        self.config
            .thresholds
            .iter()
            .copied()
            .find(|&threshold| f64::from(threshold) > gsi)
            .unwrap_or(self.config.ceiling)
    }

    /// Days until `target` is reached at `growth_rate`.
    ///
    /// Returns `None` when there is no growth to project with. A GSI already
    /// at or beyond the target (only possible past the ceiling) needs zero days.
    pub fn estimate_days(&self, gsi: f64, target: u32, growth_rate: f64) -> Option<u64> {
        if growth_rate <= 0.0 {
            return None;
        }

        let gap = f64::from(target) - gsi;
        let progress_per_day = growth_rate * self.config.progress_per_growth_point;
        let days = (gap / progress_per_day).ceil();

        if !days.is_finite() {
            warn!(gsi, growth_rate, "Cannot project days from non-finite inputs");
            return None;
        }

        Some(days.max(0.0) as u64)
    }

    /// Project the next rank for a player
    pub fn project(&self, stats: &PlayerStats, profile: &SkillProfile) -> RankProjection {
        let growth_rate = self.growth_rate(stats);
        let next_rank_target = self.next_rank_target(profile.gsi);
        let estimated_days = self.estimate_days(profile.gsi, next_rank_target, growth_rate);

        debug!(
            gsi = profile.gsi,
            growth_rate,
            next_rank_target,
            ?estimated_days,
            "Projected rank"
        );

        RankProjection {
            next_rank_target,
            estimated_days,
            growth_rate: round2(growth_rate),
        }
    }
}

/// Project the next rank with the default calibration
pub fn project_rank(stats: &PlayerStats, profile: &SkillProfile) -> RankProjection {
    RankProjector::default().project(stats, profile)
}
