//! Calculator bundle and per-player report composition
//!
//! The engine owns one instance of each calculator built from a single
//! [`ScoringConfig`] and runs them in order: profile, then the projection fed
//! by that profile, then the optional history trend.

use crate::config::ScoringConfig;
use crate::profile::SkillProfileCalculator;
use crate::rank::RankProjector;
use crate::trend::TrendAnalyzer;
use crate::types::{PlayerReport, PlayerStats, RankProjection, SkillProfile, TrendResult};
use tracing::info;

/// All calculators configured from one scoring calibration
#[derive(Debug, Clone, Default)]
pub struct SkillEngine {
    profile: SkillProfileCalculator,
    rank: RankProjector,
    trend: TrendAnalyzer,
}

impl SkillEngine {
    /// Build and validate every calculator from `config`
    pub fn new(config: ScoringConfig) -> crate::error::Result<Self> {
        Ok(Self {
            profile: SkillProfileCalculator::new(config.profile)?,
            rank: RankProjector::new(config.rank)?,
            trend: TrendAnalyzer::new(config.trend)?,
        })
    }

    pub fn profile_calculator(&self) -> &SkillProfileCalculator {
        &self.profile
    }

    pub fn rank_projector(&self) -> &RankProjector {
        &self.rank
    }

    pub fn trend_analyzer(&self) -> &TrendAnalyzer {
        &self.trend
    }

    pub fn calculate_skill_profile(&self, stats: &PlayerStats) -> SkillProfile {
        self.profile.calculate(stats)
    }

    pub fn project_rank(&self, stats: &PlayerStats, profile: &SkillProfile) -> RankProjection {
        self.rank.project(stats, profile)
    }

    pub fn analyze_trend(&self, history: &[f64]) -> TrendResult {
        self.trend.analyze(history)
    }

    /// Compute every metric for one player
    pub fn build_report(&self, stats: &PlayerStats, history: Option<&[f64]>) -> PlayerReport {
        let profile = self.calculate_skill_profile(stats);
        let projection = self.project_rank(stats, &profile);
        let trend = history.map(|h| self.analyze_trend(h));

        info!(
            gsi = profile.gsi,
            next_rank_target = projection.next_rank_target,
            trend = ?trend.map(|t| t.trend),
            "Built player report"
        );

        PlayerReport {
            profile,
            projection,
            trend,
        }
    }
}

/// Build a report with the default calibration
pub fn build_report(stats: &PlayerStats, history: Option<&[f64]>) -> PlayerReport {
    SkillEngine::default().build_report(stats, history)
}
