//! Common types used throughout the skill engine

use serde::{Deserialize, Serialize};

fn missing_stat() -> f64 {
    f64::NAN
}

/// Raw gameplay statistics for a single player
///
/// A field missing from the input reads as NaN and flows through the
/// calculations instead of failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Headshot percentage
    #[serde(default = "missing_stat")]
    pub headshot: f64,
    /// Kill/death ratio
    #[serde(default = "missing_stat")]
    pub kd: f64,
    /// Average damage per round
    #[serde(default = "missing_stat")]
    pub adr: f64,
    /// Win rate percentage
    #[serde(default = "missing_stat")]
    pub winrate: f64,
    /// Consistency score, 0 to 100
    #[serde(default = "missing_stat")]
    pub consistency: f64,
}

impl PlayerStats {
    /// True when every field is a finite number
    pub fn is_finite(&self) -> bool {
        [
            self.headshot,
            self.kd,
            self.adr,
            self.winrate,
            self.consistency,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Derived skill dimensions and the composite Game Skill Index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProfile {
    pub aim_score: f64,
    pub impact_score: f64,
    pub consistency_score: f64,
    pub gsi: f64,
}

/// Projection of when the next rank threshold will be crossed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankProjection {
    pub next_rank_target: u32,
    /// `None` when the player shows no growth and no projection is possible
    pub estimated_days: Option<u64>,
    pub growth_rate: f64,
}

/// Direction of a score history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Accelerating,
    Improving,
    Stable,
    Declining,
    InsufficientData,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Accelerating => write!(f, "accelerating"),
            Trend::Improving => write!(f, "improving"),
            Trend::Stable => write!(f, "stable"),
            Trend::Declining => write!(f, "declining"),
            Trend::InsufficientData => write!(f, "insufficient_data"),
        }
    }
}

/// Outcome of a trend analysis
///
/// `score` holds the rounded slope and is absent exactly when `trend` is
/// [`Trend::InsufficientData`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub trend: Trend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl TrendResult {
    /// Marker for a history too short to fit a slope
    pub fn insufficient_data() -> Self {
        Self {
            trend: Trend::InsufficientData,
            score: None,
        }
    }

    /// A classified trend with its rounded slope
    pub fn classified(trend: Trend, score: f64) -> Self {
        Self {
            trend,
            score: Some(score),
        }
    }

    pub fn is_insufficient(&self) -> bool {
        self.trend == Trend::InsufficientData
    }
}

/// All derived metrics for one player, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub profile: SkillProfile,
    pub projection: RankProjection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendResult>,
}

/// Input for a full player report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub stats: PlayerStats,
    /// Time-ordered score history, earliest first
    #[serde(default)]
    pub history: Option<Vec<f64>>,
}
