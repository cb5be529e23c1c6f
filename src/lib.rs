//! AimForge - Skill metrics engine for competitive shooter statistics
//!
//! This crate turns raw player statistics into a weighted Game Skill Index,
//! projects the time until the next rank threshold, and classifies the trend
//! of a score history. Every calculation is pure and synchronous.

pub mod config;
pub mod engine;
pub mod error;
pub mod profile;
pub mod rank;
pub mod trend;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use error::{Result, SkillEngineError};
pub use types::*;

pub use engine::{build_report, SkillEngine};
pub use profile::{calculate_skill_profile, SkillProfileCalculator};
pub use rank::{project_rank, RankProjector};
pub use trend::{analyze_trend, TrendAnalyzer};
pub use utils::{normalize, round2};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
