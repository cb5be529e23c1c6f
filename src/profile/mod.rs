//! Skill profile calculation
//!
//! Blends raw player statistics into aim, impact and consistency scores and
//! the weighted Game Skill Index (GSI).

pub mod calculator;

// Re-export commonly used types
pub use calculator::{calculate_skill_profile, SkillProfileCalculator};
