//! Rank projection
//!
//! Estimates a player's growth rate and how many days it takes to cross the
//! next rank threshold from their current GSI.

pub mod projector;

// Re-export commonly used types
pub use projector::{project_rank, RankProjector};
