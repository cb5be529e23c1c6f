//! Configuration management for the aimforge engine
//!
//! This module holds the named calibration constants for every calculator,
//! the config structs built from them, and application-level settings loaded
//! from the environment or a TOML file.

pub mod app;
pub mod band;
pub mod profile;
pub mod rank;
pub mod trend;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, OutputSettings, ScoringConfig, ServiceSettings};
pub use band::Band;
pub use profile::ProfileConfig;
pub use rank::RankConfig;
pub use trend::TrendConfig;
