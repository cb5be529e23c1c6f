//! Error types for the skill engine
//!
//! The calculators themselves never fail: degenerate numbers flow through the
//! arithmetic. Errors only arise at the configuration and input boundaries,
//! and are reported with anyhow like the rest of the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for configuration and input problems
#[derive(Debug, thiserror::Error)]
pub enum SkillEngineError {
    #[error("Invalid band '{name}': min {min} must be finite and below max {max}")]
    InvalidBand { name: String, min: f64, max: f64 },

    #[error("Invalid weights for {dimension}: {reason}")]
    InvalidWeights { dimension: String, reason: String },

    #[error("Invalid rank thresholds: {reason}")]
    InvalidThresholds { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}
