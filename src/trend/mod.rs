//! Score history trend analysis
//!
//! Fits an ordinary least-squares line through a time-ordered score history
//! and classifies its slope.

pub mod analyzer;

// Re-export commonly used types
pub use analyzer::{analyze_trend, least_squares_slope, TrendAnalyzer};
