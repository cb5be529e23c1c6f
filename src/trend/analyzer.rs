//! Linear trend analyzer

use crate::config::TrendConfig;
use crate::types::{Trend, TrendResult};
use crate::utils::round2;
use tracing::{debug, warn};

/// Ordinary least-squares slope of `history` against its 0-based index.
///
/// Returns `None` when the fit is degenerate (fewer than two points).
pub fn least_squares_slope(history: &[f64]) -> Option<f64> {
    let n = history.len() as f64;

    let (sum_x, sum_y, sum_xy, sum_xx) = history.iter().enumerate().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sxx), (i, &y)| {
            let x = i as f64;
            (sx + x, sy + y, sxy + x * y, sxx + x * x)
        },
    );

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    Some((n * sum_xy - sum_x * sum_y) / denominator)
}

/// Analyzer classifying score histories by slope
#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzer {
    config: TrendConfig,
}

impl TrendAnalyzer {
    /// Create an analyzer from a validated configuration
    pub fn new(config: TrendConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &TrendConfig {
        &self.config
    }

    /// Classify a slope. Checked in order: accelerating, improving, declining.
    ///
    /// Accelerating needs a slope strictly above its threshold. The improving
    /// and declining boundaries are inclusive, so a slope of exactly 1 is
    /// improving and exactly -3 is declining.
    pub fn classify(&self, slope: f64) -> Trend {
        if slope > self.config.accelerating_slope {
            Trend::Accelerating
        } else if slope >= self.config.improving_slope {
            Trend::Improving
        } else if slope <= self.config.declining_slope {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }

    /// Analyze a time-ordered history, earliest score first
    pub fn analyze(&self, history: &[f64]) -> TrendResult {
        if history.len() < self.config.min_points {
            warn!(
                points = history.len(),
                required = self.config.min_points,
                "Not enough history for a trend"
            );
            return TrendResult::insufficient_data();
        }

        let Some(slope) = least_squares_slope(history) else {
            return TrendResult::insufficient_data();
        };

        let trend = self.classify(slope);
        debug!(points = history.len(), slope, %trend, "Analyzed trend");

        TrendResult::classified(trend, round2(slope))
    }
}

/// Analyze a history with the default thresholds
pub fn analyze_trend(history: &[f64]) -> TrendResult {
    TrendAnalyzer::default().analyze(history)
}
