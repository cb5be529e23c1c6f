//! Normalization bands

use crate::error::SkillEngineError;
use crate::utils::normalize;
use serde::{Deserialize, Serialize};

/// Raw-value range that maps onto the 0..=100 score scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Rescale `value` into 0..=100, saturating outside the band
    pub fn normalize(&self, value: f64) -> f64 {
        normalize(value, self.min, self.max)
    }

    /// Check that the band is usable as a divisor
    pub fn validate(&self, name: &str) -> crate::error::Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.max <= self.min {
            return Err(SkillEngineError::InvalidBand {
                name: name.to_string(),
                min: self.min,
                max: self.max,
            }
            .into());
        }
        Ok(())
    }
}

/// Check a set of blend weights: finite, non-negative, summing to one
pub(crate) fn validate_weights(dimension: &str, weights: &[f64]) -> crate::error::Result<()> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(SkillEngineError::InvalidWeights {
            dimension: dimension.to_string(),
            reason: "weights must be finite and non-negative".to_string(),
        }
        .into());
    }

    let total: f64 = weights.iter().sum();
    if (total - 1.0).abs() > 1e-6 {
        return Err(SkillEngineError::InvalidWeights {
            dimension: dimension.to_string(),
            reason: format!("weights must sum to 1.0, got {}", total),
        }
        .into());
    }

    Ok(())
}
