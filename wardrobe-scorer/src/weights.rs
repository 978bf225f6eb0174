//! Factor weights for the wear and packing scorers.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::ScoringError;

const SUM_TOLERANCE: f64 = 1e-9;

/// Relative weighting of the four wear factors.
///
/// The weights must be finite, non-negative and sum to `1.0` so the combined
/// score stays within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WearWeights {
    /// Weight of the freshness factor.
    pub freshness: f64,
    /// Weight of the variety factor.
    pub variety: f64,
    /// Weight of the season factor.
    pub season: f64,
    /// Weight of the formality factor.
    pub formality: f64,
}

impl Default for WearWeights {
    fn default() -> Self {
        Self {
            freshness: 0.35,
            variety: 0.25,
            season: 0.25,
            formality: 0.15,
        }
    }
}

impl WearWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidWeights`] when any weight is negative or
    /// not finite, or when the weights do not sum to `1.0`.
    pub fn validate(self) -> Result<Self, ScoringError> {
        check([self.freshness, self.variety, self.season, self.formality])?;
        Ok(self)
    }
}

/// Relative weighting of the four packing factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackingWeights {
    /// Weight of the season factor.
    pub season: f64,
    /// Weight of the formality factor.
    pub formality: f64,
    /// Weight of the freshness factor.
    pub freshness: f64,
    /// Weight of the versatility factor.
    pub versatility: f64,
}

impl Default for PackingWeights {
    fn default() -> Self {
        Self {
            season: 0.3,
            formality: 0.3,
            freshness: 0.25,
            versatility: 0.15,
        }
    }
}

impl PackingWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidWeights`] when any weight is negative or
    /// not finite, or when the weights do not sum to `1.0`.
    pub fn validate(self) -> Result<Self, ScoringError> {
        check([self.season, self.formality, self.freshness, self.versatility])?;
        Ok(self)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "validation sums the weights and compares against one"
)]
fn check(weights: [f64; 4]) -> Result<(), ScoringError> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ScoringError::InvalidWeights);
    }
    let total: f64 = weights.iter().sum();
    if (total - 1.0).abs() > SUM_TOLERANCE {
        return Err(ScoringError::InvalidWeights);
    }
    Ok(())
}
