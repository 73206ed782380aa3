//! Factor weight definitions.

use serde::{Deserialize, Serialize};

use crate::ScoreFactor;

/// Non-negative weights for the composite score.
///
/// Weights are not required to sum to 1 and are not rescaled: the composite
/// score is a relative ranking value, only comparable between records scored
/// under the same weight configuration. A zero weight makes its factor
/// inert; all-zero weights yield a uniform score of 0 for every record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Weight on P/E (lower is better).
    pub pe: f64,
    /// Weight on P/B (lower is better).
    pub pb: f64,
    /// Weight on ROE (higher is better).
    pub roe: f64,
    /// Weight on EPS growth (higher is better).
    pub eps_growth: f64,
}

impl FactorWeights {
    /// Create weights from per-factor values.
    #[must_use]
    pub fn new(pe: f64, pb: f64, roe: f64, eps_growth: f64) -> Self {
        debug_assert!(
            pe >= 0.0 && pb >= 0.0 && roe >= 0.0 && eps_growth >= 0.0,
            "factor weights must be non-negative"
        );
        Self { pe, pb, roe, eps_growth }
    }

    /// Equal weight on every factor.
    #[must_use]
    pub const fn equal(weight: f64) -> Self {
        Self { pe: weight, pb: weight, roe: weight, eps_growth: weight }
    }

    /// Weight assigned to a scoring factor.
    #[must_use]
    pub const fn weight(&self, factor: ScoreFactor) -> f64 {
        match factor {
            ScoreFactor::PeRatio => self.pe,
            ScoreFactor::PbRatio => self.pb,
            ScoreFactor::Roe => self.roe,
            ScoreFactor::EpsGrowth => self.eps_growth,
        }
    }

    /// Sum of all weights.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.pe + self.pb + self.roe + self.eps_growth
    }
}

impl Default for FactorWeights {
    /// Equal 0.25 weight on each factor.
    fn default() -> Self {
        Self::equal(0.25)
    }
}
