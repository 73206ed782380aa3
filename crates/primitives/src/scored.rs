//! Scored record type definitions.

use serde::{Deserialize, Serialize};

use crate::{CompanyRecord, ScoreFactor};

/// Per-factor min-max normalized values for one record.
///
/// Each value lies in [0, 1] within the cohort that produced it; a factor
/// whose cohort range was degenerate carries the engine's documented
/// fallback constant instead of NaN. Values are only comparable between
/// records normalized in the same cohort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFactors {
    /// Normalized P/E.
    pub pe_ratio: f64,
    /// Normalized P/B.
    pub pb_ratio: f64,
    /// Normalized ROE.
    pub roe: f64,
    /// Normalized EPS growth.
    pub eps_growth: f64,
}

impl NormalizedFactors {
    /// Normalized value for a scoring factor.
    #[must_use]
    pub const fn get(&self, factor: ScoreFactor) -> f64 {
        match factor {
            ScoreFactor::PeRatio => self.pe_ratio,
            ScoreFactor::PbRatio => self.pb_ratio,
            ScoreFactor::Roe => self.roe,
            ScoreFactor::EpsGrowth => self.eps_growth,
        }
    }
}

/// A company record with its normalized factors and composite score.
///
/// Only records with complete fundamentals are ever scored; there are no
/// partial-score records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// The underlying raw record.
    pub record: CompanyRecord,
    /// Cohort-normalized factor values.
    pub normalized: NormalizedFactors,
    /// Weighted direction-adjusted composite; higher is better.
    pub score: f64,
}

impl ScoredRecord {
    /// Ticker of the underlying record.
    #[must_use]
    pub fn ticker(&self) -> &str {
        self.record.ticker.as_str()
    }
}
