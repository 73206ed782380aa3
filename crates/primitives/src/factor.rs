//! Scoring factor definitions.

use serde::{Deserialize, Serialize};

use crate::CompanyRecord;

/// Which way a factor's raw value ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Smaller raw values score higher (valuation ratios).
    LowerIsBetter,
    /// Larger raw values score higher (quality and growth metrics).
    HigherIsBetter,
}

impl Direction {
    /// Direction-adjust a normalized value in [0, 1].
    ///
    /// Lower-is-better factors contribute `1 - normalized`; higher-is-better
    /// factors contribute `normalized` unchanged.
    #[must_use]
    pub const fn adjust(self, normalized: f64) -> f64 {
        match self {
            Self::LowerIsBetter => 1.0 - normalized,
            Self::HigherIsBetter => normalized,
        }
    }
}

/// A fundamental factor that contributes to the composite score.
///
/// Debt-to-equity is required for a record to enter the cohort and is
/// available as a filter threshold, but it does not contribute to the
/// score, so it is not a member of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreFactor {
    /// Price-to-earnings ratio.
    PeRatio,
    /// Price-to-book ratio.
    PbRatio,
    /// Return on equity.
    Roe,
    /// EPS growth.
    EpsGrowth,
}

impl ScoreFactor {
    /// All scoring factors, in composite-score order.
    pub const ALL: [Self; 4] = [Self::PeRatio, Self::PbRatio, Self::Roe, Self::EpsGrowth];

    /// Stable identifier used for column naming.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PeRatio => "pe_ratio",
            Self::PbRatio => "pb_ratio",
            Self::Roe => "roe",
            Self::EpsGrowth => "eps_growth",
        }
    }

    /// Ranking direction convention for this factor.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::PeRatio | Self::PbRatio => Direction::LowerIsBetter,
            Self::Roe | Self::EpsGrowth => Direction::HigherIsBetter,
        }
    }

    /// Raw value of this factor on a record.
    #[must_use]
    pub const fn value(self, record: &CompanyRecord) -> Option<f64> {
        match self {
            Self::PeRatio => record.pe_ratio,
            Self::PbRatio => record.pb_ratio,
            Self::Roe => record.roe,
            Self::EpsGrowth => record.eps_growth,
        }
    }
}

impl std::fmt::Display for ScoreFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
