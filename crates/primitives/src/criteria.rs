//! Hard filter threshold definitions.

use serde::{Deserialize, Serialize};

use crate::CompanyRecord;

/// Hard thresholds applied to raw fundamentals.
///
/// Each bound is optional; an unset bound is unbounded. Thresholds operate
/// on raw values, never normalized ones, so filtering and scoring weights
/// are orthogonal controls: applying a filter changes which records are
/// visible, not any record's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Upper bound on P/E, inclusive.
    pub max_pe: Option<f64>,
    /// Lower bound on ROE, inclusive.
    pub min_roe: Option<f64>,
    /// Upper bound on D/E, inclusive.
    pub max_debt_to_equity: Option<f64>,
}

impl FilterCriteria {
    /// No bounds; every record passes.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_pe: None, min_roe: None, max_debt_to_equity: None }
    }

    /// Conservative value/quality preset: P/E ≤ 25, ROE ≥ 10%, D/E ≤ 10.
    #[must_use]
    pub const fn conservative() -> Self {
        Self { max_pe: Some(25.0), min_roe: Some(0.10), max_debt_to_equity: Some(10.0) }
    }

    /// Whether a record satisfies every set bound.
    ///
    /// A bound on an absent factor rejects the record: no partial matches.
    /// Records reaching the filter through the screening pipeline always
    /// have complete fundamentals, so this only matters for direct use.
    #[must_use]
    pub fn accepts(&self, record: &CompanyRecord) -> bool {
        let within_upper = |bound: Option<f64>, value: Option<f64>| {
            bound.is_none_or(|max| value.is_some_and(|v| v <= max))
        };
        let within_lower = |bound: Option<f64>, value: Option<f64>| {
            bound.is_none_or(|min| value.is_some_and(|v| v >= min))
        };

        within_upper(self.max_pe, record.pe_ratio)
            && within_lower(self.min_roe, record.roe)
            && within_upper(self.max_debt_to_equity, record.debt_to_equity)
    }
}
