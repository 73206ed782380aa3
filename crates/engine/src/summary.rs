//! Cohort summary aggregates.

use sifter_math::{mean, mean_present};
use sifter_primitives::ScoredRecord;

/// Mean raw fundamentals and composite score over a filtered cohort.
///
/// Built with [`CohortSummary::from_records`], which returns `None` for an
/// empty cohort: aggregates over zero records are unavailable, not zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortSummary {
    /// Number of records summarized.
    pub count: usize,
    /// Mean P/E.
    pub avg_pe: f64,
    /// Mean P/B.
    pub avg_pb: f64,
    /// Mean ROE, fractional.
    pub avg_roe: f64,
    /// Mean D/E.
    pub avg_debt_to_equity: f64,
    /// Mean EPS growth, fractional.
    pub avg_eps_growth: f64,
    /// Mean market cap over the records that report one.
    pub avg_market_cap: Option<f64>,
    /// Mean composite score.
    pub avg_score: f64,
}

impl CohortSummary {
    /// Summarize a cohort of scored records, or `None` if it is empty.
    ///
    /// Scored records always carry complete fundamentals, so every mean
    /// except market cap is taken over the whole cohort.
    #[must_use]
    pub fn from_records(records: &[ScoredRecord]) -> Option<Self> {
        let field = |get: fn(&ScoredRecord) -> Option<f64>| {
            mean(&records.iter().filter_map(get).collect::<Vec<f64>>())
        };

        Some(Self {
            count: records.len(),
            avg_pe: field(|s| s.record.pe_ratio)?,
            avg_pb: field(|s| s.record.pb_ratio)?,
            avg_roe: field(|s| s.record.roe)?,
            avg_debt_to_equity: field(|s| s.record.debt_to_equity)?,
            avg_eps_growth: field(|s| s.record.eps_growth)?,
            avg_market_cap: mean_present(records.iter().map(|s| s.record.market_cap)),
            avg_score: mean(&records.iter().map(|s| s.score).collect::<Vec<f64>>())?,
        })
    }
}
