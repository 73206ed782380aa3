//! Raw-value threshold filtering.

use sifter_primitives::{FilterCriteria, ScoredRecord};

/// Retain the scored records that satisfy every set bound.
///
/// Thresholds compare raw fundamentals, never normalized values, and the
/// scores themselves are untouched: filtering changes which records are
/// visible, not what they scored. An empty result is a valid outcome.
#[must_use]
pub fn apply_criteria(scored: Vec<ScoredRecord>, criteria: &FilterCriteria) -> Vec<ScoredRecord> {
    scored.into_iter().filter(|s| criteria.accepts(&s.record)).collect()
}

#[cfg(test)]
mod tests {
    use sifter_primitives::{CompanyRecord, FactorWeights};

    use super::*;
    use crate::score_cohort;

    fn record(ticker: &str, pe: f64, roe: f64, de: f64) -> CompanyRecord {
        let mut r = CompanyRecord::new(ticker);
        r.pe_ratio = Some(pe);
        r.pb_ratio = Some(1.0);
        r.roe = Some(roe);
        r.debt_to_equity = Some(de);
        r.eps_growth = Some(0.05);
        r
    }

    fn scored_cohort() -> Vec<ScoredRecord> {
        let cohort = [
            record("CHEAP", 8.0, 0.25, 0.5),
            record("FAIR", 18.0, 0.12, 1.5),
            record("RICH", 40.0, 0.04, 6.0),
        ];
        score_cohort(&cohort, &FactorWeights::default())
    }

    #[test]
    fn bounds_drop_out_of_range_records() {
        let criteria = FilterCriteria { max_pe: Some(25.0), ..Default::default() };
        let kept = apply_criteria(scored_cohort(), &criteria);

        let tickers: Vec<&str> = kept.iter().map(ScoredRecord::ticker).collect();
        assert_eq!(tickers, ["CHEAP", "FAIR"]);
    }

    #[test]
    fn filtering_never_changes_scores() {
        let unfiltered = scored_cohort();
        let criteria = FilterCriteria { min_roe: Some(0.10), ..Default::default() };
        let filtered = apply_criteria(scored_cohort(), &criteria);

        for kept in &filtered {
            let original =
                unfiltered.iter().find(|s| s.ticker() == kept.ticker()).expect("record survived");
            assert_eq!(kept.score, original.score);
            assert_eq!(kept.normalized, original.normalized);
        }
    }

    #[test]
    fn impossible_criteria_give_empty_result() {
        let criteria = FilterCriteria { max_pe: Some(-1.0), ..Default::default() };
        assert!(apply_criteria(scored_cohort(), &criteria).is_empty());
    }

    #[test]
    fn unbounded_criteria_keep_everything() {
        assert_eq!(apply_criteria(scored_cohort(), &FilterCriteria::unbounded()).len(), 3);
    }
}
