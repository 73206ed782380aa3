//! Missing-data cohort selection.

use sifter_primitives::CompanyRecord;

/// Select the records with complete fundamentals, preserving order.
///
/// Records missing any required fundamental are dropped silently; this is
/// data-quality handling, not a failure. Dropped records never receive a
/// score. Pure function: the input is untouched.
#[must_use]
pub fn complete_cohort(records: &[CompanyRecord]) -> Vec<CompanyRecord> {
    records.iter().filter(|r| r.has_complete_fundamentals()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(ticker: &str) -> CompanyRecord {
        let mut r = CompanyRecord::new(ticker);
        r.pe_ratio = Some(15.0);
        r.pb_ratio = Some(2.0);
        r.roe = Some(0.18);
        r.debt_to_equity = Some(0.9);
        r.eps_growth = Some(0.05);
        r
    }

    #[test]
    fn incomplete_records_are_dropped() {
        let mut partial = complete("HOLE");
        partial.roe = None;

        let cohort = complete_cohort(&[complete("A"), partial, complete("B")]);

        assert_eq!(cohort.len(), 2);
        assert!(cohort.iter().all(|r| r.ticker.as_str() != "HOLE"));
    }

    #[test]
    fn order_is_preserved() {
        let cohort = complete_cohort(&[complete("X"), complete("Y"), complete("Z")]);
        let tickers: Vec<&str> = cohort.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, ["X", "Y", "Z"]);
    }

    #[test]
    fn all_incomplete_yields_empty_cohort() {
        let records = [CompanyRecord::new("A"), CompanyRecord::new("B")];
        assert!(complete_cohort(&records).is_empty());
    }
}
