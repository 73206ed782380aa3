//! Company record type definitions.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Stock ticker symbol.
///
/// Uniqueness is not enforced anywhere in the engine; duplicate tickers
/// pass through the screening pipeline as independent records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct Ticker(pub String);

impl Ticker {
    /// Create a new ticker.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One row of raw per-company fundamentals.
///
/// Every numeric field is optional; `None` is the designated absent marker
/// for missing upstream data. The provider boundary maps non-finite values
/// (NaN, infinities) to `None` before a record is constructed, so a present
/// value is always finite.
///
/// Ratios are plain multiples; `roe` and `eps_growth` are fractional values
/// (0.15 means 15%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Ticker symbol.
    pub ticker: Ticker,
    /// Display name; not required for scoring.
    pub company_name: Option<String>,
    /// Price-to-earnings ratio.
    pub pe_ratio: Option<f64>,
    /// Price-to-book ratio.
    pub pb_ratio: Option<f64>,
    /// Return on equity, fractional.
    pub roe: Option<f64>,
    /// Debt-to-equity ratio.
    pub debt_to_equity: Option<f64>,
    /// Year-over-year EPS growth, fractional.
    pub eps_growth: Option<f64>,
    /// Market capitalization in dollars; not required for scoring.
    pub market_cap: Option<f64>,
}

impl CompanyRecord {
    /// Create a record with a ticker and no fundamentals.
    #[must_use]
    pub fn new(ticker: impl Into<Ticker>) -> Self {
        Self {
            ticker: ticker.into(),
            company_name: None,
            pe_ratio: None,
            pb_ratio: None,
            roe: None,
            debt_to_equity: None,
            eps_growth: None,
            market_cap: None,
        }
    }

    /// Whether every fundamental required for scoring is present.
    ///
    /// Required: P/E, P/B, ROE, D/E, EPS growth. Market cap and the company
    /// name are carried for display and summaries only.
    #[must_use]
    pub const fn has_complete_fundamentals(&self) -> bool {
        self.pe_ratio.is_some()
            && self.pb_ratio.is_some()
            && self.roe.is_some()
            && self.debt_to_equity.is_some()
            && self.eps_growth.is_some()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn full_record() -> CompanyRecord {
        CompanyRecord {
            ticker: "AAPL".into(),
            company_name: Some("Apple Inc.".to_string()),
            pe_ratio: Some(28.0),
            pb_ratio: Some(44.0),
            roe: Some(1.5),
            debt_to_equity: Some(1.8),
            eps_growth: Some(0.08),
            market_cap: Some(2.8e12),
        }
    }

    #[test]
    fn ticker_from_str() {
        let ticker: Ticker = "MSFT".into();
        assert_eq!(ticker.as_str(), "MSFT");
        assert_eq!(ticker.to_string(), "MSFT");
    }

    #[test]
    fn complete_record_is_complete() {
        assert!(full_record().has_complete_fundamentals());
    }

    #[test]
    fn new_record_is_incomplete() {
        assert!(!CompanyRecord::new("GOOG").has_complete_fundamentals());
    }

    #[rstest]
    #[case::pe(|r: &mut CompanyRecord| r.pe_ratio = None)]
    #[case::pb(|r: &mut CompanyRecord| r.pb_ratio = None)]
    #[case::roe(|r: &mut CompanyRecord| r.roe = None)]
    #[case::de(|r: &mut CompanyRecord| r.debt_to_equity = None)]
    #[case::eps(|r: &mut CompanyRecord| r.eps_growth = None)]
    fn any_missing_required_field_is_incomplete(#[case] clear: fn(&mut CompanyRecord)) {
        let mut record = full_record();
        clear(&mut record);
        assert!(!record.has_complete_fundamentals());
    }

    #[test]
    fn market_cap_and_name_not_required() {
        let mut record = full_record();
        record.market_cap = None;
        record.company_name = None;
        assert!(record.has_complete_fundamentals());
    }
}
