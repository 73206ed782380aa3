//! External column naming.

/// Maps external table headers onto the typed record schema.
///
/// Upstream sources name their columns freely ("P/E" in the reference
/// snapshot, "trailingPE" elsewhere); the mapping isolates the engine from
/// those names. The default matches the reference snapshot layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    /// Ticker symbol column.
    pub ticker: String,
    /// Company display name column.
    pub company_name: String,
    /// P/E ratio column.
    pub pe: String,
    /// P/B ratio column.
    pub pb: String,
    /// ROE column.
    pub roe: String,
    /// D/E ratio column.
    pub debt_to_equity: String,
    /// EPS growth column.
    pub eps_growth: String,
    /// Market cap column.
    pub market_cap: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            ticker: "Ticker".to_string(),
            company_name: "Company Name".to_string(),
            pe: "P/E".to_string(),
            pb: "P/B".to_string(),
            roe: "ROE".to_string(),
            debt_to_equity: "D/E".to_string(),
            eps_growth: "EPS Growth".to_string(),
            market_cap: "Market Cap".to_string(),
        }
    }
}

impl ColumnMap {
    /// The numeric factor columns every snapshot must carry, paired with
    /// their header names.
    #[must_use]
    pub fn required_numeric(&self) -> [&str; 5] {
        [&self.pe, &self.pb, &self.roe, &self.debt_to_equity, &self.eps_growth]
    }
}
