//! Error types for the provider boundary.

/// Errors that can occur loading or exporting fundamentals.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// I/O error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Expected column absent from the input table.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// The provider produced no usable records at all.
    ///
    /// Individual unusable rows are skipped and logged; a completely empty
    /// result is fatal, since scoring over zero input has nothing to report.
    #[error("provider returned no usable records")]
    NoData,
}
