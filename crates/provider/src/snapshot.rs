//! Fundamentals snapshot loading.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use polars::prelude::*;
use sifter_primitives::{CompanyRecord, Ticker};
use tracing::{debug, warn};

use crate::{ColumnMap, ProviderError};

/// Source of raw fundamentals for the screening engine.
///
/// The engine does not care whether the table behind this trait is a live
/// fetch or a cached snapshot; it only sees rows that may contain missing
/// values.
pub trait FundamentalsProvider {
    /// Produce a snapshot of raw company records.
    ///
    /// # Errors
    /// A provider with no usable records at all fails with
    /// [`ProviderError::NoData`]; individually unusable rows are skipped
    /// with a logged diagnostic instead.
    fn fetch(&self) -> Result<Snapshot, ProviderError>;
}

/// A dated table of raw company records.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Date the fundamentals were captured.
    pub as_of: NaiveDate,
    /// Raw records, in source order.
    pub records: Vec<CompanyRecord>,
}

impl Snapshot {
    /// Create a snapshot.
    #[must_use]
    pub const fn new(as_of: NaiveDate, records: Vec<CompanyRecord>) -> Self {
        Self { as_of, records }
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// CSV snapshot file provider.
#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    path: PathBuf,
    columns: ColumnMap,
    as_of: Option<NaiveDate>,
}

impl SnapshotProvider {
    /// Create a provider over a CSV file with the default column mapping.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), columns: ColumnMap::default(), as_of: None }
    }

    /// Use a custom column mapping.
    #[must_use]
    pub fn with_columns(mut self, columns: ColumnMap) -> Self {
        self.columns = columns;
        self
    }

    /// Pin the snapshot date instead of stamping the load date.
    #[must_use]
    pub const fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FundamentalsProvider for SnapshotProvider {
    fn fetch(&self) -> Result<Snapshot, ProviderError> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(self.path.clone()))?
            .finish()?;

        let records = records_from_dataframe(&df, &self.columns)?;
        if records.is_empty() {
            return Err(ProviderError::NoData);
        }
        debug!(rows = df.height(), records = records.len(), "loaded fundamentals snapshot");

        let as_of = self.as_of.unwrap_or_else(|| Utc::now().date_naive());
        Ok(Snapshot::new(as_of, records))
    }
}

/// Parse CSV bytes into company records.
///
/// # Errors
/// Fails if the bytes are not parseable CSV or a required column is absent.
pub fn records_from_csv<B: AsRef<[u8]> + Send + Sync>(
    data: B,
    columns: &ColumnMap,
) -> Result<Vec<CompanyRecord>, ProviderError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(data))
        .finish()?;

    records_from_dataframe(&df, columns)
}

/// Map a raw table onto typed company records.
///
/// The ticker column and every numeric factor column must exist; the
/// company name and market cap columns are optional. Missing cells and
/// non-finite values become `None`. Rows without a ticker are skipped with
/// a warning — per-row recovery, not failure.
///
/// # Errors
/// Fails only on a missing required column or a column of the wrong shape.
pub fn records_from_dataframe(
    df: &DataFrame,
    columns: &ColumnMap,
) -> Result<Vec<CompanyRecord>, ProviderError> {
    let tickers = string_values(df, &columns.ticker)?
        .ok_or_else(|| ProviderError::MissingColumn(columns.ticker.clone()))?;
    let names = string_values(df, &columns.company_name)?;

    let pe = numeric_values(df, &columns.pe)?;
    let pb = numeric_values(df, &columns.pb)?;
    let roe = numeric_values(df, &columns.roe)?;
    let de = numeric_values(df, &columns.debt_to_equity)?;
    let eps = numeric_values(df, &columns.eps_growth)?;
    let caps = optional_numeric_values(df, &columns.market_cap)?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let Some(ticker) = tickers[row].as_deref().map(str::trim).filter(|t| !t.is_empty())
        else {
            warn!(row, "skipping row without ticker");
            continue;
        };

        let mut record = CompanyRecord::new(Ticker::new(ticker));
        record.company_name = names.as_ref().and_then(|n| n[row].clone());
        record.pe_ratio = pe[row];
        record.pb_ratio = pb[row];
        record.roe = roe[row];
        record.debt_to_equity = de[row];
        record.eps_growth = eps[row];
        record.market_cap = caps.as_ref().and_then(|c| c[row]);
        records.push(record);
    }

    Ok(records)
}

/// String cells of a column, or `None` if the column is absent.
fn string_values(
    df: &DataFrame,
    name: &str,
) -> Result<Option<Vec<Option<String>>>, ProviderError> {
    let Ok(column) = df.column(name) else {
        return Ok(None);
    };
    let values = column.str()?.into_iter().map(|v| v.map(ToString::to_string)).collect();
    Ok(Some(values))
}

/// Numeric cells of a required column; non-finite values become `None`.
fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, ProviderError> {
    let column =
        df.column(name).map_err(|_| ProviderError::MissingColumn(name.to_string()))?;
    let casted = column.cast(&DataType::Float64)?;
    Ok(casted.f64()?.into_iter().map(|v| v.filter(|x| x.is_finite())).collect())
}

/// Numeric cells of a column that is allowed to be absent entirely.
fn optional_numeric_values(
    df: &DataFrame,
    name: &str,
) -> Result<Option<Vec<Option<f64>>>, ProviderError> {
    if df.column(name).is_err() {
        return Ok(None);
    }
    numeric_values(df, name).map(Some)
}
