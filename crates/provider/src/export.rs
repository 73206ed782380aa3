//! CSV export of screened tables.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use polars::prelude::*;
use sifter_primitives::ScoredRecord;

use crate::{ColumnMap, ProviderError};

/// Header of the composite score column in exported tables.
pub const FACTOR_SCORE_COLUMN: &str = "Factor Score";

/// Build an export table from ranked records.
///
/// Columns use the default external header names plus [`FACTOR_SCORE_COLUMN`],
/// one row per record in the given order. Numeric fields keep their natural
/// precision; ROE and EPS growth stay fractional (0.15, not "15%").
///
/// # Errors
/// Fails if the frame cannot be assembled.
pub fn to_dataframe(records: &[ScoredRecord]) -> Result<DataFrame, ProviderError> {
    let columns = ColumnMap::default();

    let tickers: Vec<String> = records.iter().map(|s| s.ticker().to_string()).collect();
    let names: Vec<Option<String>> =
        records.iter().map(|s| s.record.company_name.clone()).collect();
    let field = |get: fn(&ScoredRecord) -> Option<f64>| -> Vec<Option<f64>> {
        records.iter().map(get).collect()
    };
    let scores: Vec<f64> = records.iter().map(|s| s.score).collect();

    let df = DataFrame::new(vec![
        Column::new(columns.ticker.as_str().into(), tickers),
        Column::new(columns.company_name.as_str().into(), names),
        Column::new(columns.pe.as_str().into(), field(|s| s.record.pe_ratio)),
        Column::new(columns.pb.as_str().into(), field(|s| s.record.pb_ratio)),
        Column::new(columns.roe.as_str().into(), field(|s| s.record.roe)),
        Column::new(columns.debt_to_equity.as_str().into(), field(|s| s.record.debt_to_equity)),
        Column::new(columns.eps_growth.as_str().into(), field(|s| s.record.eps_growth)),
        Column::new(columns.market_cap.as_str().into(), field(|s| s.record.market_cap)),
        Column::new(FACTOR_SCORE_COLUMN.into(), scores),
    ])?;

    Ok(df)
}

/// Write ranked records as CSV.
///
/// An empty input writes a header-only file — a valid, expected outcome for
/// an empty screening result.
///
/// # Errors
/// Fails on frame assembly or serialization errors.
pub fn write_csv<W: Write>(records: &[ScoredRecord], writer: W) -> Result<(), ProviderError> {
    let mut df = to_dataframe(records)?;
    CsvWriter::new(writer).include_header(true).finish(&mut df)?;
    Ok(())
}

/// Write ranked records to a CSV file at `path`.
///
/// # Errors
/// Fails if the file cannot be created or written.
pub fn export_csv(records: &[ScoredRecord], path: impl AsRef<Path>) -> Result<(), ProviderError> {
    let file = File::create(path)?;
    write_csv(records, file)
}

#[cfg(test)]
mod tests {
    use sifter_primitives::{CompanyRecord, NormalizedFactors};

    use super::*;
    use crate::records_from_csv;

    fn scored(ticker: &str, pe: f64, score: f64) -> ScoredRecord {
        let mut record = CompanyRecord::new(ticker);
        record.company_name = Some(format!("{ticker} Corp."));
        record.pe_ratio = Some(pe);
        record.pb_ratio = Some(2.0);
        record.roe = Some(0.15);
        record.debt_to_equity = Some(0.8);
        record.eps_growth = Some(0.05);
        record.market_cap = Some(1.0e10);
        ScoredRecord {
            record,
            normalized: NormalizedFactors {
                pe_ratio: 0.0,
                pb_ratio: 0.0,
                roe: 1.0,
                eps_growth: 1.0,
            },
            score,
        }
    }

    #[test]
    fn export_has_external_headers() {
        let mut buffer = Vec::new();
        write_csv(&[scored("AAA", 12.0, 0.9)], &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "Ticker,Company Name,P/E,P/B,ROE,D/E,EPS Growth,Market Cap,Factor Score"
        );
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn exported_rows_keep_rank_order() {
        let df = to_dataframe(&[scored("TOP", 8.0, 0.9), scored("NEXT", 20.0, 0.4)]).unwrap();

        assert_eq!(df.height(), 2);
        let tickers = df.column("Ticker").unwrap().str().unwrap();
        assert_eq!(tickers.get(0), Some("TOP"));
        assert_eq!(tickers.get(1), Some("NEXT"));
    }

    #[test]
    fn empty_result_exports_header_only() {
        let mut buffer = Vec::new();
        write_csv(&[], &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn exported_table_reimports() {
        let mut buffer = Vec::new();
        write_csv(&[scored("AAA", 12.0, 0.9)], &mut buffer).unwrap();

        let records = records_from_csv(buffer, &ColumnMap::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ticker.as_str(), "AAA");
        assert_eq!(records[0].pe_ratio, Some(12.0));
        // Fractional percentage convention survives the round trip.
        assert_eq!(records[0].roe, Some(0.15));
    }
}
