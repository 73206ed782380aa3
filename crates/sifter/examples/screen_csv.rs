//! Parse fundamentals from CSV bytes, screen them, and export the result.
//!
//! Run with: `cargo run --example screen_csv`

use sifter::engine::{ScreenConfig, Screener};
use sifter::primitives::FilterCriteria;
use sifter::provider::{ColumnMap, records_from_csv, write_csv};

const SNAPSHOT: &str = "\
Ticker,Company Name,P/E,P/B,ROE,D/E,EPS Growth,Market Cap
AAPL,Apple Inc.,28.0,44.0,1.50,1.80,0.08,2800000000000
MSFT,Microsoft Corp.,35.0,12.0,0.40,0.50,0.15,3100000000000
JPM,JPMorgan Chase,11.0,1.7,0.16,1.30,0.09,550000000000
XOM,Exxon Mobil,13.0,2.1,0.19,0.25,,480000000000
KO,Coca-Cola,24.0,10.0,0.42,1.60,0.06,260000000000
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = records_from_csv(SNAPSHOT.as_bytes(), &ColumnMap::default())?;

    let config = ScreenConfig {
        criteria: FilterCriteria { max_pe: Some(30.0), ..Default::default() },
        ..Default::default()
    };
    let outcome = Screener::with_config(config).run(&records);

    // XOM has no EPS growth in the snapshot, so it never enters the cohort.
    println!(
        "{} of {} records screened, {} matched:",
        outcome.cohort_size,
        outcome.universe_size,
        outcome.ranked.len()
    );
    for scored in outcome.top() {
        println!("  {:<5} {:.3}", scored.ticker(), scored.score);
    }

    let mut csv = Vec::new();
    write_csv(&outcome.ranked, &mut csv)?;
    println!("\n{}", String::from_utf8(csv)?);

    Ok(())
}
