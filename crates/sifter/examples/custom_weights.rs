//! Screen a small in-memory universe under two weight configurations.
//!
//! Run with: `cargo run --example custom_weights`

use sifter::engine::{ScreenConfig, Screener};
use sifter::primitives::{CompanyRecord, FactorWeights};

fn record(ticker: &str, pe: f64, pb: f64, roe: f64, de: f64, eps: f64) -> CompanyRecord {
    let mut r = CompanyRecord::new(ticker);
    r.pe_ratio = Some(pe);
    r.pb_ratio = Some(pb);
    r.roe = Some(roe);
    r.debt_to_equity = Some(de);
    r.eps_growth = Some(eps);
    r
}

fn main() {
    let universe = vec![
        record("VALU", 8.0, 0.9, 0.11, 0.6, 0.02),
        record("GRWT", 45.0, 12.0, 0.25, 1.2, 0.40),
        record("QLTY", 22.0, 6.0, 0.35, 0.3, 0.12),
        record("LEVR", 12.0, 1.5, 0.18, 4.5, 0.05),
    ];

    // Equal weights: the balanced view.
    let balanced = Screener::new().run(&universe);
    println!("Balanced ranking:");
    for scored in &balanced.ranked {
        println!("  {:<5} {:.3}", scored.ticker(), scored.score);
    }

    // Tilt hard toward growth. Scores are only comparable within one
    // configuration, but the ranking shift is the point.
    let growth_config = ScreenConfig {
        weights: FactorWeights::new(0.05, 0.05, 0.20, 0.70),
        ..Default::default()
    };
    let growthy = Screener::with_config(growth_config).run(&universe);
    println!("\nGrowth-tilted ranking:");
    for scored in &growthy.ranked {
        println!("  {:<5} {:.3}", scored.ticker(), scored.score);
    }
}
