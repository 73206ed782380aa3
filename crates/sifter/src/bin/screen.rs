//! Equity screening CLI.
//!
//! Loads a fundamentals snapshot, scores and ranks it, prints the summary
//! and top table, and optionally exports the full filtered table.
//!
//! Usage: `screen SNAPSHOT.csv [--top N] [--max-pe X] [--min-roe X] [--max-de X]
//! [--w-pe X] [--w-pb X] [--w-roe X] [--w-eps X] [--out FILE]`

use std::{env, process};

use sifter::engine::{ScreenConfig, ScreenOutcome, Screener};
use sifter::primitives::{FactorWeights, FilterCriteria};
use sifter::provider::{FundamentalsProvider, SnapshotProvider, export_csv, to_dataframe};
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args[1].starts_with("--") {
        eprintln!(
            "Usage: screen SNAPSHOT.csv [--top N] [--max-pe X] [--min-roe X] [--max-de X] \
             [--w-pe X] [--w-pb X] [--w-roe X] [--w-eps X] [--out FILE]"
        );
        process::exit(1);
    }

    let snapshot_path = &args[1];
    let config = parse_config(&args);
    let out_path = flag_value(&args, "--out");

    let snapshot = match SnapshotProvider::new(snapshot_path).fetch() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    info!(records = snapshot.len(), as_of = %snapshot.as_of, "snapshot loaded");

    let outcome = Screener::with_config(config).run(&snapshot.records);
    print_outcome(&outcome);

    if let Some(path) = out_path {
        if let Err(e) = export_csv(&outcome.ranked, &path) {
            eprintln!("Error writing {path}: {e}");
            process::exit(1);
        }
        println!("\nWrote {} records to {path}", outcome.ranked.len());
    }
}

fn parse_config(args: &[String]) -> ScreenConfig {
    let weight = |name: &str| parse_flag(args, name).unwrap_or(0.25);

    ScreenConfig {
        weights: FactorWeights::new(
            weight("--w-pe"),
            weight("--w-pb"),
            weight("--w-roe"),
            weight("--w-eps"),
        ),
        criteria: FilterCriteria {
            max_pe: parse_flag(args, "--max-pe"),
            min_roe: parse_flag(args, "--min-roe"),
            max_debt_to_equity: parse_flag(args, "--max-de"),
        },
        top_k: parse_flag(args, "--top").unwrap_or(sifter::engine::DEFAULT_TOP_K),
    }
}

fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.iter().position(|a| a == name).and_then(|i| args.get(i + 1)).cloned()
}

fn parse_flag<T: std::str::FromStr>(args: &[String], name: &str) -> Option<T> {
    flag_value(args, name).and_then(|v| v.parse().ok())
}

fn print_outcome(outcome: &ScreenOutcome) {
    println!(
        "\nScreened {} records; {} with complete fundamentals; {} matched.",
        outcome.universe_size,
        outcome.cohort_size,
        outcome.ranked.len()
    );

    let Some(summary) = &outcome.summary else {
        println!("\nNo records match the criteria.");
        return;
    };

    println!("\nCohort averages:");
    println!("  P/E          {:>10.2}", summary.avg_pe);
    println!("  P/B          {:>10.2}", summary.avg_pb);
    println!("  ROE          {:>9.1}%", summary.avg_roe * 100.0);
    println!("  D/E          {:>10.2}", summary.avg_debt_to_equity);
    println!("  EPS growth   {:>9.1}%", summary.avg_eps_growth * 100.0);
    match summary.avg_market_cap {
        Some(cap) => println!("  Market cap   {:>9.2}B", cap / 1e9),
        None => println!("  Market cap   unavailable"),
    }
    println!("  Factor score {:>10.3}", summary.avg_score);

    println!("\nTop {} by factor score:", outcome.top().len());
    match to_dataframe(outcome.top()) {
        Ok(df) => println!("{df}"),
        Err(e) => eprintln!("Error rendering table: {e}"),
    }
}
