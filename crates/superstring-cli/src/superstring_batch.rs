//! Batch superstring CLI
//!
//! Usage: superstring_batch --input <FILE> [--output <FILE>] [--max-strings <N>]
//!
//! The input is a JSON Lines file with one JSON array of strings per line.
//! Results are written as JSON Lines next to the input unless --output is given.
//!
//! Example: superstring_batch --input cases.jsonl

mod logging;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Instant;
use superstring_dp::infra::instance_io::{
    ResultRecord, get_results_path, load_instances, save_results,
};
use superstring_dp::{BatchSummary, DEFAULT_MAX_STRINGS, SolveOptions, solve_batch};

/// Solve every instance of a JSON Lines file
#[derive(Debug, Parser)]
#[command(name = "superstring_batch", version, about)]
struct Args {
    /// Instance file (JSON Lines)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Result file (default: <input stem>.solved.jsonl)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum number of strings left after reduction, per instance
    #[arg(long, env = "SUPERSTRING_MAX_STRINGS", default_value_t = DEFAULT_MAX_STRINGS)]
    max_strings: usize,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose, args.quiet);

    println!("Loading instances from {}...", args.input.display());
    let records = load_instances(&args.input)
        .with_context(|| format!("Failed to load instances from {}", args.input.display()))?;
    println!("Loaded {} instances.", records.len());

    let options = SolveOptions::with_max_strings(args.max_strings);
    let start = Instant::now();

    let instances: Vec<_> = records.iter().map(|r| r.strings.clone()).collect();
    let outcomes = solve_batch(&instances, &options);
    let elapsed = start.elapsed();

    for (record, outcome) in records.iter().zip(&outcomes) {
        if let Err(e) = outcome {
            log::warn!("Line {}: {}", record.line, e);
        }
    }

    let results: Vec<ResultRecord> = records
        .iter()
        .zip(&outcomes)
        .map(|(record, outcome)| ResultRecord::from_outcome(record.line, outcome))
        .collect();

    let output_path = args
        .output
        .unwrap_or_else(|| get_results_path(&args.input));
    save_results(&output_path, &results)
        .with_context(|| format!("Failed to save results to {}", output_path.display()))?;

    let summary = BatchSummary::from_outcomes(&outcomes);
    println!(
        "Solved {} of {} instances in {:.3} seconds.",
        summary.solved,
        outcomes.len(),
        elapsed.as_secs_f64()
    );
    if summary.failed() > 0 {
        println!(
            "Rejected: {} invalid, {} too large.",
            summary.invalid, summary.too_large
        );
    }
    println!("Total superstring length: {}", summary.total_length);
    println!("Results saved to {}", output_path.display());

    Ok(())
}
