//! Shortest superstring CLI
//!
//! Usage: superstring_solve [OPTIONS] [STRING]...
//!
//! Example:
//!   superstring_solve abc bcd cde
//!   abcde
//!   superstring_solve --details xyz abc

mod logging;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use superstring_dp::{DEFAULT_MAX_STRINGS, SolveOptions, solve, verify_placements};

/// Compute the shortest string containing every argument as a substring
#[derive(Debug, Parser)]
#[command(name = "superstring_solve", version, about)]
struct Args {
    /// Strings to cover
    #[arg(value_name = "STRING")]
    strings: Vec<String>,

    /// Maximum number of strings left after reduction
    #[arg(long, env = "SUPERSTRING_MAX_STRINGS", default_value_t = DEFAULT_MAX_STRINGS)]
    max_strings: usize,

    /// Print merge order and offsets after the superstring
    #[arg(short, long)]
    details: bool,

    /// Re-check that every input occurs at its reported offset
    #[arg(long)]
    verify: bool,

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

    log::info!("Solving {} strings", args.strings.len());
    let options = SolveOptions::with_max_strings(args.max_strings);
    let solved = solve(&args.strings, &options).context("Failed to compute superstring")?;

    println!("{}", solved.text);

    if args.details {
        println!("Length: {}", solved.len());
        println!("Merge order: {:?}", solved.order);
        for (input, offset) in args.strings.iter().zip(&solved.offsets) {
            println!("  {:>6}  {}", offset, input);
        }
    }

    if args.verify {
        verify_placements(&solved.text, &args.strings, &solved.offsets)
            .context("Verification failed")?;
        log::info!("Verified {} placements", solved.offsets.len());
    }

    Ok(())
}
