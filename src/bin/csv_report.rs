//! csv_report: quick sanity report for a scrape's output CSV.
//!
//! Prints the data-row count, a random sample row, and unique-value counts
//! for any columns named on the command line.

use anyhow::Result;
use scrapetools::process::{count_rows, count_unique, sample_row};
use std::{env, path::Path, process::exit};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <CSV_FILE> [COLUMN...]", args[0]);
        exit(1);
    }
    let path = Path::new(&args[1]);

    println!("{}: {} entries", path.display(), count_rows(path)?);
    for column in &args[2..] {
        println!(
            "{}: {} unique '{}' entries",
            path.display(),
            count_unique(path, column)?,
            column
        );
    }

    match sample_row(path)? {
        Some(row) => {
            println!("random entry:");
            for (key, value) in row {
                println!("  {}: {}", key, value);
            }
        }
        None => println!("no data rows to sample"),
    }
    Ok(())
}
