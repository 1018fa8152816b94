//! csv_dedupe: drop duplicate rows by a key column, projecting onto the
//! named output fields.

use anyhow::Result;
use scrapetools::process::drop_duplicates;
use std::{env, process::exit};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        eprintln!("Usage: {} <FROM> <TO> <KEY_COLUMN> <FIELD>...", args[0]);
        exit(1);
    }

    let fields: Vec<&str> = args[4..].iter().map(String::as_str).collect();
    drop_duplicates(&args[1], &args[2], &args[3], &fields)?;
    println!("Duplicates dropped: ({} -> {})", args[1], args[2]);
    Ok(())
}
