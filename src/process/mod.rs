// src/process/mod.rs

//! CSV row/column utilities for scrape bookkeeping.
//!
//! Everything here treats a CSV as an ordered list of string rows with a
//! header. Mutating operations read the whole file, patch rows in memory and
//! rewrite the file in place. There is no locking and no atomic replace;
//! these are single-writer maintenance scripts, not a storage engine.

pub mod dedup;
pub mod stats;
pub mod status;

pub use dedup::{drop_duplicates, write_header_if_empty};
pub use stats::{count_rows, count_unique, sample_row};
pub use status::{append_status_column, mark_status, reset_status_column};

use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Read every row of `path`, header included. The reader is flexible so
/// ragged rows (e.g. from a previous partial rewrite) still come through.
pub(crate) fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening CSV {:?}", path))?;

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result
            .with_context(|| format!("CSV parse error in {:?} at record {}", path, idx))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Rewrite `path` in full from `rows`. Flexible like the reader, so ragged
/// rows survive a round trip unchanged.
pub(crate) fn write_rows(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("rewriting CSV {:?}", path))?;
    for row in rows {
        wtr.write_record(row)
            .with_context(|| format!("writing row to {:?}", path))?;
    }
    wtr.flush().with_context(|| format!("flushing {:?}", path))?;
    Ok(())
}

/// Index of `name` within `header`, or an error naming the missing column.
pub(crate) fn column_index(header: &[String], name: &str, path: &Path) -> Result<usize> {
    match header.iter().position(|h| h == name) {
        Some(idx) => Ok(idx),
        None => bail!("column '{}' does not exist in {:?}", name, path),
    }
}

/// Pad `row` with empty cells until `idx` is addressable.
pub(crate) fn pad_to(row: &mut Vec<String>, idx: usize) {
    while row.len() <= idx {
        row.push(String::new());
    }
}
