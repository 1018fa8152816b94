// src/process/status.rs

//! Status-column bookkeeping for resumable scrapes.
//!
//! A long-running scrape appends a status column to its job CSV, resets it
//! to "pending" on a fresh run, and marks rows "completed" as it goes. On
//! restart, rows still marked pending are the remaining work.

use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use super::{column_index, pad_to, read_rows, write_rows};

/// Append `column` to the header and fill every data row with `fill`.
///
/// If the column already exists the call is a no-op, so a scrape can run
/// this unconditionally at startup.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn append_status_column<P: AsRef<Path>>(path: P, column: &str, fill: &str) -> Result<()> {
    let path = path.as_ref();
    let mut rows = read_rows(path)?;
    let Some(header) = rows.first_mut() else {
        bail!("CSV {:?} has no header row", path);
    };

    if header.iter().any(|h| h == column) {
        info!(column, "status column already exists; no changes made");
        return Ok(());
    }
    header.push(column.to_string());

    for row in rows.iter_mut().skip(1) {
        row.push(fill.to_string());
    }

    write_rows(path, &rows)?;
    info!(column, fill, "appended status column");
    Ok(())
}

/// Set every data row's `column` cell to `value`.
///
/// Errors when `column` is missing from the header. Rows shorter than the
/// status index are padded with empty cells first.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn reset_status_column<P: AsRef<Path>>(path: P, column: &str, value: &str) -> Result<()> {
    let path = path.as_ref();
    let mut rows = read_rows(path)?;
    let Some(header) = rows.first() else {
        bail!("CSV {:?} has no header row", path);
    };
    let idx = column_index(header, column, path)?;

    for row in rows.iter_mut().skip(1) {
        pad_to(row, idx);
        row[idx] = value.to_string();
    }

    write_rows(path, &rows)?;
    info!(column, value, rows = rows.len() - 1, "reset status column");
    Ok(())
}

/// Set `status_column` to `value` on every row whose `target_column` cell
/// equals `target`. Other rows are untouched.
///
/// Errors when either column is missing from the header.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn mark_status<P: AsRef<Path>>(
    path: P,
    target: &str,
    target_column: &str,
    status_column: &str,
    value: &str,
) -> Result<()> {
    let path = path.as_ref();
    let mut rows = read_rows(path)?;
    let Some(header) = rows.first() else {
        bail!("CSV {:?} has no header row", path);
    };
    let target_idx = column_index(header, target_column, path)?;
    let status_idx = column_index(header, status_column, path)?;

    let mut marked = 0usize;
    for row in rows.iter_mut().skip(1) {
        pad_to(row, target_idx.max(status_idx));
        if row[target_idx] == target {
            row[status_idx] = value.to_string();
            marked += 1;
        }
    }

    write_rows(path, &rows)?;
    info!(target, value, marked, "marked status");
    Ok(())
}
