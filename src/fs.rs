// src/fs.rs

//! Filesystem conveniences shared by the scrape pipelines.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Create every directory in `dirs`, parents included. Directories that
/// already exist are left alone.
pub fn mkdirs<P: AsRef<Path>>(dirs: &[P]) -> Result<()> {
    for dir in dirs {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {:?}", dir.as_ref()))?;
    }
    Ok(())
}

/// True when `path` does not exist or is a zero-length file.
///
/// Used to decide whether an output CSV still needs its header row.
pub fn file_is_empty<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).map(|meta| meta.len() == 0).unwrap_or(true)
}

/// Absolutize `path` against the current working directory, normalizing
/// `.` and `..` components.
pub fn clean_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    std::path::absolute(path.as_ref())
        .with_context(|| format!("cleaning path {:?}", path.as_ref()))
}

/// Read a JSON file, deserializing into `T`. Use `serde_json::Value` for
/// schemaless data.
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let data =
        fs::read(&path).with_context(|| format!("reading {:?}", path.as_ref()))?;
    serde_json::from_slice(&data)
        .with_context(|| format!("decoding JSON from {:?}", path.as_ref()))
}

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

static SIZE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([0-9.]+)\s*(B|KB|MB|GB)$").expect("size regex should parse")
});

/// Render a byte count as a human-readable size, e.g. `"1.50 MB"`.
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.2} {}", value, SIZE_UNITS[unit])
    }
}

/// Parse a human-readable size like `"1.5 MB"` back into bytes.
/// Case-insensitive, whitespace between number and unit optional.
/// Returns `None` for anything malformed.
pub fn parse_size(text: &str) -> Option<u64> {
    let caps = SIZE_RE.captures(text.trim())?;
    let value: f64 = caps[1].parse().ok()?;
    let unit = caps[2].to_uppercase();
    let exponent = SIZE_UNITS.iter().position(|u| *u == unit)?;
    Some((value * 1024f64.powi(exponent as i32)) as u64)
}
