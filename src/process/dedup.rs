// src/process/dedup.rs

//! Header bootstrapping and key-column deduplication.

use anyhow::{bail, Context, Result};
use csv::Writer;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use super::{column_index, read_rows};
use crate::fs::file_is_empty;

/// Write a header row when `path` is missing or empty; otherwise leave the
/// file alone. Lets an appending scraper start fresh or resume with the
/// same call.
pub fn write_header_if_empty<P: AsRef<Path>>(path: P, fieldnames: &[&str]) -> Result<()> {
    let path = path.as_ref();
    if !file_is_empty(path) {
        return Ok(());
    }
    let mut wtr =
        Writer::from_path(path).with_context(|| format!("creating CSV {:?}", path))?;
    wtr.write_record(fieldnames)
        .with_context(|| format!("writing header to {:?}", path))?;
    wtr.flush().with_context(|| format!("flushing {:?}", path))?;
    info!(path = %path.display(), "wrote CSV header");
    Ok(())
}

/// Copy `from` to `to`, keeping only the first row for each distinct value
/// of `key_column` and projecting rows onto `out_fields`, in original
/// order. An output field absent from the source header becomes an empty
/// cell.
///
/// Errors when `key_column` is missing from the source header.
#[tracing::instrument(
    level = "debug",
    skip(from, to),
    fields(from = %from.as_ref().display(), to = %to.as_ref().display())
)]
pub fn drop_duplicates<P: AsRef<Path>, Q: AsRef<Path>>(
    from: P,
    to: Q,
    key_column: &str,
    out_fields: &[&str],
) -> Result<()> {
    let from = from.as_ref();
    let to = to.as_ref();

    let rows = read_rows(from)?;
    let Some(header) = rows.first() else {
        bail!("CSV {:?} has no header row", from);
    };
    let key_idx = column_index(header, key_column, from)?;

    // Map each output field back onto its source column, if present.
    let source_idx: Vec<Option<usize>> = out_fields
        .iter()
        .map(|field| header.iter().position(|h| h == field))
        .collect();

    let mut wtr = Writer::from_path(to).with_context(|| format!("creating CSV {:?}", to))?;
    wtr.write_record(out_fields)
        .with_context(|| format!("writing header to {:?}", to))?;

    let mut seen = HashSet::new();
    let mut kept = 0usize;
    let mut dropped = 0usize;
    for row in rows.iter().skip(1) {
        let key = row.get(key_idx).map(String::as_str).unwrap_or("");
        if !seen.insert(key.to_string()) {
            dropped += 1;
            continue;
        }
        let out: Vec<&str> = source_idx
            .iter()
            .map(|idx| {
                idx.and_then(|i| row.get(i))
                    .map(String::as_str)
                    .unwrap_or("")
            })
            .collect();
        wtr.write_record(&out)
            .with_context(|| format!("writing row to {:?}", to))?;
        kept += 1;
    }
    wtr.flush().with_context(|| format!("flushing {:?}", to))?;

    info!(key_column, kept, dropped, "dropped duplicates");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::read_rows;
    use anyhow::Result;
    use std::fs;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn fixture(content: &str) -> Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        Ok(tmp)
    }

    #[test]
    fn header_written_only_when_empty() -> Result<()> {
        let root = tempdir()?;
        let path = root.path().join("out.csv");

        write_header_if_empty(&path, &["url", "title"])?;
        assert_eq!(fs::read_to_string(&path)?, "url,title\n");

        // an existing file with content is left untouched
        fs::write(&path, "url,title\nhttps://a,first\n")?;
        write_header_if_empty(&path, &["something", "else"])?;
        assert_eq!(fs::read_to_string(&path)?, "url,title\nhttps://a,first\n");
        Ok(())
    }

    #[test]
    fn keeps_first_occurrence_in_order() -> Result<()> {
        let from = fixture(
            "url,title,visited\n\
             https://a,first,1\n\
             https://b,second,2\n\
             https://a,third,3\n\
             https://c,fourth,4\n\
             https://b,fifth,5\n",
        )?;
        let to = NamedTempFile::new()?;

        drop_duplicates(from.path(), to.path(), "url", &["url", "title"])?;

        let rows = read_rows(to.path())?;
        assert_eq!(rows[0], vec!["url", "title"]);
        assert_eq!(rows[1], vec!["https://a", "first"]);
        assert_eq!(rows[2], vec!["https://b", "second"]);
        assert_eq!(rows[3], vec!["https://c", "fourth"]);
        assert_eq!(rows.len(), 4);
        Ok(())
    }

    #[test]
    fn missing_output_fields_become_empty_cells() -> Result<()> {
        let from = fixture("url,title\nhttps://a,first\n")?;
        let to = NamedTempFile::new()?;

        drop_duplicates(from.path(), to.path(), "url", &["url", "fetched_at"])?;

        let rows = read_rows(to.path())?;
        assert_eq!(rows[0], vec!["url", "fetched_at"]);
        assert_eq!(rows[1], vec!["https://a", ""]);
        Ok(())
    }

    #[test]
    fn errors_on_missing_key_column() -> Result<()> {
        let from = fixture("url,title\nhttps://a,first\n")?;
        let to = NamedTempFile::new()?;

        let err = drop_duplicates(from.path(), to.path(), "id", &["url"]).unwrap_err();
        assert!(err.to_string().contains("'id'"));
        Ok(())
    }
}
