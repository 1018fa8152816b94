// src/process/stats.rs

//! Spot-check helpers for eyeballing a scrape's output CSV.

use anyhow::{bail, Result};
use rand::Rng;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use super::{column_index, read_rows};

/// Number of data rows in `path` (header excluded).
pub fn count_rows<P: AsRef<Path>>(path: P) -> Result<usize> {
    let rows = read_rows(path.as_ref())?;
    Ok(rows.len().saturating_sub(1))
}

/// Number of distinct values in `column`. Errors when the column is
/// missing from the header.
pub fn count_unique<P: AsRef<Path>>(path: P, column: &str) -> Result<usize> {
    let path = path.as_ref();
    let rows = read_rows(path)?;
    let Some(header) = rows.first() else {
        bail!("CSV {:?} has no header row", path);
    };
    let idx = column_index(header, column, path)?;

    let distinct: HashSet<&str> = rows
        .iter()
        .skip(1)
        .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
        .collect();
    Ok(distinct.len())
}

/// A uniformly random data row as a header→value map, or `None` when the
/// file holds nothing but a header. Short rows read as empty cells.
pub fn sample_row<P: AsRef<Path>>(path: P) -> Result<Option<BTreeMap<String, String>>> {
    let rows = read_rows(path.as_ref())?;
    if rows.len() < 2 {
        return Ok(None);
    }

    let pick = rand::thread_rng().gen_range(1..rows.len());
    let header = &rows[0];
    let row = &rows[pick];

    let map = header
        .iter()
        .cloned()
        .zip(
            row.iter()
                .cloned()
                .chain(std::iter::repeat(String::new())),
        )
        .collect();
    Ok(Some(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(content: &str) -> Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        Ok(tmp)
    }

    #[test]
    fn count_rows_excludes_the_header() -> Result<()> {
        let tmp = fixture("url,title\nhttps://a,first\nhttps://b,second\n")?;
        assert_eq!(count_rows(tmp.path())?, 2);

        let header_only = fixture("url,title\n")?;
        assert_eq!(count_rows(header_only.path())?, 0);
        Ok(())
    }

    #[test]
    fn count_unique_ignores_repeats() -> Result<()> {
        let tmp = fixture(
            "url,status\n\
             https://a,pending\n\
             https://b,completed\n\
             https://a,completed\n",
        )?;
        assert_eq!(count_unique(tmp.path(), "url")?, 2);
        assert_eq!(count_unique(tmp.path(), "status")?, 2);
        Ok(())
    }

    #[test]
    fn count_unique_errors_on_missing_column() -> Result<()> {
        let tmp = fixture("url\nhttps://a\n")?;
        let err = count_unique(tmp.path(), "status").unwrap_err();
        assert!(err.to_string().contains("'status'"));
        Ok(())
    }

    #[test]
    fn sample_row_always_lands_on_a_data_row() -> Result<()> {
        let tmp = fixture("url,title\nhttps://a,first\nhttps://b,second\n")?;
        // hammer the sampler; every pick must be a real data row
        for _ in 0..50 {
            let row = sample_row(tmp.path())?.expect("file has data rows");
            assert!(row["url"] == "https://a" || row["url"] == "https://b");
            assert_eq!(row.len(), 2);
        }
        Ok(())
    }

    #[test]
    fn sample_row_is_none_for_header_only_files() -> Result<()> {
        let tmp = fixture("url,title\n")?;
        assert!(sample_row(tmp.path())?.is_none());
        Ok(())
    }

    #[test]
    fn sample_row_pads_short_rows() -> Result<()> {
        let tmp = fixture("url,title\nhttps://a\n")?;
        let row = sample_row(tmp.path())?.expect("file has a data row");
        assert_eq!(row["url"], "https://a");
        assert_eq!(row["title"], "");
        Ok(())
    }
}
