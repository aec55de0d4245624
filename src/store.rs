// src/store.rs
use std::{fs, io, path::Path};

use crate::csv::{self, parse_rows, split_header};
use crate::error::RunError;

/// Headers + rows. Used both for raw input tables and finished reports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    /// Case-insensitive, trimmed header lookup.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    }

    /// Parse CSV/TSV text; the first row is the header.
    pub fn from_text(text: &str) -> Self {
        let sep = csv::sniff_delim(text);
        let (headers, rows) = split_header(parse_rows(text, sep));
        DataSet { headers, rows }
    }
}

/// Load a source dataset. Any read failure is fatal for the run.
pub fn load_dataset(path: &Path) -> Result<DataSet, RunError> {
    let text = fs::read_to_string(path).map_err(|e| RunError::DatasetUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let ds = DataSet::from_text(&text);
    logf!("Load: {} (rows={}, headers={})", path.display(), ds.row_count(), ds.header_count());
    Ok(ds)
}

/// Load a lookup table. `Ok(None)` when the file does not exist.
pub fn load_table(path: &Path) -> io::Result<Option<DataSet>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    Ok(Some(DataSet::from_text(&text)))
}

/// Write a table (headers included) as CSV.
pub fn save_table(path: &Path, ds: &DataSet) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, csv::table_to_string(&ds.headers, &ds.rows, true, ','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup_ignores_case_and_padding() {
        let ds = DataSet::from_text(" City ,STATE,title\nAustin,Texas,Driver\n");
        assert_eq!(ds.column("city"), Some(0));
        assert_eq!(ds.column("state"), Some(1));
        assert_eq!(ds.column("population"), None);
        assert_eq!(ds.row_count(), 1);
    }

    #[test]
    fn missing_dataset_is_unavailable() {
        let err = load_dataset(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, RunError::DatasetUnavailable { .. }));
    }

    #[test]
    fn missing_table_is_none() {
        assert!(load_table(Path::new("definitely/not/here.csv")).unwrap().is_none());
    }
}
