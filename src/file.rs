// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, ViewKind};
use crate::csv::table_to_string;
use crate::error::RunError;
use crate::report::{remove_column, Reports};
use crate::store::DataSet;

/// Render one table the way it would be exported (column drop, header
/// policy, delimiter).
pub fn table_text(table: &DataSet, export: &ExportOptions) -> String {
    let projected;
    let table = match export.drop_column {
        Some(ix) => { projected = remove_column(table, ix); &projected }
        None => table,
    };
    table_to_string(&table.headers, &table.rows, export.include_headers, export.delim())
}

/// Write one table to `path`, creating parent directories.
pub fn export_table(
    path: &Path,
    table: &DataSet,
    export: &ExportOptions,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, table_text(table, export)).map_err(|e| RunError::Export {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(())
}

/// Write each selected view to `<out_dir>/<view stem>.<ext>`.
/// Returns the paths written, in `views` order.
pub fn export_reports(
    reports: &Reports,
    export: &ExportOptions,
    views: &[ViewKind],
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    ensure_directory(export.out_dir())?;

    let mut written = Vec::with_capacity(views.len());
    for &view in views {
        let path = export.path_for(view);
        export_table(&path, reports.get(view), export)?;
        logf!("Export: {:?} -> {}", view, path.display());
        written.push(path);
    }
    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
