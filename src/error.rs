// src/error.rs
//
// Fatal outcomes of a run. Everything recoverable (bad population cells,
// missing rule/distance tables, unresolved clusters) is logged and coerced
// where it happens instead of surfacing here.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum RunError {
    /// Source dataset missing or unreadable. Raised before any aggregation.
    DatasetUnavailable { path: PathBuf, reason: String },
    /// A finished table could not be written.
    Export { path: PathBuf, reason: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::DatasetUnavailable { path, reason } => {
                write!(f, "dataset unavailable: {} ({})", path.display(), reason)
            }
            RunError::Export { path, reason } => {
                write!(f, "export failed: {} ({})", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for RunError {}
