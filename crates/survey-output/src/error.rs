//! Export errors.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a spots export is refused or fails.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Validation failed before any content check ran.
    #[error("validation failed: {message}")]
    Structural { message: String },

    /// Validation reported issues; nothing is exported.
    #[error("the survey has {count} validation issue(s); nothing was exported")]
    HasIssues { count: usize },

    /// No lot id could be derived for a coordinate.
    #[error("cannot resolve a lot id for lot '{lot}'; pass an explicit lot id or a lot directory")]
    UnresolvedLot { lot: String },

    #[error("failed to write spots CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
