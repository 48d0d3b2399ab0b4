//! Error types for survey ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading survey input.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === CSV Parsing Errors ===
    /// Input has no non-blank lines.
    #[error("the file is empty")]
    EmptyCsv,

    /// First non-blank row has no column names.
    #[error("could not detect a header row")]
    NoHeaderDetected,

    /// The csv reader rejected the input.
    #[error("failed to parse CSV: {message}")]
    CsvParse { message: String },

    // === Lot Directory Errors ===
    /// Lot directory JSON is malformed.
    #[error("failed to parse lot directory {path}: {source}")]
    DirectoryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::CsvParse {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
