//! Survey data ingestion utilities.
//!
//! This crate turns an uploaded survey file into the header/rows table the
//! validation engine consumes, and loads the farm lot directory used by the
//! optional lot membership check.
//!
//! # Features
//!
//! - **Decoding**: UTF-8 (with or without BOM), UTF-16 via BOM, Windows-1252 fallback
//! - **Delimiter detection**: comma or tab, sniffed from the header line
//! - **Header normalization**: trimmed and capitalized (`" LOTE "` becomes `"Lote"`)
//! - **Lot directory**: JSON export of the farm management service's lots
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use survey_ingest::{load_lot_directory, read_survey_file};
//!
//! let table = read_survey_file(Path::new("plantaciones.csv"))?;
//! let lots = load_lot_directory(Path::new("lotes.json"), 4)?;
//! ```

mod directory;
mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use table::{
    CsvTable, MAX_SURVEY_FILE_SIZE, check_file_size, check_file_size_with_limit,
    decode_survey_bytes, detect_delimiter, normalize_header, read_survey_bytes, read_survey_file,
};

// === Lot Directory ===
pub use directory::{load_lot_directory, parse_lot_entries};
