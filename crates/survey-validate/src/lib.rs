//! Plantation survey validation engine.
//!
//! Runs the survey checks in a fixed order and returns the accepted
//! coordinates together with every issue found:
//!
//! 1. Required values present and numeric
//! 2. Coordinate pairs unique across the survey
//! 3. Line numbers unique per lot
//! 4. Positions unique per line
//! 5. Coordinates within geographic bounds
//! 6. Lots known to the farm (only with a [`LotDirectory`])
//!
//! Structural problems (unreadable input, missing columns) stop the run and
//! come back as [`ValidationResult::Error`]; content problems never do.
//!
//! # Example
//!
//! ```ignore
//! use survey_validate::{ValidationContext, validate_bytes};
//!
//! let result = validate_bytes(csv.as_bytes(), &ValidationContext::new());
//! println!("{}", serde_json::to_string(&result)?);
//! ```

mod checks;
mod error;
mod schema;
mod util;

use std::fmt;
use std::path::Path;
use std::time::Instant;

use survey_ingest::{CsvTable, read_survey_bytes, read_survey_file};
use survey_model::{LotDirectory, Record, ValidationReport, ValidationResult};
use tracing::{info, warn};

pub use checks::{LATITUDE_RANGE, LONGITUDE_RANGE};
pub use error::{Result, StructuralError};
pub use schema::resolve_records;

/// Collaborators available to a validation run.
#[derive(Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    /// Enables the lot membership check.
    pub lot_directory: Option<&'a dyn LotDirectory>,
}

impl<'a> ValidationContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lot_directory(mut self, directory: &'a dyn LotDirectory) -> Self {
        self.lot_directory = Some(directory);
        self
    }
}

impl fmt::Debug for ValidationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("lot_directory", &self.lot_directory.is_some())
            .finish()
    }
}

/// Validate already-resolved records.
pub fn validate_records(records: &[Record], ctx: &ValidationContext<'_>) -> ValidationReport {
    let start = Instant::now();
    let report = checks::run_all(records, ctx);
    info!(
        rows = report.row_count,
        accepted = report.coordinates.len(),
        issues = report.issues.len(),
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    report
}

/// Validate a parsed table.
pub fn validate_table(table: &CsvTable, ctx: &ValidationContext<'_>) -> Result<ValidationReport> {
    let records = resolve_records(table)?;
    Ok(validate_records(&records, ctx))
}

/// Validate raw upload bytes.
pub fn validate_bytes(bytes: &[u8], ctx: &ValidationContext<'_>) -> ValidationResult {
    let outcome = read_survey_bytes(bytes)
        .map_err(StructuralError::from)
        .and_then(|table| validate_table(&table, ctx));
    into_result(outcome)
}

/// Validate a survey file on disk.
pub fn validate_file(path: &Path, ctx: &ValidationContext<'_>) -> ValidationResult {
    let outcome = read_survey_file(path)
        .map_err(StructuralError::from)
        .and_then(|table| validate_table(&table, ctx));
    into_result(outcome)
}

fn into_result(outcome: Result<ValidationReport>) -> ValidationResult {
    match outcome {
        Ok(report) => ValidationResult::Ok(report),
        Err(error) => {
            warn!(%error, "survey rejected");
            ValidationResult::error(error.to_string())
        }
    }
}
