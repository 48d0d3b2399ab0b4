//! Validation and export stages shared by the commands.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use survey_ingest::load_lot_directory;
use survey_model::{FarmLots, Issue, ValidationResult};
use survey_output::{SpotsRequest, build_spot_rows, write_spots_file};
use survey_validate::{ValidationContext, validate_file};
use tracing::{info, info_span, trace};

use crate::logging::redact_value;

/// One validated input file.
#[derive(Debug)]
pub struct ValidationRun {
    pub input: PathBuf,
    pub result: ValidationResult,
}

impl ValidationRun {
    pub fn is_rejected(&self) -> bool {
        self.result.is_rejected()
    }
}

/// Load the farm's lots when a directory export was given.
pub fn load_directory(path: Option<&Path>, farm_id: Option<u64>) -> Result<Option<FarmLots>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let Some(farm_id) = farm_id else {
        bail!("--lots requires --farm-id");
    };
    let lots = load_lot_directory(path, farm_id)
        .with_context(|| format!("load lot directory {}", path.display()))?;
    Ok(Some(lots))
}

/// Validate one survey file.
pub fn validate(input: &Path, directory: Option<&FarmLots>) -> ValidationRun {
    let span = info_span!("validate", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut ctx = ValidationContext::new();
    if let Some(directory) = directory {
        ctx = ctx.with_lot_directory(directory);
    }
    let result = validate_file(input, &ctx);
    if let Some(report) = result.report() {
        for issue in &report.issues {
            log_issue(issue);
        }
        info!(
            rows = report.row_count,
            accepted = report.coordinates.len(),
            rejected = report.rejected_count(),
            issues = report.issues.len(),
            duration_ms = start.elapsed().as_millis(),
            "survey validated"
        );
    }
    ValidationRun {
        input: input.to_path_buf(),
        result,
    }
}

fn log_issue(issue: &Issue) {
    trace!(
        kind = issue.kind().code(),
        rows = ?issue.rows(),
        description = redact_value(&issue.description()),
        "issue"
    );
}

/// The wire JSON of a result.
pub fn render_json(result: &ValidationResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("serialize validation result")
}

/// Write the wire JSON of a result to `path`.
pub fn write_json(result: &ValidationResult, path: &Path) -> Result<()> {
    let json = render_json(result)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote validation result");
    Ok(())
}

/// Write the spots CSV for an accepted survey; returns the number of spots.
pub fn export_spots(
    run: &ValidationRun,
    request: &SpotsRequest<'_>,
    output: &Path,
) -> Result<usize> {
    let rows = build_spot_rows(&run.result, request)
        .with_context(|| format!("export {}", run.input.display()))?;
    write_spots_file(output, &rows)?;
    Ok(rows.len())
}
