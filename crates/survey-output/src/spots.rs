//! Spots CSV generation.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use serde::{Serialize, Serializer};
use survey_model::{CoordinateRecord, LotDirectory, ValidationResult};
use tracing::{debug, info};

use crate::error::{ExportError, Result};

/// Column names of the spots CSV, in order.
pub const SPOTS_HEADER: [&str; 8] = [
    "nombre_spot",
    "lat",
    "lng",
    "lote_id",
    "linea",
    "posicion",
    "nombre_planta",
    "finca_id",
];

/// File name the spots CSV is uploaded under.
pub const DEFAULT_SPOTS_FILE_NAME: &str = "Spots.csv";

/// Export parameters.
#[derive(Clone, Copy)]
pub struct SpotsRequest<'a> {
    pub farm_id: u64,
    /// Lot id applied to every coordinate, overriding the survey's lots.
    pub lot_id: Option<u64>,
    /// Maps survey lot labels to lot ids.
    pub directory: Option<&'a dyn LotDirectory>,
}

impl<'a> SpotsRequest<'a> {
    pub fn new(farm_id: u64) -> Self {
        Self {
            farm_id,
            lot_id: None,
            directory: None,
        }
    }

    pub fn with_lot_id(mut self, lot_id: u64) -> Self {
        self.lot_id = Some(lot_id);
        self
    }

    pub fn with_directory(mut self, directory: &'a dyn LotDirectory) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Lot id for a coordinate: explicit id, then directory, then the label
    /// itself when it is a whole number.
    fn resolve_lot(&self, lot: &str) -> Option<u64> {
        self.lot_id
            .or_else(|| self.directory.and_then(|directory| directory.resolve(lot)))
            .or_else(|| lot.parse().ok())
    }
}

impl fmt::Debug for SpotsRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotsRequest")
            .field("farm_id", &self.farm_id)
            .field("lot_id", &self.lot_id)
            .field("directory", &self.directory.is_some())
            .finish()
    }
}

/// One row of the spots CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotRow {
    pub nombre_spot: String,
    #[serde(serialize_with = "serialize_coordinate")]
    pub lat: f64,
    #[serde(serialize_with = "serialize_coordinate")]
    pub lng: f64,
    pub lote_id: u64,
    pub linea: i64,
    pub posicion: i64,
    pub nombre_planta: String,
    pub finca_id: u64,
}

impl SpotRow {
    fn from_coordinate(coordinate: &CoordinateRecord, lot_id: u64, farm_id: u64) -> Self {
        let line = coordinate.line.trunc() as i64;
        let position = coordinate.position.trunc() as i64;
        Self {
            nombre_spot: format!("L{lot_id}L{line}S{position}"),
            lat: coordinate.latitude,
            lng: coordinate.longitude,
            lote_id: lot_id,
            linea: line,
            posicion: position,
            nombre_planta: format!("L{lot_id}L{line}P{position}"),
            finca_id: farm_id,
        }
    }
}

/// Build spot rows from a validation result.
///
/// Refuses structural failures, results with any issue, and coordinates
/// whose lot id cannot be resolved.
pub fn build_spot_rows(
    result: &ValidationResult,
    request: &SpotsRequest<'_>,
) -> Result<Vec<SpotRow>> {
    let report = match result {
        ValidationResult::Ok(report) => report,
        ValidationResult::Error { message } => {
            return Err(ExportError::Structural {
                message: message.clone(),
            });
        }
    };
    if report.has_issues() {
        return Err(ExportError::HasIssues {
            count: report.issues.len(),
        });
    }

    let rows = report
        .coordinates
        .iter()
        .map(|coordinate| {
            let lot_id = request
                .resolve_lot(&coordinate.lot)
                .ok_or_else(|| ExportError::UnresolvedLot {
                    lot: coordinate.lot.clone(),
                })?;
            Ok(SpotRow::from_coordinate(coordinate, lot_id, request.farm_id))
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(spots = rows.len(), farm_id = request.farm_id, "built spot rows");
    Ok(rows)
}

/// Write the spots CSV, header included even when there are no rows.
pub fn write_spots_csv<W: Write>(writer: W, rows: &[SpotRow]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(SPOTS_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Spots CSV as UTF-8 bytes, ready for upload.
pub fn spots_csv_bytes(rows: &[SpotRow]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_spots_csv(&mut buffer, rows)?;
    Ok(buffer)
}

/// Write the spots CSV to `path`, creating parent directories.
pub fn write_spots_file(path: &Path, rows: &[SpotRow]) -> Result<()> {
    let io_error = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let bytes = spots_csv_bytes(rows)?;
    fs::write(path, bytes).map_err(io_error)?;
    info!(path = %path.display(), spots = rows.len(), "wrote spots CSV");
    Ok(())
}

/// Format a coordinate with at least one fractional digit.
pub fn format_coordinate(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn serialize_coordinate<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_coordinate(*value))
}
