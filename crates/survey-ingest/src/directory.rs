//! Lot directory loading.
//!
//! The directory is the JSON array of lots exported from the farm
//! management service; only the lots of the selected farm are kept.

use std::path::Path;

use survey_model::{FarmLots, LotEntry};
use tracing::info;

use crate::error::{IngestError, Result};

/// Parse directory entries from JSON text.
pub fn parse_lot_entries(json: &str) -> serde_json::Result<Vec<LotEntry>> {
    serde_json::from_str(json)
}

/// Load the lots of `farm_id` from a directory export.
pub fn load_lot_directory(path: &Path, farm_id: u64) -> Result<FarmLots> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let entries = parse_lot_entries(&text).map_err(|e| IngestError::DirectoryParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    let total = entries.len();
    let lots = FarmLots::from_entries(farm_id, entries);
    info!(
        path = %path.display(),
        farm_id,
        total_lots = total,
        farm_lots = lots.len(),
        "loaded lot directory"
    );
    Ok(lots)
}
