//! Spots export for accepted surveys.
//!
//! Turns the coordinates of an issue-free validation result into the spots
//! CSV consumed by the farm management service:
//!
//! ```text
//! nombre_spot,lat,lng,lote_id,linea,posicion,nombre_planta,finca_id
//! L21L1S1,4.0,-75.0,21,1,1,L21L1P1,4
//! ```

mod error;
mod spots;

pub use error::{ExportError, Result};
pub use spots::{
    DEFAULT_SPOTS_FILE_NAME, SPOTS_HEADER, SpotRow, SpotsRequest, build_spot_rows,
    format_coordinate, spots_csv_bytes, write_spots_csv, write_spots_file,
};
