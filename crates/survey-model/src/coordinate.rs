use serde::{Serialize, Serializer};

use crate::record::Record;

/// An accepted survey point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateRecord {
    #[serde(rename = "lote")]
    pub lot: String,
    #[serde(rename = "linea", serialize_with = "serialize_integral")]
    pub line: f64,
    #[serde(rename = "palma", serialize_with = "serialize_integral")]
    pub position: f64,
    #[serde(rename = "longitud")]
    pub longitude: f64,
    #[serde(rename = "latitud")]
    pub latitude: f64,
}

impl CoordinateRecord {
    /// Normalize a record; `None` unless the lot is present and all
    /// numeric fields parsed.
    pub fn from_record(record: &Record) -> Option<Self> {
        let lot = record.lot.group_key()?.to_string();
        Some(Self {
            lot,
            line: record.line.as_f64()?,
            position: record.position.as_f64()?,
            longitude: record.longitude.as_f64()?,
            latitude: record.latitude.as_f64()?,
        })
    }
}

/// Write whole numbers as JSON integers, anything else as a float.
fn serialize_integral<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
