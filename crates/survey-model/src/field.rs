//! Survey fields and typed cell values.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Cell contents treated as "no value", in addition to blank cells.
///
/// These are the markers spreadsheet tools and dataframe exports write for
/// empty cells, so a survey saved through them still reads as missing data.
pub const MISSING_VALUE_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One of the five logical survey columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyField {
    Lot,
    Line,
    Position,
    Longitude,
    Latitude,
}

impl SurveyField {
    /// All required fields in column order.
    pub const ALL: [SurveyField; 5] = [
        SurveyField::Lot,
        SurveyField::Line,
        SurveyField::Position,
        SurveyField::Longitude,
        SurveyField::Latitude,
    ];

    /// Fields that must parse as numbers, in the order they are checked.
    pub const NUMERIC: [SurveyField; 4] = [
        SurveyField::Line,
        SurveyField::Position,
        SurveyField::Longitude,
        SurveyField::Latitude,
    ];

    /// Normalized header name of the column holding this field.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Lot => "Lote",
            Self::Line => "Linea",
            Self::Position => "Palma",
            Self::Longitude => "Longitud",
            Self::Latitude => "Latitud",
        }
    }
}

impl fmt::Display for SurveyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// A single survey cell after classification.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Blank cell or a missing-value marker.
    Absent,
    /// Cell that parses as a floating point number.
    Numeric { value: f64, raw: String },
    /// Any other non-empty cell.
    Text(String),
}

impl FieldValue {
    /// Classify a raw cell.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('\u{feff}');
        if trimmed.is_empty() || is_missing_marker(trimmed) {
            return Self::Absent;
        }
        match trimmed.parse::<f64>() {
            // Spellings of NaN that are not in the marker list still mean "no value".
            Ok(value) if value.is_nan() => Self::Absent,
            Ok(value) => Self::Numeric {
                value,
                raw: trimmed.to_string(),
            },
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Numeric value, if the cell parsed as a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Cell text as it appeared in the input (trimmed).
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Numeric { raw, .. } => Some(raw),
            Self::Text(raw) => Some(raw),
        }
    }

    /// Grouping key, or `None` for absent cells.
    pub fn group_key(&self) -> Option<GroupKey> {
        match self {
            Self::Absent => None,
            Self::Numeric { value, .. } => Some(GroupKey::number(*value)),
            Self::Text(text) => Some(GroupKey::Text(text.clone())),
        }
    }

    /// Canonical label used in reports; empty for absent cells.
    pub fn label(&self) -> String {
        self.group_key().map(|key| key.to_string()).unwrap_or_default()
    }
}

fn is_missing_marker(value: &str) -> bool {
    MISSING_VALUE_MARKERS.contains(&value)
}

/// Normalized key used to group rows sharing a field value.
///
/// Numbers compare by value, so `1`, `1.0` and `01` fall in the same group.
/// Numbers sort before text.
#[derive(Debug, Clone)]
pub enum GroupKey {
    Number(f64),
    Text(String),
}

impl GroupKey {
    pub fn number(value: f64) -> Self {
        // Fold -0.0 into 0.0 so both land in one group.
        Self::Number(if value == 0.0 { 0.0 } else { value })
    }

    /// Build a key from raw text using the same rules as cell parsing.
    pub fn from_raw(raw: &str) -> Option<Self> {
        FieldValue::parse(raw).group_key()
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{}", *value as i64)
            }
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classifies_cells() {
        assert_eq!(FieldValue::parse(""), FieldValue::Absent);
        assert_eq!(FieldValue::parse("   "), FieldValue::Absent);
        assert_eq!(FieldValue::parse("NA"), FieldValue::Absent);
        assert_eq!(FieldValue::parse("null"), FieldValue::Absent);
        assert_eq!(FieldValue::parse("NAN"), FieldValue::Absent);
        assert_eq!(
            FieldValue::parse(" -75.5 "),
            FieldValue::Numeric {
                value: -75.5,
                raw: "-75.5".to_string()
            }
        );
        assert_eq!(FieldValue::parse("abc"), FieldValue::Text("abc".to_string()));
        assert_eq!(FieldValue::parse("4,5"), FieldValue::Text("4,5".to_string()));
    }

    #[test]
    fn numeric_keys_compare_by_value() {
        assert_eq!(GroupKey::from_raw("1"), GroupKey::from_raw("1.0"));
        assert_eq!(GroupKey::from_raw("01"), GroupKey::from_raw("1"));
        assert_eq!(GroupKey::from_raw("-0.0"), GroupKey::from_raw("0"));
        assert_ne!(GroupKey::from_raw("1"), GroupKey::from_raw("A1"));
        assert_eq!(GroupKey::from_raw(""), None);
    }

    #[test]
    fn numbers_sort_before_text() {
        let mut keys = vec![
            GroupKey::Text("B".to_string()),
            GroupKey::number(10.0),
            GroupKey::Text("A".to_string()),
            GroupKey::number(2.0),
        ];
        keys.sort();
        let labels: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["2", "10", "A", "B"]);
    }

    #[test]
    fn labels_drop_integral_fraction() {
        assert_eq!(FieldValue::parse("3.0").label(), "3");
        assert_eq!(FieldValue::parse("3.25").label(), "3.25");
        assert_eq!(FieldValue::parse("Norte").label(), "Norte");
        assert_eq!(FieldValue::Absent.label(), "");
    }

    #[test]
    fn column_names_are_normalized_headers() {
        let names: Vec<&str> = SurveyField::ALL.iter().map(|f| f.column_name()).collect();
        assert_eq!(names, vec!["Lote", "Linea", "Palma", "Longitud", "Latitud"]);
    }
}
