//! Validation issue types.
//!
//! Each variant carries only the data its check produces. Descriptions are
//! derived on demand, and serialization flattens a variant into the record
//! shape consumers read (`tipo`, `descripcion`, then the variant's fields).

use serde::{Serialize, Serializer};

use crate::field::SurveyField;
use crate::record::RowNumber;

/// Issue kind, one per validation check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueKind {
    MissingField,
    InvalidType,
    DuplicateCoordinate,
    DuplicateLineInLot,
    DuplicatePositionInLine,
    CoordinateOutOfRange,
    InvalidLot,
}

impl IssueKind {
    /// Wire code written in the `tipo` field.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingField => "dato_faltante",
            Self::InvalidType => "dato_invalido",
            Self::DuplicateCoordinate => "coordenada_repetida",
            Self::DuplicateLineInLot => "linea_repetida_en_lote",
            Self::DuplicatePositionInLine => "posicion_repetida_en_linea",
            Self::CoordinateOutOfRange => "coordenada_fuera_rango",
            Self::InvalidLot => "lote_invalido",
        }
    }

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::MissingField => "Missing field",
            Self::InvalidType => "Invalid type",
            Self::DuplicateCoordinate => "Duplicate coordinate",
            Self::DuplicateLineInLot => "Duplicate line in lot",
            Self::DuplicatePositionInLine => "Duplicate position in line",
            Self::CoordinateOutOfRange => "Coordinate out of range",
            Self::InvalidLot => "Invalid lot",
        }
    }

    /// Row-level kinds report a single `fila`; the rest report `filas`.
    pub fn is_row_level(self) -> bool {
        matches!(self, Self::MissingField | Self::InvalidType)
    }
}

/// A content problem found in the survey.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// Row is missing one or more required fields.
    MissingField {
        row: RowNumber,
        fields: Vec<SurveyField>,
    },
    /// A numeric field holds text.
    InvalidType {
        row: RowNumber,
        field: SurveyField,
        value: String,
    },
    /// Rows of a lot share a coordinate pair with other rows.
    DuplicateCoordinate {
        lot: String,
        /// Number of repeated coordinate pairs touching the lot.
        groups: usize,
        rows: Vec<RowNumber>,
    },
    /// A line number is used by more than one row of a lot.
    DuplicateLineInLot {
        lot: String,
        line: String,
        rows: Vec<RowNumber>,
    },
    /// A plant position is repeated within a line.
    DuplicatePositionInLine {
        lot: String,
        line: String,
        position: String,
        rows: Vec<RowNumber>,
    },
    /// Rows of a lot fall outside valid latitude/longitude bounds.
    CoordinateOutOfRange { lot: String, rows: Vec<RowNumber> },
    /// Rows reference a lot unknown to the farm's lot directory.
    InvalidLot { lot: String, rows: Vec<RowNumber> },
}

impl Issue {
    pub fn kind(&self) -> IssueKind {
        match self {
            Self::MissingField { .. } => IssueKind::MissingField,
            Self::InvalidType { .. } => IssueKind::InvalidType,
            Self::DuplicateCoordinate { .. } => IssueKind::DuplicateCoordinate,
            Self::DuplicateLineInLot { .. } => IssueKind::DuplicateLineInLot,
            Self::DuplicatePositionInLine { .. } => IssueKind::DuplicatePositionInLine,
            Self::CoordinateOutOfRange { .. } => IssueKind::CoordinateOutOfRange,
            Self::InvalidLot { .. } => IssueKind::InvalidLot,
        }
    }

    /// Row numbers covered by this issue, ascending.
    pub fn rows(&self) -> Vec<RowNumber> {
        match self {
            Self::MissingField { row, .. } | Self::InvalidType { row, .. } => vec![*row],
            Self::DuplicateCoordinate { rows, .. }
            | Self::DuplicateLineInLot { rows, .. }
            | Self::DuplicatePositionInLine { rows, .. }
            | Self::CoordinateOutOfRange { rows, .. }
            | Self::InvalidLot { rows, .. } => rows.clone(),
        }
    }

    /// Reported count: duplicate coordinate pairs for
    /// [`Issue::DuplicateCoordinate`], affected rows otherwise.
    pub fn count(&self) -> usize {
        match self {
            Self::MissingField { .. } | Self::InvalidType { .. } => 1,
            Self::DuplicateCoordinate { groups, .. } => *groups,
            Self::DuplicateLineInLot { rows, .. }
            | Self::DuplicatePositionInLine { rows, .. }
            | Self::CoordinateOutOfRange { rows, .. }
            | Self::InvalidLot { rows, .. } => rows.len(),
        }
    }

    pub fn lot(&self) -> Option<&str> {
        match self {
            Self::MissingField { .. } | Self::InvalidType { .. } => None,
            Self::DuplicateCoordinate { lot, .. }
            | Self::DuplicateLineInLot { lot, .. }
            | Self::DuplicatePositionInLine { lot, .. }
            | Self::CoordinateOutOfRange { lot, .. }
            | Self::InvalidLot { lot, .. } => Some(lot),
        }
    }

    pub fn line(&self) -> Option<&str> {
        match self {
            Self::DuplicateLineInLot { line, .. } | Self::DuplicatePositionInLine { line, .. } => {
                Some(line)
            }
            _ => None,
        }
    }

    pub fn position(&self) -> Option<&str> {
        match self {
            Self::DuplicatePositionInLine { position, .. } => Some(position),
            _ => None,
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> String {
        match self {
            Self::MissingField { row, fields } => {
                let names: Vec<&str> = fields.iter().map(|field| field.column_name()).collect();
                format!(
                    "Fila {row}: falta uno o más datos requeridos ({}).",
                    names.join(", ")
                )
            }
            Self::InvalidType { row, field, value } => {
                format!("Fila {row}: el campo '{field}' no es numérico ({value}).")
            }
            Self::DuplicateCoordinate { lot, groups, .. } => {
                format!("{groups} coordenada(s) repetida(s) en lote {lot}.")
            }
            Self::DuplicateLineInLot { lot, line, rows } => {
                format!(
                    "{} líneas repetidas en lote {lot} (Línea {line}).",
                    rows.len()
                )
            }
            Self::DuplicatePositionInLine {
                lot,
                line,
                position,
                rows,
            } => format!(
                "{} posiciones repetidas en lote {lot}, línea {line} (Posición {position}).",
                rows.len()
            ),
            Self::CoordinateOutOfRange { lot, rows } => {
                format!("{} coordenada(s) fuera de rango en lote {lot}.", rows.len())
            }
            Self::InvalidLot { lot, rows } => {
                format!("{} registro(s) con lote inválido: {lot}.", rows.len())
            }
        }
    }
}

/// Wire shape of an issue.
#[derive(Serialize)]
struct IssueRecord<'a> {
    tipo: &'static str,
    descripcion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fila: Option<RowNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lote: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    linea: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    palma: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filas: Option<Vec<RowNumber>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cantidad: Option<usize>,
}

impl<'a> From<&'a Issue> for IssueRecord<'a> {
    fn from(issue: &'a Issue) -> Self {
        let kind = issue.kind();
        let (fila, filas, cantidad) = if kind.is_row_level() {
            (issue.rows().first().copied(), None, None)
        } else {
            (None, Some(issue.rows()), Some(issue.count()))
        };
        Self {
            tipo: kind.code(),
            descripcion: issue.description(),
            fila,
            lote: issue.lot(),
            linea: issue.line(),
            palma: issue.position(),
            filas,
            cantidad,
        }
    }
}

impl Serialize for Issue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        IssueRecord::from(self).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_level_issue_serializes_single_row() {
        let issue = Issue::InvalidType {
            row: 4,
            field: SurveyField::Latitude,
            value: "norte".to_string(),
        };
        let value = serde_json::to_value(&issue).expect("serialize issue");
        assert_eq!(
            value,
            json!({
                "tipo": "dato_invalido",
                "descripcion": "Fila 4: el campo 'Latitud' no es numérico (norte).",
                "fila": 4
            })
        );
    }

    #[test]
    fn position_issue_serializes_group_fields() {
        let issue = Issue::DuplicatePositionInLine {
            lot: "2".to_string(),
            line: "5".to_string(),
            position: "7".to_string(),
            rows: vec![3, 9],
        };
        let value = serde_json::to_value(&issue).expect("serialize issue");
        assert_eq!(
            value,
            json!({
                "tipo": "posicion_repetida_en_linea",
                "descripcion": "2 posiciones repetidas en lote 2, línea 5 (Posición 7).",
                "lote": "2",
                "linea": "5",
                "palma": "7",
                "filas": [3, 9],
                "cantidad": 2
            })
        );
    }

    #[test]
    fn duplicate_coordinate_counts_groups_not_rows() {
        let issue = Issue::DuplicateCoordinate {
            lot: "1".to_string(),
            groups: 2,
            rows: vec![1, 2, 5, 6],
        };
        assert_eq!(issue.count(), 2);
        assert_eq!(issue.rows(), vec![1, 2, 5, 6]);
        assert_eq!(
            issue.description(),
            "2 coordenada(s) repetida(s) en lote 1."
        );
    }

    #[test]
    fn missing_field_names_columns() {
        let issue = Issue::MissingField {
            row: 2,
            fields: vec![SurveyField::Position, SurveyField::Latitude],
        };
        assert_eq!(
            issue.description(),
            "Fila 2: falta uno o más datos requeridos (Palma, Latitud)."
        );
        assert_eq!(issue.kind().code(), "dato_faltante");
    }
}
