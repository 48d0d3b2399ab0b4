//! Structural failures that stop a validation run.

use thiserror::Error;

use survey_ingest::IngestError;
use survey_model::SurveyField;

/// Problems with the input as a whole. Content problems are reported as
/// issues instead.
#[derive(Debug, Error)]
pub enum StructuralError {
    /// The input could not be read as a table.
    #[error("no se pudo leer el archivo: {0}")]
    Ingest(#[from] IngestError),

    /// Required columns are absent after header normalization.
    #[error(
        "El CSV debe contener las columnas: {}. Faltan: {}.",
        required_columns(),
        .missing.join(", ")
    )]
    MissingColumns { missing: Vec<&'static str> },
}

fn required_columns() -> String {
    SurveyField::ALL
        .iter()
        .map(|field| field.column_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for validation entry points that can fail structurally.
pub type Result<T> = std::result::Result<T, StructuralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_names_them() {
        let err = StructuralError::MissingColumns {
            missing: vec!["Palma"],
        };
        let expected = "El CSV debe contener las columnas: \
                        Lote, Linea, Palma, Longitud, Latitud. Faltan: Palma.";
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn ingest_errors_convert() {
        let err: StructuralError = IngestError::EmptyCsv.into();
        assert_eq!(err.to_string(), "no se pudo leer el archivo: the file is empty");
    }
}
