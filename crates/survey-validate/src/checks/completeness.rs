//! Required value and numeric type checks.

use survey_model::{Issue, Record};
use tracing::trace;

use super::CheckOutcome;

/// Flag rows with absent values, then rows whose numeric fields hold text.
///
/// A row gets at most one issue: missing values take precedence, and only
/// the first non-numeric field (Linea, Palma, Longitud, Latitud) is named.
pub(super) fn check(records: &[Record]) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    for record in records {
        let missing = record.missing_fields();
        if !missing.is_empty() {
            outcome.push(Issue::MissingField {
                row: record.row,
                fields: missing,
            });
            continue;
        }
        if let Some((field, value)) = record.first_non_numeric() {
            trace!(row = record.row, %field, "non-numeric value");
            outcome.push(Issue::InvalidType {
                row: record.row,
                field,
                value: value.to_string(),
            });
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::records;
    use survey_model::SurveyField;

    #[test]
    fn complete_numeric_rows_pass() {
        let outcome = check(&records(&[
            ["1", "1", "1", "-75.0", "4.0"],
            ["B", "2", "3", "-75.1", "4.1"],
        ]));
        assert!(outcome.issues.is_empty());
        assert!(outcome.excluded.is_empty());
    }

    #[test]
    fn missing_values_are_listed_together() {
        let outcome = check(&records(&[["1", "1", "", "-75.0", "NA"]]));
        assert_eq!(
            outcome.issues,
            vec![Issue::MissingField {
                row: 1,
                fields: vec![SurveyField::Position, SurveyField::Latitude],
            }]
        );
        assert!(outcome.excluded.contains(&1));
    }

    #[test]
    fn missing_takes_precedence_over_type() {
        let outcome = check(&records(&[["", "x", "1", "-75.0", "4.0"]]));
        assert_eq!(outcome.issues.len(), 1);
        assert!(matches!(outcome.issues[0], Issue::MissingField { .. }));
    }

    #[test]
    fn only_first_non_numeric_field_is_reported() {
        let outcome = check(&records(&[["1", "1", "x", "oeste", "4.0"]]));
        assert_eq!(
            outcome.issues,
            vec![Issue::InvalidType {
                row: 1,
                field: SurveyField::Position,
                value: "x".to_string(),
            }]
        );
    }

    #[test]
    fn text_lot_is_not_a_type_error() {
        let outcome = check(&records(&[["Norte", "1", "1", "-75.0", "4.0"]]));
        assert!(outcome.issues.is_empty());
    }
}
