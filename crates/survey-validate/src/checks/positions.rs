//! Duplicate position detection.

use survey_model::{Issue, Record};

use super::CheckOutcome;
use crate::util::duplicate_groups;

/// Flag positions used by more than one row of the same lot and line.
pub(super) fn check(records: &[Record]) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    let groups = duplicate_groups(records, |record| {
        Some((
            record.lot.group_key()?,
            record.line.group_key()?,
            record.position.group_key()?,
        ))
    });
    for ((lot, line, position), rows) in groups {
        outcome.push(Issue::DuplicatePositionInLine {
            lot: lot.to_string(),
            line: line.to_string(),
            position: position.to_string(),
            rows,
        });
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::records;

    #[test]
    fn repeated_position_in_line() {
        let outcome = check(&records(&[
            ["1", "1", "7", "-75.0", "4.0"],
            ["1", "1", "7", "-75.1", "4.1"],
            ["1", "2", "7", "-75.2", "4.2"],
        ]));
        assert_eq!(
            outcome.issues,
            vec![Issue::DuplicatePositionInLine {
                lot: "1".to_string(),
                line: "1".to_string(),
                position: "7".to_string(),
                rows: vec![1, 2],
            }]
        );
        assert_eq!(
            outcome.issues[0].description(),
            "2 posiciones repetidas en lote 1, línea 1 (Posición 7)."
        );
    }

    #[test]
    fn same_position_on_other_lines_passes() {
        let outcome = check(&records(&[
            ["1", "1", "7", "-75.0", "4.0"],
            ["1", "2", "7", "-75.1", "4.1"],
            ["2", "1", "7", "-75.2", "4.2"],
        ]));
        assert!(outcome.issues.is_empty());
    }
}
