//! Duplicate line detection.

use survey_model::{Issue, Record};

use super::CheckOutcome;
use crate::util::duplicate_groups;

/// Flag lines used by more than one row of the same lot.
///
/// Rows without a lot or line are skipped. One issue per (lot, line) group,
/// in key order.
pub(super) fn check(records: &[Record]) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    let groups = duplicate_groups(records, |record| {
        Some((record.lot.group_key()?, record.line.group_key()?))
    });
    for ((lot, line), rows) in groups {
        outcome.push(Issue::DuplicateLineInLot {
            lot: lot.to_string(),
            line: line.to_string(),
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
    fn repeated_line_in_lot() {
        let outcome = check(&records(&[
            ["1", "5", "1", "-75.0", "4.0"],
            ["1", "6", "1", "-75.1", "4.1"],
            ["1", "5.0", "2", "-75.2", "4.2"],
            ["2", "5", "1", "-75.3", "4.3"],
        ]));
        assert_eq!(
            outcome.issues,
            vec![Issue::DuplicateLineInLot {
                lot: "1".to_string(),
                line: "5".to_string(),
                rows: vec![1, 3],
            }]
        );
        assert_eq!(
            outcome.issues[0].description(),
            "2 líneas repetidas en lote 1 (Línea 5)."
        );
    }

    #[test]
    fn groups_are_reported_in_key_order() {
        let outcome = check(&records(&[
            ["B", "2", "1", "-75.0", "4.0"],
            ["A", "9", "1", "-75.1", "4.1"],
            ["B", "2", "2", "-75.2", "4.2"],
            ["A", "9", "2", "-75.3", "4.3"],
        ]));
        let lots: Vec<_> = outcome.issues.iter().filter_map(Issue::lot).collect();
        assert_eq!(lots, vec!["A", "B"]);
    }

    #[test]
    fn rows_without_key_are_skipped() {
        let outcome = check(&records(&[
            ["", "5", "1", "-75.0", "4.0"],
            ["", "5", "2", "-75.1", "4.1"],
            ["1", "", "3", "-75.2", "4.2"],
            ["1", "", "4", "-75.3", "4.3"],
        ]));
        assert!(outcome.issues.is_empty());
    }
}
