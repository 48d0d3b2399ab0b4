//! Geographic bounds check.

use std::ops::RangeInclusive;

use survey_model::{Issue, Record};
use tracing::debug;

use super::CheckOutcome;
use crate::util::group_rows;

/// Valid latitudes in degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitudes in degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Flag coordinates outside the valid ranges, grouped by lot.
///
/// The whole check is skipped when any coordinate holds text; those rows are
/// already rejected by the type check. Rows without a lot are not reported.
pub(super) fn check(records: &[Record]) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    if records
        .iter()
        .any(|record| record.longitude.is_text() || record.latitude.is_text())
    {
        debug!("skipping range check, non-numeric coordinates present");
        return outcome;
    }

    let flagged = group_rows(
        records.iter().filter(|record| is_out_of_range(record)),
        |record| record.lot.group_key(),
    );
    for (lot, rows) in flagged {
        outcome.push(Issue::CoordinateOutOfRange {
            lot: lot.to_string(),
            rows,
        });
    }
    outcome
}

fn is_out_of_range(record: &Record) -> bool {
    let outside = |value: Option<f64>, range: &RangeInclusive<f64>| {
        value.is_some_and(|value| !range.contains(&value))
    };
    outside(record.latitude.as_f64(), &LATITUDE_RANGE)
        || outside(record.longitude.as_f64(), &LONGITUDE_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::records;

    #[test]
    fn bounds_are_inclusive() {
        let outcome = check(&records(&[
            ["1", "1", "1", "-180", "90"],
            ["1", "1", "2", "180", "-90"],
        ]));
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn out_of_range_rows_grouped_by_lot() {
        let outcome = check(&records(&[
            ["2", "1", "1", "-75.0", "95.0"],
            ["1", "1", "1", "-181.0", "4.0"],
            ["2", "1", "2", "-75.0", "4.0"],
            ["2", "1", "3", "200", "-91"],
        ]));
        assert_eq!(
            outcome.issues,
            vec![
                Issue::CoordinateOutOfRange {
                    lot: "1".to_string(),
                    rows: vec![2],
                },
                Issue::CoordinateOutOfRange {
                    lot: "2".to_string(),
                    rows: vec![1, 4],
                },
            ]
        );
    }

    #[test]
    fn infinite_values_are_out_of_range() {
        let outcome = check(&records(&[["1", "1", "1", "-inf", "4.0"]]));
        assert_eq!(outcome.issues.len(), 1);
    }

    #[test]
    fn text_coordinate_skips_the_check() {
        let outcome = check(&records(&[
            ["1", "1", "1", "-75.0", "95.0"],
            ["1", "1", "2", "oeste", "4.0"],
        ]));
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn rows_without_lot_are_not_reported() {
        let outcome = check(&records(&[["", "1", "1", "-75.0", "95.0"]]));
        assert!(outcome.issues.is_empty());
    }
}
