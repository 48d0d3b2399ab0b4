//! Duplicate coordinate detection.

use std::collections::{BTreeMap, BTreeSet};

use survey_model::{Issue, Record, RowNumber};

use super::CheckOutcome;
use crate::util::duplicate_groups;

struct LotDuplicates {
    lot: String,
    groups: usize,
    rows: BTreeSet<RowNumber>,
}

/// Flag rows sharing a (Longitud, Latitud) pair with another row.
///
/// Pairs are compared across the whole survey, so rows of different lots can
/// collide. One issue is raised per lot touched by a repeated pair, in the
/// order lots first appear; its count is the number of repeated pairs that
/// touch the lot and its rows are the lot's own rows in those pairs.
///
/// A pair spanning several lots therefore raises one issue in each of them,
/// and every row lands in exactly one issue of this check.
pub(super) fn check(records: &[Record]) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    let groups = duplicate_groups(records, |record| {
        Some((record.longitude.group_key()?, record.latitude.group_key()?))
    });
    if groups.is_empty() {
        return outcome;
    }

    let lots: BTreeMap<RowNumber, String> = records
        .iter()
        .map(|record| (record.row, record.lot.label()))
        .collect();
    let mut per_lot: Vec<LotDuplicates> = Vec::new();
    for rows in groups.values() {
        let mut touched: Vec<&str> = Vec::new();
        for row in rows {
            let lot = lots.get(row).map_or("", String::as_str);
            let index = match per_lot.iter().position(|entry| entry.lot == lot) {
                Some(index) => index,
                None => {
                    per_lot.push(LotDuplicates {
                        lot: lot.to_string(),
                        groups: 0,
                        rows: BTreeSet::new(),
                    });
                    per_lot.len() - 1
                }
            };
            let entry = &mut per_lot[index];
            entry.rows.insert(*row);
            if !touched.contains(&lot) {
                touched.push(lot);
                entry.groups += 1;
            }
        }
    }

    for entry in per_lot {
        outcome.push(Issue::DuplicateCoordinate {
            lot: entry.lot,
            groups: entry.groups,
            rows: entry.rows.into_iter().collect(),
        });
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::records;

    #[test]
    fn unique_coordinates_pass() {
        let outcome = check(&records(&[
            ["1", "1", "1", "-75.0", "4.0"],
            ["1", "1", "2", "-75.0", "4.1"],
        ]));
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn repeated_pair_within_a_lot() {
        let outcome = check(&records(&[
            ["1", "1", "1", "-75.0", "4.0"],
            ["1", "1", "2", "-75.1", "4.1"],
            ["1", "1", "3", "-75.00", "4"],
        ]));
        assert_eq!(
            outcome.issues,
            vec![Issue::DuplicateCoordinate {
                lot: "1".to_string(),
                groups: 1,
                rows: vec![1, 3],
            }]
        );
        assert_eq!(outcome.excluded.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn pair_shared_across_lots_reports_each_lot() {
        // Pairs are visited in key order, so (-75.2, 4.2) puts lot A first.
        let outcome = check(&records(&[
            ["B", "1", "1", "-75.0", "4.0"],
            ["A", "1", "1", "-75.0", "4.0"],
            ["A", "2", "1", "-75.2", "4.2"],
            ["A", "2", "2", "-75.2", "4.2"],
        ]));
        assert_eq!(
            outcome.issues,
            vec![
                Issue::DuplicateCoordinate {
                    lot: "A".to_string(),
                    groups: 2,
                    rows: vec![2, 3, 4],
                },
                Issue::DuplicateCoordinate {
                    lot: "B".to_string(),
                    groups: 1,
                    rows: vec![1],
                },
            ]
        );
    }

    #[test]
    fn absent_lot_is_labelled_empty() {
        let outcome = check(&records(&[
            ["", "1", "1", "-75.0", "4.0"],
            ["1", "1", "2", "-75.0", "4.0"],
        ]));
        assert_eq!(outcome.issues.len(), 2);
        assert_eq!(outcome.issues[0].lot(), Some(""));
    }

    #[test]
    fn rows_without_coordinates_are_ignored() {
        let outcome = check(&records(&[
            ["1", "1", "1", "", "4.0"],
            ["1", "1", "2", "", "4.0"],
        ]));
        assert!(outcome.issues.is_empty());
    }
}
