use std::collections::BTreeSet;

use proptest::prelude::*;
use survey_model::{Issue, ValidationReport};
use survey_validate::{ValidationContext, validate_bytes};

const LOTS: &[&str] = &["1", "2", "1.0", "Norte", ""];
const LINES: &[&str] = &["1", "2", "3", "", "x"];
const POSITIONS: &[&str] = &["1", "2", "NA", "y"];
const LONGITUDES: &[&str] = &["-75.0", "-75.1", "-75.10", "-200", ""];
const LATITUDES: &[&str] = &["4.0", "4.1", "95", "", "norte"];

fn row() -> impl Strategy<Value = [&'static str; 5]> {
    (
        prop::sample::select(LOTS),
        prop::sample::select(LINES),
        prop::sample::select(POSITIONS),
        prop::sample::select(LONGITUDES),
        prop::sample::select(LATITUDES),
    )
        .prop_map(|(lot, line, position, longitude, latitude)| {
            [lot, line, position, longitude, latitude]
        })
}

fn survey(rows: &[[&str; 5]]) -> String {
    let mut text = String::from("Lote,Linea,Palma,Longitud,Latitud\n");
    for cells in rows {
        text.push_str(&cells.join(","));
        text.push('\n');
    }
    text
}

fn serialized(text: &str) -> String {
    serde_json::to_string(&validate_bytes(text.as_bytes(), &ValidationContext::new()))
        .expect("serialize result")
}

fn report(text: &str) -> ValidationReport {
    validate_bytes(text.as_bytes(), &ValidationContext::new())
        .report()
        .cloned()
        .expect("survey with all columns validates")
}

proptest! {
    #[test]
    fn accepted_and_rejected_rows_partition_the_survey(
        rows in prop::collection::vec(row(), 0..40)
    ) {
        let report = report(&survey(&rows));
        let rejected: BTreeSet<_> = report.issues.iter().flat_map(Issue::rows).collect();
        prop_assert_eq!(report.row_count, rows.len());
        prop_assert_eq!(report.coordinates.len() + rejected.len(), rows.len());
        prop_assert!(rejected.iter().all(|row| (1..=rows.len()).contains(row)));
    }

    #[test]
    fn validation_is_deterministic(rows in prop::collection::vec(row(), 0..40)) {
        let text = survey(&rows);
        prop_assert_eq!(serialized(&text), serialized(&text));
    }

    #[test]
    fn incomplete_rows_are_reported_and_never_accepted(
        rows in prop::collection::vec(row(), 1..40)
    ) {
        let report = report(&survey(&rows));
        let missing: BTreeSet<_> = report
            .issues
            .iter()
            .filter_map(|issue| match issue {
                Issue::MissingField { row, .. } => Some(*row),
                _ => None,
            })
            .collect();
        for (index, cells) in rows.iter().enumerate() {
            let incomplete = cells.iter().any(|cell| cell.is_empty() || *cell == "NA");
            prop_assert_eq!(incomplete, missing.contains(&(index + 1)));
        }
        prop_assert!(report.coordinates.len() <= rows.len() - missing.len());
    }

    #[test]
    fn row_level_issues_are_one_per_row(rows in prop::collection::vec(row(), 0..40)) {
        let report = report(&survey(&rows));
        let mut seen = BTreeSet::new();
        for issue in report.issues.iter().filter(|issue| issue.kind().is_row_level()) {
            prop_assert!(seen.insert(issue.rows()[0]));
        }
    }
}
