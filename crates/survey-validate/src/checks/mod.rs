//! Validation check modules.
//!
//! Each module runs one check over the full table and reports the issues it
//! found together with the rows it rejects.

mod completeness;
mod coordinates;
mod lines;
mod lots;
mod positions;
mod range;

use std::collections::BTreeSet;

use survey_model::{CoordinateRecord, Issue, Record, RowNumber, ValidationReport};
use tracing::debug;

use crate::ValidationContext;

pub use range::{LATITUDE_RANGE, LONGITUDE_RANGE};

/// Issues raised by one check and the rows they reject.
#[derive(Debug, Default)]
pub(crate) struct CheckOutcome {
    pub issues: Vec<Issue>,
    pub excluded: BTreeSet<RowNumber>,
}

impl CheckOutcome {
    fn push(&mut self, issue: Issue) {
        self.excluded.extend(issue.rows());
        self.issues.push(issue);
    }
}

/// Run every check and collect the surviving coordinates.
///
/// Checks after the first see every row, including rows already rejected, so
/// one row can appear in several issues. A row is accepted only when no check
/// rejects it.
pub fn run_all(records: &[Record], ctx: &ValidationContext<'_>) -> ValidationReport {
    let mut issues = Vec::new();
    let mut excluded = BTreeSet::new();

    // 1. Required values present and numeric
    absorb("completeness", completeness::check(records), &mut issues, &mut excluded);

    // 2. Coordinate pairs unique across the survey
    absorb("duplicate_coordinate", coordinates::check(records), &mut issues, &mut excluded);

    // 3. Line numbers unique per lot
    absorb("duplicate_line", lines::check(records), &mut issues, &mut excluded);

    // 4. Positions unique per line
    absorb("duplicate_position", positions::check(records), &mut issues, &mut excluded);

    // 5. Coordinates within geographic bounds
    absorb("coordinate_range", range::check(records), &mut issues, &mut excluded);

    // 6. Lots known to the farm
    if let Some(directory) = ctx.lot_directory {
        absorb("lot_membership", lots::check(records, directory), &mut issues, &mut excluded);
    }

    let coordinates = records
        .iter()
        .filter(|record| !excluded.contains(&record.row))
        .filter_map(CoordinateRecord::from_record)
        .collect();

    ValidationReport {
        row_count: records.len(),
        coordinates,
        issues,
    }
}

fn absorb(
    check: &str,
    outcome: CheckOutcome,
    issues: &mut Vec<Issue>,
    excluded: &mut BTreeSet<RowNumber>,
) {
    debug!(
        check,
        issues = outcome.issues.len(),
        rejected_rows = outcome.excluded.len(),
        "check complete"
    );
    excluded.extend(outcome.excluded);
    issues.extend(outcome.issues);
}

#[cfg(test)]
pub(crate) mod test_support {
    use survey_model::Record;

    /// Records from `[lot, line, position, longitude, latitude]` rows,
    /// numbered from 1.
    pub fn records(rows: &[[&str; 5]]) -> Vec<Record> {
        rows.iter()
            .enumerate()
            .map(|(index, cells)| Record::from_cells(index + 1, *cells))
            .collect()
    }
}
