//! Lot membership check.

use survey_model::{Issue, LotDirectory, Record};

use super::CheckOutcome;
use crate::util::group_rows;

/// Flag rows whose lot is not owned by the farm.
///
/// Rows without a lot are left to the completeness check.
pub(super) fn check(records: &[Record], directory: &dyn LotDirectory) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    let unknown = group_rows(records, |record| {
        record
            .lot
            .group_key()
            .filter(|lot| !directory.contains(&lot.to_string()))
    });
    for (lot, rows) in unknown {
        outcome.push(Issue::InvalidLot {
            lot: lot.to_string(),
            rows,
        });
    }
    outcome
}
