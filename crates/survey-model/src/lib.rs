//! Plantation survey data model.
//!
//! Types shared by ingestion, validation and export: the five survey fields,
//! the typed cell values read from the input table, the issues raised by the
//! validation checks and the result envelope returned to callers.

pub mod coordinate;
pub mod directory;
pub mod field;
pub mod issue;
pub mod record;
pub mod result;

pub use coordinate::CoordinateRecord;
pub use directory::{FarmLots, LotDirectory, LotEntry};
pub use field::{FieldValue, GroupKey, MISSING_VALUE_MARKERS, SurveyField};
pub use issue::{Issue, IssueKind};
pub use record::{Record, RowNumber};
pub use result::{ValidationReport, ValidationResult};
