//! Column resolution.

use survey_ingest::CsvTable;
use survey_model::{Record, SurveyField};

use crate::error::{Result, StructuralError};

/// Locate the five required columns and build one record per data row.
///
/// Headers are matched after normalization, so `" LOTE "` satisfies `Lote`.
/// Extra columns are ignored; when a name repeats the first column wins.
pub fn resolve_records(table: &CsvTable) -> Result<Vec<Record>> {
    let mut indices = [0usize; 5];
    let mut missing = Vec::new();
    for (slot, field) in SurveyField::ALL.into_iter().enumerate() {
        match table.column_index(field.column_name()) {
            Some(index) => indices[slot] = index,
            None => missing.push(field.column_name()),
        }
    }
    if !missing.is_empty() {
        return Err(StructuralError::MissingColumns { missing });
    }

    Ok((0..table.len())
        .map(|index| Record::from_cells(index + 1, indices.map(|column| table.cell(index, column))))
        .collect())
}
