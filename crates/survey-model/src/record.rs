use crate::field::{FieldValue, SurveyField};

/// 1-based position of a data row in the input, excluding the header.
pub type RowNumber = usize;

/// One survey row with its five required fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub row: RowNumber,
    pub lot: FieldValue,
    pub line: FieldValue,
    pub position: FieldValue,
    pub longitude: FieldValue,
    pub latitude: FieldValue,
}

impl Record {
    /// Build a record from raw cells given in [`SurveyField::ALL`] order.
    pub fn from_cells(row: RowNumber, cells: [&str; 5]) -> Self {
        let [lot, line, position, longitude, latitude] = cells.map(FieldValue::parse);
        Self {
            row,
            lot,
            line,
            position,
            longitude,
            latitude,
        }
    }

    pub fn field(&self, field: SurveyField) -> &FieldValue {
        match field {
            SurveyField::Lot => &self.lot,
            SurveyField::Line => &self.line,
            SurveyField::Position => &self.position,
            SurveyField::Longitude => &self.longitude,
            SurveyField::Latitude => &self.latitude,
        }
    }

    /// Fields with no value, in column order.
    pub fn missing_fields(&self) -> Vec<SurveyField> {
        SurveyField::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_absent())
            .collect()
    }

    /// First numeric field holding non-numeric text, with its raw value.
    pub fn first_non_numeric(&self) -> Option<(SurveyField, &str)> {
        SurveyField::NUMERIC.into_iter().find_map(|field| match self.field(field) {
            FieldValue::Text(raw) => Some((field, raw.as_str())),
            _ => None,
        })
    }
}
