//! Survey file reading with delimiter and encoding detection.

use std::borrow::Cow;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::{Encoding, WINDOWS_1252};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

use super::header::{detect_delimiter, normalize_header};

/// Maximum file size for survey loading (500 MB default).
pub const MAX_SURVEY_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Header plus data rows, every row padded to the header width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    /// Normalized column names.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Delimiter the input was parsed with.
    pub delimiter: u8,
}

impl CsvTable {
    /// Index of the first column with the given normalized name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell text, empty when out of bounds.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_SURVEY_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Decode raw upload bytes to text.
///
/// A BOM selects its encoding (UTF-8, UTF-16 LE/BE). Without one, valid
/// UTF-8 is used as is and anything else is read as Windows-1252, the
/// encoding spreadsheet tools on Spanish-locale systems export with.
pub fn decode_survey_bytes(bytes: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        debug!(encoding = encoding.name(), "decoding survey using BOM");
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text;
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            warn!("survey is not valid UTF-8, decoding as Windows-1252");
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text
        }
    }
}

/// Parse survey bytes into a table.
///
/// The first non-blank row is the header. Blank lines are skipped and do not
/// count as rows; rows of empty cells are kept. Short rows are padded with
/// empty cells, and trailing empty cells beyond the header are dropped.
pub fn read_survey_bytes(bytes: &[u8]) -> Result<CsvTable> {
    let text = decode_survey_bytes(bytes);
    let Some(header_line) = text.lines().find(|line| !line.trim().is_empty()) else {
        return Err(IngestError::EmptyCsv);
    };
    let delimiter = detect_delimiter(header_line);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if is_blank_line(&record) {
            continue;
        }
        let Some(columns) = headers.as_ref() else {
            headers = Some(record.iter().map(normalize_header).collect());
            continue;
        };
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.len() > columns.len() {
            if row[columns.len()..].iter().any(|cell| !cell.trim().is_empty()) {
                return Err(IngestError::CsvParse {
                    message: format!(
                        "row {} has {} fields but the header has {}",
                        rows.len() + 1,
                        row.len(),
                        columns.len()
                    ),
                });
            }
            row.truncate(columns.len());
        }
        row.resize(columns.len(), String::new());
        rows.push(row);
    }

    let headers = headers.ok_or(IngestError::EmptyCsv)?;
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected);
    }
    debug!(
        columns = headers.len(),
        rows = rows.len(),
        delimiter = %char::from(delimiter).escape_default(),
        "parsed survey table"
    );
    Ok(CsvTable {
        headers,
        rows,
        delimiter,
    })
}

/// Read and parse a survey file from disk.
pub fn read_survey_file(path: &Path) -> Result<CsvTable> {
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let table = read_survey_bytes(&bytes)?;
    if table.headers.len() > 500 {
        warn!(
            path = %path.display(),
            columns = table.headers.len(),
            "survey has more than 500 columns"
        );
    }
    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "loaded survey"
    );
    Ok(table)
}

fn is_blank_line(record: &csv::StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(|cell| cell.trim().is_empty())
}
