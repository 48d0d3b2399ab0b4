//! Survey table reading.

mod header;
mod reader;

pub use header::{detect_delimiter, normalize_header};
pub use reader::{
    CsvTable, MAX_SURVEY_FILE_SIZE, check_file_size, check_file_size_with_limit,
    decode_survey_bytes, read_survey_bytes, read_survey_file,
};
