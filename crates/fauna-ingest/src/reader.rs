//! Delimited file reading into a [`RawTable`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use fauna_model::RawTable;

use crate::error::{IngestError, Result};
use crate::header::{is_blank_record, normalize_header};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Options controlling how an input file is parsed.
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path.to_path_buf(), e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the header row)
    Ok(())
}

/// Reads a delimited file with default options.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    read_raw_table_with_options(path, &IngestOptions::default())
}

/// Reads a delimited file. The first non-blank record is the header row.
///
/// Records may be ragged: missing trailing cells become `None` and cells
/// past the header width are dropped. Blank records are skipped.
pub fn read_raw_table_with_options(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| IngestError::open(path.to_path_buf(), e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(file);

    let mut table: Option<RawTable> = None;
    let mut skipped_blank = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if is_blank_record(&record) {
            skipped_blank += 1;
            continue;
        }
        if let Some(table) = table.as_mut() {
            let row = record.iter().map(|value| Some(value.to_string())).collect();
            table.push_row(row);
            continue;
        }
        let headers = record.iter().map(normalize_header).collect();
        table = Some(RawTable::new(headers));
    }

    let table = table.ok_or_else(|| IngestError::EmptyInput {
        path: path.to_path_buf(),
    })?;
    debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        skipped_blank,
        "loaded input table"
    );
    Ok(table)
}
