//! Animal dataset ingestion.
//!
//! Loads a single delimited text file (first row = headers) into a
//! [`fauna_model::RawTable`]. Column count and order are unknown up front;
//! the column resolver decides what each column means.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use fauna_ingest::read_raw_table;
//!
//! let table = read_raw_table(Path::new("animals.csv"))?;
//! println!("{} columns, {} rows", table.column_count(), table.row_count());
//! ```

mod error;
mod header;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use header::normalize_header;
pub use reader::{
    DEFAULT_DELIMITER, IngestOptions, read_raw_table, read_raw_table_with_options,
    validate_encoding,
};
