//! In-memory tables: the raw loaded table and canonical output rows.

use serde::{Deserialize, Serialize};

use crate::diet::Diet;

/// A loaded delimited file: one header row plus data rows.
///
/// Cells are `None` when a ragged record ended before that column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<Option<String>>) {
        row.resize(self.headers.len(), None);
        self.rows.push(row);
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cell at `(row, column)`, if present.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(|cell| cell.as_deref())
    }
}

/// A fully normalized record.
///
/// `name` is non-empty, `speed` is finite, non-negative and rounded to one
/// decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRow {
    pub name: String,
    pub speed: f64,
    pub diet: Diet,
}

impl CanonicalRow {
    pub fn new(name: impl Into<String>, speed: f64, diet: Diet) -> Self {
        Self {
            name: name.into(),
            speed,
            diet,
        }
    }

    /// Speed rendered with exactly one fractional digit.
    pub fn speed_text(&self) -> String {
        format!("{:.1}", self.speed)
    }
}
