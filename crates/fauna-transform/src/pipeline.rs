//! Row pipeline: resolve columns once, then filter and map every row.
//!
//! Stages, in order:
//! 1. **Normalize**: trim the three selected cells, drop rows missing any
//! 2. **Speed**: parse and round the speed cell, drop unparseable rows
//! 3. **Diet**: classify the diet cell, drop unmatched rows
//!
//! A row either survives all stages or is discarded. Order is preserved.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fauna_map::resolve_columns;
use fauna_model::{CanonicalRow, ColumnMapping, RawTable};

use crate::normalization::{classify_diet, normalize_row, normalize_speed};

/// Stage at which a row was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropStage {
    Missing,
    Speed,
    Diet,
}

/// Aggregate row counts for a run. No per-row detail is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCounts {
    pub input_rows: usize,
    pub dropped_missing: usize,
    pub dropped_speed: usize,
    pub dropped_diet: usize,
    pub output_rows: usize,
}

impl StageCounts {
    pub fn dropped(&self) -> usize {
        self.dropped_missing + self.dropped_speed + self.dropped_diet
    }

    fn record_drop(&mut self, stage: DropStage) {
        match stage {
            DropStage::Missing => self.dropped_missing += 1,
            DropStage::Speed => self.dropped_speed += 1,
            DropStage::Diet => self.dropped_diet += 1,
        }
    }
}

/// Result of cleaning a table.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutcome {
    pub mapping: ColumnMapping,
    pub rows: Vec<CanonicalRow>,
    pub counts: StageCounts,
}

/// Runs one raw row through every stage.
pub fn canonicalize_row(
    row: &[Option<String>],
    mapping: &ColumnMapping,
) -> Result<CanonicalRow, DropStage> {
    let trimmed = normalize_row(row, mapping).ok_or(DropStage::Missing)?;
    let speed = normalize_speed(trimmed.speed).ok_or(DropStage::Speed)?;
    let diet = classify_diet(trimmed.diet).ok_or(DropStage::Diet)?;
    Ok(CanonicalRow::new(trimmed.name, speed, diet))
}

/// Cleans a table using an already resolved mapping.
pub fn clean_table_with_mapping(table: &RawTable, mapping: ColumnMapping) -> CleanOutcome {
    let mut counts = StageCounts {
        input_rows: table.row_count(),
        ..StageCounts::default()
    };
    let mut rows = Vec::with_capacity(table.row_count());
    for row in &table.rows {
        match canonicalize_row(row, &mapping) {
            Ok(canonical) => rows.push(canonical),
            Err(stage) => counts.record_drop(stage),
        }
    }
    counts.output_rows = rows.len();
    debug!(
        input_rows = counts.input_rows,
        dropped_missing = counts.dropped_missing,
        dropped_speed = counts.dropped_speed,
        dropped_diet = counts.dropped_diet,
        output_rows = counts.output_rows,
        "cleaned table"
    );
    CleanOutcome {
        mapping,
        rows,
        counts,
    }
}

/// Resolves columns from the table headers and cleans every row.
pub fn clean_table(table: &RawTable) -> CleanOutcome {
    let mapping = resolve_columns(&table.headers);
    clean_table_with_mapping(table, mapping)
}
