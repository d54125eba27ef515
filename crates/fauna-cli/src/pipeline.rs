//! Cleaning run with explicit stages.
//!
//! The run follows these stages in order:
//! 1. **Ingest**: read the delimited input into a raw table
//! 2. **Resolve**: pick the name, speed and diet columns
//! 3. **Clean**: normalize, parse and classify every row
//! 4. **Output**: write the labeled export and the sample copy
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use fauna_ingest::{IngestOptions, read_raw_table_with_options};
use fauna_map::resolve_columns;
use fauna_model::{CanonicalRow, ColumnMapping, RawTable};
use fauna_output::{OutputPlan, SAMPLE_FILE_NAME, write_outputs};
use fauna_transform::{StageCounts, clean_table_with_mapping};

/// Everything a cleaning run needs, independent of how it was configured.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub label: String,
    /// Overrides `<output_dir>/sample_animals.csv`.
    pub sample_path: Option<PathBuf>,
    pub write_sample: bool,
    pub delimiter: u8,
    pub dry_run: bool,
}

impl CleanRequest {
    /// Builds the output plan for this request.
    pub fn output_plan(&self) -> OutputPlan {
        let sample = if self.write_sample {
            Some(
                self.sample_path
                    .clone()
                    .unwrap_or_else(|| self.output_dir.join(SAMPLE_FILE_NAME)),
            )
        } else {
            None
        };
        OutputPlan::new(&self.output_dir, &self.label)
            .with_sample(sample)
            .with_delimiter(self.delimiter)
    }
}

/// Outcome of a cleaning run.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub input: PathBuf,
    pub mapping: ColumnMapping,
    pub counts: StageCounts,
    /// Files written, or the files that would be written in a dry run.
    pub outputs: Vec<PathBuf>,
    pub dry_run: bool,
    #[serde(skip)]
    pub rows: Vec<CanonicalRow>,
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Reads the input file into a raw table.
pub fn ingest(path: &Path, delimiter: u8) -> Result<RawTable> {
    let span = info_span!("ingest", input = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let options = IngestOptions::default().with_delimiter(delimiter);
    let table = read_raw_table_with_options(path, &options)
        .with_context(|| format!("load input {}", path.display()))?;
    info!(
        columns = table.column_count(),
        rows = table.row_count(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(table)
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Writes the cleaned rows according to the plan.
pub fn output(rows: &[CanonicalRow], plan: &OutputPlan) -> Result<Vec<PathBuf>> {
    let span = info_span!("output", rows = rows.len());
    let _guard = span.enter();
    write_outputs(rows, plan).context("write outputs")
}

/// Resolves the column mapping for an input file without cleaning it.
pub fn run_columns(path: &Path, delimiter: u8) -> Result<ColumnMapping> {
    let table = ingest(path, delimiter)?;
    Ok(resolve_columns(&table.headers))
}

/// Runs every stage for one input file.
pub fn run_clean(request: &CleanRequest) -> Result<CleanReport> {
    let span = info_span!("clean", input = %request.input.display());
    let _guard = span.enter();

    let table = ingest(&request.input, request.delimiter)?;

    // Stage 2-3: resolve once, then filter/map rows
    let mapping = resolve_columns(&table.headers);
    let start = Instant::now();
    let outcome = clean_table_with_mapping(&table, mapping);
    info!(
        input_rows = outcome.counts.input_rows,
        output_rows = outcome.counts.output_rows,
        dropped = outcome.counts.dropped(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );

    let plan = request.output_plan();
    let outputs = if request.dry_run {
        info!("dry run, skipping output");
        plan.paths().into_iter().map(Path::to_path_buf).collect()
    } else {
        output(&outcome.rows, &plan)?
    };

    Ok(CleanReport {
        input: request.input.clone(),
        mapping: outcome.mapping,
        counts: outcome.counts,
        outputs,
        dry_run: request.dry_run,
        rows: outcome.rows,
    })
}
