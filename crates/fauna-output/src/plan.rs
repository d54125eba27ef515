//! Output file planning: the labeled export plus the shared sample copy.

use std::path::{Path, PathBuf};

use tracing::info;

use fauna_model::CanonicalRow;

use crate::error::Result;
use crate::writer::write_canonical_csv;

/// Label used in the exported file name when none is given.
pub const DEFAULT_LABEL: &str = "Cleaned";

/// Fixed file name read by the downstream speed chart.
pub const SAMPLE_FILE_NAME: &str = "sample_animals.csv";

/// Returns the labeled export file name, e.g. `Cleaned - Cleaned Animal Data.csv`.
pub fn labeled_file_name(label: &str) -> String {
    format!("{label} - Cleaned Animal Data.csv")
}

/// Where cleaned rows are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    /// Labeled export path.
    pub primary: PathBuf,
    /// Convention copy, if enabled.
    pub sample: Option<PathBuf>,
    pub delimiter: u8,
}

impl OutputPlan {
    /// Plans both files inside `output_dir`.
    pub fn new(output_dir: &Path, label: &str) -> Self {
        Self {
            primary: output_dir.join(labeled_file_name(label)),
            sample: Some(output_dir.join(SAMPLE_FILE_NAME)),
            delimiter: b',',
        }
    }

    #[must_use]
    pub fn with_sample(mut self, sample: Option<PathBuf>) -> Self {
        self.sample = sample;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// All target paths in write order.
    pub fn paths(&self) -> Vec<&Path> {
        std::iter::once(self.primary.as_path())
            .chain(self.sample.as_deref())
            .collect()
    }
}

/// Writes the rows to every planned path and returns the paths written.
pub fn write_outputs(rows: &[CanonicalRow], plan: &OutputPlan) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for path in plan.paths() {
        write_canonical_csv(path, rows, plan.delimiter)?;
        info!(path = %path.display(), rows = rows.len(), "wrote output");
        written.push(path.to_path_buf());
    }
    Ok(written)
}
