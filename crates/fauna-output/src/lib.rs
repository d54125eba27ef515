//! Output generation for cleaned animal datasets.
//!
//! Writes canonical `name,speed,diet` CSV files: a labeled export and a copy
//! at the fixed `sample_animals.csv` convention path.

mod error;
mod plan;
mod writer;

pub use error::{OutputError, Result};
pub use plan::{DEFAULT_LABEL, OutputPlan, SAMPLE_FILE_NAME, labeled_file_name, write_outputs};
pub use writer::{render_canonical_csv, write_canonical_csv};
