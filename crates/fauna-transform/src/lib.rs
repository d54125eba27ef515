//! Animal dataset transformation.
//!
//! - **normalization**: cell trimming, speed parsing (numbers, ranges, number
//!   words) and diet classification
//! - **pipeline**: the per-row filter/map driver producing canonical rows

pub mod normalization;
pub mod pipeline;

pub use normalization::{classify_diet, normalize_row, normalize_speed, parse_speed, words_to_number};
pub use pipeline::{
    CleanOutcome, DropStage, StageCounts, canonicalize_row, clean_table, clean_table_with_mapping,
};
