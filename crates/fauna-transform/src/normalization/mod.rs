//! Value normalization: row cleanup, speed parsing and diet classification.

pub mod diet;
pub mod row;
pub mod speed;
pub mod words;

pub use diet::{classify_diet, diet_keywords};
pub use row::{MISSING_TOKENS, TrimmedRow, clean_cell, is_missing, normalize_row};
pub use speed::{first_number, normalize_speed, parse_range, parse_speed, round_speed, strip_units};
pub use words::words_to_number;
