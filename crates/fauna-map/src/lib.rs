//! Header-based column resolution for animal datasets.
//!
//! Source files arrive with unknown headers. This crate decides which column
//! holds the animal name, the speed and the diet, using case-insensitive
//! exact-or-substring header matching with a positional fallback.

mod patterns;
mod resolver;
mod utils;

pub use patterns::{positional_fallback, role_candidates};
pub use resolver::{find_column, resolve_columns, resolve_role};
pub use utils::normalize_header_key;
