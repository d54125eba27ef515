//! Shared model types for the animal dataset normalizer.

pub mod diet;
pub mod error;
pub mod mapping;
pub mod table;

pub use diet::Diet;
pub use error::{FaunaError, Result};
pub use mapping::{ColumnMapping, ColumnRole, MatchKind, ResolvedColumn};
pub use table::{CanonicalRow, RawTable};

/// Canonical output headers, in order.
pub const CANONICAL_HEADERS: [&str; 3] = ["name", "speed", "diet"];
