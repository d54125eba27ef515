//! Column resolution.
//!
//! Each role scans the headers in file order and takes the first header that
//! equals or contains one of the role's candidates. Roles are resolved
//! independently, so two roles may land on the same column.

use tracing::{debug, warn};

use fauna_model::{ColumnMapping, ColumnRole, MatchKind, ResolvedColumn};

use crate::patterns::{positional_fallback, role_candidates};
use crate::utils::normalize_header_key;

/// Finds the first header matching any candidate.
///
/// Iteration is header-major: the first header that equals or contains any
/// candidate wins, regardless of the candidate's position in the list.
pub fn find_column(headers: &[String], candidates: &[&str]) -> Option<(usize, MatchKind)> {
    for (index, header) in headers.iter().enumerate() {
        let key = normalize_header_key(header);
        for candidate in candidates {
            let candidate = candidate.to_lowercase();
            if key == candidate {
                return Some((index, MatchKind::Exact));
            }
            if key.contains(&candidate) {
                return Some((index, MatchKind::Substring));
            }
        }
    }
    None
}

/// Resolves a single role, falling back to its positional column.
pub fn resolve_role(headers: &[String], role: ColumnRole) -> ResolvedColumn {
    let (index, kind) = match find_column(headers, role_candidates(role)) {
        Some(found) => found,
        None => {
            let index = positional_fallback(role, headers.len());
            warn!(
                role = %role,
                column_index = index,
                "no header matched role, using positional column"
            );
            (index, MatchKind::Positional)
        }
    };
    let header = headers.get(index).cloned().unwrap_or_default();
    debug!(role = %role, column_index = index, header = %header, kind = kind.as_str(), "resolved column");
    ResolvedColumn {
        index,
        header,
        kind,
    }
}

/// Resolves the name, speed and diet columns from a header row.
pub fn resolve_columns(headers: &[String]) -> ColumnMapping {
    ColumnMapping {
        name: resolve_role(headers, ColumnRole::Name),
        speed: resolve_role(headers, ColumnRole::Speed),
        diet: resolve_role(headers, ColumnRole::Diet),
    }
}
