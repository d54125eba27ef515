//! Column roles and the resolved column mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FaunaError;

/// Canonical role a source column can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    Name,
    Speed,
    Diet,
}

impl ColumnRole {
    /// Roles in output column order.
    pub const ALL: [ColumnRole; 3] = [ColumnRole::Name, ColumnRole::Speed, ColumnRole::Diet];

    /// Returns the canonical output header for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Name => "name",
            ColumnRole::Speed => "speed",
            ColumnRole::Diet => "diet",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnRole {
    type Err = FaunaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(ColumnRole::Name),
            "speed" => Ok(ColumnRole::Speed),
            "diet" => Ok(ColumnRole::Diet),
            _ => Err(FaunaError::UnknownRole(s.to_string())),
        }
    }
}

/// How a role was assigned to its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// A header equals one of the role's candidate names.
    Exact,
    /// A header contains one of the role's candidate names.
    Substring,
    /// No header matched; the column was picked by index.
    Positional,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Substring => "substring",
            MatchKind::Positional => "positional",
        }
    }
}

/// A single role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedColumn {
    /// Zero-based index into the source headers.
    pub index: usize,
    /// Source header text as it appeared in the file (trimmed).
    pub header: String,
    pub kind: MatchKind,
}

/// Resolved assignment of source columns to the three canonical roles.
///
/// Two roles may point at the same physical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub name: ResolvedColumn,
    pub speed: ResolvedColumn,
    pub diet: ResolvedColumn,
}

impl ColumnMapping {
    pub fn get(&self, role: ColumnRole) -> &ResolvedColumn {
        match role {
            ColumnRole::Name => &self.name,
            ColumnRole::Speed => &self.speed,
            ColumnRole::Diet => &self.diet,
        }
    }

    /// Column indices in `(name, speed, diet)` order.
    pub fn indices(&self) -> [usize; 3] {
        [self.name.index, self.speed.index, self.diet.index]
    }

    /// Returns true if any role fell back to a positional column.
    pub fn has_fallback(&self) -> bool {
        ColumnRole::ALL
            .iter()
            .any(|role| self.get(*role).kind == MatchKind::Positional)
    }
}
