//! Diet categories.
//!
//! Every surviving output row carries exactly one of these three values;
//! free-form source text is mapped onto them by the diet classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FaunaError;

/// Canonical diet category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Carnivore,
    Herbivore,
    Omnivore,
}

impl Diet {
    /// All categories in classification precedence order.
    pub const ALL: [Diet; 3] = [Diet::Carnivore, Diet::Herbivore, Diet::Omnivore];

    /// Returns the lowercase name written to output files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Carnivore => "carnivore",
            Diet::Herbivore => "herbivore",
            Diet::Omnivore => "omnivore",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Diet {
    type Err = FaunaError;

    /// Parses the canonical spelling only (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "carnivore" => Ok(Diet::Carnivore),
            "herbivore" => Ok(Diet::Herbivore),
            "omnivore" => Ok(Diet::Omnivore),
            _ => Err(FaunaError::UnknownDiet(s.to_string())),
        }
    }
}
