//! Species enumeration and canonicalization.
//!
//! Species are accepted case-insensitively on input and always stored and
//! compared in their lowercase canonical form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An animal species a pet can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

impl Species {
    /// Every species, in declaration order.
    pub const ALL: [Species; 5] = [
        Species::Dog,
        Species::Cat,
        Species::Bird,
        Species::Rabbit,
        Species::Other,
    ];

    /// Species the quiz can recommend. Order is the tie-break order.
    pub const SCORABLE: [Species; 4] = [Species::Dog, Species::Cat, Species::Bird, Species::Rabbit];

    /// Canonical (lowercase) storage form.
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Bird => "bird",
            Species::Rabbit => "rabbit",
            Species::Other => "other",
        }
    }

    /// Parse a species name case-insensitively, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let normalized = input.trim().to_ascii_lowercase();
        Species::ALL
            .into_iter()
            .find(|s| s.as_str() == normalized)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid species '{}'. Must be one of: {}",
                    input.trim(),
                    Species::ALL.map(Species::as_str).join(", ")
                ))
            })
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::parse(s)
    }
}
