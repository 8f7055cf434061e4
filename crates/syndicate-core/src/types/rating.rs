//! Issuer credit rating.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SyndicateError;

/// Senior unsecured rating of the issuer.
///
/// Ordering runs from best (`AAA`) to worst (`BBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    /// Prime.
    AAA,
    /// High grade.
    AA,
    /// Upper medium grade.
    A,
    /// Lower medium grade.
    BBB,
}

impl Rating {
    /// Returns every rating from best to worst.
    #[must_use]
    pub fn all() -> &'static [Rating] {
        &[Rating::AAA, Rating::AA, Rating::A, Rating::BBB]
    }

    /// Wire value, e.g. `"AA"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::AAA => "AAA",
            Rating::AA => "AA",
            Rating::A => "A",
            Rating::BBB => "BBB",
        }
    }

    /// All supported ratings are investment grade.
    #[must_use]
    pub fn is_investment_grade(&self) -> bool {
        true
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = SyndicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AAA" => Ok(Rating::AAA),
            "AA" => Ok(Rating::AA),
            "A" => Ok(Rating::A),
            "BBB" => Ok(Rating::BBB),
            _ => Err(SyndicateError::unknown_value("rating", s)),
        }
    }
}
