//! Issuer sector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SyndicateError;

/// Industry sector of the issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    /// Regulated utilities.
    Utility,
    /// Banks and financial institutions.
    Bank,
    /// Industrial corporates.
    Industrial,
}

impl Sector {
    /// Returns every sector in canonical order.
    #[must_use]
    pub fn all() -> &'static [Sector] {
        &[Sector::Utility, Sector::Bank, Sector::Industrial]
    }

    /// Wire value, e.g. `"utility"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Utility => "utility",
            Sector::Bank => "bank",
            Sector::Industrial => "industrial",
        }
    }

    /// Display label, e.g. `"Utility"`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Utility => "Utility",
            Sector::Bank => "Bank",
            Sector::Industrial => "Industrial",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = SyndicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "utility" => Ok(Sector::Utility),
            "bank" => Ok(Sector::Bank),
            "industrial" => Ok(Sector::Industrial),
            _ => Err(SyndicateError::unknown_value("sector", s)),
        }
    }
}
