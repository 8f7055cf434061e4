//! Issuance currencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SyndicateError;

/// ISO 4217 codes of the currencies a deal can be printed in.
///
/// Declaration order is the canonical comparison order (GBP, EUR, USD).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Currency {
    /// British Pound Sterling
    #[default]
    GBP,
    /// Euro
    EUR,
    /// United States Dollar
    USD,
}

impl Currency {
    /// Returns every supported currency in canonical order.
    #[must_use]
    pub fn all() -> &'static [Currency] {
        &[Currency::GBP, Currency::EUR, Currency::USD]
    }

    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
        }
    }

    /// Returns the currency symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::GBP => "£",
            Currency::EUR => "€",
            Currency::USD => "$",
        }
    }

    /// Returns the full currency name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::GBP => "British Pound Sterling",
            Currency::EUR => "Euro",
            Currency::USD => "United States Dollar",
        }
    }

    /// Parses a currency from a string code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "GBP" => Some(Currency::GBP),
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = SyndicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| SyndicateError::unknown_value("currency", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::GBP.code(), "GBP");
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::USD.code(), "USD");
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(Currency::GBP.symbol(), "£");
        assert_eq!(Currency::EUR.symbol(), "€");
        assert_eq!(Currency::USD.symbol(), "$");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("gbp"), Some(Currency::GBP));
        assert_eq!(Currency::from_code(" EUR "), Some(Currency::EUR));
        assert_eq!(Currency::from_code("JPY"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "CHF".parse::<Currency>().unwrap_err();
        assert_eq!(err, SyndicateError::unknown_value("currency", "CHF"));
    }

    #[test]
    fn test_canonical_order() {
        let mut shuffled = vec![Currency::USD, Currency::GBP, Currency::EUR];
        shuffled.sort();
        assert_eq!(shuffled, Currency::all());
    }

    #[test]
    fn test_default() {
        assert_eq!(Currency::default(), Currency::GBP);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Currency::EUR).unwrap();
        assert_eq!(json, "\"EUR\"");
        let parsed: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(parsed, Currency::USD);
    }
}
