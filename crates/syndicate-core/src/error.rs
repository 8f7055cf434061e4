//! Error types for the syndicate crates.
//!
//! Parsing and validation failures are reported through [`SyndicateError`];
//! higher layers wrap it in their own error types.

use thiserror::Error;

/// A specialized Result type for syndicate operations.
pub type SyndicateResult<T> = Result<T, SyndicateError>;

/// The main error type for syndicate operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyndicateError {
    /// A string did not name a known enumerated value.
    #[error("Unknown {kind}: {value}")]
    UnknownValue {
        /// What was being parsed (currency, sector, ...).
        kind: &'static str,
        /// The offending input.
        value: String,
    },

    /// A pricing request failed validation.
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// Description of what's invalid.
        reason: String,
    },

    /// A lookup table has no entry for the requested key.
    #[error("Missing market data: {what}")]
    MissingMarketData {
        /// Description of the missing cell.
        what: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },
}

impl SyndicateError {
    /// Creates an unknown value error.
    #[must_use]
    pub fn unknown_value(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            kind,
            value: value.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Creates a missing market data error.
    #[must_use]
    pub fn missing_market_data(what: impl Into<String>) -> Self {
        Self::MissingMarketData { what: what.into() }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config_error(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }
}
