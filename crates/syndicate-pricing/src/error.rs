//! Pricing error types.

use thiserror::Error;

use syndicate_core::SyndicateError;

/// Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Pricing error type.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Validation or lookup failure from the core types
    #[error(transparent)]
    Syndicate(#[from] SyndicateError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Market data file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Market data file is not valid TOML
    #[error("failed to parse market data: {0}")]
    Parse(#[from] toml::de::Error),
}

impl PricingError {
    /// True when the error was caused by the caller's input rather than
    /// by the service's own tables or configuration.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PricingError::Syndicate(
                SyndicateError::InvalidRequest { .. } | SyndicateError::UnknownValue { .. }
            )
        )
    }
}
