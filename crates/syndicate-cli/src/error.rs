//! CLI error types.

use thiserror::Error;

use syndicate_pricing::PricingError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing tables could not be loaded or a request failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Output could not be written.
    #[error("Output error: {0}")]
    Output(String),
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
