//! CLI command implementations.

pub mod market;
pub mod options;
pub mod price;

// Re-export submodules for convenience
pub use market::MarketArgs;
pub use price::PriceArgs;

use std::path::Path;

use syndicate_pricing::{MarketData, SyndicatePricingCalculator, SyndicatePricingCalculatorBuilder};

use crate::error::CliResult;

/// Builds the calculator, replacing the built-in tables when a file is given.
pub fn load_calculator(market_data: Option<&Path>) -> CliResult<SyndicatePricingCalculator> {
    let mut builder = SyndicatePricingCalculatorBuilder::new();
    if let Some(path) = market_data {
        builder = builder.with_market_data(MarketData::from_file(path)?);
    }
    Ok(builder.build()?)
}
