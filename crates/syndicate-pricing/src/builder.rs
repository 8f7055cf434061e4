//! Builder pattern for the pricing calculator.

use tracing::debug;

use crate::calculator::SyndicatePricingCalculator;
use crate::error::{PricingError, PricingResult};
use crate::market_data::MarketData;
use crate::request::DealSizeLimits;

/// Builder for constructing a [`SyndicatePricingCalculator`].
pub struct SyndicatePricingCalculatorBuilder {
    market_data: Option<MarketData>,
    limits: Option<DealSizeLimits>,
}

impl SyndicatePricingCalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            market_data: None,
            limits: None,
        }
    }

    /// Set the market data tables.
    pub fn with_market_data(mut self, market_data: MarketData) -> Self {
        self.market_data = Some(market_data);
        self
    }

    /// Set the accepted deal-size range.
    pub fn with_deal_size_limits(mut self, limits: DealSizeLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Build the calculator.
    pub fn build(self) -> PricingResult<SyndicatePricingCalculator> {
        let market_data = self.market_data.unwrap_or_default();
        market_data.validate()?;

        let limits = self.limits.unwrap_or_default();
        if limits.min == 0 || limits.min > limits.max {
            return Err(PricingError::Config(format!(
                "invalid deal size range {}-{}",
                limits.min, limits.max
            )));
        }

        debug!(min = limits.min, max = limits.max, "built pricing calculator");
        Ok(SyndicatePricingCalculator::new(market_data, limits))
    }
}

impl Default for SyndicatePricingCalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
