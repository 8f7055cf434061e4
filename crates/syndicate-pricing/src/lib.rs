//! # Syndicate Pricing
//!
//! New-issue pricing for the DCM syndicate desk.
//!
//! This crate provides:
//! - [`MarketData`]: government rates, credit spreads, adjustments and swap costs
//! - [`SyndicatePricingCalculator`]: all-in cost per currency
//! - [`FinancialImpact`]: annual and ten-year cost, savings versus the base currency
//! - [`Recommendations`]: optimal currency, timing advice, alternative structures
//! - [`PricingAnalysis`]: the full result for one [`BondRequest`]
//!
//! ## Architecture
//!
//! ```text
//! BondRequest ─> validate ─> price_all ─┬─> FinancialImpact
//!                                       ├─> Recommendations
//!                                       └─> direct pricing (base currency)
//!                                               │
//!                                               v
//!                                        PricingAnalysis
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use syndicate_pricing::{BondRequest, SyndicatePricingCalculatorBuilder};
//!
//! let calculator = SyndicatePricingCalculatorBuilder::new().build().unwrap();
//! let analysis = calculator
//!     .generate_pricing_analysis(&BondRequest::default())
//!     .unwrap();
//! assert_eq!(analysis.direct_pricing.breakdown.total, "5.30%");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod builder;
pub mod calculator;
pub mod error;
pub mod impact;
pub mod market_data;
pub mod recommendation;
pub mod request;

// Re-exports
pub use analysis::PricingAnalysis;
pub use builder::SyndicatePricingCalculatorBuilder;
pub use calculator::{CurrencyPricing, PricingBreakdown, SyndicatePricingCalculator};
pub use error::{PricingError, PricingResult};
pub use impact::{CurrencyImpact, FinancialImpact, SavingsRecommendation};
pub use market_data::{MarketData, SizeRung, SwapCost};
pub use recommendation::Recommendations;
pub use request::{BondRequest, DealSizeLimits};
