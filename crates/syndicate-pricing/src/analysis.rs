//! Full pricing analysis for a request.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use syndicate_core::SyndicateError;

use crate::calculator::{CurrencyPricing, SyndicatePricingCalculator};
use crate::error::PricingResult;
use crate::impact::{calculate_financial_impact, FinancialImpact};
use crate::recommendation::{generate_recommendations, Recommendations};
use crate::request::BondRequest;

/// Everything the form displays after a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingAnalysis {
    /// Issuer name as submitted
    pub company_name: String,
    /// Pricing in the base currency
    pub direct_pricing: CurrencyPricing,
    /// Pricing in every currency, canonical order
    pub currency_comparison: Vec<CurrencyPricing>,
    /// Recommendation panel
    pub recommendations: Recommendations,
    /// Cost over the life of the deal
    pub financial_impact: FinancialImpact,
}

impl PricingAnalysis {
    /// Pricing for the recommended currency.
    pub fn optimal_pricing(&self) -> Option<&CurrencyPricing> {
        self.currency_comparison
            .iter()
            .find(|p| p.currency == self.recommendations.optimal_currency)
    }
}

impl SyndicatePricingCalculator {
    /// Validates the request and produces the full analysis.
    #[instrument(
        skip(self, request),
        fields(
            company = %request.company_name,
            sector = %request.sector,
            rating = %request.rating,
            deal_size = request.deal_size_million,
        )
    )]
    pub fn generate_pricing_analysis(&self, request: &BondRequest) -> PricingResult<PricingAnalysis> {
        request.validate(self.deal_size_limits())?;

        let currency_comparison = self.price_all(request)?;

        let financial_impact = calculate_financial_impact(
            request.deal_size_million,
            request.base_currency,
            &currency_comparison,
        );

        let recommendations =
            generate_recommendations(&currency_comparison, request, self.market_data())?;

        let direct_pricing = currency_comparison
            .iter()
            .find(|p| p.currency == request.base_currency)
            .cloned()
            .ok_or_else(|| {
                SyndicateError::missing_market_data(format!(
                    "no pricing for base currency {}",
                    request.base_currency
                ))
            })?;

        info!(
            base = %request.base_currency,
            optimal = %recommendations.optimal_currency,
            all_in = %direct_pricing.all_in_cost_percent,
            "pricing analysis complete"
        );

        Ok(PricingAnalysis {
            company_name: request.company_name.clone(),
            direct_pricing,
            currency_comparison,
            recommendations,
            financial_impact,
        })
    }
}
