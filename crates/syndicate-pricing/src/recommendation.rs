//! Desk recommendations: currency, timing and alternative structures.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use syndicate_core::{Currency, MarketCondition};

use crate::calculator::CurrencyPricing;
use crate::error::PricingResult;
use crate::impact::cheapest;
use crate::market_data::MarketData;
use crate::request::BondRequest;

/// Deals at or above this size (millions) get a split suggestion.
pub const SPLIT_THRESHOLD_MILLION: u32 = 750;

/// Recommendation panel of the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Currency with the lowest all-in cost
    pub optimal_currency: Currency,
    /// One-line reason
    pub rationale: String,
    /// Advice on the issuance window
    pub market_timing: String,
    /// Other structures worth considering
    pub alternative_strategies: Vec<String>,
    /// Currency the issuer asked for
    pub preferred_currency: Currency,
    /// How much more the preferred currency costs than the optimal one, whole bps
    pub preferred_vs_optimal_bps: i64,
}

/// Timing advice for the issuance window.
pub fn market_timing_advice(
    condition: MarketCondition,
    market_data: &MarketData,
) -> PricingResult<String> {
    let bps = market_data.market_adjustment(condition)?.unsigned_abs();
    Ok(match condition {
        MarketCondition::QuietWeek => {
            format!("Excellent timing - light issuance calendar provides {bps} bps benefit")
        }
        MarketCondition::BusyWeek => {
            format!("Consider delaying - heavy issuance calendar adding {bps} bps premium")
        }
        MarketCondition::CentralBankMeeting => {
            "High uncertainty - consider waiting until after central bank decision".to_string()
        }
        MarketCondition::Normal => "Neutral market conditions - proceed when ready".to_string(),
    })
}

/// Builds the recommendation panel from the priced currencies.
pub fn generate_recommendations(
    pricings: &[CurrencyPricing],
    request: &BondRequest,
    market_data: &MarketData,
) -> PricingResult<Recommendations> {
    let best = cheapest(pricings).ok_or_else(|| {
        syndicate_core::SyndicateError::missing_market_data("no currencies were priced")
    })?;

    let mut alternative_strategies = Vec::new();

    if request.market_condition == MarketCondition::CentralBankMeeting {
        let premium = market_data.market_adjustment(MarketCondition::CentralBankMeeting)?;
        alternative_strategies.push(format!(
            "Consider waiting until after central bank meeting to avoid {premium} bps uncertainty premium"
        ));
    }

    if request.deal_size_million >= SPLIT_THRESHOLD_MILLION {
        alternative_strategies.push(format!(
            "Consider splitting into 2x {}{}m deals to improve liquidity and reduce size premium",
            request.base_currency.symbol(),
            request.deal_size_million / 2
        ));
    }

    let preferred_vs_optimal_bps = pricings
        .iter()
        .find(|p| p.currency == request.preferred_currency)
        .map(|p| {
            ((p.all_in_cost_percent - best.all_in_cost_percent) * Decimal::ONE_HUNDRED)
                .trunc()
                .to_i64()
                .unwrap_or_default()
        })
        .unwrap_or_default();

    Ok(Recommendations {
        optimal_currency: best.currency,
        rationale: format!("Issue in {} for lowest all-in cost", best.currency),
        market_timing: market_timing_advice(request.market_condition, market_data)?,
        alternative_strategies,
        preferred_currency: request.preferred_currency,
        preferred_vs_optimal_bps,
    })
}
