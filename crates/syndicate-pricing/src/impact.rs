//! Financial impact of the currency choice over the life of the deal.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use syndicate_core::Currency;

use crate::calculator::CurrencyPricing;

/// Horizon used for the multi-year cost figures.
pub const HORIZON_YEARS: u32 = 10;

/// Interest cost of the deal in one currency, in millions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyImpact {
    /// Annual coupon cost
    pub annual_cost_millions: Decimal,
    /// Cost over ten years
    pub ten_year_cost_millions: Decimal,
}

/// Savings from issuing in the cheapest currency instead of the base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsRecommendation {
    /// Cheapest currency
    pub optimal_currency: Currency,
    /// All-in difference in whole basis points, truncated
    pub savings_vs_base_bps: i64,
    /// Annual saving in millions
    pub annual_savings_millions: Decimal,
    /// Saving over ten years in millions
    pub ten_year_savings_millions: Decimal,
}

/// Per-currency costs plus the savings block when another currency beats the base.
///
/// Serializes flat: `{"GBP": {...}, "EUR": {...}, "USD": {...}, "recommendation": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialImpact {
    /// Costs keyed by currency
    #[serde(flatten)]
    pub by_currency: BTreeMap<Currency, CurrencyImpact>,
    /// Present only when the cheapest currency is not the base currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<SavingsRecommendation>,
}

/// Cheapest pricing; the first in canonical order wins a tie.
pub fn cheapest(pricings: &[CurrencyPricing]) -> Option<&CurrencyPricing> {
    pricings
        .iter()
        .min_by(|a, b| a.all_in_cost_percent.cmp(&b.all_in_cost_percent))
}

/// Computes per-currency costs and the savings versus the base currency.
pub fn calculate_financial_impact(
    deal_size_million: u32,
    base_currency: Currency,
    pricings: &[CurrencyPricing],
) -> FinancialImpact {
    let size = Decimal::from(deal_size_million);
    let years = Decimal::from(HORIZON_YEARS);

    let by_currency = pricings
        .iter()
        .map(|p| {
            let annual = size * p.all_in_cost_percent / Decimal::ONE_HUNDRED;
            (
                p.currency,
                CurrencyImpact {
                    annual_cost_millions: annual.round_dp(1),
                    ten_year_cost_millions: (annual * years).round_dp(1),
                },
            )
        })
        .collect();

    let base = pricings.iter().find(|p| p.currency == base_currency);
    let recommendation = match (base, cheapest(pricings)) {
        (Some(base), Some(best)) if best.currency != base.currency => {
            let diff = base.all_in_cost_percent - best.all_in_cost_percent;
            let annual_savings = size * diff / Decimal::ONE_HUNDRED;
            Some(SavingsRecommendation {
                optimal_currency: best.currency,
                savings_vs_base_bps: (diff * Decimal::ONE_HUNDRED)
                    .trunc()
                    .to_i64()
                    .unwrap_or_default(),
                annual_savings_millions: annual_savings.round_dp(1),
                ten_year_savings_millions: (annual_savings * years).round_dp(1),
            })
        }
        _ => None,
    };

    FinancialImpact {
        by_currency,
        recommendation,
    }
}
