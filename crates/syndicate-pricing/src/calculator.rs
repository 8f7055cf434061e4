//! All-in cost calculation per currency.
//!
//! ```text
//! spread_total = credit + size premium + market adjustment   (bps)
//! base_cost    = government rate + spread_total / 100        (%)
//! all_in       = base_cost + swap cost / 100                 (%)
//! ```
//!
//! The swap cost applies only when the issue currency differs from the
//! base currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use syndicate_core::{Currency, Spread, SpreadComponent};

use crate::error::PricingResult;
use crate::market_data::MarketData;
use crate::request::{BondRequest, DealSizeLimits};

/// Decimal places kept on `all_in_cost_percent`.
const ALL_IN_DP: u32 = 3;

/// Human-readable breakdown of an all-in cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// e.g. `"4.0%"`
    pub government_rate: String,
    /// e.g. `"+120 bps"`
    pub credit_spread: String,
    /// e.g. `"+10 bps"`
    pub size_premium: String,
    /// e.g. `"-10 bps"` or `"+0 bps"`
    pub market_adjustment: String,
    /// e.g. `"+80 bps"` or `"0 bps"`
    pub swap_cost: String,
    /// e.g. `"5.30%"`
    pub total: String,
}

/// Pricing of the deal in one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPricing {
    /// Issue currency
    pub currency: Currency,
    /// Government benchmark rate, percent
    pub base_rate: Decimal,
    /// Credit spread, bps
    pub credit_spread_bps: i32,
    /// Size premium, bps
    pub size_adjustment_bps: i32,
    /// Calendar adjustment, bps
    pub market_adjustment_bps: i32,
    /// Swap cost back into the base currency, bps
    pub swap_cost_bps: i32,
    /// All-in cost, percent, rounded to three places
    pub all_in_cost_percent: Decimal,
    /// Display strings
    pub breakdown: PricingBreakdown,
}

/// The syndicate desk's pricing calculator.
///
/// Build one with [`SyndicatePricingCalculatorBuilder`](crate::SyndicatePricingCalculatorBuilder)
/// or take the [`Default`], which uses the standing tables.
#[derive(Debug, Clone, Default)]
pub struct SyndicatePricingCalculator {
    market_data: MarketData,
    limits: DealSizeLimits,
}

impl SyndicatePricingCalculator {
    pub(crate) fn new(market_data: MarketData, limits: DealSizeLimits) -> Self {
        Self {
            market_data,
            limits,
        }
    }

    /// The tables this calculator prices from.
    pub fn market_data(&self) -> &MarketData {
        &self.market_data
    }

    /// Accepted deal-size range.
    pub fn deal_size_limits(&self) -> &DealSizeLimits {
        &self.limits
    }

    /// Prices the request in `currency`.
    pub fn all_in_cost(
        &self,
        currency: Currency,
        request: &BondRequest,
    ) -> PricingResult<CurrencyPricing> {
        let md = &self.market_data;

        let base_rate = md.government_rate(currency)?;
        let credit = Spread::from_bps_i32(
            md.credit_spread(request.sector, request.rating, currency)?,
            SpreadComponent::Credit,
        );
        let size = Spread::from_bps_i32(
            md.size_adjustment(request.deal_size_million)?,
            SpreadComponent::SizePremium,
        );
        let market = Spread::from_bps_i32(
            md.market_adjustment(request.market_condition)?,
            SpreadComponent::MarketAdjustment,
        );

        let spread_total = Spread::total_bps(&[credit, size, market]);
        let base_cost = base_rate + spread_total / Decimal::ONE_HUNDRED;

        let swap_bps = if currency == request.base_currency {
            0
        } else {
            md.swap_cost(currency, request.base_currency)
        };
        let swap = Spread::from_bps_i32(swap_bps, SpreadComponent::SwapCost);

        let all_in = base_cost + swap.as_percentage();

        debug!(
            %currency,
            %base_rate,
            spread_bps = %spread_total,
            swap_bps,
            %all_in,
            "priced currency"
        );

        Ok(CurrencyPricing {
            currency,
            base_rate,
            credit_spread_bps: whole_bps_i32(credit),
            size_adjustment_bps: whole_bps_i32(size),
            market_adjustment_bps: whole_bps_i32(market),
            swap_cost_bps: swap_bps,
            all_in_cost_percent: all_in.round_dp(ALL_IN_DP),
            breakdown: PricingBreakdown {
                government_rate: format!("{:.1}%", base_rate.round_dp(1)),
                credit_spread: credit.signed_label(),
                size_premium: size.signed_label(),
                market_adjustment: market.signed_label(),
                swap_cost: swap_label(&swap),
                total: format!("{:.2}%", all_in.round_dp(2)),
            },
        })
    }

    /// Prices the request in every supported currency, in canonical order.
    pub fn price_all(&self, request: &BondRequest) -> PricingResult<Vec<CurrencyPricing>> {
        Currency::all()
            .iter()
            .map(|&currency| self.all_in_cost(currency, request))
            .collect()
    }
}

fn whole_bps_i32(spread: Spread) -> i32 {
    i32::try_from(spread.whole_bps()).unwrap_or_default()
}

/// A zero swap cost reads `"0 bps"`; anything else carries its sign.
fn swap_label(swap: &Spread) -> String {
    if swap.is_zero() {
        "0 bps".to_string()
    } else {
        swap.signed_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use syndicate_core::{MarketCondition, Rating, Sector};

    fn calculator() -> SyndicatePricingCalculator {
        SyndicatePricingCalculator::default()
    }

    #[test]
    fn test_direct_pricing_default_request() {
        let pricing = calculator()
            .all_in_cost(Currency::GBP, &BondRequest::default())
            .unwrap();

        assert_eq!(pricing.base_rate, dec!(4.0));
        assert_eq!(pricing.credit_spread_bps, 120);
        assert_eq!(pricing.size_adjustment_bps, 10);
        assert_eq!(pricing.market_adjustment_bps, 0);
        assert_eq!(pricing.swap_cost_bps, 0);
        assert_eq!(pricing.all_in_cost_percent, dec!(5.3));

        let b = &pricing.breakdown;
        assert_eq!(b.government_rate, "4.0%");
        assert_eq!(b.credit_spread, "+120 bps");
        assert_eq!(b.size_premium, "+10 bps");
        assert_eq!(b.market_adjustment, "+0 bps");
        assert_eq!(b.swap_cost, "0 bps");
        assert_eq!(b.total, "5.30%");
    }

    #[test]
    fn test_foreign_currency_carries_swap_cost() {
        let calc = calculator();
        let request = BondRequest::default();

        let eur = calc.all_in_cost(Currency::EUR, &request).unwrap();
        // 2.5 + (125 + 10) / 100 + 0.80
        assert_eq!(eur.all_in_cost_percent, dec!(4.65));
        assert_eq!(eur.swap_cost_bps, 80);
        assert_eq!(eur.breakdown.swap_cost, "+80 bps");
        assert_eq!(eur.breakdown.total, "4.65%");

        let usd = calc.all_in_cost(Currency::USD, &request).unwrap();
        // 4.5 + (115 + 10) / 100 + 0.30
        assert_eq!(usd.all_in_cost_percent, dec!(6.05));
        assert_eq!(usd.breakdown.government_rate, "4.5%");
    }

    #[test]
    fn test_quiet_week_reduces_cost() {
        let request = BondRequest {
            market_condition: MarketCondition::QuietWeek,
            ..BondRequest::default()
        };
        let pricing = calculator().all_in_cost(Currency::GBP, &request).unwrap();
        assert_eq!(pricing.market_adjustment_bps, -10);
        assert_eq!(pricing.breakdown.market_adjustment, "-10 bps");
        assert_eq!(pricing.all_in_cost_percent, dec!(5.2));
    }

    #[test]
    fn test_euro_base_currency() {
        let request = BondRequest {
            sector: Sector::Bank,
            rating: Rating::BBB,
            deal_size_million: 1000,
            market_condition: MarketCondition::CentralBankMeeting,
            base_currency: Currency::EUR,
            ..BondRequest::default()
        };
        let calc = calculator();

        let gbp = calc.all_in_cost(Currency::GBP, &request).unwrap();
        // 4.0 + (150 + 20 + 20) / 100 + 0.75
        assert_eq!(gbp.all_in_cost_percent, dec!(6.65));
        assert_eq!(gbp.swap_cost_bps, 75);

        let eur = calc.all_in_cost(Currency::EUR, &request).unwrap();
        // 2.5 + (165 + 20 + 20) / 100
        assert_eq!(eur.all_in_cost_percent, dec!(4.55));
        assert_eq!(eur.swap_cost_bps, 0);
    }

    #[test]
    fn test_price_all_canonical_order() {
        let results = calculator().price_all(&BondRequest::default()).unwrap();
        let currencies: Vec<_> = results.iter().map(|r| r.currency).collect();
        assert_eq!(currencies, vec![Currency::GBP, Currency::EUR, Currency::USD]);
    }

    #[test]
    fn test_serialized_shape() {
        let pricing = calculator()
            .all_in_cost(Currency::GBP, &BondRequest::default())
            .unwrap();
        let json = serde_json::to_value(&pricing).unwrap();
        assert_eq!(json["currency"], "GBP");
        assert_eq!(json["credit_spread_bps"], 120);
        assert_eq!(json["breakdown"]["total"], "5.30%");
        assert!(json["all_in_cost_percent"].is_number());
    }

    fn arb_request() -> impl Strategy<Value = BondRequest> {
        (
            prop::sample::select(Sector::all().to_vec()),
            prop::sample::select(Rating::all().to_vec()),
            100u32..=1000,
            prop::sample::select(MarketCondition::all().to_vec()),
            prop::sample::select(Currency::all().to_vec()),
        )
            .prop_map(|(sector, rating, deal_size_million, market_condition, base_currency)| {
                BondRequest {
                    sector,
                    rating,
                    deal_size_million,
                    market_condition,
                    base_currency,
                    ..BondRequest::default()
                }
            })
    }

    proptest! {
        #[test]
        fn prop_all_in_is_sum_of_parts(request in arb_request()) {
            for pricing in calculator().price_all(&request).unwrap() {
                let bps = pricing.credit_spread_bps
                    + pricing.size_adjustment_bps
                    + pricing.market_adjustment_bps
                    + pricing.swap_cost_bps;
                let expected = pricing.base_rate + Decimal::from(bps) / dec!(100);
                prop_assert_eq!(pricing.all_in_cost_percent, expected.round_dp(3));
            }
        }

        #[test]
        fn prop_swap_cost_only_off_base(request in arb_request()) {
            for pricing in calculator().price_all(&request).unwrap() {
                if pricing.currency == request.base_currency {
                    prop_assert_eq!(pricing.swap_cost_bps, 0);
                } else {
                    prop_assert!(pricing.swap_cost_bps > 0);
                }
            }
        }
    }
}
