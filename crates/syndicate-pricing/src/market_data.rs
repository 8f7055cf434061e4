//! Static market data tables.
//!
//! The tables hold:
//! - Government benchmark rates per currency
//! - Credit spreads per sector, rating and currency
//! - Calendar adjustments per market condition
//! - The deal-size premium ladder
//! - Swap costs between currency pairs
//!
//! The defaults are the desk's standing levels. A replacement set can be
//! loaded from TOML; [`MarketData::validate`] rejects tables with gaps.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use syndicate_core::{Currency, MarketCondition, Rating, Sector, SyndicateError, SyndicateResult};

use crate::error::{PricingError, PricingResult};

/// One rung of the deal-size premium ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRung {
    /// Deal size in millions
    pub deal_size_million: u32,
    /// Premium in basis points
    pub adjustment_bps: i32,
}

/// Cost of swapping proceeds from one currency into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapCost {
    /// Currency the bond is issued in
    pub from: Currency,
    /// Currency the proceeds are swapped into
    pub to: Currency,
    /// Cost in basis points
    pub cost_bps: i32,
}

/// Lookup tables used by the calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketData {
    government_rates: BTreeMap<Currency, Decimal>,
    credit_spreads: BTreeMap<(Sector, Rating, Currency), i32>,
    market_adjustments: BTreeMap<MarketCondition, i32>,
    size_ladder: Vec<SizeRung>,
    swap_costs: BTreeMap<(Currency, Currency), i32>,
}

impl Default for MarketData {
    fn default() -> Self {
        use Currency::{EUR, GBP, USD};
        use Rating::{A, AA, AAA, BBB};
        use Sector::{Bank, Industrial, Utility};

        let government_rates = BTreeMap::from([
            (GBP, Decimal::new(40, 1)),
            (EUR, Decimal::new(25, 1)),
            (USD, Decimal::new(45, 1)),
        ]);

        // GBP / EUR / USD
        let grid: [(Sector, Rating, [i32; 3]); 12] = [
            (Utility, AAA, [80, 85, 75]),
            (Utility, AA, [100, 105, 95]),
            (Utility, A, [120, 125, 115]),
            (Utility, BBB, [180, 190, 170]),
            (Bank, AAA, [60, 70, 55]),
            (Bank, AA, [80, 90, 75]),
            (Bank, A, [100, 110, 95]),
            (Bank, BBB, [150, 165, 140]),
            (Industrial, AAA, [100, 110, 95]),
            (Industrial, AA, [130, 140, 125]),
            (Industrial, A, [160, 175, 150]),
            (Industrial, BBB, [220, 240, 210]),
        ];
        let mut credit_spreads = BTreeMap::new();
        for (sector, rating, row) in grid {
            for (currency, bps) in [GBP, EUR, USD].into_iter().zip(row) {
                credit_spreads.insert((sector, rating, currency), bps);
            }
        }

        let market_adjustments = BTreeMap::from([
            (MarketCondition::QuietWeek, -10),
            (MarketCondition::BusyWeek, 15),
            (MarketCondition::CentralBankMeeting, 20),
            (MarketCondition::Normal, 0),
        ]);

        let size_ladder = [(100, 0), (250, 5), (500, 10), (750, 15), (1000, 20)]
            .into_iter()
            .map(|(deal_size_million, adjustment_bps)| SizeRung {
                deal_size_million,
                adjustment_bps,
            })
            .collect();

        let swap_costs = BTreeMap::from([
            ((EUR, GBP), 80),
            ((USD, GBP), 30),
            ((GBP, EUR), 75),
            ((USD, EUR), 45),
            ((GBP, USD), 35),
            ((EUR, USD), 50),
        ]);

        Self {
            government_rates,
            credit_spreads,
            market_adjustments,
            size_ladder,
            swap_costs,
        }
    }
}

impl MarketData {
    /// Government benchmark rate in percent.
    pub fn government_rate(&self, currency: Currency) -> SyndicateResult<Decimal> {
        self.government_rates
            .get(&currency)
            .copied()
            .ok_or_else(|| SyndicateError::missing_market_data(format!("government rate {currency}")))
    }

    /// Credit spread in basis points.
    pub fn credit_spread(
        &self,
        sector: Sector,
        rating: Rating,
        currency: Currency,
    ) -> SyndicateResult<i32> {
        self.credit_spreads
            .get(&(sector, rating, currency))
            .copied()
            .ok_or_else(|| {
                SyndicateError::missing_market_data(format!(
                    "credit spread {sector}/{rating}/{currency}"
                ))
            })
    }

    /// Spreads for every currency at a sector/rating cell, in canonical order.
    pub fn credit_spreads_for(
        &self,
        sector: Sector,
        rating: Rating,
    ) -> SyndicateResult<BTreeMap<Currency, i32>> {
        Currency::all()
            .iter()
            .map(|&currency| Ok((currency, self.credit_spread(sector, rating, currency)?)))
            .collect()
    }

    /// Calendar adjustment in basis points.
    pub fn market_adjustment(&self, condition: MarketCondition) -> SyndicateResult<i32> {
        self.market_adjustments
            .get(&condition)
            .copied()
            .ok_or_else(|| {
                SyndicateError::missing_market_data(format!("market adjustment {condition}"))
            })
    }

    /// Size premium for the ladder rung nearest to `deal_size_million`.
    ///
    /// On a tie the smaller rung wins.
    pub fn size_adjustment(&self, deal_size_million: u32) -> SyndicateResult<i32> {
        let mut best: Option<(u32, &SizeRung)> = None;
        for rung in &self.size_ladder {
            let distance = rung.deal_size_million.abs_diff(deal_size_million);
            if best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, rung));
            }
        }
        best.map(|(_, rung)| rung.adjustment_bps)
            .ok_or_else(|| SyndicateError::missing_market_data("size ladder is empty"))
    }

    /// Swap cost from the issue currency into the base currency, in basis points.
    ///
    /// Zero for the same currency or an unquoted pair.
    pub fn swap_cost(&self, from: Currency, to: Currency) -> i32 {
        if from == to {
            return 0;
        }
        self.swap_costs.get(&(from, to)).copied().unwrap_or(0)
    }

    /// Government rates keyed by currency.
    pub fn government_rates(&self) -> &BTreeMap<Currency, Decimal> {
        &self.government_rates
    }

    /// Calendar adjustments keyed by condition.
    pub fn market_adjustments(&self) -> &BTreeMap<MarketCondition, i32> {
        &self.market_adjustments
    }

    /// The size ladder, ascending by deal size.
    pub fn size_ladder(&self) -> &[SizeRung] {
        &self.size_ladder
    }

    /// Every quoted swap pair.
    pub fn swap_costs(&self) -> Vec<SwapCost> {
        self.swap_costs
            .iter()
            .map(|(&(from, to), &cost_bps)| SwapCost { from, to, cost_bps })
            .collect()
    }

    /// Checks that every lookup the calculator can make will succeed.
    pub fn validate(&self) -> SyndicateResult<()> {
        for &currency in Currency::all() {
            self.government_rate(currency)?;
            for &sector in Sector::all() {
                for &rating in Rating::all() {
                    self.credit_spread(sector, rating, currency)?;
                }
            }
        }
        for &condition in MarketCondition::all() {
            self.market_adjustment(condition)?;
        }
        if self.size_ladder.is_empty() {
            return Err(SyndicateError::missing_market_data("size ladder is empty"));
        }
        Ok(())
    }

    /// Parses and validates a TOML market data document.
    pub fn from_toml_str(content: &str) -> PricingResult<Self> {
        let file: MarketDataFile = toml::from_str(content)?;
        let data = Self::try_from(file)?;
        data.validate()?;
        Ok(data)
    }

    /// Loads and validates a TOML market data file.
    pub fn from_file(path: impl AsRef<Path>) -> PricingResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PricingError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded market data file");
        Self::from_toml_str(&content)
    }
}

/// On-disk shape of [`MarketData`]. Table keys are the wire values of the
/// enums (`GBP`, `utility`, `AA`, `quiet_week`).
#[derive(Debug, Deserialize)]
struct MarketDataFile {
    government_rates: BTreeMap<String, Decimal>,
    credit_spreads: BTreeMap<String, BTreeMap<String, BTreeMap<String, i32>>>,
    market_adjustments: BTreeMap<String, i32>,
    size_ladder: Vec<SizeRung>,
    #[serde(default)]
    swap_costs: Vec<SwapCost>,
}

impl TryFrom<MarketDataFile> for MarketData {
    type Error = SyndicateError;

    fn try_from(file: MarketDataFile) -> Result<Self, Self::Error> {
        let government_rates = file
            .government_rates
            .into_iter()
            .map(|(code, rate)| Ok((code.parse::<Currency>()?, rate)))
            .collect::<SyndicateResult<_>>()?;

        let mut credit_spreads = BTreeMap::new();
        for (sector, ratings) in file.credit_spreads {
            let sector: Sector = sector.parse()?;
            for (rating, currencies) in ratings {
                let rating: Rating = rating.parse()?;
                for (currency, bps) in currencies {
                    credit_spreads.insert((sector, rating, currency.parse::<Currency>()?), bps);
                }
            }
        }

        let market_adjustments = file
            .market_adjustments
            .into_iter()
            .map(|(condition, bps)| Ok((condition.parse::<MarketCondition>()?, bps)))
            .collect::<SyndicateResult<_>>()?;

        let mut size_ladder = file.size_ladder;
        size_ladder.sort_by_key(|rung| rung.deal_size_million);

        let swap_costs = file
            .swap_costs
            .into_iter()
            .map(|swap| ((swap.from, swap.to), swap.cost_bps))
            .collect();

        Ok(Self {
            government_rates,
            credit_spreads,
            market_adjustments,
            size_ladder,
            swap_costs,
        })
    }
}
