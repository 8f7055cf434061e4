//! Market command implementation.
//!
//! Prints the pricing tables the calculator is running on.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use syndicate_core::{Currency, Rating, Sector};
use syndicate_pricing::{MarketData, SyndicatePricingCalculator};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_output};

/// Arguments for the market command.
#[derive(Args, Debug)]
pub struct MarketArgs {
    #[command(subcommand)]
    pub command: MarketCommand,
}

/// Pricing table to show.
#[derive(Subcommand, Debug)]
pub enum MarketCommand {
    /// Government benchmark rates
    Rates,

    /// Credit spreads by sector and rating
    Spreads {
        /// Only this sector
        #[arg(long)]
        sector: Option<Sector>,

        /// Only this rating
        #[arg(long)]
        rating: Option<Rating>,
    },

    /// Market condition and deal size adjustments
    Adjustments,

    /// Cross-currency swap costs
    Swaps,
}

#[derive(Debug, Serialize, Tabled)]
struct RateRow {
    #[tabled(rename = "Currency")]
    currency: Currency,
    #[tabled(rename = "Rate (%)")]
    rate: String,
}

#[derive(Debug, Serialize, Tabled)]
struct SpreadRow {
    #[tabled(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "GBP")]
    gbp: String,
    #[tabled(rename = "EUR")]
    eur: String,
    #[tabled(rename = "USD")]
    usd: String,
}

#[derive(Debug, Serialize, Tabled)]
struct AdjustmentRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Applies To")]
    applies_to: String,
    #[tabled(rename = "Adjustment (bps)")]
    adjustment_bps: i32,
}

#[derive(Debug, Serialize, Tabled)]
struct SwapRow {
    #[tabled(rename = "From")]
    from: Currency,
    #[tabled(rename = "To")]
    to: Currency,
    #[tabled(rename = "Cost (bps)")]
    cost_bps: i32,
}

/// Execute the market command.
pub fn execute(
    args: MarketArgs,
    format: OutputFormat,
    quiet: bool,
    calculator: &SyndicatePricingCalculator,
) -> Result<()> {
    let md = calculator.market_data();
    let show_header = format == OutputFormat::Table && !quiet;

    match args.command {
        MarketCommand::Rates => {
            if show_header {
                print_header("Government Rates");
            }
            print_output(&rate_rows(md), format)?;
        }
        MarketCommand::Spreads { sector, rating } => {
            if show_header {
                print_header("Credit Spreads (bps)");
            }
            print_output(&spread_rows(md, sector, rating)?, format)?;
        }
        MarketCommand::Adjustments => {
            if show_header {
                print_header("Adjustments");
            }
            print_output(&adjustment_rows(md), format)?;
        }
        MarketCommand::Swaps => {
            if show_header {
                print_header("Swap Costs");
            }
            let rows: Vec<SwapRow> = md
                .swap_costs()
                .into_iter()
                .map(|s| SwapRow {
                    from: s.from,
                    to: s.to,
                    cost_bps: s.cost_bps,
                })
                .collect();
            print_output(&rows, format)?;
        }
    }

    Ok(())
}

fn rate_rows(md: &MarketData) -> Vec<RateRow> {
    md.government_rates()
        .iter()
        .map(|(currency, rate)| RateRow {
            currency: *currency,
            rate: format!("{:.2}", rate),
        })
        .collect()
}

fn spread_rows(
    md: &MarketData,
    sector: Option<Sector>,
    rating: Option<Rating>,
) -> Result<Vec<SpreadRow>> {
    let mut rows = Vec::new();
    for s in Sector::all().iter().filter(|s| sector.map_or(true, |x| x == **s)) {
        for r in Rating::all().iter().filter(|r| rating.map_or(true, |x| x == **r)) {
            let spreads = md.credit_spreads_for(*s, *r)?;
            let cell = |c: Currency| spreads.get(&c).map(i32::to_string).unwrap_or_default();
            rows.push(SpreadRow {
                sector: s.as_str().to_string(),
                rating: r.as_str().to_string(),
                gbp: cell(Currency::GBP),
                eur: cell(Currency::EUR),
                usd: cell(Currency::USD),
            });
        }
    }
    Ok(rows)
}

fn adjustment_rows(md: &MarketData) -> Vec<AdjustmentRow> {
    let market = md
        .market_adjustments()
        .iter()
        .map(|(condition, bps)| AdjustmentRow {
            kind: "market",
            applies_to: condition.as_str().to_string(),
            adjustment_bps: *bps,
        });
    let size = md.size_ladder().iter().map(|rung| AdjustmentRow {
        kind: "size",
        applies_to: format!("{}m", rung.deal_size_million),
        adjustment_bps: rung.adjustment_bps,
    });
    market.chain(size).collect()
}
