//! Price command implementation.
//!
//! Prices a new issue in every currency and prints the desk's analysis.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use syndicate_core::{Currency, MarketCondition, Rating, Sector};
use syndicate_pricing::{
    BondRequest, CurrencyPricing, PricingAnalysis, SyndicatePricingCalculator,
};

use crate::cli::OutputFormat;
use crate::output::{
    bar_chart, format_millions, format_percent, print_header, print_info, print_output,
    print_success, KeyValue,
};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Issuer name
    #[arg(short, long, default_value = "ABC Corporation")]
    pub company: String,

    /// Issuer sector (utility, bank, industrial)
    #[arg(short, long, default_value = "utility")]
    pub sector: Sector,

    /// Credit rating (AAA, AA, A, BBB)
    #[arg(short, long, default_value = "A")]
    pub rating: Rating,

    /// Deal size in millions
    #[arg(short, long, default_value_t = 500)]
    pub deal_size: u32,

    /// Market condition (quiet_week, normal, busy_week, central_bank_meeting)
    #[arg(short, long, default_value = "normal")]
    pub market_condition: MarketCondition,

    /// Issuer's funding currency; swap costs convert into it
    #[arg(long, default_value = "GBP")]
    pub base_currency: Currency,

    /// Currency the issuer would like to print in
    #[arg(long, default_value = "GBP")]
    pub preferred_currency: Currency,
}

impl PriceArgs {
    fn to_request(&self) -> BondRequest {
        BondRequest {
            company_name: self.company.clone(),
            sector: self.sector,
            rating: self.rating,
            deal_size_million: self.deal_size,
            preferred_currency: self.preferred_currency,
            market_condition: self.market_condition,
            base_currency: self.base_currency,
        }
    }
}

/// One line of the currency comparison.
#[derive(Debug, Serialize, Tabled)]
pub struct ComparisonRow {
    #[tabled(rename = "Currency")]
    pub currency: Currency,
    #[tabled(rename = "Govt Rate")]
    pub government_rate: String,
    #[tabled(rename = "Credit (bps)")]
    pub credit_spread_bps: i32,
    #[tabled(rename = "Size (bps)")]
    pub size_adjustment_bps: i32,
    #[tabled(rename = "Market (bps)")]
    pub market_adjustment_bps: i32,
    #[tabled(rename = "Swap (bps)")]
    pub swap_cost_bps: i32,
    #[tabled(rename = "All-in")]
    pub all_in_cost: String,
}

impl From<&CurrencyPricing> for ComparisonRow {
    fn from(p: &CurrencyPricing) -> Self {
        Self {
            currency: p.currency,
            government_rate: p.breakdown.government_rate.clone(),
            credit_spread_bps: p.credit_spread_bps,
            size_adjustment_bps: p.size_adjustment_bps,
            market_adjustment_bps: p.market_adjustment_bps,
            swap_cost_bps: p.swap_cost_bps,
            all_in_cost: format_percent(p.all_in_cost_percent),
        }
    }
}

/// Interest cost in one currency.
#[derive(Debug, Serialize, Tabled)]
struct ImpactRow {
    #[tabled(rename = "Currency")]
    currency: Currency,
    #[tabled(rename = "Annual Cost")]
    annual: String,
    #[tabled(rename = "10-Year Cost")]
    ten_year: String,
}

/// Execute the price command.
pub fn execute(
    args: PriceArgs,
    format: OutputFormat,
    quiet: bool,
    calculator: &SyndicatePricingCalculator,
) -> Result<()> {
    let analysis = calculator.generate_pricing_analysis(&args.to_request())?;

    match format {
        OutputFormat::Table => print_analysis(&analysis, quiet)?,
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        OutputFormat::Csv => {
            let rows: Vec<ComparisonRow> = analysis
                .currency_comparison
                .iter()
                .map(ComparisonRow::from)
                .collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            if let Some(optimal) = analysis.optimal_pricing() {
                println!(
                    "{} {}%",
                    optimal.currency,
                    optimal.all_in_cost_percent.normalize()
                );
            }
        }
    }

    Ok(())
}

fn print_analysis(analysis: &PricingAnalysis, quiet: bool) -> Result<()> {
    let direct = &analysis.direct_pricing;
    let breakdown = &direct.breakdown;

    if !quiet {
        print_header(&format!(
            "{}: direct pricing in {}",
            analysis.company_name, direct.currency
        ));
    }
    let rows = vec![
        KeyValue::new("Government Rate", &breakdown.government_rate),
        KeyValue::new("Credit Spread", &breakdown.credit_spread),
        KeyValue::new("Size Premium", &breakdown.size_premium),
        KeyValue::new("Market Adjustment", &breakdown.market_adjustment),
        KeyValue::new("Swap Cost", &breakdown.swap_cost),
        KeyValue::new("All-in Cost", &breakdown.total),
    ];
    print_output(&rows, OutputFormat::Table)?;

    if !quiet {
        print_header("Currency Comparison");
    }
    let rows: Vec<ComparisonRow> = analysis
        .currency_comparison
        .iter()
        .map(ComparisonRow::from)
        .collect();
    print_output(&rows, OutputFormat::Table)?;

    let optimal = analysis.recommendations.optimal_currency;
    let entries: Vec<_> = analysis
        .currency_comparison
        .iter()
        .map(|p| (p.currency.to_string(), p.all_in_cost_percent))
        .collect();
    for line in bar_chart(&entries, Some(optimal.code())) {
        println!("{}", line);
    }

    if !quiet {
        print_header("Financial Impact");
    }
    // Deal size is quoted in the base currency, so every cost is too
    let symbol = direct.currency.symbol();
    let impact = &analysis.financial_impact;
    let rows: Vec<ImpactRow> = impact
        .by_currency
        .iter()
        .map(|(currency, cost)| ImpactRow {
            currency: *currency,
            annual: format_millions(symbol, cost.annual_cost_millions),
            ten_year: format_millions(symbol, cost.ten_year_cost_millions),
        })
        .collect();
    print_output(&rows, OutputFormat::Table)?;

    if let Some(savings) = &impact.recommendation {
        print_success(&format!(
            "Issuing in {} instead of {} saves {} bps: {} a year, {} over ten years",
            savings.optimal_currency,
            direct.currency,
            savings.savings_vs_base_bps,
            format_millions(symbol, savings.annual_savings_millions),
            format_millions(symbol, savings.ten_year_savings_millions),
        ));
    }

    if !quiet {
        print_header("Recommendations");
    }
    let recs = &analysis.recommendations;
    let mut rows = vec![
        KeyValue::new("Optimal Currency", recs.optimal_currency.code()),
        KeyValue::new("Rationale", &recs.rationale),
        KeyValue::new("Market Timing", &recs.market_timing),
    ];
    if recs.preferred_currency != recs.optimal_currency {
        rows.push(KeyValue::new(
            format!("{} vs Optimal", recs.preferred_currency),
            format!("+{} bps", recs.preferred_vs_optimal_bps),
        ));
    }
    print_output(&rows, OutputFormat::Table)?;

    for strategy in &recs.alternative_strategies {
        print_info(strategy);
    }

    Ok(())
}
