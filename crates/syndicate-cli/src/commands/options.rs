//! Options command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use syndicate_core::{Currency, MarketCondition, Rating, Sector};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_output};

/// An accepted input value.
#[derive(Debug, Serialize, Tabled)]
pub struct OptionRow {
    #[tabled(rename = "Field")]
    pub field: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Label")]
    pub label: String,
}

/// Every value the price command accepts, in form order.
pub fn option_rows() -> Vec<OptionRow> {
    let sectors = Sector::all().iter().map(|s| OptionRow {
        field: "sector",
        value: s.as_str().to_string(),
        label: s.label().to_string(),
    });
    let ratings = Rating::all().iter().map(|r| OptionRow {
        field: "rating",
        value: r.as_str().to_string(),
        label: r.as_str().to_string(),
    });
    let currencies = Currency::all().iter().map(|c| OptionRow {
        field: "currency",
        value: c.code().to_string(),
        label: c.name().to_string(),
    });
    let conditions = MarketCondition::all().iter().map(|m| OptionRow {
        field: "market_condition",
        value: m.as_str().to_string(),
        label: m.label(),
    });

    sectors
        .chain(ratings)
        .chain(currencies)
        .chain(conditions)
        .collect()
}

/// Execute the options command.
pub fn execute(format: OutputFormat, quiet: bool) -> Result<()> {
    if format == OutputFormat::Table && !quiet {
        print_header("Accepted Values");
    }
    print_output(&option_rows(), format)?;
    Ok(())
}
