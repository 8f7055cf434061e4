//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Width of the longest bar in [`bar_chart`].
pub const CHART_WIDTH: usize = 40;

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> CliResult<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output (first value only).
fn print_minimal<T: Serialize>(data: &[T]) -> CliResult<()> {
    if let Some(first) = data.first() {
        println!("{}", serde_json::to_string(first)?);
    }
    Ok(())
}

/// Formats an amount in millions with a currency symbol, e.g. `£26.5m`.
pub fn format_millions(symbol: &str, value: Decimal) -> String {
    format!("{}{:.1}m", symbol, value.round_dp(1))
}

/// Formats a percentage to three places, e.g. `5.300%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.3}%", value.round_dp(3))
}

/// Horizontal bar chart, one line per entry, bars scaled to the largest value.
///
/// The entry named by `highlight` is drawn in green.
pub fn bar_chart(entries: &[(String, Decimal)], highlight: Option<&str>) -> Vec<String> {
    let max = entries
        .iter()
        .map(|(_, v)| *v)
        .max()
        .unwrap_or(Decimal::ZERO);

    entries
        .iter()
        .map(|(label, value)| {
            let len = bar_length(*value, max);
            let bar = "█".repeat(len);
            let bar = if highlight == Some(label.as_str()) {
                bar.green().to_string()
            } else {
                bar.cyan().to_string()
            };
            format!(
                "{:<4}│{}{} {}",
                label,
                bar,
                " ".repeat(CHART_WIDTH - len),
                format_percent(*value)
            )
        })
        .collect()
}

fn bar_length(value: Decimal, max: Decimal) -> usize {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return 0;
    }
    let scaled = (value / max * Decimal::from(CHART_WIDTH)).round();
    scaled.to_usize().unwrap_or(0).min(CHART_WIDTH)
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
