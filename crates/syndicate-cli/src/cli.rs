//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{MarketArgs, PriceArgs};

/// Syndicate - new-issue pricing for the DCM desk
#[derive(Parser)]
#[command(name = "syndicate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TOML file replacing the built-in pricing tables
    #[arg(long, global = true, env = "SYNDICATE_MARKET_DATA")]
    pub market_data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price a new issue across GBP, EUR and USD
    Price(PriceArgs),

    /// Show the pricing tables
    Market(MarketArgs),

    /// List accepted sectors, ratings, currencies and market conditions
    Options,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
