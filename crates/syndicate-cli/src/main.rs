//! Syndicate CLI - new-issue pricing from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Price the default form request
//! syndicate price
//!
//! # Price a large bank deal during a central bank week, as JSON
//! syndicate --format json price --sector bank --rating BBB --deal-size 1000 \
//!     --market-condition central_bank_meeting
//!
//! # Show credit spreads for one sector
//! syndicate market spreads --sector industrial
//!
//! # Run against a custom set of tables
//! syndicate --market-data config/market_data.toml price
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr and only when asked for
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let format = cli.format;
    let quiet = cli.quiet;

    // Execute command
    match cli.command {
        Commands::Price(args) => {
            let calculator = commands::load_calculator(cli.market_data.as_deref())?;
            commands::price::execute(args, format, quiet, &calculator)?
        }
        Commands::Market(args) => {
            let calculator = commands::load_calculator(cli.market_data.as_deref())?;
            commands::market::execute(args, format, quiet, &calculator)?
        }
        Commands::Options => commands::options::execute(format, quiet)?,
    }

    Ok(())
}
