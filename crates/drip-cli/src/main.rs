//! Dripfolio CLI - Command-line interface for dividend portfolio analytics.
//!
//! # Usage
//!
//! ```bash
//! # Headline figures
//! drip --holdings portfolio.json summary
//!
//! # Dividend calendar as of a given day
//! drip --holdings portfolio.json --today 2025-01-06 calendar --view windows
//!
//! # 30-year projection with 250/month
//! drip --holdings portfolio.json projection --monthly 250 --years 30
//!
//! # Import a Trading 212 export against the stock catalog
//! drip import export.csv --catalog stocks.json --output portfolio.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let default_filter = if cli.quiet { "error" } else { "warn,drip=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = Context::from_cli(&cli)?;
    tracing::debug!(today = %ctx.today, format = ?ctx.format, "starting");

    // Execute command
    match cli.command {
        Commands::Summary => commands::summary::execute(&ctx)?,
        Commands::Sectors => commands::sectors::execute(&ctx)?,
        Commands::Calendar(args) => commands::calendar::execute(args, &ctx)?,
        Commands::Projection(args) => commands::projection::execute(args, &ctx)?,
        Commands::Report => commands::report::execute(&ctx)?,
        Commands::Import(args) => commands::import::execute(args, &ctx)?,
    }

    Ok(())
}
