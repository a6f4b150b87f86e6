//! Import command implementation.
//!
//! Reads a Trading 212 CSV export and adds the matched holdings to a
//! portfolio snapshot. Stocks already held are left untouched.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use drip_ext_file::{HoldingRecord, PortfolioSnapshot};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{
    print_csv, print_header, print_json, print_success, print_table, print_warning, KeyValue,
};

/// Arguments for the import command.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Trading 212 CSV export
    pub file: PathBuf,

    /// Snapshot whose stocks form the catalog. Defaults to the holdings file.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Write the catalog, its holdings and the imported holdings to this snapshot
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize, Tabled)]
struct HoldingRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Shares")]
    shares: f64,
    #[tabled(rename = "Invested")]
    invested: f64,
}

/// Execute the import command.
pub fn execute(args: ImportArgs, ctx: &Context) -> Result<()> {
    let catalog_path = args
        .catalog
        .or_else(|| ctx.holdings_path.clone())
        .ok_or(CliError::MissingHoldings)?;
    let mut snapshot = PortfolioSnapshot::from_file(&catalog_path)?;
    let report = snapshot.import_trading212_file(&args.file)?;

    if let Some(output) = &args.output {
        snapshot.write_to_file(output)?;
        tracing::info!(
            "wrote {} holdings ({} new) to {}",
            snapshot.holdings.len(),
            report.imported,
            output.display()
        );
    }

    match ctx.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Csv => print_csv(&holding_rows(&report.holdings))?,
        OutputFormat::Minimal => println!("{}", report.imported),
        OutputFormat::Table => {
            print_header("Import");
            print_table(&[
                KeyValue::new("Imported", report.imported.to_string()),
                KeyValue::new("Skipped", report.skipped.to_string()),
            ])?;
            if !report.holdings.is_empty() {
                print_header("Holdings");
                print_table(&holding_rows(&report.holdings))?;
            }
            if !report.unknown.is_empty() {
                print_warning(&format!("Unknown tickers: {}", report.unknown.join(", ")));
            }
            if let (Some(output), false) = (&args.output, ctx.quiet) {
                print_success(&format!("Saved snapshot to {}", output.display()));
            }
        }
    }

    Ok(())
}

fn holding_rows(holdings: &[HoldingRecord]) -> Vec<HoldingRow> {
    holdings
        .iter()
        .map(|h| HoldingRow {
            ticker: h.ticker.clone(),
            shares: h.shares,
            invested: h.invested,
        })
        .collect()
}
