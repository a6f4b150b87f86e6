//! Sectors command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use drip_core::types::Currency;
use drip_portfolio::{bucket_by_sector, SectorBreakdown, SectorWeight};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_money, format_percent, print_csv, print_header, print_json, print_table};

#[derive(Tabled)]
struct SectorRow {
    #[tabled(rename = "Sector")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Serialize)]
struct SectorCsvRow<'a> {
    breakdown: &'static str,
    sector: &'a str,
    value: f64,
}

/// Execute the sectors command.
pub fn execute(ctx: &Context) -> Result<()> {
    let holdings = ctx.load_holdings()?;
    let breakdown = bucket_by_sector(&holdings, &ctx.config.analytics);

    match ctx.format {
        OutputFormat::Table => print_tables(&breakdown, ctx.currency())?,
        OutputFormat::Json => print_json(&breakdown)?,
        OutputFormat::Csv => {
            let rows: Vec<SectorCsvRow> = csv_rows("value", &breakdown.by_value)
                .chain(csv_rows("dividend", &breakdown.by_dividend))
                .collect();
            print_csv(&rows)?;
        }
        OutputFormat::Minimal => {
            if let Some(top) = breakdown.largest_by_value() {
                println!("{}", top.name);
            }
        }
    }

    Ok(())
}

/// Prints both sector tables.
pub fn print_tables(breakdown: &SectorBreakdown, currency: Currency) -> Result<()> {
    print_header("Sectors by Value");
    print_table(&table_rows(&breakdown.by_value, currency))?;
    print_header("Sectors by Dividend Income");
    print_table(&table_rows(&breakdown.by_dividend, currency))
}

fn table_rows(weights: &[SectorWeight], currency: Currency) -> Vec<SectorRow> {
    let total: f64 = weights.iter().map(|w| w.value).sum();
    weights
        .iter()
        .map(|w| SectorRow {
            name: w.name.clone(),
            amount: format_money(w.value, currency),
            share: if total > 0.0 {
                format_percent(w.value / total)
            } else {
                "-".to_string()
            },
        })
        .collect()
}

fn csv_rows<'a>(
    breakdown: &'static str,
    weights: &'a [SectorWeight],
) -> impl Iterator<Item = SectorCsvRow<'a>> {
    weights.iter().map(move |w| SectorCsvRow {
        breakdown,
        sector: &w.name,
        value: w.value,
    })
}
