//! Summary command implementation.

use anyhow::Result;

use drip_core::types::Currency;
use drip_portfolio::{calculate_summary, PortfolioSummary};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_json, print_output, print_single, KeyValue};

/// Execute the summary command.
pub fn execute(ctx: &Context) -> Result<()> {
    let holdings = ctx.load_holdings()?;
    let summary = calculate_summary(&holdings, &ctx.config.analytics);

    match ctx.format {
        OutputFormat::Table => {
            print_header("Portfolio Summary");
            print_output(&rows(&summary, ctx.currency()), ctx.format)?;
        }
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Csv => print_single(&summary, ctx.format)?,
        OutputFormat::Minimal => println!("{:.2}", summary.total_value),
    }

    Ok(())
}

/// Display rows for a summary.
pub fn rows(summary: &PortfolioSummary, currency: Currency) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Holdings", summary.holding_count.to_string()),
        KeyValue::from_money("Invested", summary.total_invested, currency),
        KeyValue::from_money("Market Value", summary.total_value, currency),
        KeyValue::from_money("Gain", summary.total_gain, currency),
        KeyValue::from_percent("Gain %", summary.total_gain_pct),
        KeyValue::from_money("Annual Dividend", summary.total_annual_dividend, currency),
        KeyValue::from_percent("Weighted Yield", summary.weighted_yield),
        KeyValue::from_money("Monthly Dividend", summary.monthly_dividend, currency),
        KeyValue::from_money("Daily Dividend", summary.daily_dividend, currency),
    ]
}
