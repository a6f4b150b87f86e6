//! Report command implementation.

use anyhow::Result;

use drip_portfolio::PortfolioReport;

use crate::cli::OutputFormat;
use crate::commands::calendar::{self, CalendarView};
use crate::commands::{projection, sectors, summary, Context};
use crate::error::CliError;
use crate::output::{print_header, print_json, print_output};

/// Execute the report command.
pub fn execute(ctx: &Context) -> Result<()> {
    let holdings = ctx.load_holdings()?;
    let report = PortfolioReport::compute(
        &holdings,
        ctx.today,
        &ctx.config.analytics,
        &ctx.config.projection,
    )?;
    let currency = ctx.currency();

    match ctx.format {
        OutputFormat::Table => {
            print_header(&format!("Portfolio Report as of {}", report.as_of));
            print_output(&summary::rows(&report.summary, currency), ctx.format)?;
            sectors::print_tables(&report.sectors, currency)?;
            calendar::print_tables(&report.calendar, CalendarView::All, currency)?;
            projection::print_tables(&report.projection, currency)?;
        }
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Minimal => println!("{}", serde_json::to_string(&report.summary)?),
        OutputFormat::Csv => {
            return Err(CliError::UnsupportedFormat {
                format: ctx.format,
                command: "report",
            }
            .into())
        }
    }

    Ok(())
}
