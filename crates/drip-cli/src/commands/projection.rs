//! Projection command implementation.
//!
//! Projects DRIP growth from the current portfolio.

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use drip_core::types::Currency;
use drip_portfolio::{project_portfolio, GrowthProjection, Milestone, ProjectionParams};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_money, format_percent, format_whole, print_csv, print_header, print_json, print_table};

/// Arguments for the projection command.
#[derive(Args, Debug, Default)]
pub struct ProjectionArgs {
    /// Monthly contribution in the display currency
    #[arg(short, long)]
    pub monthly: Option<f64>,

    /// Number of years to project
    #[arg(short, long)]
    pub years: Option<u32>,

    /// Annual dividend growth (as percentage, e.g., 5.0 for 5%)
    #[arg(long)]
    pub div_growth: Option<f64>,

    /// Annual price growth (as percentage, e.g., 7.0 for 7%)
    #[arg(long)]
    pub price_growth: Option<f64>,
}

impl ProjectionArgs {
    /// Applies the flags given on top of `base`.
    pub fn apply(&self, base: ProjectionParams) -> ProjectionParams {
        let mut params = base;
        if let Some(monthly) = self.monthly {
            params = params.with_monthly_contribution(monthly);
        }
        if let Some(years) = self.years {
            params = params.with_years(years);
        }
        if let Some(pct) = self.div_growth {
            params = params.with_dividend_growth_pct(pct);
        }
        if let Some(pct) = self.price_growth {
            params = params.with_price_growth_pct(pct);
        }
        params
    }
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Contributed")]
    contributed: String,
    #[tabled(rename = "Annual Div")]
    annual: String,
    #[tabled(rename = "Monthly Div")]
    monthly: String,
    #[tabled(rename = "Yield on Cost")]
    yield_on_cost: String,
}

#[derive(Tabled)]
struct MilestoneRow {
    #[tabled(rename = "Annual Income")]
    target: String,
    #[tabled(rename = "Reached")]
    reached: String,
}

/// Execute the projection command.
pub fn execute(args: ProjectionArgs, ctx: &Context) -> Result<()> {
    let params = args.apply(ctx.config.projection);
    let holdings = ctx.load_holdings()?;
    let projection = project_portfolio(&holdings, &ctx.config.analytics, &params)?;
    tracing::debug!(?params, "projection computed");

    match ctx.format {
        OutputFormat::Table => print_tables(&projection, ctx.currency())?,
        OutputFormat::Json => print_json(&projection)?,
        OutputFormat::Csv => print_csv(&projection.points)?,
        OutputFormat::Minimal => {
            if let Some(last) = projection.final_year() {
                println!("{}", last.portfolio_value);
            }
        }
    }

    Ok(())
}

/// Prints the yearly points and the income milestones.
pub fn print_tables(projection: &GrowthProjection, currency: Currency) -> Result<()> {
    let rows: Vec<PointRow> = projection
        .points
        .iter()
        .map(|p| PointRow {
            year: p.year,
            value: format_whole(p.portfolio_value, currency),
            contributed: format_whole(p.total_contributed, currency),
            annual: format_money(p.annual_dividends, currency),
            monthly: format_money(p.monthly_dividends, currency),
            yield_on_cost: format_percent(p.yield_on_cost),
        })
        .collect();

    print_header("DRIP Projection");
    print_table(&rows)?;

    print_header("Income Milestones");
    print_table(&milestone_rows(&projection.default_milestones(), currency))
}

fn milestone_rows(milestones: &[Milestone], currency: Currency) -> Vec<MilestoneRow> {
    milestones
        .iter()
        .map(|m| MilestoneRow {
            target: format_money(m.target, currency),
            reached: match m.year {
                Some(year) => format!("Year {year}"),
                None => "-".to_string(),
            },
        })
        .collect()
}
