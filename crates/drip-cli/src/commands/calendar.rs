//! Calendar command implementation.
//!
//! Shows monthly income, upcoming dividend dates and investment windows.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use drip_core::types::{Currency, Date};
use drip_portfolio::{DividendCalendar, InvestmentWindow, MonthlyIncome, UpcomingDividend};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_money, print_csv, print_header, print_json, print_table};

/// Arguments for the calendar command.
#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Part of the calendar to show
    #[arg(long, value_enum, default_value = "all")]
    pub view: CalendarView,
}

/// Calendar views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalendarView {
    /// Every view
    All,
    /// Income per month
    Monthly,
    /// Upcoming ex-dividend and pay dates
    Upcoming,
    /// Investment windows
    Windows,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
}

#[derive(Tabled)]
struct UpcomingRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Ex-Date")]
    ex_date: String,
    #[tabled(rename = "Pay Date")]
    pay_date: String,
    #[tabled(rename = "Per Payment")]
    per_payment: String,
}

#[derive(Tabled)]
struct WindowRow {
    #[tabled(rename = "Buy By")]
    buy_by: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Stocks")]
    stocks: String,
}

#[derive(Serialize)]
struct WindowCsvRow {
    buy_by: Date,
    days: i64,
    total_dividend: f64,
    tickers: String,
}

/// Execute the calendar command.
pub fn execute(args: CalendarArgs, ctx: &Context) -> Result<()> {
    let holdings = ctx.load_holdings()?;
    let calendar = DividendCalendar::compute(&holdings, ctx.today, &ctx.config.analytics);
    let currency = ctx.currency();

    match (ctx.format, args.view) {
        (OutputFormat::Table, view) => print_tables(&calendar, view, currency)?,
        (OutputFormat::Json, CalendarView::All) => print_json(&calendar)?,
        (OutputFormat::Json, CalendarView::Monthly) => print_json(&calendar.monthly_income)?,
        (OutputFormat::Json, CalendarView::Upcoming) => print_json(&calendar.upcoming_dividends)?,
        (OutputFormat::Json, CalendarView::Windows) => print_json(&calendar.investment_windows)?,
        (OutputFormat::Csv, view) => print_csv_views(&calendar, view)?,
        (OutputFormat::Minimal, CalendarView::All | CalendarView::Monthly) => {
            println!("{:.2}", calendar.annual_income());
        }
        (OutputFormat::Minimal, CalendarView::Upcoming) => {
            if let Some(next) = calendar.upcoming_dividends.first() {
                println!("{}", next.ticker);
            }
        }
        (OutputFormat::Minimal, CalendarView::Windows) => {
            if let Some(best) = calendar.investment_windows.first() {
                println!("{}", best.buy_by);
            }
        }
    }

    Ok(())
}

/// Prints the selected calendar views as tables.
pub fn print_tables(calendar: &DividendCalendar, view: CalendarView, currency: Currency) -> Result<()> {
    if matches!(view, CalendarView::All | CalendarView::Monthly) {
        print_header("Monthly Income");
        print_table(&month_rows(&calendar.monthly_income, currency))?;
    }
    if matches!(view, CalendarView::All | CalendarView::Upcoming) {
        print_header("Upcoming Dividends");
        print_table(&upcoming_rows(&calendar.upcoming_dividends, currency))?;
    }
    if matches!(view, CalendarView::All | CalendarView::Windows) {
        print_header("Investment Windows");
        print_table(&window_rows(&calendar.investment_windows, currency))?;
    }
    Ok(())
}

/// CSV has one header per table, so several views are separated by a blank line.
fn print_csv_views(calendar: &DividendCalendar, view: CalendarView) -> Result<()> {
    let mut first = true;
    let mut separate = || {
        if !std::mem::take(&mut first) {
            println!();
        }
    };

    if matches!(view, CalendarView::All | CalendarView::Monthly) {
        separate();
        print_csv(&calendar.monthly_income)?;
    }
    if matches!(view, CalendarView::All | CalendarView::Upcoming) {
        separate();
        print_csv(&calendar.upcoming_dividends)?;
    }
    if matches!(view, CalendarView::All | CalendarView::Windows) {
        separate();
        let rows: Vec<WindowCsvRow> = calendar
            .investment_windows
            .iter()
            .map(|w| WindowCsvRow {
                buy_by: w.buy_by,
                days: w.days,
                total_dividend: w.total_dividend,
                tickers: tickers(w),
            })
            .collect();
        print_csv(&rows)?;
    }
    Ok(())
}

fn month_rows(months: &[MonthlyIncome], currency: Currency) -> Vec<MonthRow> {
    months
        .iter()
        .map(|m| MonthRow {
            month: m.month.clone(),
            income: format_money(m.income, currency),
        })
        .collect()
}

fn upcoming_rows(events: &[UpcomingDividend], currency: Currency) -> Vec<UpcomingRow> {
    events
        .iter()
        .map(|e| UpcomingRow {
            ticker: e.ticker.clone(),
            name: e.name.clone(),
            ex_date: dated(e.ex_dividend_date, e.days_until_ex),
            pay_date: dated(e.pay_date, e.days_until_pay),
            per_payment: format_money(e.per_payment, currency),
        })
        .collect()
}

fn window_rows(windows: &[InvestmentWindow], currency: Currency) -> Vec<WindowRow> {
    windows
        .iter()
        .map(|w| WindowRow {
            buy_by: w.buy_by.to_string(),
            days: w.days,
            total: format_money(w.total_dividend, currency),
            stocks: tickers(w),
        })
        .collect()
}

fn tickers(window: &InvestmentWindow) -> String {
    window
        .stocks
        .iter()
        .map(|s| s.ticker.as_str())
        .collect::<Vec<_>>()
        .join(";")
}

/// `2025-03-14 (in 12d)`, `2024-12-01 (31d ago)` or `-`.
fn dated(date: Option<Date>, days: Option<i64>) -> String {
    match (date, days) {
        (Some(date), Some(0)) => format!("{date} (today)"),
        (Some(date), Some(d)) if d > 0 => format!("{date} (in {d}d)"),
        (Some(date), Some(d)) => format!("{date} ({}d ago)", -d),
        _ => "-".to_string(),
    }
}
