//! Dividend calendar: monthly income, upcoming events and investment windows.
//!
//! All three views share a single `today`, so offsets within one calendar
//! are consistent with each other.

mod monthly;
mod upcoming;
mod windows;

pub use monthly::{monthly_income, MonthlyIncome};
pub use upcoming::{upcoming_dividends, UpcomingDividend};
pub use windows::{investment_windows, investment_windows_with_calendar, InvestmentWindow, WindowStock};

use crate::types::{AnalyticsConfig, EnrichedHolding};
use drip_core::types::Date;
use serde::{Deserialize, Serialize};

/// Whole days from `today` to `target`; zero on the day, negative when past.
#[must_use]
pub fn days_until(today: Date, target: Date) -> i64 {
    today.days_between(&target)
}

/// The full dividend calendar for a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendCalendar {
    /// Expected income per month, January first.
    pub monthly_income: Vec<MonthlyIncome>,

    /// Holdings with known dividend dates, soonest first.
    pub upcoming_dividends: Vec<UpcomingDividend>,

    /// Best purchase windows, largest payout first.
    pub investment_windows: Vec<InvestmentWindow>,
}

impl DividendCalendar {
    /// Computes every calendar view as of `today`.
    #[must_use]
    pub fn compute(holdings: &[EnrichedHolding], today: Date, config: &AnalyticsConfig) -> Self {
        Self {
            monthly_income: monthly_income(holdings, config),
            upcoming_dividends: upcoming_dividends(holdings, today, config),
            investment_windows: investment_windows(holdings, today, config),
        }
    }

    /// Sum of the monthly histogram.
    #[must_use]
    pub fn annual_income(&self) -> f64 {
        self.monthly_income.iter().map(|m| m.income).sum()
    }
}
