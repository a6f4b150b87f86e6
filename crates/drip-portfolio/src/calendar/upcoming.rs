//! Upcoming dividend events.

use super::days_until;
use crate::types::{AnalyticsConfig, EnrichedHolding};
use drip_core::rounding::{round_dp, MONEY_DP};
use drip_core::types::Date;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A holding's next known dividend dates and the payment expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingDividend {
    /// Ticker symbol.
    pub ticker: String,

    /// Company name.
    pub name: String,

    /// Ex-dividend date, if known.
    pub ex_dividend_date: Option<Date>,

    /// Pay date, if known.
    pub pay_date: Option<Date>,

    /// Days from today to the ex-dividend date (negative when past).
    pub days_until_ex: Option<i64>,

    /// Days from today to the pay date (negative when past).
    pub days_until_pay: Option<i64>,

    /// Estimated single payment, converted and rounded to cents.
    pub per_payment: f64,
}

impl UpcomingDividend {
    /// The nearest offset that is today or later, if any.
    #[must_use]
    pub fn sort_key(&self) -> Option<i64> {
        [self.days_until_ex, self.days_until_pay]
            .into_iter()
            .flatten()
            .filter(|days| *days >= 0)
            .min()
    }
}

/// Orders present keys ascending and absent keys last.
fn compare_keys(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Lists holdings with an ex-dividend or pay date, soonest first.
///
/// Events whose dates are all in the past sort after every event with a
/// date today or later, keeping their input order.
#[must_use]
pub fn upcoming_dividends(
    holdings: &[EnrichedHolding],
    today: Date,
    config: &AnalyticsConfig,
) -> Vec<UpcomingDividend> {
    let mut events: Vec<UpcomingDividend> = holdings
        .iter()
        .filter(|h| h.stock.has_dividend_date())
        .map(|h| {
            let stock = &h.stock;
            UpcomingDividend {
                ticker: stock.ticker.clone(),
                name: stock.name.clone(),
                ex_dividend_date: stock.ex_dividend_date,
                pay_date: stock.pay_date,
                days_until_ex: stock.ex_dividend_date.map(|d| days_until(today, d)),
                days_until_pay: stock.pay_date.map(|d| days_until(today, d)),
                per_payment: round_dp(
                    config.to_display(h.per_payment(config.default_payments_per_year)),
                    MONEY_DP,
                ),
            }
        })
        .collect();

    events.sort_by(|a, b| compare_keys(a.sort_key(), b.sort_key()));
    events
}
