//! Investment windows: clusters of nearby "buy by" deadlines.
//!
//! A stock must be bought by the business day before its ex-dividend date
//! to earn the next payment. Stocks whose deadlines fall close together are
//! grouped so the purchases can be batched.

use super::days_until;
use crate::types::{AnalyticsConfig, EnrichedHolding};
use drip_core::calendars::{Calendar, WeekendCalendar};
use drip_core::rounding::{round_dp, MONEY_DP};
use drip_core::types::Date;
use serde::{Deserialize, Serialize};

/// A stock inside an investment window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowStock {
    /// Ticker symbol.
    pub ticker: String,

    /// Ex-dividend date.
    pub ex_div: Date,

    /// Estimated single payment, converted and rounded to cents.
    pub per_payment: f64,

    /// Payment frequency label.
    pub frequency: String,
}

/// A group of stocks sharing a purchase deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentWindow {
    /// Deadline of the earliest member.
    pub buy_by: Date,

    /// Days from today to `buy_by`.
    pub days: i64,

    /// Sum of member payments, rounded to cents.
    pub total_dividend: f64,

    /// Members in the order they joined the window.
    pub stocks: Vec<WindowStock>,
}

#[derive(Debug, Clone)]
struct Candidate {
    buy_by: Date,
    stock: WindowStock,
}

/// Clusters future ex-dividend deadlines using weekend-only business days.
#[must_use]
pub fn investment_windows(
    holdings: &[EnrichedHolding],
    today: Date,
    config: &AnalyticsConfig,
) -> Vec<InvestmentWindow> {
    investment_windows_with_calendar(holdings, today, config, &WeekendCalendar)
}

/// Clusters future ex-dividend deadlines.
///
/// Only holdings whose ex-dividend date is at least one day away take part.
/// Candidates are ordered by deadline; the earliest unassigned one anchors a
/// window and absorbs every later unassigned candidate whose deadline lies
/// within `config.window_radius_days` of the anchor. Windows are returned by
/// total dividend, largest first, capped at `config.max_windows`.
#[must_use]
pub fn investment_windows_with_calendar(
    holdings: &[EnrichedHolding],
    today: Date,
    config: &AnalyticsConfig,
    calendar: &dyn Calendar,
) -> Vec<InvestmentWindow> {
    let mut candidates: Vec<Candidate> = holdings
        .iter()
        .filter_map(|h| {
            let ex_div = h.stock.ex_dividend_date?;
            if days_until(today, ex_div) < 1 {
                return None;
            }
            let per_payment = h.per_payment(config.default_payments_per_year);
            Some(Candidate {
                buy_by: calendar.business_day_before(ex_div),
                stock: WindowStock {
                    ticker: h.stock.ticker.clone(),
                    ex_div,
                    per_payment: round_dp(config.to_display(per_payment), MONEY_DP),
                    frequency: h.stock.frequency.clone(),
                },
            })
        })
        .collect();

    candidates.sort_by_key(|c| c.buy_by);

    let mut windows = cluster(candidates, today, config.window_radius_days);

    windows.sort_by(|a, b| {
        b.total_dividend
            .partial_cmp(&a.total_dividend)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    windows.truncate(config.max_windows);

    log::debug!("{} investment windows using {} calendar", windows.len(), calendar.name());
    windows
}

/// Greedy anchor-based grouping over candidates sorted by deadline.
fn cluster(candidates: Vec<Candidate>, today: Date, radius_days: i64) -> Vec<InvestmentWindow> {
    let mut used = vec![false; candidates.len()];
    let mut windows = Vec::new();

    for i in 0..candidates.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let anchor = candidates[i].buy_by;
        let mut members = vec![i];

        for j in (i + 1)..candidates.len() {
            if !used[j] && anchor.days_between(&candidates[j].buy_by).abs() <= radius_days {
                used[j] = true;
                members.push(j);
            }
        }

        let stocks: Vec<WindowStock> = members
            .into_iter()
            .map(|k| candidates[k].stock.clone())
            .collect();
        let total: f64 = stocks.iter().map(|s| s.per_payment).sum();

        windows.push(InvestmentWindow {
            buy_by: anchor,
            days: days_until(today, anchor),
            total_dividend: round_dp(total, MONEY_DP),
            stocks,
        });
    }

    windows
}
