//! Monthly dividend income histogram.

use crate::types::{AnalyticsConfig, EnrichedHolding, MONTH_LABELS};
use drip_core::rounding::{round_dp, MONEY_DP};
use serde::{Deserialize, Serialize};

/// Expected dividend income for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyIncome {
    /// Three-letter month label.
    pub month: String,

    /// Converted income, rounded to cents.
    pub income: f64,
}

/// Spreads each holding's annual dividend evenly over its payment months.
///
/// Always returns 12 entries, January first. Holdings without payment
/// months are left out rather than guessed at.
#[must_use]
pub fn monthly_income(holdings: &[EnrichedHolding], config: &AnalyticsConfig) -> Vec<MonthlyIncome> {
    let mut totals = [0.0_f64; 12];

    for holding in holdings {
        let months = &holding.stock.payment_months;
        if months.is_empty() {
            log::debug!("{}: no payment months, left out of histogram", holding.ticker());
            continue;
        }

        let per_payment = holding.annual_dividend() / months.len() as f64;
        for month in months.iter() {
            totals[month as usize] += per_payment;
        }
    }

    MONTH_LABELS
        .iter()
        .zip(totals)
        .map(|(label, total)| MonthlyIncome {
            month: (*label).to_string(),
            income: round_dp(config.to_display(total), MONEY_DP),
        })
        .collect()
}
