//! Portfolio summary statistics.

use crate::types::{AnalyticsConfig, EnrichedHolding};
use drip_core::rounding::{round_dp, MONEY_DP, RATIO_DP};
use serde::{Deserialize, Serialize};

/// Days used to turn annual income into daily income.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Headline figures for a portfolio, in the display currency.
///
/// Money fields are rounded to cents; `total_gain_pct` and `weighted_yield`
/// are fractions rounded to four places.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of cost bases.
    pub total_invested: f64,

    /// Sum of market values.
    pub total_value: f64,

    /// Expected dividend income over a year.
    pub total_annual_dividend: f64,

    /// Market value minus cost basis.
    pub total_gain: f64,

    /// Gain as a fraction of cost basis (0 when nothing is invested).
    pub total_gain_pct: f64,

    /// Annual dividend as a fraction of market value (0 when value is 0).
    pub weighted_yield: f64,

    /// Annual dividend spread over 12 months.
    pub monthly_dividend: f64,

    /// Annual dividend spread over 365 days.
    pub daily_dividend: f64,

    /// Number of holdings summarized.
    pub holding_count: usize,
}

impl PortfolioSummary {
    /// Calculates the summary for a list of holdings.
    ///
    /// Totals accumulate in the native currency at full precision and are
    /// converted once; ratios come from the unrounded converted totals.
    #[must_use]
    pub fn calculate(holdings: &[EnrichedHolding], config: &AnalyticsConfig) -> Self {
        let (invested, value, annual) =
            holdings
                .iter()
                .fold((0.0, 0.0, 0.0), |(invested, value, annual), h| {
                    (
                        invested + h.invested,
                        value + h.market_value(),
                        annual + h.annual_dividend(),
                    )
                });

        let invested = config.to_display(invested);
        let value = config.to_display(value);
        let annual = config.to_display(annual);

        let gain = value - invested;
        let gain_pct = if invested > 0.0 { gain / invested } else { 0.0 };
        let weighted_yield = if value > 0.0 { annual / value } else { 0.0 };

        log::debug!(
            "summary over {} holdings: value={value:.2} annual={annual:.2}",
            holdings.len()
        );

        Self {
            total_invested: round_dp(invested, MONEY_DP),
            total_value: round_dp(value, MONEY_DP),
            total_annual_dividend: round_dp(annual, MONEY_DP),
            total_gain: round_dp(gain, MONEY_DP),
            total_gain_pct: round_dp(gain_pct, RATIO_DP),
            weighted_yield: round_dp(weighted_yield, RATIO_DP),
            monthly_dividend: round_dp(annual / 12.0, MONEY_DP),
            daily_dividend: round_dp(annual / DAYS_PER_YEAR, MONEY_DP),
            holding_count: holdings.len(),
        }
    }

    /// Returns true if the summary covers no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holding_count == 0
    }
}

/// Calculates the portfolio summary.
///
/// Convenience wrapper around [`PortfolioSummary::calculate`].
#[must_use]
pub fn calculate_summary(holdings: &[EnrichedHolding], config: &AnalyticsConfig) -> PortfolioSummary {
    PortfolioSummary::calculate(holdings, config)
}
