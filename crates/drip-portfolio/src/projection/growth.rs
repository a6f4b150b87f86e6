//! Month-by-month DRIP compounding.

use super::ProjectionParams;
use crate::analytics::PortfolioSummary;
use drip_core::rounding::{round_dp, round_whole, MONEY_DP, RATIO_DP};
use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: u32 = 12;

/// Inputs to [`project_growth`], with rates as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthInputs {
    /// Portfolio value at year 0, in the display currency.
    pub start_value: f64,

    /// Amount added at the end of every month.
    pub monthly_contribution: f64,

    /// Dividend yield at year 0.
    pub weighted_yield: f64,

    /// Annual dividend growth, e.g. 0.05.
    pub dividend_growth_rate: f64,

    /// Annual price growth, e.g. 0.07.
    pub price_growth_rate: f64,

    /// Number of years to simulate.
    pub years: u32,
}

impl GrowthInputs {
    /// Seeds a projection from a summary's value and yield.
    #[must_use]
    pub fn from_summary(summary: &PortfolioSummary, params: &ProjectionParams) -> Self {
        Self {
            start_value: summary.total_value,
            monthly_contribution: params.monthly_contribution,
            weighted_yield: summary.weighted_yield,
            dividend_growth_rate: params.dividend_growth_rate(),
            price_growth_rate: params.price_growth_rate(),
            years: params.years,
        }
    }
}

/// The projected state of the portfolio at the start of a year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Years from now.
    pub year: u32,

    /// Display label, "Year N".
    pub label: String,

    /// Portfolio value, whole units.
    pub portfolio_value: i64,

    /// Starting value plus contributions so far, whole units.
    pub total_contributed: i64,

    /// Dividend income for the year, rounded to cents.
    pub annual_dividends: f64,

    /// A twelfth of the annual income, rounded to cents.
    pub monthly_dividends: f64,

    /// Annual income over total contributed, four places.
    pub yield_on_cost: f64,
}

/// A projection: one point per year from 0 to the horizon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrowthProjection {
    /// Points in year order.
    pub points: Vec<ProjectionPoint>,
}

impl GrowthProjection {
    /// The last projected year.
    #[must_use]
    pub fn final_year(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// The point for `year`, if within the horizon.
    #[must_use]
    pub fn year(&self, year: u32) -> Option<&ProjectionPoint> {
        self.points.get(year as usize)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Simulates dividend reinvestment with monthly contributions.
///
/// Each year's yield is the starting yield grown by the dividend growth
/// rate. Within a year, every month reinvests a twelfth of that yield,
/// applies a twelfth of the price growth, then adds the contribution.
/// Returns exactly `years + 1` points.
#[must_use]
pub fn project_growth(inputs: &GrowthInputs) -> GrowthProjection {
    let mut value = inputs.start_value;
    let mut contributed = inputs.start_value;
    let mut points = Vec::with_capacity(inputs.years as usize + 1);

    for year in 0..=inputs.years {
        let current_yield =
            inputs.weighted_yield * (1.0 + inputs.dividend_growth_rate).powi(year as i32);
        let annual = value * current_yield;

        points.push(ProjectionPoint {
            year,
            label: format!("Year {year}"),
            portfolio_value: round_whole(value),
            total_contributed: round_whole(contributed),
            annual_dividends: round_dp(annual, MONEY_DP),
            monthly_dividends: round_dp(annual / 12.0, MONEY_DP),
            yield_on_cost: if contributed > 0.0 {
                round_dp(annual / contributed, RATIO_DP)
            } else {
                0.0
            },
        });

        if year < inputs.years {
            for _ in 0..MONTHS_PER_YEAR {
                value += value * (current_yield / 12.0);
                value *= 1.0 + inputs.price_growth_rate / 12.0;
                value += inputs.monthly_contribution;
                contributed += inputs.monthly_contribution;
            }
        }
    }

    log::debug!(
        "projected {} years from {:.2} at yield {:.4}",
        inputs.years,
        inputs.start_value,
        inputs.weighted_yield
    );

    GrowthProjection { points }
}
