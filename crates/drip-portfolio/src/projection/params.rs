//! User-facing projection parameters.

use crate::error::{PortfolioError, PortfolioResult};
use serde::{Deserialize, Serialize};

/// Longest projection horizon accepted, in years.
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Parameters for a DRIP growth projection.
///
/// Growth rates are given in percent, e.g. `5.0` for 5% a year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParams {
    /// Amount added every month, in the display currency.
    pub monthly_contribution: f64,

    /// Number of years to simulate.
    pub years: u32,

    /// Annual dividend growth, in percent.
    pub dividend_growth_pct: f64,

    /// Annual price growth, in percent.
    pub price_growth_pct: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            monthly_contribution: 100.0,
            years: 20,
            dividend_growth_pct: 5.0,
            price_growth_pct: 7.0,
        }
    }
}

impl ProjectionParams {
    /// Creates parameters with the default assumptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the monthly contribution.
    #[must_use]
    pub fn with_monthly_contribution(mut self, amount: f64) -> Self {
        self.monthly_contribution = amount;
        self
    }

    /// Sets the horizon in years.
    #[must_use]
    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    /// Sets the dividend growth in percent.
    #[must_use]
    pub fn with_dividend_growth_pct(mut self, pct: f64) -> Self {
        self.dividend_growth_pct = pct;
        self
    }

    /// Sets the price growth in percent.
    #[must_use]
    pub fn with_price_growth_pct(mut self, pct: f64) -> Self {
        self.price_growth_pct = pct;
        self
    }

    /// Dividend growth as a fraction.
    #[must_use]
    pub fn dividend_growth_rate(&self) -> f64 {
        self.dividend_growth_pct / 100.0
    }

    /// Price growth as a fraction.
    #[must_use]
    pub fn price_growth_rate(&self) -> f64 {
        self.price_growth_pct / 100.0
    }

    /// Rejects parameters the projection cannot use.
    pub fn validate(&self) -> PortfolioResult<()> {
        if !self.monthly_contribution.is_finite() || self.monthly_contribution < 0.0 {
            return Err(PortfolioError::invalid_parameter(
                "monthly_contribution",
                format!("must be a non-negative amount, got {}", self.monthly_contribution),
            ));
        }
        if self.years > MAX_PROJECTION_YEARS {
            return Err(PortfolioError::invalid_parameter(
                "years",
                format!("must be at most {MAX_PROJECTION_YEARS}, got {}", self.years),
            ));
        }
        for (name, pct) in [
            ("dividend_growth_pct", self.dividend_growth_pct),
            ("price_growth_pct", self.price_growth_pct),
        ] {
            if !pct.is_finite() {
                return Err(PortfolioError::invalid_parameter(name, "must be finite"));
            }
        }
        Ok(())
    }
}
