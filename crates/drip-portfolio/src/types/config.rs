//! Configuration for portfolio analytics computation.

use crate::error::{PortfolioError, PortfolioResult};
use drip_core::types::FxRate;
use serde::{Deserialize, Serialize};

/// Default number of payments assumed when a stock has no payment months.
pub const DEFAULT_PAYMENTS_PER_YEAR: u32 = 4;

/// Default clustering radius for investment windows, in days.
pub const DEFAULT_WINDOW_RADIUS_DAYS: i64 = 7;

/// Default number of investment windows reported.
pub const DEFAULT_MAX_WINDOWS: usize = 5;

/// Configuration for portfolio analytics computation.
///
/// Controls currency conversion and the calendar heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Conversion from the native currency to the display currency.
    pub fx: FxRate,

    /// Payments per year assumed for event estimates when a stock has no
    /// payment months. The monthly histogram never uses this.
    pub default_payments_per_year: u32,

    /// Two buy-by dates at most this many days apart share a window.
    pub window_radius_days: i64,

    /// Maximum number of investment windows returned.
    pub max_windows: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            fx: FxRate::default(),
            default_payments_per_year: DEFAULT_PAYMENTS_PER_YEAR,
            window_radius_days: DEFAULT_WINDOW_RADIUS_DAYS,
            max_windows: DEFAULT_MAX_WINDOWS,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the FX conversion.
    #[must_use]
    pub fn with_fx(mut self, fx: FxRate) -> Self {
        self.fx = fx;
        self
    }

    /// Sets the default payments per year.
    #[must_use]
    pub fn with_default_payments(mut self, payments: u32) -> Self {
        self.default_payments_per_year = payments;
        self
    }

    /// Sets the window clustering radius.
    #[must_use]
    pub fn with_window_radius(mut self, days: i64) -> Self {
        self.window_radius_days = days;
        self
    }

    /// Sets the maximum number of windows.
    #[must_use]
    pub fn with_max_windows(mut self, max: usize) -> Self {
        self.max_windows = max;
        self
    }

    /// Converts a native amount to the display currency.
    #[must_use]
    pub fn to_display(&self, amount: f64) -> f64 {
        self.fx.to_display(amount)
    }

    /// Checks the configuration for values the analytics cannot use.
    pub fn validate(&self) -> PortfolioResult<()> {
        self.fx.validate()?;
        if self.default_payments_per_year == 0 {
            return Err(PortfolioError::invalid_parameter(
                "default_payments_per_year",
                "must be at least 1",
            ));
        }
        if self.window_radius_days < 0 {
            return Err(PortfolioError::invalid_parameter(
                "window_radius_days",
                "must not be negative",
            ));
        }
        Ok(())
    }
}
