//! Fixed-rate currency normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Currency;
use crate::error::{CoreError, CoreResult};

/// A fixed conversion rate from the native (quote) currency of the held
/// stocks to the display currency of every reported figure.
///
/// `rate` is expressed as native units per display unit, so
/// `display = native / rate`.
///
/// # Example
///
/// ```rust
/// use drip_core::types::{Currency, FxRate};
///
/// let fx = FxRate::new(Currency::USD, Currency::EUR, 1.18).unwrap();
/// assert!((fx.to_display(1000.0) - 847.457_627_118_644).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FxRate {
    /// Currency the stocks are priced in.
    pub native: Currency,
    /// Currency outputs are reported in.
    pub display: Currency,
    /// Native units per display unit.
    pub rate: f64,
}

impl FxRate {
    /// USD per EUR used when no rate is configured.
    pub const DEFAULT_RATE: f64 = 1.18;

    /// Creates a validated rate.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFxRate` if `rate` is not finite and positive.
    pub fn new(native: Currency, display: Currency, rate: f64) -> CoreResult<Self> {
        let fx = Self {
            native,
            display,
            rate,
        };
        fx.validate()?;
        Ok(fx)
    }

    /// An identity rate for portfolios already held in the display currency.
    #[must_use]
    pub fn identity(currency: Currency) -> Self {
        Self {
            native: currency,
            display: currency,
            rate: 1.0,
        }
    }

    /// Checks that the rate can be divided by.
    ///
    /// Deserialized rates bypass [`FxRate::new`], so loaders call this
    /// before handing the rate to the engine.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFxRate` if `rate` is not finite and positive.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.rate.is_finite() {
            return Err(CoreError::invalid_fx_rate(self.rate, "must be finite"));
        }
        if self.rate <= 0.0 {
            return Err(CoreError::invalid_fx_rate(self.rate, "must be positive"));
        }
        if self.native == self.display && (self.rate - 1.0).abs() > f64::EPSILON {
            log::warn!(
                "FX rate {} configured between identical currencies {}",
                self.rate,
                self.native
            );
        }
        Ok(())
    }

    /// Converts a native-currency amount to the display currency.
    #[must_use]
    pub fn to_display(&self, amount: f64) -> f64 {
        amount / self.rate
    }
}

impl Default for FxRate {
    fn default() -> Self {
        Self {
            native: Currency::USD,
            display: Currency::EUR,
            rate: Self::DEFAULT_RATE,
        }
    }
}

impl fmt::Display for FxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.native, self.display, self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_rate() {
        let fx = FxRate::default();
        assert_eq!(fx.native, Currency::USD);
        assert_eq!(fx.display, Currency::EUR);
        assert_relative_eq!(fx.to_display(1000.0), 1000.0 / 1.18);
        assert_relative_eq!(fx.to_display(40.0), 33.898_305_084_745_76, epsilon = 1e-12);
    }

    #[test]
    fn test_identity() {
        let fx = FxRate::identity(Currency::EUR);
        assert_relative_eq!(fx.to_display(123.45), 123.45);
    }

    #[test]
    fn test_rejects_bad_rates() {
        assert!(FxRate::new(Currency::USD, Currency::EUR, 0.0).is_err());
        assert!(FxRate::new(Currency::USD, Currency::EUR, -1.2).is_err());
        assert!(FxRate::new(Currency::USD, Currency::EUR, f64::NAN).is_err());
        assert!(FxRate::new(Currency::USD, Currency::EUR, 1.1).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(FxRate::default().to_string(), "USD/EUR 1.18");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&FxRate::default()).unwrap();
        let parsed: FxRate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, FxRate::default());
    }
}
