//! Error types for the Dripfolio core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Exchange rate that cannot be used for conversion.
    #[error("Invalid FX rate {rate}: {reason}")]
    InvalidFxRate {
        /// The rejected rate.
        rate: f64,
        /// Reason for rejection.
        reason: String,
    },

    /// Currency code that is not supported.
    #[error("Unsupported currency: {code}")]
    UnsupportedCurrency {
        /// The unrecognised code.
        code: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid FX rate error.
    #[must_use]
    pub fn invalid_fx_rate(rate: f64, reason: impl Into<String>) -> Self {
        Self::InvalidFxRate {
            rate,
            reason: reason.into(),
        }
    }

    /// Creates an unsupported currency error.
    #[must_use]
    pub fn unsupported_currency(code: impl Into<String>) -> Self {
        Self::UnsupportedCurrency { code: code.into() }
    }
}
