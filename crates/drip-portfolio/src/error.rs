//! Error types for portfolio analytics.
//!
//! The analytics themselves are total. Errors arise only at the boundary
//! where raw input is turned into engine input, or from invalid parameters.

use drip_core::CoreError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// A holding reached the engine without its joined stock.
    #[error("Holding '{holding}' has no stock attached")]
    MissingStock {
        /// Identifier of the offending holding.
        holding: String,
    },

    /// A payment month outside 0..=11.
    #[error("Invalid payment month {month}: expected 0-11")]
    InvalidPaymentMonth {
        /// The rejected month index.
        month: u32,
    },

    /// An engine or projection parameter out of range.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Error from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PortfolioError {
    /// Create a missing stock error.
    #[must_use]
    pub fn missing_stock(holding: impl Into<String>) -> Self {
        Self::MissingStock {
            holding: holding.into(),
        }
    }

    /// Create an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
