//! Currency type with ISO 4217 codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// ISO 4217 currency codes.
///
/// Covers the quote currencies of commonly held dividend stocks and the
/// display currencies a portfolio can be reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Swiss Franc
    CHF,
    /// Canadian Dollar
    CAD,
    /// Australian Dollar
    AUD,
    /// Japanese Yen
    JPY,
    /// Swedish Krona
    SEK,
    /// Norwegian Krone
    NOK,
    /// Danish Krone
    DKK,
}

/// Code and symbol, in declaration order.
const CODES: [(&str, &str); 10] = [
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("CHF", "CHF"),
    ("CAD", "C$"),
    ("AUD", "A$"),
    ("JPY", "¥"),
    ("SEK", "kr"),
    ("NOK", "kr"),
    ("DKK", "kr"),
];

impl Currency {
    /// Every supported currency.
    pub const ALL: [Currency; 10] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::CHF,
        Currency::CAD,
        Currency::AUD,
        Currency::JPY,
        Currency::SEK,
        Currency::NOK,
        Currency::DKK,
    ];

    /// ISO 4217 code.
    #[must_use]
    pub fn code(self) -> &'static str {
        CODES[self as usize].0
    }

    /// Symbol used when formatting amounts.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        CODES[self as usize].1
    }

    /// Looks up a currency by code, ignoring case and surrounding spaces.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|c| c.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CoreError::unsupported_currency(s))
    }
}
