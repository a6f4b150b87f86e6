//! Holdings: a position in one stock.
//!
//! [`RawHolding`] is what a store hands back, with the stock join possibly
//! missing. [`EnrichedHolding`] is what the analytics accept; it always
//! carries its stock.

use super::Stock;
use crate::error::{PortfolioError, PortfolioResult};
use drip_core::types::Date;
use serde::{Deserialize, Serialize};

/// A holding as loaded from storage, before the stock join is verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHolding {
    /// Holding identifier (the ticker when the source has no other id).
    pub id: String,

    /// Number of shares held.
    pub shares: f64,

    /// Cost basis in the native currency.
    pub invested: f64,

    /// Purchase date, if recorded.
    #[serde(default)]
    pub bought_on: Option<Date>,

    /// The joined stock, absent when the join failed.
    #[serde(default)]
    pub stock: Option<Stock>,
}

/// A holding with its stock attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedHolding {
    /// Holding identifier.
    pub id: String,

    /// Number of shares held.
    pub shares: f64,

    /// Cost basis in the native currency.
    pub invested: f64,

    /// Purchase date, if recorded.
    #[serde(default)]
    pub bought_on: Option<Date>,

    /// The stock held.
    pub stock: Stock,
}

impl EnrichedHolding {
    /// Creates a holding of `shares` in `stock`, identified by its ticker.
    #[must_use]
    pub fn new(stock: Stock, shares: f64, invested: f64) -> Self {
        Self {
            id: stock.ticker.clone(),
            shares,
            invested,
            bought_on: None,
            stock,
        }
    }

    /// Sets the holding identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the purchase date.
    #[must_use]
    pub fn with_bought_on(mut self, date: Date) -> Self {
        self.bought_on = Some(date);
        self
    }

    /// Ticker of the stock held.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.stock.ticker
    }

    /// Market value in the native currency.
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.shares * self.stock.price
    }

    /// Annual dividend income in the native currency.
    #[must_use]
    pub fn annual_dividend(&self) -> f64 {
        self.shares * self.stock.dividend_per_share
    }

    /// Payments per year, falling back to `default` when no months are known.
    #[must_use]
    pub fn payments_per_year(&self, default: u32) -> u32 {
        match self.stock.payment_months.len() {
            0 => default,
            n => n as u32,
        }
    }

    /// Estimated single payment in the native currency.
    #[must_use]
    pub fn per_payment(&self, default_payments: u32) -> f64 {
        let n = self.payments_per_year(default_payments);
        if n == 0 {
            return 0.0;
        }
        self.annual_dividend() / f64::from(n)
    }
}

impl TryFrom<RawHolding> for EnrichedHolding {
    type Error = PortfolioError;

    fn try_from(raw: RawHolding) -> Result<Self, Self::Error> {
        let stock = raw
            .stock
            .ok_or_else(|| PortfolioError::missing_stock(raw.id.clone()))?;
        if raw.shares <= 0.0 {
            log::warn!("holding '{}' has non-positive shares {}", raw.id, raw.shares);
        }
        Ok(Self {
            id: raw.id,
            shares: raw.shares,
            invested: raw.invested,
            bought_on: raw.bought_on,
            stock,
        })
    }
}

/// Enriches every raw holding, failing on the first one without a stock.
pub fn enrich_all(raw: impl IntoIterator<Item = RawHolding>) -> PortfolioResult<Vec<EnrichedHolding>> {
    raw.into_iter().map(EnrichedHolding::try_from).collect()
}
