//! Dividend stock reference data.

use crate::error::{PortfolioError, PortfolioResult};
use drip_core::types::Date;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Three-letter month labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The set of months (0 = January) in which a stock pays its dividend.
///
/// Construction rejects indexes outside 0..=11, so every stored month is a
/// valid histogram slot. Order is irrelevant; duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct PaymentMonths(BTreeSet<u32>);

impl PaymentMonths {
    /// Builds a month set, failing on the first out-of-range index.
    pub fn new(months: impl IntoIterator<Item = u32>) -> PortfolioResult<Self> {
        let mut set = BTreeSet::new();
        for month in months {
            if month > 11 {
                return Err(PortfolioError::InvalidPaymentMonth { month });
            }
            set.insert(month);
        }
        Ok(Self(set))
    }

    /// Builds a month set, dropping out-of-range indexes with a warning.
    #[must_use]
    pub fn lenient(months: impl IntoIterator<Item = u32>) -> Self {
        let mut set = BTreeSet::new();
        for month in months {
            if month > 11 {
                log::warn!("ignoring payment month {month}: expected 0-11");
                continue;
            }
            set.insert(month);
        }
        Self(set)
    }

    /// An empty month set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of payments per year.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no payment months are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the stock pays in `month` (0 = January).
    #[must_use]
    pub fn contains(&self, month: u32) -> bool {
        self.0.contains(&month)
    }

    /// Iterates the months in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Month labels in calendar order, e.g. `["Mar", "Jun"]`.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(|m| MONTH_LABELS[m as usize]).collect()
    }
}

impl TryFrom<Vec<u32>> for PaymentMonths {
    type Error = PortfolioError;

    fn try_from(months: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(months)
    }
}

impl From<PaymentMonths> for Vec<u32> {
    fn from(months: PaymentMonths) -> Self {
        months.0.into_iter().collect()
    }
}

/// Reference data for a dividend-paying stock.
///
/// Monetary fields are in the native (listing) currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    /// Ticker symbol.
    pub ticker: String,

    /// Company name.
    #[serde(default)]
    pub name: String,

    /// Sector label; empty means unclassified.
    #[serde(default)]
    pub sector: String,

    /// Last price per share.
    pub price: f64,

    /// Annual dividend per share.
    pub dividend_per_share: f64,

    /// Dividend yield as published by the data source.
    #[serde(default)]
    pub dividend_yield: f64,

    /// Next ex-dividend date, if known.
    #[serde(default)]
    pub ex_dividend_date: Option<Date>,

    /// Next pay date, if known.
    #[serde(default)]
    pub pay_date: Option<Date>,

    /// Payment frequency label, e.g. "Quarterly".
    #[serde(default)]
    pub frequency: String,

    /// Months in which dividends are paid.
    #[serde(default)]
    pub payment_months: PaymentMonths,
}

impl Stock {
    /// Creates a stock with the fields the analytics cannot do without.
    #[must_use]
    pub fn new(ticker: impl Into<String>, price: f64, dividend_per_share: f64) -> Self {
        let dividend_yield = if price > 0.0 {
            dividend_per_share / price
        } else {
            0.0
        };
        Self {
            ticker: ticker.into(),
            name: String::new(),
            sector: String::new(),
            price,
            dividend_per_share,
            dividend_yield,
            ex_dividend_date: None,
            pay_date: None,
            frequency: String::new(),
            payment_months: PaymentMonths::empty(),
        }
    }

    /// Sets the company name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the sector label.
    #[must_use]
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = sector.into();
        self
    }

    /// Sets the ex-dividend date.
    #[must_use]
    pub fn with_ex_dividend_date(mut self, date: Date) -> Self {
        self.ex_dividend_date = Some(date);
        self
    }

    /// Sets the pay date.
    #[must_use]
    pub fn with_pay_date(mut self, date: Date) -> Self {
        self.pay_date = Some(date);
        self
    }

    /// Sets the frequency label.
    #[must_use]
    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Sets the payment months.
    #[must_use]
    pub fn with_payment_months(mut self, months: PaymentMonths) -> Self {
        self.payment_months = months;
        self
    }

    /// Returns true if the stock has any scheduled dividend date.
    #[must_use]
    pub fn has_dividend_date(&self) -> bool {
        self.ex_dividend_date.is_some() || self.pay_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_payment_months_rejects_out_of_range() {
        let err = PaymentMonths::new([0, 12]).unwrap_err();
        assert_eq!(err, PortfolioError::InvalidPaymentMonth { month: 12 });
    }

    #[test]
    fn test_payment_months_dedup_and_order() {
        let months = PaymentMonths::new([11, 2, 5, 2, 8]).unwrap();
        assert_eq!(months.len(), 4);
        assert_eq!(months.iter().collect::<Vec<_>>(), vec![2, 5, 8, 11]);
        assert_eq!(months.labels(), vec!["Mar", "Jun", "Sep", "Dec"]);
        assert!(months.contains(5));
        assert!(!months.contains(0));
    }

    #[test]
    fn test_payment_months_lenient() {
        let months = PaymentMonths::lenient([1, 13, 99]);
        assert_eq!(months.iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_payment_months_serde() {
        let months: PaymentMonths = serde_json::from_str("[3, 0]").unwrap();
        assert_eq!(serde_json::to_string(&months).unwrap(), "[0,3]");
        assert!(serde_json::from_str::<PaymentMonths>("[12]").is_err());
    }

    #[test]
    fn test_stock_builder() {
        let stock = Stock::new("KO", 60.0, 1.8)
            .with_name("Coca-Cola")
            .with_sector("Consumer Staples")
            .with_frequency("Quarterly");

        assert_eq!(stock.ticker, "KO");
        assert_eq!(stock.name, "Coca-Cola");
        assert_relative_eq!(stock.dividend_yield, 0.03, epsilon = 1e-12);
        assert!(!stock.has_dividend_date());

        let dated = stock.with_pay_date(Date::from_ymd(2025, 4, 1).unwrap());
        assert!(dated.has_dividend_date());
    }

    #[test]
    fn test_stock_deserialize_defaults() {
        let json = r#"{"ticker":"O","price":59.0,"dividend_per_share":3.1}"#;
        let stock: Stock = serde_json::from_str(json).unwrap();
        assert_eq!(stock.sector, "");
        assert!(stock.payment_months.is_empty());
        assert!(stock.ex_dividend_date.is_none());
    }
}
