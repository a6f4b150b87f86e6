//! JSON portfolio snapshots.
//!
//! A snapshot lists the stock catalog and the user's holdings separately;
//! holdings name their stock by ticker.
//!
//! ```json
//! {
//!   "stocks": [{"ticker": "KO", "price": 62.0, "dividend_per_share": 1.94,
//!               "payment_months": [3, 6, 9, 11]}],
//!   "holdings": [{"ticker": "KO", "shares": 40, "invested": 2200}]
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use drip_core::types::Date;
use drip_portfolio::types::{RawHolding, Stock};

use crate::error::{FileError, FileResult};
use crate::import::{import_trading212_with_held, ImportReport};
use crate::HoldingSource;

// =============================================================================
// RECORDS
// =============================================================================

/// A holding as stored in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingRecord {
    /// Optional holding identifier; the ticker is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Ticker of the stock held.
    pub ticker: String,

    /// Number of shares.
    pub shares: f64,

    /// Cost basis in the native currency.
    pub invested: f64,

    /// Purchase date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bought_on: Option<Date>,
}

/// The on-disk snapshot layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Stock catalog.
    #[serde(default)]
    pub stocks: Vec<Stock>,

    /// Holdings referencing the catalog by ticker.
    #[serde(default)]
    pub holdings: Vec<HoldingRecord>,
}

impl PortfolioSnapshot {
    /// Reads a snapshot from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> FileResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| FileError::io(path, &e))?;
        serde_json::from_str(&content).map_err(|e| FileError::json(path, &e))
    }

    /// Writes the snapshot as pretty-printed JSON.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> FileResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| FileError::json(path, &e))?;
        fs::write(path, json).map_err(|e| FileError::io(path, &e))
    }

    /// The stock catalog indexed by ticker.
    #[must_use]
    pub fn catalog(&self) -> StockCatalog {
        StockCatalog::new(self.stocks.clone())
    }

    /// Imports a Trading 212 export and appends the new holdings.
    ///
    /// Rows for stocks already held are skipped, so existing holdings are
    /// kept as they are.
    pub fn import_trading212_file(&mut self, path: impl AsRef<Path>) -> FileResult<ImportReport> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|e| FileError::io(path, &e))?;
        let report = import_trading212_with_held(file, &self.catalog(), &self.holdings)?;
        self.holdings.extend(report.holdings.iter().cloned());
        Ok(report)
    }

    /// Joins every holding to its stock.
    ///
    /// Holdings whose ticker is not in the catalog come back without a
    /// stock; enriching them fails with a missing-stock error.
    #[must_use]
    pub fn raw_holdings(&self) -> Vec<RawHolding> {
        let catalog = self.catalog();
        self.holdings
            .iter()
            .map(|record| {
                let stock = catalog.get(&record.ticker).cloned();
                if stock.is_none() {
                    log::warn!("holding {} references unknown stock", record.ticker);
                }
                RawHolding {
                    id: record.id.clone().unwrap_or_else(|| record.ticker.clone()),
                    shares: record.shares,
                    invested: record.invested,
                    bought_on: record.bought_on,
                    stock,
                }
            })
            .collect()
    }
}

// =============================================================================
// STOCK CATALOG
// =============================================================================

/// Stocks indexed by upper-cased ticker.
#[derive(Debug, Clone, Default)]
pub struct StockCatalog {
    stocks: Vec<Stock>,
    by_ticker: HashMap<String, usize>,
}

impl StockCatalog {
    /// Builds a catalog. A repeated ticker keeps its first entry.
    #[must_use]
    pub fn new(stocks: Vec<Stock>) -> Self {
        let mut by_ticker = HashMap::with_capacity(stocks.len());
        for (i, stock) in stocks.iter().enumerate() {
            let key = stock.ticker.trim().to_uppercase();
            if by_ticker.contains_key(&key) {
                log::warn!("duplicate stock {key} in catalog, keeping first");
                continue;
            }
            by_ticker.insert(key, i);
        }
        Self { stocks, by_ticker }
    }

    /// Looks up a stock by ticker, ignoring case and surrounding spaces.
    #[must_use]
    pub fn get(&self, ticker: &str) -> Option<&Stock> {
        self.by_ticker
            .get(&ticker.trim().to_uppercase())
            .map(|&i| &self.stocks[i])
    }

    /// Number of distinct stocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_ticker.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_ticker.is_empty()
    }

    /// All stocks in file order.
    #[must_use]
    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }
}

// =============================================================================
// JSON SNAPSHOT SOURCE
// =============================================================================

/// Holding source backed by a JSON snapshot file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    file_path: PathBuf,
}

impl JsonSnapshotSource {
    /// Create a source reading `file_path` on every load.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl HoldingSource for JsonSnapshotSource {
    fn load_holdings(&self) -> FileResult<Vec<RawHolding>> {
        let snapshot = PortfolioSnapshot::from_file(&self.file_path)?;
        log::debug!(
            "loaded {} holdings and {} stocks from {}",
            snapshot.holdings.len(),
            snapshot.stocks.len(),
            self.file_path.display()
        );
        Ok(snapshot.raw_holdings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNAPSHOT: &str = r#"{
        "stocks": [
            {"ticker": "KO", "name": "Coca-Cola", "sector": "Consumer Staples",
             "price": 62.0, "dividend_per_share": 1.94,
             "ex_dividend_date": "2025-03-14", "frequency": "Quarterly",
             "payment_months": [3, 6, 9, 11]},
            {"ticker": "O", "price": 57.0, "dividend_per_share": 3.16}
        ],
        "holdings": [
            {"ticker": "ko", "shares": 40, "invested": 2200, "bought_on": "2023-05-02"},
            {"id": "h2", "ticker": "O", "shares": 100, "invested": 5600},
            {"ticker": "MISSING", "shares": 1, "invested": 10}
        ]
    }"#;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_import_keeps_existing_holdings() {
        let mut snapshot: PortfolioSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        snapshot.holdings.truncate(1);
        let export = write_temp(
            "Slice,Name,Invested value,Value,Result,Owned quantity\n\
             KO,Coca-Cola,900,950,50,15\n\
             O,Realty Income,5600,5700,100,100\n",
        );

        let report = snapshot.import_trading212_file(export.path()).unwrap();

        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(snapshot.holdings.len(), 2);
        assert_eq!(snapshot.holdings[0].ticker, "ko");
        assert_eq!(snapshot.holdings[0].shares, 40.0);
        assert_eq!(snapshot.holdings[1].ticker, "O");
    }

    #[test]
    fn test_load_and_join() {
        let file = write_temp(SNAPSHOT);
        let source = JsonSnapshotSource::new(file.path());
        let raw = source.load_holdings().unwrap();

        assert_eq!(raw.len(), 3);
        assert_eq!(raw[0].id, "ko");
        assert_eq!(raw[0].stock.as_ref().unwrap().ticker, "KO");
        assert_eq!(raw[0].stock.as_ref().unwrap().payment_months.len(), 4);
        assert_eq!(raw[0].bought_on, Some(Date::from_ymd(2023, 5, 2).unwrap()));
        assert_eq!(raw[1].id, "h2");
        assert!(raw[2].stock.is_none());
    }

    #[test]
    fn test_catalog_lookup() {
        let snapshot: PortfolioSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        let catalog = snapshot.catalog();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(" o ").is_some());
        assert!(catalog.get("PEP").is_none());
    }

    #[test]
    fn test_duplicate_catalog_keeps_first() {
        let catalog = StockCatalog::new(vec![
            Stock::new("KO", 60.0, 1.0),
            Stock::new("ko", 99.0, 1.0),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("KO").unwrap().price, 60.0);
        assert_eq!(catalog.stocks().len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let source = JsonSnapshotSource::new("/nonexistent/portfolio.json");
        assert!(matches!(source.load_holdings(), Err(FileError::Io { .. })));
    }

    #[test]
    fn test_invalid_payment_month_rejected() {
        let file = write_temp(
            r#"{"stocks": [{"ticker": "X", "price": 1, "dividend_per_share": 0,
                "payment_months": [12]}]}"#,
        );
        let err = PortfolioSnapshot::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FileError::Json { .. }));
    }

    #[test]
    fn test_write_round_trip() {
        let snapshot: PortfolioSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        snapshot.write_to_file(&path).unwrap();
        assert_eq!(PortfolioSnapshot::from_file(&path).unwrap(), snapshot);
    }
}
