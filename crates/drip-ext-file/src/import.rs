//! Broker CSV import (Trading 212 "portfolio" export).
//!
//! Column layout: ticker in column 0, invested amount in column 2, share
//! count in column 5. Numbers may use a decimal comma.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FileError, FileResult};
use crate::snapshot::{HoldingRecord, StockCatalog};

const TICKER_COLUMN: usize = 0;
const INVESTED_COLUMN: usize = 2;
const SHARES_COLUMN: usize = 5;
const MIN_FIELDS: usize = 6;

/// Summary row label in the export; never a holding.
const TOTAL_ROW: &str = "Total";

/// Outcome of a CSV import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Holdings created, in file order.
    pub holdings: Vec<HoldingRecord>,

    /// Number of holdings created.
    pub imported: usize,

    /// Number of data rows not turned into holdings.
    pub skipped: usize,

    /// Tickers not found in the catalog, in file order.
    pub unknown: Vec<String>,
}

/// Parses a Trading 212 export against a stock catalog.
///
/// The first row is a header. Blank rows are ignored. Rows with fewer than
/// six fields, an empty ticker, the `Total` row, non-positive share counts,
/// unknown tickers and repeats of an already imported ticker are counted as
/// skipped.
pub fn import_trading212<R: Read>(reader: R, catalog: &StockCatalog) -> FileResult<ImportReport> {
    import_trading212_with_held(reader, catalog, &[])
}

/// Parses a Trading 212 export on top of holdings already owned.
///
/// Rows for a stock in `held` are skipped; existing holdings are never
/// replaced.
pub fn import_trading212_with_held<R: Read>(
    reader: R,
    catalog: &StockCatalog,
    held: &[HoldingRecord],
) -> FileResult<ImportReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut report = ImportReport::default();
    let mut seen: HashSet<String> =
        held.iter().map(|h| h.ticker.trim().to_uppercase()).collect();

    for result in csv_reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() < MIN_FIELDS {
            log::debug!("skipping short row with {} fields", record.len());
            report.skipped += 1;
            continue;
        }

        let ticker = record[TICKER_COLUMN].trim_matches('"').trim();
        let invested = parse_amount(&record[INVESTED_COLUMN]);
        let shares = parse_amount(&record[SHARES_COLUMN]);

        if ticker.is_empty() || ticker == TOTAL_ROW || shares <= 0.0 {
            report.skipped += 1;
            continue;
        }

        let Some(stock) = catalog.get(ticker) else {
            log::warn!("unknown ticker {ticker} in import");
            report.unknown.push(ticker.to_string());
            report.skipped += 1;
            continue;
        };

        if !seen.insert(stock.ticker.to_uppercase()) {
            log::warn!("{ticker} is already held, skipping");
            report.skipped += 1;
            continue;
        }

        report.holdings.push(HoldingRecord {
            id: None,
            ticker: stock.ticker.clone(),
            shares,
            invested,
            bought_on: None,
        });
        report.imported += 1;
    }

    log::info!(
        "import finished: {} imported, {} skipped, {} unknown",
        report.imported,
        report.skipped,
        report.unknown.len()
    );
    Ok(report)
}

/// Imports a Trading 212 export file.
pub fn import_trading212_file(
    path: impl AsRef<Path>,
    catalog: &StockCatalog,
) -> FileResult<ImportReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FileError::io(path, &e))?;
    import_trading212(file, catalog)
}

/// Parses a number that may be quoted or use a decimal comma. Unparseable
/// text reads as zero.
fn parse_amount(field: &str) -> f64 {
    field
        .trim_matches('"')
        .trim()
        .replace(',', ".")
        .parse()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use drip_portfolio::types::Stock;

    fn catalog() -> StockCatalog {
        StockCatalog::new(vec![
            Stock::new("KO", 62.0, 1.94),
            Stock::new("O", 57.0, 3.16),
            Stock::new("PEP", 150.0, 5.42),
        ])
    }

    #[test]
    fn test_parse_amount() {
        assert_relative_eq!(parse_amount("12.5"), 12.5);
        assert_relative_eq!(parse_amount("\"1234,56\""), 1234.56);
        assert_relative_eq!(parse_amount(" 3 "), 3.0);
        assert_relative_eq!(parse_amount("n/a"), 0.0);
        assert_relative_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn test_import() {
        let csv = "\
Slice,Name,Invested value,Value,Result,Owned quantity
KO,Coca-Cola,2200.00,2480.00,280.00,40
\"O\",\"Realty Income\",\"5600,50\",5700,100,\"100,5\"

ZZZ,Unknown Corp,10,10,0,1
PEP,PepsiCo,1650,1500,-150,0
short,row
Total,,9460.50,9680,220,0
";
        let report = import_trading212(csv.as_bytes(), &catalog()).unwrap();

        assert_eq!(report.imported, 2);
        assert_eq!(report.skipped, 4);
        assert_eq!(report.unknown, vec!["ZZZ".to_string()]);

        assert_eq!(report.holdings[0].ticker, "KO");
        assert_relative_eq!(report.holdings[0].shares, 40.0);
        assert_relative_eq!(report.holdings[0].invested, 2200.0);
        assert_eq!(report.holdings[1].ticker, "O");
        assert_relative_eq!(report.holdings[1].shares, 100.5);
        assert_relative_eq!(report.holdings[1].invested, 5600.5);
    }

    #[test]
    fn test_case_insensitive_and_duplicates() {
        let csv = "h1,h2,h3,h4,h5,h6\nko,x,1,1,1,2\nKO,x,1,1,1,3\n";
        let report = import_trading212(csv.as_bytes(), &catalog()).unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.holdings[0].ticker, "KO");
        assert_relative_eq!(report.holdings[0].shares, 2.0);
    }

    #[test]
    fn test_already_held_rows_are_skipped() {
        let held = vec![HoldingRecord {
            id: None,
            ticker: "ko".into(),
            shares: 10.0,
            invested: 500.0,
            bought_on: None,
        }];
        let csv = "h1,h2,h3,h4,h5,h6\nKO,x,900,1,1,20\nPEP,x,300,1,1,2\n";
        let report = import_trading212_with_held(csv.as_bytes(), &catalog(), &held).unwrap();

        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.holdings.len(), 1);
        assert_eq!(report.holdings[0].ticker, "PEP");
    }

    #[test]
    fn test_header_only() {
        let report = import_trading212("a,b,c,d,e,f\n".as_bytes(), &catalog()).unwrap();
        assert_eq!(report, ImportReport::default());
    }

    #[test]
    fn test_missing_file() {
        let err = import_trading212_file("/nonexistent/export.csv", &catalog()).unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
    }
}
