//! # Dripfolio Ext File
//!
//! File-based holding and stock data for Dripfolio.
//!
//! This crate stands in for a holdings store:
//! - JSON portfolio snapshots (stock catalog plus holdings)
//! - Trading 212 CSV import against a stock catalog
//!
//! Loaders hand back [`RawHolding`]s; turning them into analytics input is
//! the caller's job, via [`drip_portfolio::enrich_all`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod import;
mod snapshot;

pub use error::{FileError, FileResult};
pub use import::{
    import_trading212, import_trading212_file, import_trading212_with_held, ImportReport,
};
pub use snapshot::{HoldingRecord, JsonSnapshotSource, PortfolioSnapshot, StockCatalog};

use std::path::Path;

use drip_portfolio::types::{EnrichedHolding, RawHolding};

/// A source of holdings joined to their stocks.
pub trait HoldingSource {
    /// Loads every holding, with its stock when the join succeeded.
    fn load_holdings(&self) -> FileResult<Vec<RawHolding>>;
}

/// Error from [`load_enriched`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be loaded.
    #[error(transparent)]
    File(#[from] FileError),

    /// A holding referenced a stock missing from the catalog.
    #[error(transparent)]
    Portfolio(#[from] drip_portfolio::PortfolioError),
}

/// Loads a JSON snapshot and enriches every holding.
pub fn load_enriched(path: impl AsRef<Path>) -> Result<Vec<EnrichedHolding>, LoadError> {
    let raw = JsonSnapshotSource::new(path).load_holdings()?;
    Ok(drip_portfolio::enrich_all(raw)?)
}
