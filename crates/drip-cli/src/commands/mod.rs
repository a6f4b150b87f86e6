//! CLI command implementations.

pub mod calendar;
pub mod import;
pub mod projection;
pub mod report;
pub mod sectors;
pub mod summary;

// Re-export submodules for convenience
pub use calendar::CalendarArgs;
pub use import::ImportArgs;
pub use projection::ProjectionArgs;

use std::path::PathBuf;

use drip_core::types::{Currency, Date};
use drip_portfolio::EnrichedHolding;

use crate::cli::{Cli, OutputFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration.
    pub config: CliConfig,
    /// Snapshot path, flag first, then config.
    pub holdings_path: Option<PathBuf>,
    /// Reference date, captured once per run.
    pub today: Date,
    /// Output format.
    pub format: OutputFormat,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl Context {
    /// Resolves configuration, snapshot path and reference date.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let config = CliConfig::load(cli.config.as_deref())?;
        let today = match cli.today.as_deref() {
            Some(s) => parse_date(s)?,
            None => Date::today(),
        };
        let holdings_path = cli.holdings.clone().or_else(|| config.holdings_file.clone());

        Ok(Self {
            config,
            holdings_path,
            today,
            format: cli.format,
            quiet: cli.quiet,
        })
    }

    /// Loads and enriches the portfolio snapshot.
    pub fn load_holdings(&self) -> anyhow::Result<Vec<EnrichedHolding>> {
        let path = self.holdings_path.as_ref().ok_or(CliError::MissingHoldings)?;
        let holdings = drip_ext_file::load_enriched(path)?;
        tracing::info!("loaded {} holdings from {}", holdings.len(), path.display());
        Ok(holdings)
    }

    /// Currency every figure is reported in.
    pub fn currency(&self) -> Currency {
        self.config.analytics.fx.display
    }
}
