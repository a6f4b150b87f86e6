//! CLI configuration file.
//!
//! ```toml
//! holdings_file = "portfolio.json"
//!
//! [analytics]
//! default_payments_per_year = 4
//! window_radius_days = 7
//! max_windows = 5
//!
//! [analytics.fx]
//! native = "USD"
//! display = "EUR"
//! rate = 1.18
//!
//! [projection]
//! monthly_contribution = 100.0
//! years = 20
//! dividend_growth_pct = 5.0
//! price_growth_pct = 7.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use drip_portfolio::{AnalyticsConfig, ProjectionParams};

use crate::error::{CliError, CliResult};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "drip.toml";

/// Settings read from the TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Engine settings.
    pub analytics: AnalyticsConfig,

    /// Default projection parameters.
    pub projection: ProjectionParams,

    /// Portfolio snapshot used when `--holdings` is absent. Relative paths
    /// resolve against the config file's directory.
    pub holdings_file: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;

        if let (Some(file), Some(dir)) = (config.holdings_file.as_ref(), path.parent()) {
            if file.is_relative() {
                config.holdings_file = Some(dir.join(file));
            }
        }

        config
            .analytics
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        config
            .projection
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Loads the given file, else `drip.toml` if present, else defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => {
                tracing::debug!("loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                tracing::debug!("loading configuration from {DEFAULT_CONFIG_FILE}");
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }
}
