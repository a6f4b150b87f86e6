//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CalendarArgs, ImportArgs, ProjectionArgs};

/// Dripfolio - Dividend portfolio analytics CLI
#[derive(Parser)]
#[command(name = "drip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "DRIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Portfolio snapshot (JSON). Overrides the configured file.
    #[arg(long, global = true, env = "DRIP_HOLDINGS")]
    pub holdings: Option<PathBuf>,

    /// Reference date for the calendar (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Portfolio value, gain, yield and income
    Summary,

    /// Value and dividend income by sector
    Sectors,

    /// Monthly income, upcoming dividends and investment windows
    Calendar(CalendarArgs),

    /// DRIP growth projection
    Projection(ProjectionArgs),

    /// Every analytic in one report
    Report,

    /// Import holdings from a Trading 212 CSV export
    Import(ImportArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
