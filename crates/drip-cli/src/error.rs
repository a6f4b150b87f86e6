//! CLI error types.

use thiserror::Error;

use crate::cli::OutputFormat;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// No portfolio snapshot was given.
    #[error("No holdings file. Pass --holdings or set holdings_file in the config.")]
    MissingHoldings,

    /// Output format not available for a command.
    #[error("Output format {format:?} is not supported by '{command}'")]
    UnsupportedFormat {
        /// The requested format.
        format: OutputFormat,
        /// The command name.
        command: &'static str,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
