//! Portfolio-level aggregate analytics.

mod summary;

pub use summary::{calculate_summary, PortfolioSummary, DAYS_PER_YEAR};
