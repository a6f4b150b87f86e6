//! # Dripfolio Portfolio
//!
//! Analytics for a portfolio of dividend-paying stocks.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Enriched input**: Analytics accept only [`EnrichedHolding`], so every
//!   holding is known to carry its stock
//! - **One conversion point**: Every monetary output passes through the
//!   configured [`FxRate`](drip_core::FxRate) once
//! - **Round at the edge**: Sums run at full precision and are rounded only
//!   when a result is built
//!
//! ## Features
//!
//! - **Summary**: Invested, value, gain, weighted yield, periodic income
//! - **Sectors**: Value and dividend income by sector, largest first
//! - **Calendar**: Monthly income, upcoming events, investment windows
//! - **Projection**: Year-by-year DRIP growth with income milestones
//!
//! ## Quick Start
//!
//! ```rust
//! use drip_portfolio::prelude::*;
//!
//! let stock = Stock::new("ABC", 100.0, 4.0)
//!     .with_sector("Industrials")
//!     .with_payment_months(PaymentMonths::new([2, 5, 8, 11]).unwrap());
//! let holdings = vec![EnrichedHolding::new(stock, 10.0, 900.0)];
//!
//! let config = AnalyticsConfig::default();
//! let summary = calculate_summary(&holdings, &config);
//! assert!((summary.total_value - 847.46).abs() < 1e-9);
//!
//! let sectors = bucket_by_sector(&holdings, &config);
//! assert_eq!(sectors.by_value[0].name, "Industrials");
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Portfolio summary
//! - [`bucketing`] - Sector distribution
//! - [`calendar`] - Monthly income, upcoming dividends, investment windows
//! - [`projection`] - DRIP growth projection and milestones
//! - [`report`] - All of the above in one result
//! - [`types`] - Stocks, holdings and configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

pub mod analytics;
pub mod bucketing;
pub mod calendar;
pub mod error;
pub mod projection;
pub mod report;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use types::{enrich_all, AnalyticsConfig, EnrichedHolding, PaymentMonths, RawHolding, Stock};

// Re-export analytics
pub use analytics::{calculate_summary, PortfolioSummary};
pub use bucketing::{bucket_by_sector, SectorBreakdown, SectorWeight};
pub use calendar::{
    investment_windows, monthly_income, upcoming_dividends, DividendCalendar, InvestmentWindow,
    MonthlyIncome, UpcomingDividend, WindowStock,
};
pub use projection::{
    milestones, project_growth, GrowthInputs, GrowthProjection, Milestone, ProjectionParams,
    ProjectionPoint,
};
pub use report::{project_portfolio, PortfolioReport};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analytics::{calculate_summary, PortfolioSummary};
    pub use crate::bucketing::{bucket_by_sector, SectorBreakdown, SectorWeight, UNKNOWN_SECTOR};
    pub use crate::calendar::{
        days_until, investment_windows, monthly_income, upcoming_dividends, DividendCalendar,
        InvestmentWindow, MonthlyIncome, UpcomingDividend, WindowStock,
    };
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::projection::{
        milestones, project_growth, GrowthInputs, GrowthProjection, Milestone, ProjectionParams,
        ProjectionPoint, DEFAULT_MILESTONE_TARGETS,
    };
    pub use crate::report::{project_portfolio, PortfolioReport};
    pub use crate::types::{
        enrich_all, AnalyticsConfig, EnrichedHolding, PaymentMonths, RawHolding, Stock,
        MONTH_LABELS,
    };
    pub use drip_core::types::{Currency, Date, FxRate};
}
