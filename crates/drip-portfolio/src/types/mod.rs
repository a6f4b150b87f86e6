//! Input types for the analytics.

mod config;
mod holding;
mod stock;

pub use config::{
    AnalyticsConfig, DEFAULT_MAX_WINDOWS, DEFAULT_PAYMENTS_PER_YEAR, DEFAULT_WINDOW_RADIUS_DAYS,
};
pub use holding::{enrich_all, EnrichedHolding, RawHolding};
pub use stock::{PaymentMonths, Stock, MONTH_LABELS};
