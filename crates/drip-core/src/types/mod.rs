//! Domain types shared across the Dripfolio crates.
//!
//! - [`Date`]: Calendar date with weekday helpers
//! - [`Currency`]: ISO currency codes
//! - [`FxRate`]: Fixed native-to-display conversion rate

mod currency;
mod date;
mod fx;

pub use currency::Currency;
pub use date::Date;
pub use fx::FxRate;
