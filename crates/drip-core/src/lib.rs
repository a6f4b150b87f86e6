//! # Dripfolio Core
//!
//! Foundational types shared by the Dripfolio crates:
//!
//! - **Types**: [`Date`], [`Currency`] and the fixed-rate [`FxRate`] used to
//!   express every monetary output in the display currency
//! - **Calendars**: weekend-aware business day stepping used to derive
//!   "buy by" deadlines ahead of ex-dividend dates
//! - **Rounding**: half-away-from-zero rounding applied at output boundaries
//!
//! ## Example
//!
//! ```rust
//! use drip_core::prelude::*;
//!
//! let fx = FxRate::default();
//! let eur = fx.to_display(118.0);
//! assert!((eur - 100.0).abs() < 1e-9);
//!
//! let ex_date = Date::from_ymd(2025, 1, 6).unwrap(); // Monday
//! let buy_by = WeekendCalendar.business_day_before(ex_date);
//! assert_eq!(buy_by, Date::from_ymd(2025, 1, 3).unwrap()); // Friday
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]

pub mod calendars;
pub mod error;
pub mod rounding;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{Calendar, WeekendCalendar};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::rounding::{round_dp, round_whole, MONEY_DP, RATIO_DP};
    pub use crate::types::{Currency, Date, FxRate};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, Date, FxRate};
