//! Output rounding.
//!
//! All engine arithmetic runs in `f64` at full precision. Values are rounded
//! only when a result structure is built, using half-away-from-zero.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for monetary outputs.
pub const MONEY_DP: u32 = 2;

/// Decimal places for ratios (gain %, yields, yield on cost).
pub const RATIO_DP: u32 = 4;

/// Rounds `value` to `dp` decimal places, midpoints away from zero.
///
/// Values that cannot be represented as a [`Decimal`] (non-finite or beyond
/// its range) fall back to float rounding.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    match Decimal::from_f64(value) {
        Some(d) => d
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(value),
        None => {
            if !value.is_finite() {
                return value;
            }
            let factor = 10f64.powi(dp as i32);
            (value * factor).round() / factor
        }
    }
}

/// Rounds to whole units, midpoints away from zero.
pub fn round_whole(value: f64) -> i64 {
    value.round() as i64
}
