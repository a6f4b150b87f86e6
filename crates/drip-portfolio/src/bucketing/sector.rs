//! Sector-based portfolio bucketing.
//!
//! Provides value and dividend-income distribution by sector.

use crate::types::{AnalyticsConfig, EnrichedHolding};
use drip_core::rounding::{round_dp, MONEY_DP};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label used for holdings whose stock has no sector.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// One sector's share of a portfolio metric, in the display currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorWeight {
    /// Sector label.
    pub name: String,

    /// Converted amount, rounded to cents.
    pub value: f64,
}

/// Distribution of a portfolio by sector.
///
/// Both lists hold the same sectors, each sorted by `value` descending.
/// Equal values keep the order in which the sector was first seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorBreakdown {
    /// Market value per sector.
    pub by_value: Vec<SectorWeight>,

    /// Annual dividend income per sector.
    pub by_dividend: Vec<SectorWeight>,
}

impl SectorBreakdown {
    /// Number of distinct sectors.
    #[must_use]
    pub fn sector_count(&self) -> usize {
        self.by_value.len()
    }

    /// Returns true if there are no sectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }

    /// The sector holding the most market value.
    #[must_use]
    pub fn largest_by_value(&self) -> Option<&SectorWeight> {
        self.by_value.first()
    }

    /// Share of total market value held in `sector`, as a fraction.
    #[must_use]
    pub fn value_weight(&self, sector: &str) -> Option<f64> {
        let total: f64 = self.by_value.iter().map(|s| s.value).sum();
        if total <= 0.0 {
            return None;
        }
        self.by_value
            .iter()
            .find(|s| s.name == sector)
            .map(|s| s.value / total)
    }
}

/// Returns the sector label for a holding, mapping empty to [`UNKNOWN_SECTOR`].
#[must_use]
pub fn sector_label(holding: &EnrichedHolding) -> &str {
    let sector = holding.stock.sector.as_str();
    if sector.is_empty() {
        UNKNOWN_SECTOR
    } else {
        sector
    }
}

/// Buckets holdings by sector.
///
/// # Arguments
///
/// * `holdings` - Holdings to bucket, in their natural order
/// * `config` - Analytics configuration (supplies the FX conversion)
///
/// # Returns
///
/// Per-sector market value and dividend income, each sorted descending.
#[must_use]
pub fn bucket_by_sector(holdings: &[EnrichedHolding], config: &AnalyticsConfig) -> SectorBreakdown {
    // Buckets in first-encounter order
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<(&str, f64, f64)> = Vec::new();

    for holding in holdings {
        let name = sector_label(holding);
        let slot = *index.entry(name).or_insert_with(|| {
            buckets.push((name, 0.0, 0.0));
            buckets.len() - 1
        });
        buckets[slot].1 += config.to_display(holding.market_value());
        buckets[slot].2 += config.to_display(holding.annual_dividend());
    }

    let by_value = sorted_weights(buckets.iter().map(|(name, value, _)| (*name, *value)));
    let by_dividend = sorted_weights(buckets.iter().map(|(name, _, dividend)| (*name, *dividend)));

    log::debug!("bucketed {} holdings into {} sectors", holdings.len(), buckets.len());

    SectorBreakdown {
        by_value,
        by_dividend,
    }
}

/// Rounds each amount, then sorts descending on the rounded value.
fn sorted_weights<'a>(amounts: impl Iterator<Item = (&'a str, f64)>) -> Vec<SectorWeight> {
    let mut weights: Vec<SectorWeight> = amounts
        .map(|(name, amount)| SectorWeight {
            name: name.to_string(),
            value: round_dp(amount, MONEY_DP),
        })
        .collect();
    // sort_by is stable, ties keep encounter order
    weights.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    weights
}
