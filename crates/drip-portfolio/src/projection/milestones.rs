//! Income milestones along a projection.

use super::GrowthProjection;
use serde::{Deserialize, Serialize};

/// Annual income targets checked by default, in the display currency.
pub const DEFAULT_MILESTONE_TARGETS: [f64; 6] = [500.0, 1000.0, 2000.0, 3000.0, 5000.0, 10000.0];

/// When a projection first reaches an annual income target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Annual income target.
    pub target: f64,

    /// First projected year whose monthly income covers a twelfth of the
    /// target.
    pub year: Option<u32>,

    /// Whether the target is reached within the horizon.
    pub reached: bool,
}

/// Finds the first year reaching each target.
#[must_use]
pub fn milestones(projection: &GrowthProjection, targets: &[f64]) -> Vec<Milestone> {
    targets
        .iter()
        .map(|&target| {
            let year = projection
                .points
                .iter()
                .find(|p| p.monthly_dividends >= target / 12.0)
                .map(|p| p.year);
            Milestone {
                target,
                year,
                reached: year.is_some(),
            }
        })
        .collect()
}

impl GrowthProjection {
    /// Milestones for [`DEFAULT_MILESTONE_TARGETS`].
    #[must_use]
    pub fn default_milestones(&self) -> Vec<Milestone> {
        milestones(self, &DEFAULT_MILESTONE_TARGETS)
    }
}
