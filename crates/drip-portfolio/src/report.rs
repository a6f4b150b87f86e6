//! Complete portfolio report.

use crate::analytics::PortfolioSummary;
use crate::bucketing::{bucket_by_sector, SectorBreakdown};
use crate::calendar::DividendCalendar;
use crate::error::PortfolioResult;
use crate::projection::{project_growth, GrowthInputs, GrowthProjection, Milestone, ProjectionParams};
use crate::types::{AnalyticsConfig, EnrichedHolding};
use drip_core::types::Date;
use serde::{Deserialize, Serialize};

/// Every analytic for one portfolio snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Date the calendar offsets are measured from.
    pub as_of: Date,

    /// Headline figures.
    pub summary: PortfolioSummary,

    /// Sector distribution.
    pub sectors: SectorBreakdown,

    /// Dividend calendar.
    pub calendar: DividendCalendar,

    /// Growth projection.
    pub projection: GrowthProjection,

    /// Income milestones along the projection.
    pub milestones: Vec<Milestone>,
}

impl PortfolioReport {
    /// Computes the full report.
    ///
    /// The projection starts from the summary's reported (rounded) value
    /// and yield, so it matches the figures shown next to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or projection parameters are
    /// invalid.
    pub fn compute(
        holdings: &[EnrichedHolding],
        today: Date,
        config: &AnalyticsConfig,
        params: &ProjectionParams,
    ) -> PortfolioResult<Self> {
        config.validate()?;
        params.validate()?;

        let summary = PortfolioSummary::calculate(holdings, config);
        let sectors = bucket_by_sector(holdings, config);
        let calendar = DividendCalendar::compute(holdings, today, config);
        let projection = project_growth(&GrowthInputs::from_summary(&summary, params));
        let milestones = projection.default_milestones();

        log::info!(
            "report as of {today}: {} holdings, {} sectors, {} windows",
            summary.holding_count,
            sectors.sector_count(),
            calendar.investment_windows.len()
        );

        Ok(Self {
            as_of: today,
            summary,
            sectors,
            calendar,
            projection,
            milestones,
        })
    }
}

/// Projects growth for a portfolio with explicit parameters.
///
/// # Errors
///
/// Returns an error if the parameters are invalid.
pub fn project_portfolio(
    holdings: &[EnrichedHolding],
    config: &AnalyticsConfig,
    params: &ProjectionParams,
) -> PortfolioResult<GrowthProjection> {
    params.validate()?;
    let summary = PortfolioSummary::calculate(holdings, config);
    Ok(project_growth(&GrowthInputs::from_summary(&summary, params)))
}
