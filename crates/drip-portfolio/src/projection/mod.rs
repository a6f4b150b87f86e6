//! Long-horizon DRIP growth projection.

mod growth;
mod milestones;
mod params;

pub use growth::{project_growth, GrowthInputs, GrowthProjection, ProjectionPoint};
pub use milestones::{milestones, Milestone, DEFAULT_MILESTONE_TARGETS};
pub use params::{ProjectionParams, MAX_PROJECTION_YEARS};
