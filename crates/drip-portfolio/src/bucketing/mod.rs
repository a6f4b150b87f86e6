//! Portfolio bucketing.

mod sector;

pub use sector::{bucket_by_sector, sector_label, SectorBreakdown, SectorWeight, UNKNOWN_SECTOR};
