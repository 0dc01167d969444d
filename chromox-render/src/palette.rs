//! Display color tables.
//!
//! Both tables are exhaustive matches, so a new region type or status does not
//! compile until it is given a color here.

use chromox_core::{RegionType, VariantStatus};

/// Used when a color is looked up by a name that matches no known key.
pub const NEUTRAL_COLOR: &str = "#cccccc";

pub fn region_color(region_type: RegionType) -> &'static str {
    match region_type {
        RegionType::Par => "#4caf50",
        RegionType::XDegenerate => "#90caf9",
        RegionType::Xtr => "#ffb74d",
        RegionType::Ampliconic => "#ba68c8",
        RegionType::Palindrome => "#f06292",
        RegionType::Heterochromatin => "#9e9e9e",
        RegionType::Centromere => "#616161",
        RegionType::Str => "#ffd54f",
    }
}

pub fn status_color(status: VariantStatus) -> &'static str {
    match status {
        VariantStatus::Confirmed => "#2e7d32",
        VariantStatus::Novel => "#1565c0",
        VariantStatus::Conflict => "#c62828",
        VariantStatus::Pending => "#757575",
    }
}

/// Resolve a region type or status by its wire key ("PAR", "NOVEL", ...).
pub fn color_for_key(key: &str) -> &'static str {
    if let Some(region_type) = RegionType::from_key(key) {
        return region_color(region_type);
    }
    VariantStatus::from_key(key)
        .map(status_color)
        .unwrap_or(NEUTRAL_COLOR)
}
