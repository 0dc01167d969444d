//! Fixed canvas geometry.
//!
//! Documents embedding the ideogram rely on these offsets, so they are part of
//! the output contract.

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 200.0;
pub const MARGIN: f64 = 40.0;

pub const FONT_FAMILY: &str = "Arial, sans-serif";
pub const BACKGROUND_COLOR: &str = "#ffffff";

pub const TITLE_Y: f64 = 24.0;
pub const TITLE_FONT_SIZE: u32 = 16;

// Chromosome body
pub const CHROM_Y: f64 = 44.0;
pub const CHROM_HEIGHT: f64 = 36.0;
pub const CHROM_RADIUS: f64 = 12.0;
pub const CHROM_FILL: &str = "#f2f2f2";
pub const CHROM_STROKE: &str = "#333333";
pub const CLIP_ID: &str = "chromosome-clip";

// Marker band sits right under the body
pub const MARKER_TOP: f64 = CHROM_Y + CHROM_HEIGHT + 4.0;
pub const MARKER_SIZE: f64 = 8.0;

pub const AXIS_Y: f64 = 120.0;
pub const TICK_LENGTH: f64 = 5.0;
pub const TICK_FONT_SIZE: u32 = 10;

pub const REGION_LEGEND_Y: f64 = 164.0;
pub const VARIANT_LEGEND_Y: f64 = 186.0;
pub const VARIANT_LEGEND_OFFSET: f64 = 260.0;
pub const LEGEND_FONT_SIZE: u32 = 11;
