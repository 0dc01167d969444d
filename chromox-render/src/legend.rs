//! Region-type and variant-status legends.
//!
//! The region legend lists only types present in the annotation; the variant
//! legend always shows every drawable status. Entry widths come from a
//! character-count heuristic rather than real text measurement.

use chromox_core::{ChromosomeAnnotation, RegionType, VariantStatus};
use svg::node::element::{Group, Polygon, Rectangle, Text};

use crate::layout::*;
use crate::markers::triangle_points;
use crate::palette::{region_color, status_color};

pub const SWATCH_SIZE: f64 = 10.0;
pub const CHAR_WIDTH: f64 = 7.0;
pub const LEGEND_SPACING: f64 = 14.0;
const LABEL_GAP: f64 = 4.0;

/// Display whitelist for the region legend, in legend order.
pub const REGION_LEGEND: [(RegionType, &str); 7] = [
    (RegionType::XDegenerate, "X-degenerate"),
    (RegionType::Par, "PAR"),
    (RegionType::Xtr, "XTR"),
    (RegionType::Ampliconic, "Ampliconic"),
    (RegionType::Palindrome, "Palindrome"),
    (RegionType::Heterochromatin, "Heterochromatin"),
    (RegionType::Centromere, "Centromere"),
];

/// Horizontal cursor advance after an entry with `label`.
pub fn legend_advance(label: &str) -> f64 {
    SWATCH_SIZE + label.chars().count() as f64 * CHAR_WIDTH + LEGEND_SPACING
}

pub fn region_legend_entries(annotation: &ChromosomeAnnotation) -> Vec<(RegionType, &'static str)> {
    REGION_LEGEND
        .iter()
        .copied()
        .filter(|(t, _)| annotation.has_type(*t))
        .collect()
}

fn legend_label(text: &str, x: f64, baseline: f64) -> Text {
    Text::new(text)
        .set("x", x + SWATCH_SIZE + LABEL_GAP)
        .set("y", baseline)
        .set("font-family", FONT_FAMILY)
        .set("font-size", format!("{}px", LEGEND_FONT_SIZE))
}

pub fn region_legend(annotation: &ChromosomeAnnotation) -> Group {
    let mut cursor = MARGIN;
    let mut group = Group::new().set("class", "region-legend");
    for (region_type, label) in region_legend_entries(annotation) {
        group = group.add(
            Group::new()
                .set("class", "legend-region")
                .add(
                    Rectangle::new()
                        .set("x", cursor)
                        .set("y", REGION_LEGEND_Y - SWATCH_SIZE)
                        .set("width", SWATCH_SIZE)
                        .set("height", SWATCH_SIZE)
                        .set("fill", region_color(region_type)),
                )
                .add(legend_label(label, cursor, REGION_LEGEND_Y)),
        );
        cursor += legend_advance(label);
    }
    group
}

pub fn variant_legend() -> Group {
    let mut cursor = CANVAS_WIDTH - VARIANT_LEGEND_OFFSET;
    let mut group = Group::new().set("class", "variant-legend");
    for status in VariantStatus::DRAWABLE {
        let label = status.label();
        group = group.add(
            Group::new()
                .set("class", "legend-variant")
                .add(
                    Polygon::new()
                        .set(
                            "points",
                            triangle_points(cursor + SWATCH_SIZE / 2.0, VARIANT_LEGEND_Y - SWATCH_SIZE, SWATCH_SIZE),
                        )
                        .set("fill", status_color(status)),
                )
                .add(legend_label(label, cursor, VARIANT_LEGEND_Y)),
        );
        cursor += legend_advance(label);
    }
    group
}
