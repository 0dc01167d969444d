use chromox_core::{ChromosomeAnnotation, CoordinateMapper, GenomicPos, GenomicRegion, RegionType};
use svg::node::element::{ClipPath, Definitions, Group, Rectangle, Title};

use crate::layout::*;
use crate::palette::region_color;

/// Paint order of the region layers, background structure first.
///
/// This is a whitelist: a type missing here is never drawn, even when the
/// annotation contains it (STR currently has no slot).
pub const LAYER_ORDER: [RegionType; 7] = [
    RegionType::XDegenerate,
    RegionType::Heterochromatin,
    RegionType::Centromere,
    RegionType::Par,
    RegionType::Xtr,
    RegionType::Ampliconic,
    RegionType::Palindrome,
];

pub const MIN_BAND_WIDTH: f64 = 1.0;
const BAND_OPACITY: f64 = 0.85;

/// Horizontal extent of one band in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandGeometry {
    pub x: f64,
    pub width: f64,
}

/// Bands never collapse below one pixel, which also covers `end < start`.
pub fn band_geometry(mapper: &CoordinateMapper, region: &GenomicRegion) -> BandGeometry {
    let x = mapper.pos_to_x(region.start);
    let width = (mapper.pos_to_x(region.end) - x).max(MIN_BAND_WIDTH);
    BandGeometry { x, width }
}

/// Human formatting of a genomic coordinate: 2.78M, 10.0K, 512.
pub fn format_position(pos: GenomicPos) -> String {
    if pos >= 1_000_000 {
        format!("{:.2}M", pos as f64 / 1e6)
    } else if pos >= 1_000 {
        format!("{:.1}K", pos as f64 / 1e3)
    } else {
        pos.to_string()
    }
}

pub fn region_tooltip(region_type: RegionType, region: &GenomicRegion) -> String {
    format!(
        "{} ({}): {} - {}",
        region.name.as_deref().unwrap_or(region_type.label()),
        region_type.label(),
        format_position(region.start),
        format_position(region.end)
    )
}

/// Rounded rectangle standing in for the chromosome body.
pub fn silhouette(mapper: &CoordinateMapper) -> Rectangle {
    Rectangle::new()
        .set("x", mapper.left())
        .set("y", CHROM_Y)
        .set("width", mapper.drawable_width())
        .set("height", CHROM_HEIGHT)
        .set("rx", CHROM_RADIUS)
        .set("ry", CHROM_RADIUS)
}

/// All region bands, layered in `LAYER_ORDER` and clipped to the silhouette.
pub fn region_layers(annotation: &ChromosomeAnnotation, mapper: &CoordinateMapper) -> Group {
    let clip = Definitions::new().add(ClipPath::new().set("id", CLIP_ID).add(silhouette(mapper)));

    let mut drawn = 0usize;
    let mut bands = Group::new()
        .set("class", "region-layers")
        .set("clip-path", format!("url(#{})", CLIP_ID));

    for region_type in LAYER_ORDER {
        for region in annotation.regions(region_type) {
            let geometry = band_geometry(mapper, region);
            bands = bands.add(
                Rectangle::new()
                    .set("class", "region-band")
                    .set("data-type", region_type.key())
                    .set("x", geometry.x)
                    .set("y", CHROM_Y)
                    .set("width", geometry.width)
                    .set("height", CHROM_HEIGHT)
                    .set("fill", region_color(region_type))
                    .set("fill-opacity", BAND_OPACITY)
                    .add(Title::new(region_tooltip(region_type, region))),
            );
            drawn += 1;
        }
    }

    let skipped: usize = annotation
        .regions_by_type
        .iter()
        .filter(|(t, _)| !LAYER_ORDER.contains(*t))
        .map(|(_, regions)| regions.len())
        .sum();
    log::debug!("Drew {} region bands, {} outside the layer order", drawn, skipped);

    Group::new().add(clip).add(bands)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(1_000_000, CANVAS_WIDTH, MARGIN).unwrap()
    }

    #[test]
    fn zero_length_region_is_one_pixel_wide() {
        let g = band_geometry(&mapper(), &GenomicRegion::new(500, 500));
        assert_eq!(g.width, 1.0);
    }

    #[test]
    fn inverted_region_clamps_to_one_pixel() {
        let g = band_geometry(&mapper(), &GenomicRegion::new(600_000, 100_000));
        assert_eq!(g.width, 1.0);
        assert_eq!(g.x, mapper().pos_to_x(600_000));
    }

    #[test]
    fn wide_region_spans_mapped_extent() {
        let g = band_geometry(&mapper(), &GenomicRegion::new(0, 500_000));
        assert_eq!(g.x, MARGIN);
        assert_eq!(g.width, 360.0);
    }

    #[test]
    fn formats_positions() {
        assert_eq!(format_position(512), "512");
        assert_eq!(format_position(999), "999");
        assert_eq!(format_position(1_000), "1.0K");
        assert_eq!(format_position(10_000), "10.0K");
        assert_eq!(format_position(2_781_479), "2.78M");
        assert_eq!(format_position(1_000_000), "1.00M");
    }

    #[test]
    fn tooltip_prefers_region_name() {
        let named = GenomicRegion::named(10_001, 2_781_479, "PAR1");
        assert_eq!(region_tooltip(RegionType::Par, &named), "PAR1 (PAR): 10.0K - 2.78M");
        let anon = GenomicRegion::new(100, 200);
        assert_eq!(region_tooltip(RegionType::Xtr, &anon), "XTR (XTR): 100 - 200");
    }

    #[test]
    fn layer_order_excludes_str() {
        assert!(!LAYER_ORDER.contains(&RegionType::Str));
        assert_eq!(LAYER_ORDER.len(), RegionType::ALL.len() - 1);
    }

    #[test]
    fn layers_follow_fixed_order_not_input_order() {
        let ann = ChromosomeAnnotation::new(1_000_000)
            .with_regions(RegionType::Palindrome, vec![GenomicRegion::new(1, 2)])
            .with_regions(RegionType::XDegenerate, vec![GenomicRegion::new(3, 4)])
            .with_regions(RegionType::Str, vec![GenomicRegion::new(5, 6)]);
        let out = region_layers(&ann, &mapper()).to_string();
        let xdeg = out.find("data-type=\"X_DEGENERATE\"").unwrap();
        let pal = out.find("data-type=\"PALINDROME\"").unwrap();
        assert!(xdeg < pal);
        assert!(!out.contains("data-type=\"STR\""));
        assert_eq!(out.matches("class=\"region-band\"").count(), 2);
        assert!(out.contains("clip-path=\"url(#chromosome-clip)\""));
    }
}
