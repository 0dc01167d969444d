use chromox_core::{CoordinateMapper, VariantMarker};
use svg::node::element::{Group, Polygon, Title};

use crate::layout::{MARKER_SIZE, MARKER_TOP};
use crate::palette::status_color;

/// Minimum horizontal distance in pixels between two drawn markers.
pub const MIN_MARKER_SPACING: f64 = 3.0;

/// A marker that survived filtering and declutter, with its canvas x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedMarker<'a> {
    pub marker: &'a VariantMarker,
    pub x: f64,
}

/// Filter to drawable statuses, stable-sort by position and sweep left to
/// right, dropping any marker closer than `MIN_MARKER_SPACING` to the last
/// one kept. The earlier marker of a dense cluster always wins.
pub fn place_markers<'a>(variants: &'a [VariantMarker], mapper: &CoordinateMapper) -> Vec<PlacedMarker<'a>> {
    let mut candidates: Vec<&VariantMarker> = variants.iter().filter(|v| v.status.is_drawable()).collect();
    candidates.sort_by_key(|v| v.position);

    let mut placed = Vec::with_capacity(candidates.len());
    let mut last_drawn_x = f64::NEG_INFINITY;
    for marker in candidates {
        let x = mapper.pos_to_x(marker.position);
        if x - last_drawn_x >= MIN_MARKER_SPACING {
            placed.push(PlacedMarker { marker, x });
            last_drawn_x = x;
        }
    }

    log::debug!(
        "Placed {} of {} variant markers ({} not drawable)",
        placed.len(),
        variants.len(),
        variants.iter().filter(|v| !v.status.is_drawable()).count()
    );
    placed
}

pub fn marker_tooltip(marker: &VariantMarker) -> String {
    match &marker.label {
        Some(label) => format!("{} ({})", label, marker.status),
        None => format!("pos:{} ({})", marker.position, marker.status),
    }
}

/// Downward pointing triangle with its flat side at `top` and tip below.
pub fn triangle_points(x: f64, top: f64, size: f64) -> String {
    let half = size / 2.0;
    format!(
        "{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
        x - half,
        top,
        x + half,
        top,
        x,
        top + size
    )
}

pub fn variant_markers(variants: &[VariantMarker], mapper: &CoordinateMapper) -> Group {
    place_markers(variants, mapper)
        .into_iter()
        .fold(Group::new().set("class", "variant-markers"), |group, placed| {
            group.add(
                Polygon::new()
                    .set("class", "variant-marker")
                    .set("points", triangle_points(placed.x, MARKER_TOP, MARKER_SIZE))
                    .set("fill", status_color(placed.marker.status))
                    .add(Title::new(marker_tooltip(placed.marker))),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromox_core::VariantStatus;

    fn mapper(length: u64) -> CoordinateMapper {
        CoordinateMapper::new(length, 800.0, 40.0).unwrap()
    }

    #[test]
    fn drops_the_later_of_two_close_markers() {
        let variants = vec![
            VariantMarker::new(100, VariantStatus::Novel),
            VariantMarker::new(1, VariantStatus::Confirmed),
            VariantMarker::new(0, VariantStatus::Conflict),
        ];
        let placed = place_markers(&variants, &mapper(1000));
        let positions: Vec<u64> = placed.iter().map(|p| p.marker.position).collect();
        assert_eq!(positions, vec![0, 100]);
    }

    #[test]
    fn ties_keep_input_order() {
        let variants = vec![
            VariantMarker::new(50, VariantStatus::Novel).with_label("first"),
            VariantMarker::new(50, VariantStatus::Confirmed).with_label("second"),
        ];
        let placed = place_markers(&variants, &mapper(1000));
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].marker.label.as_deref(), Some("first"));
    }

    #[test]
    fn pending_never_placed() {
        let variants = vec![
            VariantMarker::new(10, VariantStatus::Pending),
            VariantMarker::new(900, VariantStatus::Pending),
        ];
        assert!(place_markers(&variants, &mapper(1000)).is_empty());
    }

    #[test]
    fn spacing_measured_from_last_drawn_marker() {
        // 0.72 px per position: 0, 4 (2.88 px) dropped, 5 (3.6 px) kept
        let variants: Vec<_> = [0u64, 4, 5]
            .iter()
            .map(|&p| VariantMarker::new(p, VariantStatus::Confirmed))
            .collect();
        let placed = place_markers(&variants, &mapper(1000));
        let positions: Vec<u64> = placed.iter().map(|p| p.marker.position).collect();
        assert_eq!(positions, vec![0, 5]);
    }

    #[test]
    fn tooltips() {
        let labelled = VariantMarker::new(2_887_824, VariantStatus::Confirmed).with_label("M42");
        assert_eq!(marker_tooltip(&labelled), "M42 (CONFIRMED)");
        let bare = VariantMarker::new(42, VariantStatus::Conflict);
        assert_eq!(marker_tooltip(&bare), "pos:42 (CONFLICT)");
    }

    #[test]
    fn triangle_points_down() {
        assert_eq!(triangle_points(100.0, 84.0, 8.0), "96.00,84.00 104.00,84.00 100.00,92.00");
    }

    #[test]
    fn group_contains_one_glyph_per_placed_marker() {
        let variants = vec![
            VariantMarker::new(0, VariantStatus::Confirmed),
            VariantMarker::new(500, VariantStatus::Novel),
            VariantMarker::new(501, VariantStatus::Novel),
        ];
        let out = variant_markers(&variants, &mapper(1000)).to_string();
        assert_eq!(out.matches("class=\"variant-marker\"").count(), 2);
        assert!(out.contains("pos:500 (NOVEL)"));
        assert!(!out.contains("pos:501"));
    }
}
