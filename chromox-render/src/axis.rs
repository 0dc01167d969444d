use chromox_core::{CoordinateMapper, GenomicPos};
use svg::node::element::{Group, Line, Text};

use crate::layout::{AXIS_Y, FONT_FAMILY, TICK_FONT_SIZE, TICK_LENGTH};

pub const TICK_INTERVAL: GenomicPos = 10_000_000;

/// Tick positions from 0 in `TICK_INTERVAL` steps, never past `length`.
pub fn tick_positions(length: GenomicPos) -> Vec<GenomicPos> {
    let mut ticks = Vec::new();
    let mut pos: GenomicPos = 0;
    while pos <= length {
        ticks.push(pos);
        match pos.checked_add(TICK_INTERVAL) {
            Some(next) => pos = next,
            None => break,
        }
    }
    ticks
}

/// Whole megabases, truncated: 5_000_000 -> "5M", 15_500_000 -> "15M".
pub fn tick_label(pos: GenomicPos) -> String {
    format!("{}M", pos / 1_000_000)
}

pub fn scale_axis(mapper: &CoordinateMapper) -> Group {
    let baseline = Line::new()
        .set("class", "axis-baseline")
        .set("x1", mapper.left())
        .set("y1", AXIS_Y)
        .set("x2", mapper.right())
        .set("y2", AXIS_Y)
        .set("stroke", "black")
        .set("stroke-width", 1);

    tick_positions(mapper.chromosome_length())
        .into_iter()
        .fold(Group::new().set("class", "scale-axis").add(baseline), |group, pos| {
            let x = mapper.pos_to_x(pos);
            group
                .add(
                    Line::new()
                        .set("class", "axis-tick")
                        .set("x1", x)
                        .set("y1", AXIS_Y)
                        .set("x2", x)
                        .set("y2", AXIS_Y + TICK_LENGTH)
                        .set("stroke", "black")
                        .set("stroke-width", 1),
                )
                .add(
                    Text::new(tick_label(pos))
                        .set("class", "axis-label")
                        .set("x", x)
                        .set("y", AXIS_Y + TICK_LENGTH + 12.0)
                        .set("font-family", FONT_FAMILY)
                        .set("font-size", format!("{}px", TICK_FONT_SIZE))
                        .set("text-anchor", "middle"),
                )
        })
}
