// File: crates/dashboard-core/src/grid.rs
// Summary: Horizontal grid lines and their value labels.

use crate::dataset::round_half_up;
use crate::types::{ChartLayout, GRID_LINES};

/// One horizontal reference line; `label` is the value it marks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub label_x: f64,
    pub label_y: f64,
    pub label: i64,
}

/// Grid lines top-down: line `i` marks `max - i*max/4` and sits `i/4` of the
/// plot band below the top margin.
pub fn grid_lines(layout: &ChartLayout, max: f64) -> Vec<GridLine> {
    let steps = (GRID_LINES - 1) as f64;
    let max = if max.is_finite() { max } else { 0.0 };
    (0..GRID_LINES)
        .map(|i| {
            let i = i as f64;
            let offset = i * layout.plot_height / steps;
            GridLine {
                x1: layout.grid_left,
                x2: layout.grid_right(),
                y: layout.top + offset,
                label_x: layout.tick_label_x,
                label_y: layout.top + layout.tick_label_dy + offset,
                label: round_half_up(max - i * max / steps),
            }
        })
        .collect()
}
