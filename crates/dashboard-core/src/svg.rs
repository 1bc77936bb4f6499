// File: crates/dashboard-core/src/svg.rs
// Summary: SVG emission for the bar and line chart models.
// Notes:
// - Output is self-contained (presentation attributes, no stylesheet needed).
// - Numbers print with Rust's shortest round-trip float formatting, so integral
//   coordinates render without a decimal point.

use crate::bar::BarChartModel;
use crate::grid::GridLine;
use crate::line::{LineChartModel, POINT_RADIUS, STROKE_WIDTH};
use crate::markup::Markup;
use crate::theme::Palette;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const TEXT_SM: u32 = 14;
const TEXT_XS: u32 = 12;

pub fn bar_chart_svg(model: &BarChartModel, palette: &Palette) -> String {
    let mut w = Markup::with_capacity(4 * 1024);
    write_bar_chart(&mut w, model, palette);
    w.finish()
}

pub fn line_chart_svg(model: &LineChartModel, palette: &Palette) -> String {
    let mut w = Markup::with_capacity(4 * 1024);
    write_line_chart(&mut w, model, palette);
    w.finish()
}

pub fn write_bar_chart(w: &mut Markup, model: &BarChartModel, palette: &Palette) {
    open_svg(w, model.width, model.height);
    write_grid(w, &model.grid, palette);

    for group in &model.groups {
        w.start("g").attr("data-period", group.period).open();
        for bar in &group.bars {
            w.start("rect")
                .attr("x", bar.x)
                .attr("y", bar.y)
                .attr("width", bar.width)
                .attr("height", bar.height)
                .attr("fill", palette.series(bar.city).hex())
                .close_empty();
        }
        text(w, group.label_x, group.label_y, "middle", TEXT_SM, false, &palette.tick_label.hex(), group.label);
        for bar in &group.bars {
            text(w, bar.label_x, bar.label_y, "middle", TEXT_XS, true, &palette.bar_value.hex(), bar.value);
        }
        w.end("g");
    }

    for entry in &model.legend {
        w.start("rect")
            .attr("x", entry.swatch_x)
            .attr("y", entry.swatch_y)
            .attr("width", entry.swatch_size)
            .attr("height", entry.swatch_size)
            .attr("fill", palette.series(entry.city).hex())
            .close_empty();
        w.start("text")
            .attr("x", entry.label_x)
            .attr("y", entry.label_y)
            .attr("font-size", TEXT_SM)
            .attr("fill", palette.label.hex())
            .open()
            .text(entry.name)
            .end("text");
    }
    w.end("svg");
}

pub fn write_line_chart(w: &mut Markup, model: &LineChartModel, palette: &Palette) {
    let color = palette.series(model.selected).hex();
    open_svg(w, model.width, model.height);
    write_grid(w, &model.grid, palette);

    w.start("path")
        .attr("d", &model.path)
        .attr("stroke", &color)
        .attr("stroke-width", STROKE_WIDTH)
        .attr("fill", "none")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .close_empty();

    for p in &model.points {
        w.start("g").attr("data-period", p.period).open();
        w.start("circle")
            .attr("cx", p.x)
            .attr("cy", p.y)
            .attr("r", POINT_RADIUS)
            .attr("fill", &color)
            .close_empty();
        text(w, p.x, p.label_y, "middle", TEXT_XS, true, &palette.label.hex(), p.value);
        w.end("g");
    }

    for label in &model.period_labels {
        text(w, label.x, label.y, "middle", TEXT_SM, false, &palette.tick_label.hex(), label.text);
    }
    w.end("svg");
}

fn open_svg(w: &mut Markup, width: f64, height: f64) {
    w.start("svg")
        .attr("xmlns", SVG_NS)
        .attr("width", width)
        .attr("height", height)
        .attr("viewBox", format!("0 0 {} {}", width, height))
        .open();
}

fn write_grid(w: &mut Markup, grid: &[GridLine], palette: &Palette) {
    for line in grid {
        w.start("line")
            .attr("x1", line.x1)
            .attr("y1", line.y)
            .attr("x2", line.x2)
            .attr("y2", line.y)
            .attr("stroke", palette.grid.hex())
            .attr("stroke-width", 1)
            .close_empty();
    }
    for line in grid {
        text(w, line.label_x, line.label_y, "end", TEXT_SM, false, &palette.tick_label.hex(), line.label);
    }
}

#[allow(clippy::too_many_arguments)]
fn text(
    w: &mut Markup,
    x: f64,
    y: f64,
    anchor: &str,
    size: u32,
    bold: bool,
    fill: &str,
    content: impl std::fmt::Display,
) {
    w.start("text")
        .attr("x", x)
        .attr("y", y)
        .attr("text-anchor", anchor)
        .attr("font-size", size);
    if bold {
        w.attr("font-weight", 600);
    }
    w.attr("fill", fill).open().text(content).end("text");
}
