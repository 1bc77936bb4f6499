// File: crates/dashboard-core/src/line.rs
// Summary: Single-series trend chart geometry and its SVG path string.

use std::fmt::Write as _;

use crate::dataset::{CityId, Dataset};
use crate::grid::{grid_lines, GridLine};
use crate::i18n::Language;
use crate::scale::ValueScale;
use crate::types::ChartLayout;

pub const POINT_RADIUS: f64 = 6.0;
pub const STROKE_WIDTH: f64 = 3.0;
const POINT_LABEL_GAP: f64 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LinePoint {
    pub period: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub label_y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PeriodLabel {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
}

/// One entry of the embedded city selector.
#[derive(Clone, Debug, PartialEq)]
pub struct CityOption {
    pub city: CityId,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineChartModel {
    pub width: f64,
    pub height: f64,
    pub title: &'static str,
    pub select_label: &'static str,
    pub options: [CityOption; 2],
    pub selected: CityId,
    /// Scale maximum of the selected series alone.
    pub max: f64,
    pub grid: Vec<GridLine>,
    pub points: Vec<LinePoint>,
    pub path: String,
    pub period_labels: Vec<PeriodLabel>,
    pub caption: String,
}

/// Horizontal distance between consecutive points: the usable width spread over n-1 gaps.
pub fn point_spacing(layout: &ChartLayout, n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    (layout.width - layout.line_inset) / (n - 1) as f64
}

/// `M x0 y0 L x1 y1 ...` through every point, in order.
pub fn path_data(points: &[LinePoint]) -> String {
    let mut d = String::with_capacity(points.len() * 24);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{} {} {}", cmd, p.x, p.y);
    }
    d
}

/// Lay out the trend chart for `selected`. Unlike the bar chart, the scale is the
/// selected series' own maximum.
pub fn line_chart(
    dataset: &Dataset,
    language: Language,
    selected: CityId,
    layout: &ChartLayout,
) -> LineChartModel {
    let strings = language.strings();
    let series = dataset.series(selected);
    let max = series.max_value();
    let scale = ValueScale::new(layout, max);
    let spacing = point_spacing(layout, series.values.len());

    let points: Vec<LinePoint> = series
        .values
        .iter()
        .enumerate()
        .map(|(period, &value)| {
            let y = scale.y(value);
            LinePoint {
                period,
                value,
                x: layout.first_x + period as f64 * spacing,
                y,
                label_y: y - POINT_LABEL_GAP,
            }
        })
        .collect();

    let period_labels = (0..series.values.len())
        .map(|period| PeriodLabel {
            text: language.short_month(period),
            x: layout.first_x + period as f64 * spacing,
            y: layout.period_label_y(),
        })
        .collect();

    let options = CityId::ALL.map(|city| CityOption {
        city,
        label: strings.city(city),
        selected: city == selected,
    });

    tracing::trace!(%language, %selected, max, "line chart laid out");

    LineChartModel {
        width: layout.width,
        height: layout.height(),
        title: strings.line_chart_title,
        select_label: strings.select_city,
        options,
        selected,
        max,
        grid: grid_lines(layout, max),
        path: path_data(&points),
        points,
        period_labels,
        caption: format!("{} - {}", strings.city(selected), strings.consumption_unit),
    }
}
