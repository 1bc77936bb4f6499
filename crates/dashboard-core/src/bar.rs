// File: crates/dashboard-core/src/bar.rs
// Summary: Grouped bar chart geometry (both cities, all periods, shared scale).

use crate::dataset::{CityId, Dataset};
use crate::grid::{grid_lines, GridLine};
use crate::i18n::Language;
use crate::scale::ValueScale;
use crate::types::ChartLayout;

const LEGEND_Y: f64 = 20.0;
const LEGEND_SWATCH: f64 = 15.0;
const LEGEND_STEP: f64 = 90.0;
const LEGEND_LABEL_DX: f64 = 20.0;
const LEGEND_LABEL_Y: f64 = 32.0;
/// Value labels sit this far above the bar top.
const VALUE_LABEL_GAP: f64 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub city: CityId,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
    pub label_y: f64,
}

/// The two bars of one period plus its axis label.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGroup {
    pub period: usize,
    pub x: f64,
    pub label: &'static str,
    pub label_x: f64,
    pub label_y: f64,
    pub bars: [Bar; 2],
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub city: CityId,
    pub name: &'static str,
    pub swatch_x: f64,
    pub swatch_y: f64,
    pub swatch_size: f64,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChartModel {
    pub width: f64,
    pub height: f64,
    pub title: &'static str,
    pub caption: &'static str,
    /// Shared scale maximum over both series.
    pub max: f64,
    pub grid: Vec<GridLine>,
    pub groups: Vec<BarGroup>,
    pub legend: [LegendEntry; 2],
}

/// Lay out the comparison chart. Both series share one scale: the maximum
/// observed across City A and City B.
pub fn bar_chart(dataset: &Dataset, language: Language, layout: &ChartLayout) -> BarChartModel {
    let strings = language.strings();
    let max = dataset.combined_max();
    let scale = ValueScale::new(layout, max);
    let half = layout.bar_width / 2.0;

    let groups = (0..dataset.len())
        .map(|period| {
            let x = layout.first_x + period as f64 * layout.group_spacing;
            let bar = |city: CityId, bar_x: f64, label_x: f64| {
                let value = dataset.series(city).values[period];
                let height = scale.height(value);
                Bar {
                    city,
                    value,
                    x: bar_x,
                    y: scale.y(value),
                    width: half,
                    height,
                    label_x,
                    label_y: layout.baseline() - VALUE_LABEL_GAP - height,
                }
            };
            BarGroup {
                period,
                x,
                label: language.short_month(period),
                label_x: x + half,
                label_y: layout.period_label_y(),
                bars: [
                    bar(CityId::CityA, x, x + layout.bar_width / 4.0),
                    bar(CityId::CityB, x + half, x + 3.0 * layout.bar_width / 4.0),
                ],
            }
        })
        .collect();

    let legend = CityId::ALL.map(|city| {
        let slot = match city {
            CityId::CityA => 0.0,
            CityId::CityB => 1.0,
        };
        let swatch_x = layout.first_x + slot * LEGEND_STEP;
        LegendEntry {
            city,
            name: strings.city(city),
            swatch_x,
            swatch_y: LEGEND_Y,
            swatch_size: LEGEND_SWATCH,
            label_x: swatch_x + LEGEND_LABEL_DX,
            label_y: LEGEND_LABEL_Y,
        }
    });

    tracing::trace!(%language, max, "bar chart laid out");

    BarChartModel {
        width: layout.width,
        height: layout.height(),
        title: strings.bar_chart_title,
        caption: strings.consumption_unit,
        max,
        grid: grid_lines(layout, max),
        groups,
        legend,
    }
}
