// File: crates/dashboard-dioxus/src/view.rs
// Summary: Toolkit-free event mapping and precomputed display values for the components.

use dashboard_core::bar::BarChartModel;
use dashboard_core::line::LineChartModel;
use dashboard_core::{CityId, DashboardState, Palette};

/// Apply a selector change event. Values outside the two option tags are ignored
/// and leave the state untouched.
pub fn apply_city_change(state: &mut DashboardState, raw: &str) -> bool {
    match raw.parse::<CityId>() {
        Ok(city) => {
            state.set_selected_city(city);
            true
        }
        Err(err) => {
            tracing::warn!(%err, "ignoring selector value");
            false
        }
    }
}

/// A bar with its fill and value text resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct BarView {
    pub key: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub label_x: f64,
    pub label_y: f64,
    pub value: String,
}

/// Flatten the bar groups into drawable bars, in group order (City A first).
pub fn bar_views(model: &BarChartModel, palette: &Palette) -> Vec<BarView> {
    model
        .groups
        .iter()
        .flat_map(|g| {
            g.bars.iter().map(move |bar| BarView {
                key: format!("{}-{}", g.period, bar.city),
                x: bar.x,
                y: bar.y,
                width: bar.width,
                height: bar.height,
                fill: palette.series(bar.city).hex(),
                label_x: bar.label_x,
                label_y: bar.label_y,
                value: bar.value.to_string(),
            })
        })
        .collect()
}

/// Stroke/fill color of the line chart.
pub fn line_color(model: &LineChartModel, palette: &Palette) -> String {
    palette.series(model.selected).hex()
}
