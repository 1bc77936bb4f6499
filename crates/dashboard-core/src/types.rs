// File: crates/dashboard-core/src/types.rs
// Summary: Shared chart geometry (surface size, margins, bar/point spacing).

/// Chart surface width in SVG user units.
pub const WIDTH: f64 = 500.0;
/// Height of the plotting band; bars and points scale into this span.
pub const PLOT_HEIGHT: f64 = 300.0;
/// Number of horizontal grid lines (0%, 25%, 50%, 75%, 100%).
pub const GRID_LINES: usize = 5;

/// Fixed layout record shared by both chart renderers.
/// Contract: `plot_height > 0` and `width > line_inset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub plot_height: f64,
    /// Space between the surface top and the 100% grid line.
    pub top: f64,
    /// Left end of the grid lines.
    pub grid_left: f64,
    /// Gap between the grid's right end and the surface edge.
    pub grid_right_gap: f64,
    /// Right edge (text-anchor end) of the grid value labels.
    pub tick_label_x: f64,
    /// Baseline offset of a grid label below its grid line.
    pub tick_label_dy: f64,
    /// X of the first bar group / first line point.
    pub first_x: f64,
    /// Width of one bar group (both series side by side).
    pub bar_width: f64,
    /// Distance between the left edges of consecutive bar groups.
    pub group_spacing: f64,
    /// Horizontal span not covered by line points (`width - inset` is spread over n-1 gaps).
    pub line_inset: f64,
    /// Period labels sit this far below the plot band bottom.
    pub period_label_dy: f64,
}

impl ChartLayout {
    /// Total surface height (plot band plus header/footer room).
    pub fn height(&self) -> f64 { self.plot_height + 80.0 }
    /// Y of the zero baseline.
    pub fn baseline(&self) -> f64 { self.top + self.plot_height }
    pub fn grid_right(&self) -> f64 { self.width - self.grid_right_gap }
    /// Baseline y of the period labels under the axis.
    pub fn period_label_y(&self) -> f64 { self.plot_height + self.period_label_dy }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: WIDTH,
            plot_height: PLOT_HEIGHT,
            top: 50.0,
            grid_left: 50.0,
            grid_right_gap: 20.0,
            tick_label_x: 40.0,
            tick_label_dy: 5.0,
            first_x: 60.0,
            bar_width: 60.0,
            group_spacing: 80.0,
            line_inset: 100.0,
            period_label_dy: 70.0,
        }
    }
}
