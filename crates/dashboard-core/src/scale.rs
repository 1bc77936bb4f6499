// File: crates/dashboard-core/src/scale.rs
// Summary: Linear value scale from data values to the plot band, zero-max safe.

use crate::types::ChartLayout;

/// Maps values in `[0, max]` onto heights in `[0, plot_height]` and onto y pixels
/// measured down from the surface top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub max: f64,
    pub top_px: f64,
    pub plot_height: f64,
}

impl ValueScale {
    pub fn new(layout: &ChartLayout, max: f64) -> Self {
        Self { max, top_px: layout.top, plot_height: layout.plot_height }
    }

    /// True when the scale has nothing to divide by; every value maps to zero height.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.max.is_finite() && self.max > 0.0)
    }

    /// Height of `v` in plot units: `(v / max) * plot_height`.
    #[inline]
    pub fn height(&self, v: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (v / self.max) * self.plot_height
    }

    /// Top y of `v`, i.e. baseline minus height.
    #[inline]
    pub fn y(&self, v: f64) -> f64 {
        self.baseline() - self.height(v)
    }

    /// Baseline y (value zero).
    #[inline]
    pub fn baseline(&self) -> f64 {
        self.top_px + self.plot_height
    }
}
