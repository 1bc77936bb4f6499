// File: crates/dashboard-render-skia/src/lib.rs
// Summary: Skia renderer crate; rasterizes dashboard chart models to PNG.

pub mod raster;
pub mod text;

pub use raster::{color, render_bar_chart_png, render_line_chart_png, write_png, RenderOptions};
pub use text::{Anchor, TextShaper};
