// File: crates/dashboard-core/src/lib.rs
// Summary: Core library entry point; dataset, translations, chart layout and page rendering.

pub mod bar;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod i18n;
pub mod line;
pub mod markup;
pub mod page;
pub mod scale;
pub mod style;
pub mod svg;
pub mod theme;
pub mod types;

pub use bar::{bar_chart, BarChartModel};
pub use dataset::{CityId, Dataset, Series};
pub use error::{DatasetError, UnknownTag};
pub use i18n::{Language, Strings};
pub use line::{line_chart, LineChartModel};
pub use page::{render_page, render_page_with, DashboardState, PageModel, Summary};
pub use svg::{bar_chart_svg, line_chart_svg};
pub use theme::{Palette, Rgb};
pub use types::ChartLayout;
