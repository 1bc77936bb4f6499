// File: crates/dashboard-render-skia/tests/raster.rs
// Purpose: Rasterize both charts and check surface size and a few pixels.

use dashboard_core::{bar_chart, line_chart, ChartLayout, CityId, Dataset, Language};
use dashboard_render_skia::{render_bar_chart_png, render_line_chart_png, RenderOptions};

fn no_labels() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() } // avoid font variance
}

fn rgb_at(img: &image::RgbaImage, x: u32, y: u32) -> [u8; 3] {
    let p = img.get_pixel(x, y).0;
    [p[0], p[1], p[2]]
}

#[test]
fn bar_chart_png_pixels() {
    let model = bar_chart(&Dataset::coffee(), Language::En, &ChartLayout::default());
    let bytes = render_bar_chart_png(&model, &no_labels()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (500, 380));
    // background corner
    assert_eq!(rgb_at(&img, 495, 5), [0xff, 0xff, 0xff]);
    // inside January City A bar (x 60..90, y 138..350)
    assert_eq!(rgb_at(&img, 75, 300), [0x3b, 0x82, 0xf6]);
    // inside January City B bar (x 90..120, y 173..350)
    assert_eq!(rgb_at(&img, 105, 300), [0xef, 0x44, 0x44]);
    // legend swatch
    assert_eq!(rgb_at(&img, 67, 27), [0x3b, 0x82, 0xf6]);
}

#[test]
fn line_chart_png_pixels() {
    let model = line_chart(&Dataset::coffee(), Language::En, CityId::CityB, &ChartLayout::default());
    let bytes = render_line_chart_png(&model, &no_labels()).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (500, 380));
    // June point sits at (460, 50)
    assert_eq!(rgb_at(&img, 460, 50), [0xef, 0x44, 0x44]);
    // well below the line, between grid lines
    assert_eq!(rgb_at(&img, 250, 330), [0xff, 0xff, 0xff]);
}

#[test]
fn scale_multiplies_surface() {
    let model = bar_chart(&Dataset::coffee(), Language::Fr, &ChartLayout::default());
    let opts = RenderOptions { scale: 2.0, ..no_labels() };
    let bytes = render_bar_chart_png(&model, &opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (1000, 760));
    assert_eq!(rgb_at(&img, 150, 600), [0x3b, 0x82, 0xf6]);
}

#[test]
fn labelled_render_smoke() {
    let model = line_chart(&Dataset::coffee(), Language::Fr, CityId::CityA, &ChartLayout::default());
    let bytes = render_line_chart_png(&model, &RenderOptions::default()).expect("render with labels");
    assert!(!bytes.is_empty());

    let out = std::path::PathBuf::from("target/test_out/line_fr_cityA.png");
    dashboard_render_skia::write_png(&bytes, &out).expect("write png");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}

#[test]
fn zero_max_renders() {
    let d = Dataset::try_new(vec![0.0; 6], vec![0.0; 6]).unwrap();
    let bar = bar_chart(&d, Language::En, &ChartLayout::default());
    let line = line_chart(&d, Language::En, CityId::CityA, &ChartLayout::default());
    assert!(render_bar_chart_png(&bar, &no_labels()).is_ok());
    assert!(render_line_chart_png(&line, &no_labels()).is_ok());
}
