// File: crates/dashboard-core/tests/snapshot.rs
// Purpose: Golden snapshot harness for chart SVG and page HTML with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use dashboard_core::{
    bar_chart, bar_chart_svg, line_chart, line_chart_svg, render_page, ChartLayout, CityId, DashboardState, Dataset,
    Language, Palette,
};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, got: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, got).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), got.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read_to_string(&path).expect("read snapshot");
        assert_eq!(got, want, "markup differs from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

#[test]
fn golden_bar_chart_svg() {
    let m = bar_chart(&Dataset::coffee(), Language::En, &ChartLayout::default());
    let svg = bar_chart_svg(&m, &Palette::default());
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"500\" height=\"380\""));
    assert!(svg.contains("<rect x=\"60\" y=\"138.23529411764704\" width=\"30\" height=\"211.76470588235296\" fill=\"#3b82f6\"/>"));
    write_or_compare("bar_en.svg", &svg);
}

#[test]
fn golden_line_chart_svg() {
    let m = line_chart(&Dataset::coffee(), Language::Fr, CityId::CityB, &ChartLayout::default());
    let svg = line_chart_svg(&m, &Palette::default());
    assert!(svg.contains("d=\"M 60 150 L 140 119.99999999999997 L 220 100 L 300 70 L 380 80 L 460 50\""));
    assert!(svg.contains("<circle cx=\"460\" cy=\"50\" r=\"6\" fill=\"#ef4444\"/>"));
    assert_eq!(svg.matches("<circle ").count(), 6);
    assert_eq!(svg.matches("<line ").count(), 5);
    write_or_compare("line_fr_cityB.svg", &svg);
}

#[test]
fn golden_page_html() {
    let html = render_page(&Dataset::coffee(), &DashboardState::default());
    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<title>Monthly Coffee Consumption Dashboard</title>"));
    assert!(html.contains("class=\"lang-btn active\" data-lang=\"en\">English</button>"));
    assert!(html.contains("<option value=\"cityA\" selected>City A</option>"));
    assert!(html.contains("<p class=\"caption\">City A - cups per person</p>"));
    assert!(html.contains("<h3>Data Summary</h3>"));
    assert!(html.contains("<div class=\"value city-a\">148</div><div class=\"name\">City A Avg</div>"));
    assert!(html.contains("<div class=\"value city-b\">128</div><div class=\"name\">City B Avg</div>"));
    assert_eq!(html.matches("<svg ").count(), 2);
    // 12 bars + 2 legend swatches
    assert_eq!(html.matches("<rect ").count(), 14);
    write_or_compare("dashboard_en_cityA.html", &html);
}
