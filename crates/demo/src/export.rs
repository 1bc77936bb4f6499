// File: crates/demo/src/export.rs
// Summary: Writes dashboard states to disk as pages, chart SVGs and optional PNGs.
// Notes:
// - The bar chart does not depend on the selected city, so it is written once per language.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dashboard_core::{
    bar_chart, bar_chart_svg, line_chart, line_chart_svg, render_page, ChartLayout, DashboardState, Dataset,
    Language, Palette,
};
use dashboard_render_skia::{render_bar_chart_png, render_line_chart_png, write_png, RenderOptions};

pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub png: bool,
}

/// Export every state in `states`; returns the files written, each listed once.
pub fn export_states(dataset: &Dataset, states: &[DashboardState], opts: &ExportOptions) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("creating output directory {}", opts.out_dir.display()))?;

    let layout = ChartLayout::default();
    let palette = Palette::default();
    let mut written = Vec::new();

    let mut languages: Vec<Language> = Vec::new();
    for state in states {
        if !languages.contains(&state.language) {
            languages.push(state.language);
        }
    }
    for language in languages {
        export_bar(dataset, language, &layout, &palette, opts, &mut written)?;
    }
    for state in states {
        export_state(dataset, state, &layout, &palette, opts, &mut written)?;
    }
    Ok(written)
}

fn export_bar(
    dataset: &Dataset,
    language: Language,
    layout: &ChartLayout,
    palette: &Palette,
    opts: &ExportOptions,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    let bar = bar_chart(dataset, language, layout);
    let svg_path = opts.out_dir.join(format!("bar_{}.svg", language.tag()));
    write_text(&svg_path, &bar_chart_svg(&bar, palette))?;
    written.push(svg_path.clone());

    if opts.png {
        let raster = RenderOptions { palette: *palette, ..RenderOptions::default() };
        let png_path = svg_path.with_extension("png");
        write_png(&render_bar_chart_png(&bar, &raster)?, &png_path)?;
        tracing::info!(path = %png_path.display(), "wrote");
        written.push(png_path);
    }
    Ok(())
}

fn export_state(
    dataset: &Dataset,
    state: &DashboardState,
    layout: &ChartLayout,
    palette: &Palette,
    opts: &ExportOptions,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    let lang = state.language.tag();
    let city = state.selected_city.tag();

    let page_path = opts.out_dir.join(format!("dashboard_{lang}_{city}.html"));
    write_text(&page_path, &render_page(dataset, state))?;
    written.push(page_path);

    let line = line_chart(dataset, state.language, state.selected_city, layout);
    let svg_path = opts.out_dir.join(format!("line_{lang}_{city}.svg"));
    write_text(&svg_path, &line_chart_svg(&line, palette))?;
    written.push(svg_path.clone());

    if opts.png {
        let raster = RenderOptions { palette: *palette, ..RenderOptions::default() };
        let png_path = svg_path.with_extension("png");
        write_png(&render_line_chart_png(&line, &raster)?, &png_path)?;
        tracing::info!(path = %png_path.display(), "wrote");
        written.push(png_path);
    }
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote");
    Ok(())
}
