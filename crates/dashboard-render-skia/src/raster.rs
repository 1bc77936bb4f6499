// File: crates/dashboard-render-skia/src/raster.rs
// Summary: Headless PNG rendering of the bar and line chart models using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use dashboard_core::bar::BarChartModel;
use dashboard_core::grid::GridLine;
use dashboard_core::line::{LineChartModel, POINT_RADIUS, STROKE_WIDTH};
use dashboard_core::{Palette, Rgb};

use crate::text::{Anchor, TextShaper};

const TEXT_SM: f32 = 14.0;
const TEXT_XS: f32 = 12.0;

pub struct RenderOptions {
    /// Device pixel ratio; the surface is `scale` times the chart's logical size.
    pub scale: f32,
    pub palette: Palette,
    /// Labels depend on installed fonts; tests turn them off for stable pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0, palette: Palette::default(), draw_labels: true }
    }
}

#[inline]
pub fn color(rgb: Rgb) -> skia::Color {
    skia::Color::from_argb(255, rgb.r, rgb.g, rgb.b)
}

/// Render the grouped bar chart to PNG bytes.
pub fn render_bar_chart_png(model: &BarChartModel, opts: &RenderOptions) -> Result<Vec<u8>> {
    render_png(model.width, model.height, opts, |canvas, text| {
        draw_bar_chart(canvas, text, model, opts)
    })
}

/// Render the single-series trend chart to PNG bytes.
pub fn render_line_chart_png(model: &LineChartModel, opts: &RenderOptions) -> Result<Vec<u8>> {
    render_png(model.width, model.height, opts, |canvas, text| {
        draw_line_chart(canvas, text, model, opts)
    })
}

/// Write PNG bytes to `path`, creating parent directories.
pub fn write_png(bytes: &[u8], path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn render_png<F>(width: f64, height: f64, opts: &RenderOptions, draw: F) -> Result<Vec<u8>>
where
    F: FnOnce(&skia::Canvas, &TextShaper),
{
    let scale = opts.scale.max(0.1);
    let w = (width as f32 * scale).round() as i32;
    let h = (height as f32 * scale).round() as i32;

    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(color(opts.palette.background));
    canvas.save();
    canvas.scale((scale, scale));
    let text = TextShaper::new();
    draw(canvas, &text);
    canvas.restore();

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    tracing::debug!(width = w, height = h, bytes = data.len(), "chart rasterized");
    Ok(data.as_bytes().to_vec())
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(rgb: Rgb) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(rgb));
    paint
}

fn draw_grid(canvas: &skia::Canvas, text: &TextShaper, grid: &[GridLine], opts: &RenderOptions) {
    let mut paint = skia::Paint::default();
    paint.set_color(color(opts.palette.grid));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for line in grid {
        let y = line.y as f32;
        canvas.draw_line((line.x1 as f32, y), (line.x2 as f32, y), &paint);
    }
    if opts.draw_labels {
        let ink = color(opts.palette.tick_label);
        for line in grid {
            let label = line.label.to_string();
            text.draw(canvas, &label, line.label_x as f32, line.label_y as f32, Anchor::End, TEXT_SM, ink, false);
        }
    }
}

fn draw_bar_chart(canvas: &skia::Canvas, text: &TextShaper, model: &BarChartModel, opts: &RenderOptions) {
    let palette = &opts.palette;
    draw_grid(canvas, text, &model.grid, opts);

    for group in &model.groups {
        for bar in &group.bars {
            let rect = skia::Rect::from_xywh(bar.x as f32, bar.y as f32, bar.width as f32, bar.height as f32);
            canvas.draw_rect(rect, &fill_paint(palette.series(bar.city)));
        }
        if opts.draw_labels {
            text.draw(
                canvas, group.label, group.label_x as f32, group.label_y as f32,
                Anchor::Middle, TEXT_SM, color(palette.tick_label), false,
            );
            for bar in &group.bars {
                let value = bar.value.to_string();
                text.draw(
                    canvas, &value, bar.label_x as f32, bar.label_y as f32,
                    Anchor::Middle, TEXT_XS, color(palette.bar_value), true,
                );
            }
        }
    }

    for entry in &model.legend {
        let s = entry.swatch_size as f32;
        let rect = skia::Rect::from_xywh(entry.swatch_x as f32, entry.swatch_y as f32, s, s);
        canvas.draw_rect(rect, &fill_paint(palette.series(entry.city)));
        if opts.draw_labels {
            text.draw(
                canvas, entry.name, entry.label_x as f32, entry.label_y as f32,
                Anchor::Start, TEXT_SM, color(palette.label), false,
            );
        }
    }
}

fn draw_line_chart(canvas: &skia::Canvas, text: &TextShaper, model: &LineChartModel, opts: &RenderOptions) {
    let palette = &opts.palette;
    let series_color = palette.series(model.selected);
    draw_grid(canvas, text, &model.grid, opts);

    if let Some((first, rest)) = model.points.split_first() {
        let mut path = skia::Path::new();
        path.move_to((first.x as f32, first.y as f32));
        for p in rest {
            path.line_to((p.x as f32, p.y as f32));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(STROKE_WIDTH as f32);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_color(color(series_color));
        canvas.draw_path(&path, &stroke);
    }

    let dot = fill_paint(series_color);
    for p in &model.points {
        canvas.draw_circle((p.x as f32, p.y as f32), POINT_RADIUS as f32, &dot);
        if opts.draw_labels {
            let value = p.value.to_string();
            text.draw(
                canvas, &value, p.x as f32, p.label_y as f32,
                Anchor::Middle, TEXT_XS, color(palette.label), true,
            );
        }
    }

    if opts.draw_labels {
        for label in &model.period_labels {
            text.draw(
                canvas, label.text, label.x as f32, label.y as f32,
                Anchor::Middle, TEXT_SM, color(palette.tick_label), false,
            );
        }
    }
}
