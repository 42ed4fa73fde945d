//! Raster drawing of a scene and PNG output.

use super::layout::{format_tick, MAX_TICKS};
use super::scene::FrontScene;
use super::style::MarkerShape;
use crate::error::{FrontPlotError, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const FONT: &str = "sans-serif";

/// Draw a scene into an RGB8 buffer of `side * side` pixels.
pub(crate) fn draw_scene(scene: &FrontScene) -> Result<Vec<u8>> {
    let side = scene.layout.side;
    let mut buffer = vec![0u8; side as usize * side as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (side, side)).into_drawing_area();
        draw_chart(&root, scene)?;
        root.present()?;
    }

    Ok(buffer)
}

fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, scene: &FrontScene) -> Result<()> {
    let layout = &scene.layout;
    root.fill(&WHITE)?;

    let margin = layout.margin;
    let area = root.margin(margin, margin, margin, margin);

    let mut builder = ChartBuilder::on(&area);
    builder
        .x_label_area_size(layout.x_label_area)
        .y_label_area_size(layout.y_label_area);
    if !scene.title.is_empty() {
        builder.caption(&scene.title, (FONT, title_font_px(scene)));
    }

    let (x0, x1) = scene.x_range;
    let (y0, y1) = scene.y_range;
    let mut chart = builder.build_cartesian_2d(x0..x1, y0..y1)?;

    let x_fmt = |v: &f64| format_tick(*v, layout.x_decimals);
    let y_fmt = |v: &f64| format_tick(*v, layout.y_decimals);
    let mut mesh = chart.configure_mesh();
    mesh.x_labels(MAX_TICKS)
        .y_labels(MAX_TICKS)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .label_style((FONT, layout.tick_font_px))
        .axis_desc_style((FONT, layout.label_font_px))
        .bold_line_style(BLACK.mix(0.15).stroke_width(1))
        .max_light_lines(0);
    if !scene.x_label.is_empty() {
        mesh.x_desc(&scene.x_label);
    }
    if !scene.y_label.is_empty() {
        mesh.y_desc(&scene.y_label);
    }
    if !scene.grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    let color = RGBColor(scene.color.r, scene.color.g, scene.color.b);
    let fill = color.filled();
    let stroke = color.stroke_width((layout.marker_radius / 3).max(1));
    let r = layout.marker_radius as i32;
    let legend = scene.legend.as_str();

    // legend glyph area is 4r wide, markers are centered in it
    let markers = scene.markers.iter().copied();
    match scene.shape {
        MarkerShape::Circle => {
            let series = chart.draw_series(markers.map(|c| Circle::new(c, r, fill)))?;
            if !legend.is_empty() {
                series
                    .label(legend)
                    .legend(move |(x, y)| Circle::new((x + 2 * r, y), r, fill));
            }
        },
        MarkerShape::Square => {
            let series = chart.draw_series(
                markers.map(|c| EmptyElement::at(c) + Rectangle::new([(-r, -r), (r, r)], fill)),
            )?;
            if !legend.is_empty() {
                series.label(legend).legend(move |(x, y)| {
                    Rectangle::new([(x + r, y - r), (x + 3 * r, y + r)], fill)
                });
            }
        },
        MarkerShape::Triangle => {
            let series = chart.draw_series(markers.map(|c| TriangleMarker::new(c, r, fill)))?;
            if !legend.is_empty() {
                series
                    .label(legend)
                    .legend(move |(x, y)| TriangleMarker::new((x + 2 * r, y), r, fill));
            }
        },
        MarkerShape::Cross => {
            let series = chart.draw_series(markers.map(|c| Cross::new(c, r, stroke)))?;
            if !legend.is_empty() {
                series
                    .label(legend)
                    .legend(move |(x, y)| Cross::new((x + 2 * r, y), r, stroke));
            }
        },
    }

    if !legend.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font((FONT, layout.tick_font_px))
            .margin(layout.margin)
            .legend_area_size(r * 4)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .draw()?;
    }

    Ok(())
}

/// Shrink the title font until the title fits the canvas width.
fn title_font_px(scene: &FrontScene) -> f64 {
    let layout = &scene.layout;
    let available = layout.side.saturating_sub(2 * layout.margin);
    let natural = layout.estimate_text_width(&scene.title, layout.title_font_px);

    if natural <= available || natural == 0 {
        layout.title_font_px
    } else {
        layout.title_font_px * available as f64 / natural as f64
    }
}

/// Encode an RGB8 buffer as PNG and write it to `path`, replacing any existing file.
///
/// Encoding happens in memory first so a failed encode never leaves a file behind.
pub(crate) fn write_png(path: &Path, buffer: &[u8], side: u32) -> Result<()> {
    let mut encoded = Vec::new();
    PngEncoder::new(&mut encoded).write_image(buffer, side, side, ExtendedColorType::Rgb8)?;

    std::fs::write(path, &encoded).map_err(|e| FrontPlotError::io(path, e))?;
    tracing::debug!("Wrote {} bytes to {}", encoded.len(), path.display());

    Ok(())
}
