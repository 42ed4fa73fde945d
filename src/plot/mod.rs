//! Pareto front plotting.
//!
//! [`FrontPlotter`] ties the pieces together: a [`PointSet`] and
//! [`PlotOptions`] are resolved into a [`FrontScene`], the scene is drawn
//! into memory, and only then is the image written to disk. When asked,
//! the same scene is handed to the terminal viewer.

mod layout;
mod options;
mod raster;
mod scene;
mod style;

pub use layout::{format_tick, tick_values, CanvasLayout, MAX_TICKS};
pub use options::{parse_range, PlotOptions, Preset, COUNT_PLACEHOLDER, MAX_CANVAS_SIDE};
pub use scene::FrontScene;
pub use style::{Color, MarkerShape};

use crate::data::{CsvReader, PointSet};
use crate::error::Result;
use crate::viewer;
use std::path::{Path, PathBuf};

/// An image written by [`FrontPlotter::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedArtifact {
    /// Location of the image.
    pub path: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Resolution the image was rendered at.
    pub dpi: u32,
    /// X-axis bounds of the plot.
    pub x_range: (f64, f64),
    /// Y-axis bounds of the plot.
    pub y_range: (f64, f64),
    /// Legend text shown on the plot.
    pub legend: String,
    /// Number of input points.
    pub point_count: usize,
    /// Number of markers drawn inside the bounds.
    pub marker_count: usize,
}

impl RenderedArtifact {
    /// Plain-text description, one fact per line.
    pub fn summary(&self) -> String {
        format!(
            "Image: {}\nSize: {}x{} px @ {} dpi\nLegend: {}\nPoints: {} ({} drawn)\nf1: {} .. {}\nf2: {} .. {}\n",
            self.path.display(),
            self.width,
            self.height,
            self.dpi,
            self.legend,
            self.point_count,
            self.marker_count,
            self.x_range.0,
            self.x_range.1,
            self.y_range.0,
            self.y_range.1,
        )
    }
}

/// Loads optimizer output and renders it as a fixed-scale scatter plot.
///
/// Holds no state; every call is independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrontPlotter;

impl FrontPlotter {
    /// Create a new plotter.
    pub fn new() -> Self {
        Self
    }

    /// Read the `f1`/`f2` columns of a CSV file.
    pub fn load(&self, csv_path: &Path) -> Result<PointSet> {
        CsvReader::read_file(csv_path)
    }

    /// Draw `points` and write the image to `options.output_path`.
    ///
    /// Options are validated and the whole image is drawn in memory before
    /// the output file is touched. With `show_interactive` set, this blocks
    /// until the terminal viewer is closed.
    pub fn render(&self, points: &PointSet, options: &PlotOptions) -> Result<RenderedArtifact> {
        let scene = FrontScene::build(points, options)?;
        let pixels = raster::draw_scene(&scene)?;
        raster::write_png(&options.output_path, &pixels, scene.layout.side)?;

        let artifact = RenderedArtifact {
            path: options.output_path.clone(),
            width: scene.layout.side,
            height: scene.layout.side,
            dpi: options.dpi,
            x_range: scene.x_range,
            y_range: scene.y_range,
            legend: scene.legend.clone(),
            point_count: scene.point_count,
            marker_count: scene.markers.len(),
        };
        tracing::info!(
            "Rendered {} of {} points to {}",
            artifact.marker_count,
            artifact.point_count,
            artifact.path.display()
        );

        if options.show_interactive {
            viewer::show(&scene, &artifact)?;
        }

        Ok(artifact)
    }
}
