//! Backend-independent description of a front plot.

use super::layout::CanvasLayout;
use super::options::PlotOptions;
use super::style::{Color, MarkerShape};
use crate::data::PointSet;
use crate::error::Result;

/// Everything a backend needs to draw one plot.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontScene {
    /// Pixel geometry.
    pub layout: CanvasLayout,
    /// Fixed x-axis bounds.
    pub x_range: (f64, f64),
    /// Fixed y-axis bounds.
    pub y_range: (f64, f64),
    /// Points inside the axis bounds, in source order.
    pub markers: Vec<(f64, f64)>,
    /// Number of input points, including clipped ones.
    pub point_count: usize,
    /// Marker fill color.
    pub color: Color,
    /// Marker glyph.
    pub shape: MarkerShape,
    /// Chart title.
    pub title: String,
    /// X-axis caption.
    pub x_label: String,
    /// Y-axis caption.
    pub y_label: String,
    /// Resolved legend text.
    pub legend: String,
    /// Draw the background grid.
    pub grid: bool,
}

impl FrontScene {
    /// Resolve options against a point set.
    ///
    /// Axis bounds come from the options only; points outside them are
    /// dropped from the markers but still counted.
    pub fn build(points: &PointSet, options: &PlotOptions) -> Result<Self> {
        options.validate()?;

        let markers: Vec<(f64, f64)> = points
            .iter()
            .filter(|p| p.is_within(options.x_range, options.y_range))
            .map(|p| (p.f1, p.f2))
            .collect();

        if let Some((f1_extent, f2_extent)) = points.extent() {
            tracing::debug!(
                "Data extent f1 {:?} f2 {:?}, axes fixed at {:?} {:?}",
                f1_extent,
                f2_extent,
                options.x_range,
                options.y_range
            );
        }

        let clipped = points.len() - markers.len();
        if clipped > 0 {
            tracing::warn!(
                "{} of {} points fall outside the plot bounds and are not drawn",
                clipped,
                points.len()
            );
        }

        Ok(Self {
            layout: CanvasLayout::from_options(options),
            x_range: options.x_range,
            y_range: options.y_range,
            markers,
            point_count: points.len(),
            color: options.point_color,
            shape: options.marker_shape,
            title: options.title.clone(),
            x_label: options.x_label.clone(),
            y_label: options.y_label.clone(),
            legend: options.legend_label(points.len()),
            grid: options.grid,
        })
    }

    /// Number of points not drawn because they fall outside the bounds.
    pub fn clipped_count(&self) -> usize {
        self.point_count - self.markers.len()
    }
}
