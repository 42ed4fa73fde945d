//! Plot options, presets and their sources.

use super::style::{Color, MarkerShape};
use crate::error::{FrontPlotError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Placeholder replaced with the number of points in the legend label.
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Largest canvas side in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Presentation options for a front plot.
///
/// Every field has a default, so JSON option files only need the fields
/// they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Fixed x-axis bounds.
    pub x_range: (f64, f64),
    /// Fixed y-axis bounds.
    pub y_range: (f64, f64),
    /// Marker fill color.
    pub point_color: Color,
    /// Marker glyph.
    pub marker_shape: MarkerShape,
    /// Marker area in points squared.
    pub marker_size: f64,
    /// X-axis caption.
    pub x_label: String,
    /// Y-axis caption.
    pub y_label: String,
    /// Chart title.
    pub title: String,
    /// Legend text, may contain `{count}`.
    pub legend_label_template: String,
    /// Where the image is written.
    pub output_path: PathBuf,
    /// Output resolution in dots per inch.
    pub dpi: u32,
    /// Hand the finished plot to the terminal viewer.
    pub show_interactive: bool,
    /// Side of the square figure in inches.
    pub figure_size: f64,
    /// Axis caption size in points.
    pub label_font_size: f64,
    /// Title size in points.
    pub title_font_size: f64,
    /// Draw the background grid.
    pub grid: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            x_range: (0.0, 4.0),
            y_range: (0.0, 4.0),
            point_color: Color::STEEL_BLUE,
            marker_shape: MarkerShape::Circle,
            marker_size: 20.0,
            x_label: "f₁".to_string(),
            y_label: "f₂".to_string(),
            title: "Pareto Front by NSGA-II".to_string(),
            legend_label_template: "NSGA-II".to_string(),
            output_path: PathBuf::from("pareto_run1.png"),
            dpi: 300,
            show_interactive: false,
            figure_size: 6.0,
            label_font_size: 16.0,
            title_font_size: 15.0,
            grid: true,
        }
    }
}

impl PlotOptions {
    /// Options reproducing one of the known plot styles.
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Nsga2 => Self::default(),
            Preset::Sch => Self {
                point_color: Color::SCH_PINK,
                title: "SCH Pareto Front by NSGA-II".to_string(),
                legend_label_template: format!("NSGA-II ({COUNT_PLACEHOLDER} solutions)"),
                ..Self::default()
            },
        }
    }

    /// Read options from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| FrontPlotError::io(path, e))?;
        let options = serde_json::from_reader(BufReader::new(file))?;

        Ok(options)
    }

    /// Read options from a JSON string. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set output path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Legend text for a plot of `count` points.
    pub fn legend_label(&self, count: usize) -> String {
        self.legend_label_template
            .replace(COUNT_PLACEHOLDER, &count.to_string())
    }

    /// Side of the square canvas in pixels.
    pub fn canvas_side(&self) -> u32 {
        (self.figure_size * self.dpi as f64).round() as u32
    }

    /// Marker radius in pixels. `marker_size` is the marker area in pt^2.
    pub fn marker_radius_px(&self) -> f64 {
        self.marker_size.sqrt() / 2.0 * self.dpi as f64 / 72.0
    }

    /// Check that the options describe a drawable plot.
    pub fn validate(&self) -> Result<()> {
        check_range("x_range", self.x_range)?;
        check_range("y_range", self.y_range)?;

        if self.dpi == 0 {
            return Err(FrontPlotError::invalid_options("dpi must be positive"));
        }

        let positive = [
            ("marker_size", self.marker_size),
            ("figure_size", self.figure_size),
            ("label_font_size", self.label_font_size),
            ("title_font_size", self.title_font_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(FrontPlotError::invalid_options(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let side = self.figure_size * self.dpi as f64;
        if side > MAX_CANVAS_SIDE as f64 {
            return Err(FrontPlotError::invalid_options(format!(
                "canvas of {side:.0}px exceeds the {MAX_CANVAS_SIDE}px limit"
            )));
        }
        if side < 1.0 {
            return Err(FrontPlotError::invalid_options("canvas is smaller than one pixel"));
        }

        let radius = self.marker_radius_px();
        if radius > side {
            return Err(FrontPlotError::invalid_options(format!(
                "marker_size {} gives a {radius:.0}px marker on a {side:.0}px canvas",
                self.marker_size
            )));
        }

        Ok(())
    }
}

fn check_range(name: &str, (min, max): (f64, f64)) -> Result<()> {
    if !(min.is_finite() && max.is_finite()) {
        return Err(FrontPlotError::invalid_options(format!(
            "{name} bounds must be finite"
        )));
    }
    if min >= max {
        return Err(FrontPlotError::invalid_options(format!(
            "{name} minimum {min} must be below maximum {max}"
        )));
    }
    if !(max - min).is_finite() {
        return Err(FrontPlotError::invalid_options(format!(
            "{name} span from {min} to {max} is too wide"
        )));
    }

    Ok(())
}

/// Named option sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Plain NSGA-II front in steel blue.
    #[default]
    Nsga2,
    /// SCH benchmark front with the solution count in the legend.
    Sch,
}

impl Preset {
    /// Get preset name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Nsga2 => "nsga2",
            Self::Sch => "sch",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nsga2" | "nsga-ii" => Ok(Self::Nsga2),
            "sch" => Ok(Self::Sch),
            other => Err(format!("unknown preset '{other}', expected nsga2 or sch")),
        }
    }
}

/// Parse a `MIN,MAX` pair.
pub fn parse_range(s: &str) -> std::result::Result<(f64, f64), String> {
    let (min, max) = s
        .split_once(',')
        .ok_or_else(|| format!("expected MIN,MAX, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid bound '{}': {e}", v.trim()))
    };

    Ok((parse(min)?, parse(max)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_plot() {
        let options = PlotOptions::default();

        assert_eq!(options.x_range, (0.0, 4.0));
        assert_eq!(options.y_range, (0.0, 4.0));
        assert_eq!(options.marker_size, 20.0);
        assert_eq!(options.dpi, 300);
        assert_eq!(options.canvas_side(), 1800);
        assert!(!options.show_interactive);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn sch_preset_counts_solutions() {
        let options = PlotOptions::preset(Preset::Sch);

        assert_eq!(options.point_color, Color::SCH_PINK);
        assert_eq!(options.title, "SCH Pareto Front by NSGA-II");
        assert_eq!(options.legend_label(57), "NSGA-II (57 solutions)");
    }

    #[test]
    fn legend_without_placeholder_is_verbatim() {
        let options = PlotOptions::preset(Preset::Nsga2);

        assert_eq!(options.legend_label(57), "NSGA-II");
    }

    #[test]
    fn rejects_degenerate_ranges() {
        let cases = [
            (4.0, 4.0),
            (4.0, 0.0),
            (f64::NAN, 1.0),
            (0.0, f64::INFINITY),
            (-1e308, 1e308),
        ];

        for range in cases {
            let options = PlotOptions {
                x_range: range,
                ..PlotOptions::default()
            };
            assert!(
                matches!(options.validate(), Err(FrontPlotError::InvalidOptions(_))),
                "accepted {range:?}"
            );
        }
    }

    #[test]
    fn rejects_non_positive_sizes() {
        let zero_dpi = PlotOptions {
            dpi: 0,
            ..PlotOptions::default()
        };
        let negative_marker = PlotOptions {
            marker_size: -1.0,
            ..PlotOptions::default()
        };
        let huge = PlotOptions {
            dpi: 10_000,
            ..PlotOptions::default()
        };

        assert!(zero_dpi.validate().is_err());
        assert!(negative_marker.validate().is_err());
        assert!(huge.validate().is_err());
    }

    #[test]
    fn wide_but_finite_ranges_are_accepted() {
        let options = PlotOptions {
            x_range: (-1e300, 1e300),
            ..PlotOptions::default()
        };

        assert!(options.validate().is_ok());
    }

    #[test]
    fn rejects_markers_larger_than_canvas() {
        let options = PlotOptions {
            dpi: 50,
            ..PlotOptions::default()
        };

        for marker_size in [1e14, 1e18, f64::MAX] {
            let options = PlotOptions {
                marker_size,
                ..options.clone()
            };
            assert!(
                matches!(options.validate(), Err(FrontPlotError::InvalidOptions(_))),
                "accepted marker_size {marker_size}"
            );
        }

        // a marker as wide as the canvas is still drawable
        let radius_of_side = (2.0 * 300.0 * 72.0 / 50.0_f64).powi(2);
        let options = PlotOptions {
            marker_size: radius_of_side,
            ..options
        };
        assert!(options.validate().is_ok());
        assert_eq!(options.marker_radius_px().round(), 300.0);
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let json = r##"{ "point_color": "#C2185B", "x_range": [0, 10], "marker_shape": "^" }"##;

        let options = PlotOptions::from_json_str(json).unwrap();

        assert_eq!(options.point_color, Color::SCH_PINK);
        assert_eq!(options.x_range, (0.0, 10.0));
        assert_eq!(options.marker_shape, MarkerShape::Triangle);
        assert_eq!(options.y_range, (0.0, 4.0));
        assert_eq!(options.dpi, 300);
    }

    #[test]
    fn json_rejects_unknown_color() {
        let result = PlotOptions::from_json_str(r#"{ "point_color": "nope" }"#);

        assert!(matches!(result, Err(FrontPlotError::Json(_))));
    }

    #[test]
    fn can_parse_ranges_and_presets() {
        assert_eq!(parse_range("0, 4.5"), Ok((0.0, 4.5)));
        assert!(parse_range("4").is_err());
        assert!(parse_range("a,1").is_err());
        assert_eq!("SCH".parse::<Preset>(), Ok(Preset::Sch));
        assert!("zdt1".parse::<Preset>().is_err());
    }
}
