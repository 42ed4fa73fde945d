//! Canvas geometry derived from plot options.
//!
//! Sizes in the options are typographic points; everything here is in
//! pixels at the configured resolution. Label areas are sized from the
//! fonts and the widest tick label so that no text is clipped.

use super::options::PlotOptions;
use unicode_width::UnicodeWidthStr;

const POINTS_PER_INCH: f64 = 72.0;
/// Tick label size in points.
const TICK_FONT_PT: f64 = 10.0;
/// Average glyph advance relative to the font size.
const GLYPH_ASPECT: f64 = 0.6;
/// Padding around the whole figure, relative to its side.
const FIGURE_PAD: f64 = 0.02;
/// Upper bound on tick count per axis.
pub const MAX_TICKS: usize = 9;
const MAX_DECIMALS: usize = 10;

/// Pixel geometry of a square canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasLayout {
    /// Canvas side in pixels.
    pub side: u32,
    /// Outer margin in pixels.
    pub margin: u32,
    /// Title font size in pixels.
    pub title_font_px: f64,
    /// Axis caption font size in pixels.
    pub label_font_px: f64,
    /// Tick label font size in pixels.
    pub tick_font_px: f64,
    /// Height reserved below the plotting area.
    pub x_label_area: u32,
    /// Width reserved left of the plotting area.
    pub y_label_area: u32,
    /// Marker radius in pixels.
    pub marker_radius: u32,
    /// Decimals shown on x tick labels.
    pub x_decimals: usize,
    /// Decimals shown on y tick labels.
    pub y_decimals: usize,
}

impl CanvasLayout {
    /// Compute the layout for already validated options.
    pub fn from_options(options: &PlotOptions) -> Self {
        let side = options.canvas_side();
        let px_per_pt = options.dpi as f64 / POINTS_PER_INCH;

        let title_font_px = options.title_font_size * px_per_pt;
        let label_font_px = options.label_font_size * px_per_pt;
        let tick_font_px = TICK_FONT_PT * px_per_pt;

        let x_decimals = tick_decimals(options.x_range);
        let y_decimals = tick_decimals(options.y_range);

        let caption_height = |text: &str, font_px: f64| {
            if text.is_empty() {
                0.0
            } else {
                font_px * 1.4
            }
        };

        let x_label_area = tick_font_px * 1.8 + caption_height(&options.x_label, label_font_px);

        let widest_tick = tick_values(options.y_range, MAX_TICKS)
            .into_iter()
            .map(|v| format_tick(v, y_decimals).width())
            .max()
            .unwrap_or(1);
        let y_label_area = widest_tick as f64 * tick_font_px * GLYPH_ASPECT
            + tick_font_px
            + caption_height(&options.y_label, label_font_px);

        let marker_radius = options.marker_radius_px().round().max(1.0) as u32;

        let layout = Self {
            side,
            margin: (side as f64 * FIGURE_PAD).round() as u32,
            title_font_px,
            label_font_px,
            tick_font_px,
            x_label_area: x_label_area.ceil() as u32,
            y_label_area: y_label_area.ceil() as u32,
            marker_radius,
            x_decimals,
            y_decimals,
        };
        tracing::debug!("Canvas layout: {:?}", layout);

        layout
    }

    /// Text width in pixels, estimated from display columns.
    pub fn estimate_text_width(&self, text: &str, font_px: f64) -> u32 {
        (text.width() as f64 * font_px * GLYPH_ASPECT).ceil() as u32
    }
}

/// Decimals needed to tell ticks of a range apart.
pub fn tick_decimals(range: (f64, f64)) -> usize {
    let step = tick_step(range, MAX_TICKS);

    (0..=MAX_DECIMALS)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-9 * scaled.max(1.0)
        })
        .unwrap_or(MAX_DECIMALS)
}

/// Format a tick value with fixed decimals.
pub fn format_tick(value: f64, decimals: usize) -> String {
    // avoid "-0.0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}

/// Evenly spaced round values covering `range`, at most `max_ticks` of them.
pub fn tick_values((min, max): (f64, f64), max_ticks: usize) -> Vec<f64> {
    let step = tick_step((min, max), max_ticks);
    if !(step.is_finite() && step > 0.0) {
        return vec![min, max];
    }

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;

    (first..=last).map(|i| i as f64 * step).collect()
}

/// Finest 1, 2 or 5 times power of ten step leaving at most `max_ticks`
/// multiples inside `range`.
///
/// This is the progression plotters walks for its own key points, so the
/// decimals derived from it match the labels it draws.
fn tick_step((min, max): (f64, f64), max_ticks: usize) -> f64 {
    let limit = max_ticks.max(2) as f64;
    let count = |step: f64| (max / step).floor() - (min / step).ceil() + 1.0;

    let mut step = 10f64.powi((max - min).log10().floor() as i32);
    if count(step) > limit {
        step *= 10.0;
    }

    'refine: loop {
        let coarse = step;
        for divisor in [2.0, 5.0, 10.0] {
            let finer = coarse / divisor;
            if !(count(finer) <= limit) {
                break 'refine;
            }
            step = finer;
        }
    }

    step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ticks_step_by_half() {
        let ticks = tick_values((0.0, 4.0), MAX_TICKS);

        assert_eq!(ticks, vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]);
        assert_eq!(tick_decimals((0.0, 4.0)), 1);
    }

    #[test]
    fn ticks_stay_inside_range() {
        let ticks = tick_values((-0.3, 12.7), MAX_TICKS);

        assert!(ticks.len() <= MAX_TICKS);
        assert!(ticks.iter().all(|&t| (-0.3..=12.7).contains(&t)));
        assert_eq!(tick_decimals((-0.3, 12.7)), 0);
        assert_eq!(tick_decimals((0.0, 2.0)), 1);
    }

    #[test]
    fn ticks_follow_one_two_five_steps() {
        // span just over 4: half steps still fit, unlike a span-based estimate
        let range = (0.01, 4.02);
        let ticks = tick_values(range, MAX_TICKS);

        assert_eq!(ticks, vec![0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]);
        assert_eq!(tick_decimals(range), 1);

        for range in [(0.0, 2.0), (0.01, 4.02), (-0.3, 12.7), (0.0, 1.3), (3.0, 3.07)] {
            let decimals = tick_decimals(range);
            let labels: Vec<String> = tick_values(range, MAX_TICKS)
                .into_iter()
                .map(|v| format_tick(v, decimals))
                .collect();
            let mut unique = labels.clone();
            unique.dedup();

            assert_eq!(unique, labels, "duplicate labels for {range:?}");
            assert!(labels.len() <= MAX_TICKS);
        }
    }

    #[test]
    fn ticks_handle_extreme_spans() {
        let ticks = tick_values((-1e300, 1e300), MAX_TICKS);

        assert!(!ticks.is_empty());
        assert!(ticks.len() <= MAX_TICKS);
    }

    #[test]
    fn formats_ticks_without_negative_zero() {
        assert_eq!(format_tick(-0.0, 1), "0.0");
        assert_eq!(format_tick(2.5, 2), "2.50");
    }

    #[test]
    fn layout_scales_with_dpi() {
        let low = CanvasLayout::from_options(&PlotOptions {
            dpi: 100,
            ..PlotOptions::default()
        });
        let high = CanvasLayout::from_options(&PlotOptions::default());

        assert_eq!(low.side, 600);
        assert_eq!(high.side, 1800);
        assert!(high.y_label_area > low.y_label_area);
        assert!(high.marker_radius > low.marker_radius);
    }

    #[test]
    fn marker_radius_follows_point_area() {
        // sqrt(20) / 2 pt at 300 dpi
        let layout = CanvasLayout::from_options(&PlotOptions::default());

        assert_eq!(layout.marker_radius, 9);
    }

    #[test]
    fn empty_captions_reserve_less_space() {
        let with = CanvasLayout::from_options(&PlotOptions::default());
        let without = CanvasLayout::from_options(&PlotOptions {
            x_label: String::new(),
            y_label: String::new(),
            ..PlotOptions::default()
        });

        assert!(without.x_label_area < with.x_label_area);
        assert!(without.y_label_area < with.y_label_area);
    }
}
