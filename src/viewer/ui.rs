//! Viewer rendering layer.

use super::ViewerState;
use crate::plot::{format_tick, tick_values, Color as PlotColor, FrontScene, RenderedArtifact};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

// Gruvbox dark
const FG: Color = Color::Rgb(235, 219, 178);
const BORDER: Color = Color::Rgb(102, 92, 84);
const GRID: Color = Color::Rgb(80, 73, 69);
const TITLE: Color = Color::Rgb(250, 189, 47);
const HELP: Color = Color::Rgb(184, 187, 38);

/// Ticks shown per axis in the terminal.
const VIEWER_TICKS: usize = 5;

/// Draw the viewer.
pub fn draw_viewer(
    f: &mut Frame<'_>,
    scene: &FrontScene,
    artifact: &RenderedArtifact,
    state: &ViewerState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    draw_chart(f, square_area(chunks[0]), scene, state);
    draw_footer(f, chunks[1], artifact, state);
}

fn draw_chart(f: &mut Frame<'_>, area: Rect, scene: &FrontScene, state: &ViewerState) {
    let (x0, x1) = scene.x_range;
    let (y0, y1) = scene.y_range;
    let x_ticks = tick_values(scene.x_range, VIEWER_TICKS);
    let y_ticks = tick_values(scene.y_range, VIEWER_TICKS);

    let grid_lines: Vec<[(f64, f64); 2]> = if state.grid {
        x_ticks
            .iter()
            .map(|&x| [(x, y0), (x, y1)])
            .chain(y_ticks.iter().map(|&y| [(x0, y), (x1, y)]))
            .collect()
    } else {
        Vec::new()
    };

    let mut datasets: Vec<Dataset<'_>> = grid_lines
        .iter()
        .map(|line| {
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(GRID))
                .data(line)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .name(scene.legend.as_str())
            .marker(Marker::Braille)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(to_terminal_color(scene.color)))
            .data(&scene.markers),
    );

    let x_axis = Axis::default()
        .title(scene.x_label.as_str())
        .style(Style::default().fg(FG))
        .bounds([x0, x1])
        .labels(axis_labels(scene.x_range, scene.layout.x_decimals));

    let y_axis = Axis::default()
        .title(scene.y_label.as_str())
        .style(Style::default().fg(FG))
        .bounds([y0, y1])
        .labels(axis_labels(scene.y_range, scene.layout.y_decimals));

    let legend_position = if scene.legend.is_empty() {
        None
    } else {
        Some(LegendPosition::TopRight)
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER))
                .title(format!(" {} ", scene.title))
                .title_style(Style::default().fg(TITLE)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend_position)
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 4)));

    f.render_widget(chart, area);
}

fn draw_footer(f: &mut Frame<'_>, area: Rect, artifact: &RenderedArtifact, state: &ViewerState) {
    let help = format!(
        "{} | {} | g: Grid | y: Copy summary | q/Esc: Close",
        artifact.path.display(),
        state.status
    );
    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(HELP))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Min, mid and max labels of a range.
fn axis_labels((min, max): (f64, f64), decimals: usize) -> Vec<String> {
    vec![
        format_tick(min, decimals),
        format_tick((min + max) / 2.0, decimals),
        format_tick(max, decimals),
    ]
}

/// Largest centered area that looks square with 1:2 terminal cells.
fn square_area(r: Rect) -> Rect {
    let width = r.width.min(r.height.saturating_mul(2));
    let height = r.height.min(width / 2).max(r.height.min(3));

    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

fn to_terminal_color(color: PlotColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
