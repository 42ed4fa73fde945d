//! Frontplot - render Pareto fronts from optimizer CSV output.

use anyhow::{bail, Context, Result};
use clap::Parser;
use frontplot::plot::{parse_range, Color, FrontPlotter, MarkerShape, PlotOptions, Preset};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "frontplot")]
#[command(about = "Render Pareto fronts from optimizer CSV output", long_about = None)]
struct Args {
    /// CSV files with f1,f2 columns
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output image (single input only, defaults to the input with a .png extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Named style: nsga2 or sch
    #[arg(long, conflicts_with = "config")]
    preset: Option<Preset>,

    /// JSON file with plot options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Marker color, #RRGGBB or a color name
    #[arg(long)]
    color: Option<Color>,

    /// Marker shape: o, s, ^ or x
    #[arg(long)]
    marker: Option<MarkerShape>,

    /// Marker area in points squared
    #[arg(long)]
    marker_size: Option<f64>,

    /// Fixed x-axis bounds as MIN,MAX
    #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
    x_range: Option<(f64, f64)>,

    /// Fixed y-axis bounds as MIN,MAX
    #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
    y_range: Option<(f64, f64)>,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Legend text, {count} is replaced with the number of points
    #[arg(long)]
    legend: Option<String>,

    /// X-axis caption
    #[arg(long)]
    x_label: Option<String>,

    /// Y-axis caption
    #[arg(long)]
    y_label: Option<String>,

    /// Output resolution in dots per inch
    #[arg(long)]
    dpi: Option<u32>,

    /// Disable the background grid
    #[arg(long)]
    no_grid: bool,

    /// Show each plot in the terminal after saving it
    #[arg(long)]
    show: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    /// Options shared by every input: defaults, then preset or config, then flags.
    fn base_options(&self) -> Result<PlotOptions> {
        let mut options = match &self.config {
            Some(path) => PlotOptions::from_json_file(path)
                .with_context(|| format!("Failed to read options from {}", path.display()))?,
            None => PlotOptions::preset(self.preset.unwrap_or_default()),
        };

        if let Some(color) = self.color {
            options.point_color = color;
        }
        if let Some(marker) = self.marker {
            options.marker_shape = marker;
        }
        if let Some(size) = self.marker_size {
            options.marker_size = size;
        }
        if let Some(range) = self.x_range {
            options.x_range = range;
        }
        if let Some(range) = self.y_range {
            options.y_range = range;
        }
        if let Some(title) = &self.title {
            options.title = title.clone();
        }
        if let Some(legend) = &self.legend {
            options.legend_label_template = legend.clone();
        }
        if let Some(label) = &self.x_label {
            options.x_label = label.clone();
        }
        if let Some(label) = &self.y_label {
            options.y_label = label.clone();
        }
        if let Some(dpi) = self.dpi {
            options.dpi = dpi;
        }
        if self.no_grid {
            options.grid = false;
        }
        if self.show {
            options.show_interactive = true;
        }

        Ok(options)
    }

    fn output_for(&self, input: &Path) -> Result<PathBuf> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }

        let output = default_output_path(input);
        if output == input {
            bail!(
                "Refusing to overwrite input {} (pass --output)",
                input.display()
            );
        }

        Ok(output)
    }
}

/// `pareto_run1.csv` -> `pareto_run1.png`, next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("png")
}

fn init_logging(log: Option<&Path>) -> Result<()> {
    match log {
        Some(log_path) => {
            let file = std::fs::File::create(log_path)
                .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(Level::DEBUG)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        },
        None => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        },
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log.as_deref())?;
    tracing::info!("Starting frontplot");

    if args.output.is_some() && args.inputs.len() > 1 {
        bail!("--output can only be used with a single input");
    }

    let base = args.base_options()?;
    base.validate()?;

    let plotter = FrontPlotter::new();
    for input in &args.inputs {
        let output = args.output_for(input)?;
        let points = plotter
            .load(input)
            .with_context(|| format!("Failed to load {}", input.display()))?;

        let options = base.clone().with_output_path(output);
        let artifact = plotter
            .render(&points, &options)
            .with_context(|| format!("Failed to render {}", input.display()))?;

        println!(
            "{} -> {} ({})",
            input.display(),
            artifact.path.display(),
            artifact.legend
        );
    }

    tracing::info!("Frontplot exited");
    Ok(())
}
