//! Frontplot - render Pareto fronts from multi-objective optimizer output.
//!
//! Frontplot reads the `f1,f2` objective table an NSGA-II run writes and
//! draws it as a scatter plot on fixed axes, so fronts from different runs
//! can be compared at a glance.
//!
//! # Features
//!
//! - All-or-nothing CSV loading with row-level error reporting
//! - Fixed-scale PNG output at any resolution
//! - Presets matching the standard NSGA-II and SCH plots
//! - JSON option files
//! - Optional terminal viewer
//!
//! # Example
//!
//! ```no_run
//! use frontplot::plot::{FrontPlotter, PlotOptions, Preset};
//! use std::path::Path;
//!
//! let plotter = FrontPlotter::new();
//! let points = plotter.load(Path::new("pareto_run1.csv"))?;
//!
//! let options = PlotOptions::preset(Preset::Sch).with_output_path("pareto_run1.png");
//! let artifact = plotter.render(&points, &options)?;
//! println!("{}", artifact.legend);
//! # Ok::<(), frontplot::FrontPlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod clipboard;
pub mod data;
pub mod error;
pub mod plot;
pub mod viewer;

pub use error::{FrontPlotError, Result};
