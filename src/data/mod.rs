//! Data reading and representation.
//!
//! This module handles reading optimizer CSV output and representing it
//! as an ordered set of objective-space points.

mod point_set;
mod reader;

pub use point_set::{Point, PointSet};
pub use reader::{CsvReader, F1_COLUMN, F2_COLUMN};
