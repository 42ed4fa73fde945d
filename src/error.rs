//! Error types for frontplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for frontplot operations.
pub type Result<T> = std::result::Result<T, FrontPlotError>;

/// Errors that can occur while loading or rendering a front.
#[derive(Debug, Error)]
pub enum FrontPlotError {
    /// Input file does not exist.
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    /// A required column is absent from the header row.
    #[error("Missing required column '{column}' in {path}")]
    Schema { path: PathBuf, column: String },

    /// A required cell could not be read as a finite number.
    #[error("Invalid value '{value}' in column '{column}' at row {row}")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    /// Reading or writing a file failed.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Plot options cannot produce a valid plot.
    #[error("Invalid plot options: {0}")]
    InvalidOptions(String),

    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Drawing backend failure.
    #[error("Render error: {0}")]
    Render(String),

    /// PNG encoding failure.
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Malformed options file.
    #[error("Options file error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

impl FrontPlotError {
    /// Create a Schema error.
    pub fn schema(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            column: column.into(),
        }
    }

    /// Create a Parse error.
    pub fn parse(row: usize, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parse {
            row,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create an Io error tied to a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an InvalidOptions error.
    pub fn invalid_options(reason: impl Into<String>) -> Self {
        Self::InvalidOptions(reason.into())
    }
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for FrontPlotError
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Self::Render(err.to_string())
    }
}
