//! Error types for chart generation

use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Rendering error: {0}")]
    Rendering(String),

    #[error("Canvas buffer does not match {width}x{height}")]
    Buffer { width: u32, height: u32 },

    #[error("Failed to write chart to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid chart data: {0}")]
    InvalidData(String),

    #[error("Failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Rendering(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
