//! Error types for the DEM pipeline.

use crate::crs::CrsCode;
use thiserror::Error;

/// Result type alias using DemError.
pub type DemResult<T> = std::result::Result<T, DemError>;

/// Primary error type for DEM grid building and rendering.
///
/// Every failure in the pipeline is terminal for the current call and is
/// surfaced as one of these variants so callers can tell "bad input file"
/// from "bad window" from "can't display".
#[derive(Debug, Error)]
pub enum DemError {
    // === Dataset errors ===
    /// The path does not resolve to a readable, decodable raster.
    #[error("failed to open dataset: {0}")]
    DatasetOpen(String),

    /// The dataset declares a coordinate system other than the configured source.
    #[error("dataset declares {found}, expected {expected}")]
    CrsMismatch { expected: CrsCode, found: String },

    // === Grid building errors ===
    /// The reprojected transform cannot be constructed.
    #[error("reprojection failed: {0}")]
    Reprojection(String),

    /// The requested window is degenerate or outside the raster bounds.
    #[error("invalid read window: {0}")]
    ReadWindow(String),

    /// X, Y and Z matrices do not share a single shape.
    #[error("grid shape mismatch: {0}")]
    ShapeMismatch(String),

    // === Rendering errors ===
    /// No usable window or GPU backend is available.
    #[error("failed to initialize viewer: {0}")]
    RendererInit(String),

    /// The viewer failed after successful initialization.
    #[error("rendering failed: {0}")]
    Render(String),
}

impl DemError {
    /// Create a DatasetOpen error.
    pub fn dataset_open(msg: impl Into<String>) -> Self {
        Self::DatasetOpen(msg.into())
    }

    /// Create a Reprojection error.
    pub fn reprojection(msg: impl Into<String>) -> Self {
        Self::Reprojection(msg.into())
    }

    /// Create a ReadWindow error.
    pub fn read_window(msg: impl Into<String>) -> Self {
        Self::ReadWindow(msg.into())
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    /// Create a RendererInit error.
    pub fn renderer_init(msg: impl Into<String>) -> Self {
        Self::RendererInit(msg.into())
    }

    /// Create a Render error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<std::io::Error> for DemError {
    fn from(err: std::io::Error) -> Self {
        Self::DatasetOpen(err.to_string())
    }
}
