//! Common types shared across the relief-view workspace.

pub mod crs;
pub mod error;
pub mod geotransform;
pub mod grid;
pub mod raster;
pub mod window;

pub use crs::CrsCode;
pub use error::{DemError, DemResult};
pub use geotransform::GeoTransform;
pub use grid::{Grid, SurfaceGrid};
pub use raster::RasterSource;
pub use window::{ReadWindow, ResolvedWindow};
