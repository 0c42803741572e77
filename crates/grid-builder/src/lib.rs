//! Builds projected surface grids from DEM rasters.
//!
//! The pipeline: open the raster, validate its declared coordinate system,
//! derive the warped (target-projection) geotransform, read the requested
//! elevation window, center the elevations on the window's middle sample,
//! and map pixel indices through the warped transform into map coordinates.

pub mod builder;
pub mod config;

pub use builder::{build_grid, build_grid_from_source, pixel_index_grids, project_pixel_grids};
pub use config::GridBuilderConfig;
