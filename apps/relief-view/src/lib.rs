//! DEM relief viewer.
//!
//! Reads a GeoTIFF elevation model, reprojects its coordinate grid into
//! World Mercator meters, and displays the result as an interactive 3D
//! surface.

use std::path::Path;

use tracing::info;

use relief_common::{DemResult, ReadWindow};
use surface_renderer::ViewerOptions;

pub use grid_builder::{build_grid, build_grid_from_source, GridBuilderConfig};
pub use relief_common::{DemError, SurfaceGrid};
pub use surface_renderer::show;

/// Build the surface grid for a raster and display it in one call.
///
/// No intermediate persistence; blocks until the viewer window is closed.
pub fn render_from_path(
    path: impl AsRef<Path>,
    window: ReadWindow,
    scale: f64,
) -> DemResult<()> {
    let path = path.as_ref();
    let surface = build_grid(path, window)?;

    if let Some((lo, hi)) = surface.z.min_max() {
        info!(
            path = %path.display(),
            width = surface.width(),
            height = surface.height(),
            min_elevation = lo,
            max_elevation = hi,
            "surface grid ready"
        );
    }

    let options = ViewerOptions {
        title: format!("relief-view - {}", path.display()),
        scale,
        ..Default::default()
    };
    show(&surface, &options)
}
