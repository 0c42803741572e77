//! The raster-to-surface-grid pipeline.

use std::path::Path;

use tracing::{debug, info};

use geotiff_parser::GeoTiffDataset;
use projection::warp;
use relief_common::{
    CrsCode, DemError, DemResult, GeoTransform, Grid, RasterSource, ReadWindow, SurfaceGrid,
};

use crate::config::GridBuilderConfig;

/// Build a projected surface grid from a GeoTIFF on disk.
///
/// Convenience wrapper around [`build_grid_from_source`] with the default
/// EPSG:4326 → EPSG:3395 configuration. The dataset handle lives only for
/// the duration of the call.
pub fn build_grid(path: impl AsRef<Path>, window: ReadWindow) -> DemResult<SurfaceGrid> {
    let dataset = GeoTiffDataset::open(path)?;
    build_grid_from_source(&dataset, window, &GridBuilderConfig::default())
}

/// Build a projected surface grid from any raster source.
///
/// Produces three identically shaped matrices: projected X and Y map
/// coordinates and elevations centered on the window's middle sample.
pub fn build_grid_from_source<S: RasterSource>(
    source: &S,
    window: ReadWindow,
    config: &GridBuilderConfig,
) -> DemResult<SurfaceGrid> {
    config.validate()?;

    if let Some(code) = source.declared_epsg() {
        if CrsCode::from_epsg(code) != Some(config.source_crs) {
            return Err(DemError::CrsMismatch {
                expected: config.source_crs,
                found: format!("EPSG:{}", code),
            });
        }
    }

    let (raster_width, raster_height) = source.dimensions();
    let src_transform = source.geo_transform()?;
    let target = config.target_projection()?;
    let warped = warp::suggest_transform(&src_transform, raster_width, raster_height, &target)?;
    debug!(
        target = %config.target_crs,
        origin_x = warped.origin_x,
        origin_y = warped.origin_y,
        pixel_width = warped.pixel_width,
        pixel_height = warped.pixel_height,
        "derived warped geotransform"
    );

    let resolved = window.resolve(raster_width, raster_height)?;
    let mut z = source.read_window(&resolved)?;

    // Shift all elevations so the window's middle sample sits at zero.
    // This runs exactly once per build; it is not idempotent.
    let center = z.center_value();
    z.shift(-center);

    let (mut x, mut y) = pixel_index_grids(resolved.width, resolved.height);
    project_pixel_grids(&warped, &mut x, &mut y)?;

    info!(
        width = resolved.width,
        height = resolved.height,
        center_elevation = center,
        "built surface grid"
    );

    SurfaceGrid::new(x, y, z)
}

/// Dense pixel-index matrices for a window.
///
/// Row-major meshgrid: X holds the column index and varies along columns,
/// Y holds the row index and varies along rows.
pub fn pixel_index_grids(width: usize, height: usize) -> (Grid, Grid) {
    let mut x = Grid::filled(width, height, 0.0);
    let mut y = Grid::filled(width, height, 0.0);
    for row in 0..height {
        for col in 0..width {
            x.data[row * width + col] = col as f64;
            y.data[row * width + col] = row as f64;
        }
    }
    (x, y)
}

/// Map pixel-coordinate matrices through an affine transform, in place.
///
/// Both outputs are computed from the original matrices before either is
/// replaced, so the Y output never sees already-transformed X values.
pub fn project_pixel_grids(transform: &GeoTransform, x: &mut Grid, y: &mut Grid) -> DemResult<()> {
    if (x.width, x.height) != (y.width, y.height) {
        return Err(DemError::shape_mismatch(format!(
            "X {}x{} vs Y {}x{}",
            x.width, x.height, y.width, y.height
        )));
    }

    let mut map_x = Grid::filled(x.width, x.height, 0.0);
    let mut map_y = Grid::filled(y.width, y.height, 0.0);
    for i in 0..x.data.len() {
        let (mx, my) = transform.apply(x.data[i], y.data[i]);
        map_x.data[i] = mx;
        map_y.data[i] = my;
    }

    *x = map_x;
    *y = map_y;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_index_grids_row_major() {
        let (x, y) = pixel_index_grids(3, 2);
        assert_eq!(x.data, vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
        assert_eq!(y.data, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_project_rejects_mismatched_shapes() {
        let gt = GeoTransform::north_up(0.0, 0.0, 1.0, -1.0);
        let (mut x, _) = pixel_index_grids(3, 2);
        let (_, mut y) = pixel_index_grids(2, 3);
        assert!(matches!(
            project_pixel_grids(&gt, &mut x, &mut y).unwrap_err(),
            DemError::ShapeMismatch(_)
        ));
    }
}
