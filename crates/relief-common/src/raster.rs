//! Capability interface for raster dataset backends.

use crate::error::DemResult;
use crate::geotransform::GeoTransform;
use crate::grid::Grid;
use crate::window::ResolvedWindow;

/// A decoded geospatial raster the grid builder can read from.
///
/// The grid builder only consumes this trait, so alternate decoders can be
/// substituted without touching the coordinate math.
pub trait RasterSource {
    /// Pixel dimensions as (width, height).
    fn dimensions(&self) -> (usize, usize);

    /// The EPSG code the dataset declares, if it declares one.
    ///
    /// Reported as the raw registry code so that a declared system the
    /// pipeline does not model still fails CRS validation instead of being
    /// silently assumed.
    fn declared_epsg(&self) -> Option<u16>;

    /// The dataset's native affine geotransform.
    fn geo_transform(&self) -> DemResult<GeoTransform>;

    /// Read the elevation samples for a resolved window into a grid.
    fn read_window(&self, window: &ResolvedWindow) -> DemResult<Grid>;
}
