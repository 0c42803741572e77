//! In-memory raster source with a chosen transform and CRS.

use relief_common::{DemError, DemResult, GeoTransform, Grid, RasterSource, ResolvedWindow};

/// A `RasterSource` backed by a plain vector, for exercising the grid
/// builder without touching the filesystem.
#[derive(Debug, Clone)]
pub struct SyntheticRaster {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f64>,
    pub transform: Option<GeoTransform>,
    pub epsg: Option<u16>,
}

impl SyntheticRaster {
    /// An all-zero raster with the given transform and no declared CRS.
    pub fn zeros(width: usize, height: usize, transform: GeoTransform) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
            transform: Some(transform),
            epsg: None,
        }
    }

    /// Replace the sample data (must be `width * height` values).
    pub fn with_data(mut self, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), self.width * self.height);
        self.data = data;
        self
    }

    /// Declare an EPSG code.
    pub fn with_epsg(mut self, epsg: u16) -> Self {
        self.epsg = Some(epsg);
        self
    }

    /// Drop the geotransform, simulating a raster without georeferencing.
    pub fn without_transform(mut self) -> Self {
        self.transform = None;
        self
    }
}

impl RasterSource for SyntheticRaster {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn declared_epsg(&self) -> Option<u16> {
        self.epsg
    }

    fn geo_transform(&self) -> DemResult<GeoTransform> {
        self.transform
            .ok_or_else(|| DemError::reprojection("synthetic raster has no georeferencing"))
    }

    fn read_window(&self, window: &ResolvedWindow) -> DemResult<Grid> {
        let mut out = Vec::with_capacity(window.width * window.height);
        for row in window.y_off..window.y_off + window.height {
            let start = row * self.width + window.x_off;
            out.extend_from_slice(&self.data[start..start + window.width]);
        }
        Grid::from_vec(out, window.width, window.height)
    }
}
