//! Derivation of the reprojected (warped) geotransform.
//!
//! The source raster's geotransform maps pixels to geodetic degrees. The
//! grid builder needs the transform of the same raster viewed in the target
//! projection: a north-up transform whose extent is the projected footprint
//! of the source and whose pixel counts match the source.

use relief_common::{DemError, DemResult, GeoTransform};

use crate::mercator::WorldMercator;

/// Number of sample points along each raster edge.
///
/// The projected footprint of a rotated or sheared raster is not spanned by
/// its corners alone, so edges are sampled as well.
const EDGE_SAMPLES: usize = 20;

/// Derive the north-up target-projection transform for a raster.
///
/// `width`/`height` are the source raster's pixel dimensions. Fails when the
/// raster's footprint leaves the projection domain or collapses to a point.
pub fn suggest_transform(
    src: &GeoTransform,
    width: usize,
    height: usize,
    projection: &WorldMercator,
) -> DemResult<GeoTransform> {
    if width == 0 || height == 0 {
        return Err(DemError::reprojection(format!(
            "cannot warp an empty {}x{} raster",
            width, height
        )));
    }

    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;

    let w = width as f64;
    let h = height as f64;
    for i in 0..=EDGE_SAMPLES {
        let frac = i as f64 / EDGE_SAMPLES as f64;

        // Top, bottom, left and right edges of the pixel extent.
        for (col, row) in [
            (frac * w, 0.0),
            (frac * w, h),
            (0.0, frac * h),
            (w, frac * h),
        ] {
            let (lon, lat) = src.apply(col, row);
            let (x, y) = projection.forward(lon, lat)?;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    let span_x = max_x - min_x;
    let span_y = max_y - min_y;
    if span_x <= 0.0 || span_y <= 0.0 {
        return Err(DemError::reprojection(format!(
            "projected footprint collapsed ({} x {} meters)",
            span_x, span_y
        )));
    }

    Ok(GeoTransform::north_up(
        min_x,
        max_y,
        span_x / w,
        -span_y / h,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    // A 1-degree tile at lon 10..11, lat 45..46, 100x100 pixels.
    fn one_degree_tile() -> GeoTransform {
        GeoTransform::north_up(10.0, 46.0, 0.01, -0.01)
    }

    #[test]
    fn test_warped_extent_matches_projected_corners() {
        let proj = WorldMercator::wgs84();
        let warped = suggest_transform(&one_degree_tile(), 100, 100, &proj).unwrap();

        let (west, north) = proj.forward(10.0, 46.0).unwrap();
        let (east, south) = proj.forward(11.0, 45.0).unwrap();

        assert!((warped.origin_x - west).abs() < 1e-6);
        assert!((warped.origin_y - north).abs() < 1e-6);
        assert!((warped.pixel_width - (east - west) / 100.0).abs() < 1e-6);
        assert!((warped.pixel_height - (south - north) / 100.0).abs() < 1e-6);
        assert!(warped.pixel_height < 0.0);
        assert_eq!(warped.rotation_x, 0.0);
        assert_eq!(warped.rotation_y, 0.0);

        // Pinned absolute value for the west edge at lon 10.
        assert!((warped.origin_x - 1_113_194.908).abs() < 1e-3);
    }

    #[test]
    fn test_warp_rejects_polar_footprint() {
        let proj = WorldMercator::wgs84();
        // Tile reaching the pole leaves the projection domain.
        let src = GeoTransform::north_up(0.0, 90.0, 0.01, -0.01);
        let err = suggest_transform(&src, 100, 100, &proj).unwrap_err();
        assert!(matches!(err, DemError::Reprojection(_)));
    }

    #[test]
    fn test_warp_rejects_empty_raster() {
        let proj = WorldMercator::wgs84();
        let err = suggest_transform(&one_degree_tile(), 0, 100, &proj).unwrap_err();
        assert!(matches!(err, DemError::Reprojection(_)));
    }
}
