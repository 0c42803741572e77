//! Tests for GeoTIFF decoding and geo-tag parsing against files written by
//! the fixture encoder.

use geotiff_parser::GeoTiffDataset;
use relief_common::{DemError, RasterSource, ReadWindow};
use test_utils::{indexed_grid, GeoTiffFixture};

// ============================================================================
// Opening and metadata
// ============================================================================

#[test]
fn test_open_reports_dimensions_and_crs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tile.tif");
    GeoTiffFixture::north_up(12, 8, 37.0, 56.0, 0.25)
        .with_epsg(4326, true)
        .write_to(&path)
        .unwrap();

    let ds = GeoTiffDataset::open(&path).unwrap();
    assert_eq!(ds.dimensions(), (12, 8));
    assert_eq!(ds.declared_epsg(), Some(4326));
}

#[test]
fn test_transform_from_pixel_scale_and_tiepoint() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tile.tif");
    GeoTiffFixture::north_up(10, 10, 37.0, 56.0, 0.25)
        .write_to(&path)
        .unwrap();

    let ds = GeoTiffDataset::open(&path).unwrap();
    let gt = ds.geo_transform().unwrap();
    assert_eq!(gt.origin_x, 37.0);
    assert_eq!(gt.origin_y, 56.0);
    assert_eq!(gt.pixel_width, 0.25);
    assert_eq!(gt.pixel_height, -0.25);
    assert_eq!(gt.rotation_x, 0.0);
    assert_eq!(gt.rotation_y, 0.0);
}

#[test]
fn test_transform_from_model_transformation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tile.tif");
    GeoTiffFixture::north_up(10, 10, -120.0, 45.0, 0.5)
        .with_model_transformation()
        .write_to(&path)
        .unwrap();

    let ds = GeoTiffDataset::open(&path).unwrap();
    let gt = ds.geo_transform().unwrap();
    assert_eq!(gt.origin_x, -120.0);
    assert_eq!(gt.origin_y, 45.0);
    assert_eq!(gt.pixel_width, 0.5);
    assert_eq!(gt.pixel_height, -0.5);
}

#[test]
fn test_missing_georeferencing_fails_at_transform() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bare.tif");
    let fixture = GeoTiffFixture {
        width: 4,
        height: 4,
        data: vec![0.0; 16],
        ..Default::default()
    };
    fixture.write_to(&path).unwrap();

    // Opening succeeds; only the transform request fails.
    let ds = GeoTiffDataset::open(&path).unwrap();
    assert!(matches!(
        ds.geo_transform().unwrap_err(),
        DemError::Reprojection(_)
    ));
}

#[test]
fn test_nodata_marker_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nodata.tif");
    GeoTiffFixture::north_up(4, 4, 0.0, 1.0, 0.25)
        .with_nodata("-9999")
        .write_to(&path)
        .unwrap();

    let ds = GeoTiffDataset::open(&path).unwrap();
    assert_eq!(ds.nodata(), Some(-9999.0));
}

// ============================================================================
// Windowed reads
// ============================================================================

#[test]
fn test_full_read_round_trips_samples() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.tif");
    let samples: Vec<f32> = indexed_grid(6, 4).iter().map(|&v| v as f32).collect();
    GeoTiffFixture::north_up(6, 4, 0.0, 1.0, 0.25)
        .with_data(samples)
        .write_to(&path)
        .unwrap();

    let ds = GeoTiffDataset::open(&path).unwrap();
    let window = ReadWindow::full().resolve(6, 4).unwrap();
    let grid = ds.read_window(&window).unwrap();
    assert_eq!((grid.width, grid.height), (6, 4));
    assert_eq!(grid.get(0, 0), Some(0.0));
    assert_eq!(grid.get(3, 2), Some(3002.0));
    assert_eq!(grid.get(5, 3), Some(5003.0));
}

#[test]
fn test_subwindow_slices_correct_rectangle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.tif");
    let samples: Vec<f32> = indexed_grid(8, 8).iter().map(|&v| v as f32).collect();
    GeoTiffFixture::north_up(8, 8, 0.0, 1.0, 0.25)
        .with_data(samples)
        .write_to(&path)
        .unwrap();

    let ds = GeoTiffDataset::open(&path).unwrap();
    let window = ReadWindow::new(2, 3, 4, 2).resolve(8, 8).unwrap();
    let grid = ds.read_window(&window).unwrap();
    assert_eq!((grid.width, grid.height), (4, 2));
    // (col 2, row 3) of the source lands at (0, 0) of the window
    assert_eq!(grid.get(0, 0), Some(2003.0));
    assert_eq!(grid.get(3, 1), Some(5004.0));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_open_nonexistent_path() {
    let err = GeoTiffDataset::open("/nonexistent/elevation.tif").unwrap_err();
    assert!(matches!(err, DemError::DatasetOpen(_)));
}

#[test]
fn test_open_undecodable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_a_tiff.tif");
    std::fs::write(&path, b"this is not a raster").unwrap();

    let err = GeoTiffDataset::open(&path).unwrap_err();
    assert!(matches!(err, DemError::DatasetOpen(_)));
}
