//! GeoTIFF dataset reading.
//!
//! The TIFF container is decoded by the `tiff` crate; the GeoTIFF layer on
//! top of it (geotransform tags, GeoKey directory, GDAL NoData) is parsed
//! here. The decoded dataset implements [`relief_common::RasterSource`] for
//! the grid builder.

pub mod geotiff;
pub mod tags;

pub use geotiff::GeoTiffDataset;
