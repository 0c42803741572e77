//! Synthetic GeoTIFF files for exercising the real decoder.

use std::fs::File;
use std::path::Path;

use tiff::encoder::colortype::Gray32Float;
use tiff::encoder::TiffEncoder;
use tiff::tags::Tag;
use tiff::TiffResult;

/// Description of a single-band float GeoTIFF to write to disk.
#[derive(Debug, Clone, Default)]
pub struct GeoTiffFixture {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
    pub pixel_scale: Option<Vec<f64>>,
    pub tiepoint: Option<Vec<f64>>,
    pub model_transformation: Option<Vec<f64>>,
    pub geo_keys: Option<Vec<u16>>,
    pub nodata: Option<String>,
}

impl GeoTiffFixture {
    /// A north-up raster georeferenced via PixelScale + Tiepoint, with the
    /// top-left pixel corner at (`origin_x`, `origin_y`).
    pub fn north_up(width: u32, height: u32, origin_x: f64, origin_y: f64, pixel: f64) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; (width * height) as usize],
            pixel_scale: Some(vec![pixel, pixel, 0.0]),
            tiepoint: Some(vec![0.0, 0.0, 0.0, origin_x, origin_y, 0.0]),
            ..Default::default()
        }
    }

    /// Same raster, georeferenced via a ModelTransformation matrix instead.
    pub fn with_model_transformation(mut self) -> Self {
        let scale = self.pixel_scale.take().unwrap_or(vec![1.0, 1.0, 0.0]);
        let tie = self.tiepoint.take().unwrap_or(vec![0.0; 6]);
        #[rustfmt::skip]
        let matrix = vec![
            scale[0], 0.0, 0.0, tie[3],
            0.0, -scale[1], 0.0, tie[4],
            0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        self.model_transformation = Some(matrix);
        self
    }

    /// Declare a CRS through a minimal GeoKey directory.
    pub fn with_epsg(mut self, epsg: u16, geographic: bool) -> Self {
        let (model_type, crs_key) = if geographic { (2u16, 2048u16) } else { (1u16, 3072u16) };
        #[rustfmt::skip]
        let keys = vec![
            1, 1, 0, 2,
            1024, 0, 1, model_type,
            crs_key, 0, 1, epsg,
        ];
        self.geo_keys = Some(keys);
        self
    }

    /// Replace the sample data (must be `width * height` values).
    pub fn with_data(mut self, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), (self.width * self.height) as usize);
        self.data = data;
        self
    }

    /// Set the GDAL NoData marker string.
    pub fn with_nodata(mut self, nodata: &str) -> Self {
        self.nodata = Some(nodata.to_string());
        self
    }

    /// Write the fixture as a single-band Gray32Float GeoTIFF.
    pub fn write_to(&self, path: &Path) -> TiffResult<()> {
        let file = File::create(path)?;
        let mut encoder = TiffEncoder::new(file)?;
        let mut image = encoder.new_image::<Gray32Float>(self.width, self.height)?;

        if let Some(scale) = &self.pixel_scale {
            image
                .encoder()
                .write_tag(Tag::ModelPixelScaleTag, scale.as_slice())?;
        }
        if let Some(tie) = &self.tiepoint {
            image
                .encoder()
                .write_tag(Tag::ModelTiepointTag, tie.as_slice())?;
        }
        if let Some(matrix) = &self.model_transformation {
            image
                .encoder()
                .write_tag(Tag::ModelTransformationTag, matrix.as_slice())?;
        }
        if let Some(keys) = &self.geo_keys {
            image
                .encoder()
                .write_tag(Tag::GeoKeyDirectoryTag, keys.as_slice())?;
        }
        if let Some(nodata) = &self.nodata {
            image
                .encoder()
                .write_tag(Tag::GdalNodata, nodata.as_str())?;
        }

        image.write_data(&self.data)?;
        Ok(())
    }
}

/// Write a WGS-84 (EPSG:4326) north-up elevation fixture in one call.
pub fn write_wgs84_geotiff(
    path: &Path,
    width: u32,
    height: u32,
    origin_x: f64,
    origin_y: f64,
    pixel: f64,
    data: Vec<f32>,
) -> TiffResult<()> {
    GeoTiffFixture::north_up(width, height, origin_x, origin_y, pixel)
        .with_epsg(4326, true)
        .with_data(data)
        .write_to(path)
}
