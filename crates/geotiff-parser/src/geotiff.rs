//! GeoTIFF dataset decoding and windowed access.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;
use tracing::debug;

use relief_common::{DemError, DemResult, GeoTransform, Grid, RasterSource, ResolvedWindow};

use crate::tags;

/// A fully decoded GeoTIFF raster.
///
/// The whole band is held in memory; windowed reads slice it. Elevation
/// rasters commonly store `i16` or `f32` samples, all of which are widened
/// to `f64` on decode.
#[derive(Debug)]
pub struct GeoTiffDataset {
    path: PathBuf,
    width: usize,
    height: usize,
    data: Vec<f64>,
    transform: Option<GeoTransform>,
    epsg: Option<u16>,
    nodata: Option<f64>,
}

impl GeoTiffDataset {
    /// Open and decode band 1 of a GeoTIFF file.
    pub fn open(path: impl AsRef<Path>) -> DemResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| DemError::dataset_open(format!("{}: {}", path.display(), e)))?;
        let mut decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| DemError::dataset_open(format!("{}: {}", path.display(), e)))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| DemError::dataset_open(format!("{}: {}", path.display(), e)))?;
        let (width, height) = (width as usize, height as usize);

        let samples_per_pixel = u16_tag(&mut decoder, Tag::SamplesPerPixel).unwrap_or(1).max(1);
        let transform = read_transform(&mut decoder);
        let epsg = u16_vec_tag(&mut decoder, Tag::GeoKeyDirectoryTag)
            .as_deref()
            .and_then(tags::epsg_from_geokeys);
        let nodata = decoder
            .get_tag_ascii_string(Tag::GdalNodata)
            .ok()
            .and_then(|s| s.trim().trim_end_matches('\0').trim().parse::<f64>().ok());

        let image = decoder
            .read_image()
            .map_err(|e| DemError::dataset_open(format!("{}: {}", path.display(), e)))?;
        let data = widen_band(image, samples_per_pixel as usize);

        if data.len() != width * height {
            return Err(DemError::dataset_open(format!(
                "{}: decoded {} samples for a {}x{} raster",
                path.display(),
                data.len(),
                width,
                height
            )));
        }

        debug!(
            path = %path.display(),
            width,
            height,
            epsg = ?epsg,
            georeferenced = transform.is_some(),
            "opened GeoTIFF"
        );

        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
            data,
            transform,
            epsg,
            nodata,
        })
    }

    /// The GDAL NoData marker, when the file carries one.
    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    /// The path the dataset was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RasterSource for GeoTiffDataset {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn declared_epsg(&self) -> Option<u16> {
        self.epsg
    }

    fn geo_transform(&self) -> DemResult<GeoTransform> {
        self.transform.ok_or_else(|| {
            DemError::reprojection(format!(
                "{}: no georeferencing tags (ModelTransformation or \
                 ModelPixelScale + ModelTiepoint)",
                self.path.display()
            ))
        })
    }

    fn read_window(&self, window: &ResolvedWindow) -> DemResult<Grid> {
        debug!(
            x_off = window.x_off,
            y_off = window.y_off,
            width = window.width,
            height = window.height,
            "reading elevation window"
        );

        let mut out = Vec::with_capacity(window.width * window.height);
        for row in window.y_off..window.y_off + window.height {
            let start = row * self.width + window.x_off;
            out.extend_from_slice(&self.data[start..start + window.width]);
        }
        Grid::from_vec(out, window.width, window.height)
    }
}

/// Derive the affine geotransform from whichever geo-tags are present.
///
/// ModelTransformation wins when both forms exist, matching common writers.
fn read_transform<R: Read + Seek>(decoder: &mut Decoder<R>) -> Option<GeoTransform> {
    if let Some(m) = f64_vec_tag(decoder, Tag::ModelTransformationTag) {
        if m.len() >= 8 {
            return Some(GeoTransform {
                origin_x: m[3],
                pixel_width: m[0],
                rotation_x: m[1],
                origin_y: m[7],
                rotation_y: m[4],
                pixel_height: m[5],
            });
        }
    }

    let scale = f64_vec_tag(decoder, Tag::ModelPixelScaleTag)?;
    let tie = f64_vec_tag(decoder, Tag::ModelTiepointTag)?;
    if scale.len() < 2 || tie.len() < 6 {
        return None;
    }

    // First tiepoint ties pixel (i, j) to model (x, y); scale_y is stored
    // positive while north-up rasters step southward.
    let (i, j, x, y) = (tie[0], tie[1], tie[3], tie[4]);
    let (scale_x, scale_y) = (scale[0], scale[1]);
    Some(GeoTransform::north_up(
        x - i * scale_x,
        y + j * scale_y,
        scale_x,
        -scale_y,
    ))
}

fn widen_band(image: DecodingResult, samples_per_pixel: usize) -> Vec<f64> {
    fn take<T: Copy + Into<f64>>(values: Vec<T>, step: usize) -> Vec<f64> {
        values.iter().step_by(step).map(|&v| v.into()).collect()
    }

    match image {
        DecodingResult::U8(v) => take(v, samples_per_pixel),
        DecodingResult::U16(v) => take(v, samples_per_pixel),
        DecodingResult::U32(v) => take(v, samples_per_pixel),
        DecodingResult::U64(v) => v
            .iter()
            .step_by(samples_per_pixel)
            .map(|&x| x as f64)
            .collect(),
        DecodingResult::I8(v) => take(v, samples_per_pixel),
        DecodingResult::I16(v) => take(v, samples_per_pixel),
        DecodingResult::I32(v) => take(v, samples_per_pixel),
        DecodingResult::I64(v) => v
            .iter()
            .step_by(samples_per_pixel)
            .map(|&x| x as f64)
            .collect(),
        DecodingResult::F32(v) => take(v, samples_per_pixel),
        DecodingResult::F64(v) => take(v, samples_per_pixel),
    }
}

fn f64_vec_tag<R: Read + Seek>(decoder: &mut Decoder<R>, tag: Tag) -> Option<Vec<f64>> {
    decoder
        .find_tag(tag)
        .ok()
        .flatten()
        .and_then(|v| v.into_f64_vec().ok())
}

fn u16_vec_tag<R: Read + Seek>(decoder: &mut Decoder<R>, tag: Tag) -> Option<Vec<u16>> {
    decoder
        .find_tag(tag)
        .ok()
        .flatten()
        .and_then(|v| v.into_u16_vec().ok())
}

fn u16_tag<R: Read + Seek>(decoder: &mut Decoder<R>, tag: Tag) -> Option<u16> {
    decoder
        .find_tag(tag)
        .ok()
        .flatten()
        .and_then(|v| v.into_u16().ok())
}
