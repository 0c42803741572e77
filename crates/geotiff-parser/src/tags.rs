//! GeoTIFF tag and GeoKey constants, and GeoKey directory parsing.
//!
//! Tag ids are not part of the baseline TIFF set the `tiff` crate names, so
//! they are addressed numerically.

/// ModelPixelScaleTag: `[scale_x, scale_y, scale_z]`.
pub const MODEL_PIXEL_SCALE: u16 = 33550;

/// ModelTiepointTag: `[i, j, k, x, y, z]` tuples tying raster to model space.
pub const MODEL_TIEPOINT: u16 = 33922;

/// ModelTransformationTag: row-major 4x4 raster-to-model matrix.
pub const MODEL_TRANSFORMATION: u16 = 34264;

/// GeoKeyDirectoryTag: packed key/value directory of GeoTIFF keys.
pub const GEO_KEY_DIRECTORY: u16 = 34735;

/// GDAL's ASCII NoData marker tag.
pub const GDAL_NODATA: u16 = 42113;

/// GTModelTypeGeoKey.
pub const KEY_MODEL_TYPE: u16 = 1024;

/// GeographicTypeGeoKey.
pub const KEY_GEOGRAPHIC_TYPE: u16 = 2048;

/// ProjectedCSTypeGeoKey.
pub const KEY_PROJECTED_CS_TYPE: u16 = 3072;

/// GTModelTypeGeoKey value for projected coordinate systems.
pub const MODEL_TYPE_PROJECTED: u16 = 1;

/// GTModelTypeGeoKey value for geographic coordinate systems.
pub const MODEL_TYPE_GEOGRAPHIC: u16 = 2;

/// Extract the declared EPSG code from a GeoKey directory.
///
/// The directory is a flat `u16` array: a 4-entry header
/// `[version, revision, minor, key_count]` followed by `key_count` entries
/// of `[key_id, tag_location, count, value]`. Only inline values
/// (`tag_location == 0`) are considered; the CRS geokeys are always inline.
///
/// Returns None when the directory is malformed, the model type is missing,
/// or no CRS geokey is present.
pub fn epsg_from_geokeys(directory: &[u16]) -> Option<u16> {
    if directory.len() < 4 {
        return None;
    }
    let key_count = directory[3] as usize;
    if directory.len() < 4 + key_count * 4 {
        return None;
    }

    let mut model_type = None;
    let mut geographic = None;
    let mut projected = None;

    for entry in directory[4..4 + key_count * 4].chunks_exact(4) {
        let (key_id, tag_location, value) = (entry[0], entry[1], entry[3]);
        if tag_location != 0 {
            continue;
        }
        match key_id {
            KEY_MODEL_TYPE => model_type = Some(value),
            KEY_GEOGRAPHIC_TYPE => geographic = Some(value),
            KEY_PROJECTED_CS_TYPE => projected = Some(value),
            _ => {}
        }
    }

    match model_type {
        Some(MODEL_TYPE_GEOGRAPHIC) => geographic,
        Some(MODEL_TYPE_PROJECTED) => projected,
        _ => None,
    }
}
