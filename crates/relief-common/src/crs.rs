//! Coordinate reference system identifiers.

use serde::{Deserialize, Serialize};

/// Supported coordinate reference systems, identified by EPSG registry code.
///
/// The pipeline reads geodetic rasters and projects them into a metric
/// system; only the codes it can actually handle are listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrsCode {
    /// WGS-84 geodetic longitude/latitude, degrees.
    Epsg4326,
    /// World Mercator, meters.
    Epsg3395,
}

impl CrsCode {
    /// Look up a CRS by EPSG code.
    pub fn from_epsg(code: u16) -> Option<Self> {
        match code {
            4326 => Some(CrsCode::Epsg4326),
            3395 => Some(CrsCode::Epsg3395),
            _ => None,
        }
    }

    /// The EPSG registry code.
    pub fn epsg_code(&self) -> u16 {
        match self {
            CrsCode::Epsg4326 => 4326,
            CrsCode::Epsg3395 => 3395,
        }
    }

    /// Canonical "EPSG:nnnn" form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CrsCode::Epsg4326 => "EPSG:4326",
            CrsCode::Epsg3395 => "EPSG:3395",
        }
    }

    /// Whether coordinates are geodetic degrees rather than projected meters.
    pub fn is_geographic(&self) -> bool {
        matches!(self, CrsCode::Epsg4326)
    }
}

impl std::fmt::Display for CrsCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
