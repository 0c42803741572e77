//! Ellipsoidal Mercator projection (EPSG:3395, "World Mercator").
//!
//! Unlike the spherical web-mercator variant, World Mercator projects on the
//! WGS-84 ellipsoid, so northing involves the conformal latitude:
//!
//! ```text
//! x = a * lon
//! y = a * ln( tan(pi/4 + lat/2) * ((1 - e*sin lat) / (1 + e*sin lat))^(e/2) )
//! ```
//!
//! The projection diverges at the poles; latitudes beyond [`MAX_LATITUDE`]
//! are rejected rather than mapped to unbounded northings.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use relief_common::{DemError, DemResult};

use crate::wgs84;

/// Latitude bound (degrees) beyond which forward projection is refused.
pub const MAX_LATITUDE: f64 = 89.5;

const INVERSE_TOLERANCE: f64 = 1e-12;
const INVERSE_MAX_ITERATIONS: usize = 30;

/// World Mercator projection on the WGS-84 ellipsoid.
#[derive(Debug, Clone)]
pub struct WorldMercator {
    /// Semi-major axis (meters).
    a: f64,
    /// First eccentricity.
    e: f64,
}

impl WorldMercator {
    /// The EPSG:3395 projection: World Mercator on WGS-84.
    pub fn wgs84() -> Self {
        Self {
            a: wgs84::SEMI_MAJOR_AXIS,
            e: wgs84::eccentricity(),
        }
    }

    /// Project geodetic (longitude, latitude) in degrees to (x, y) in meters.
    pub fn forward(&self, lon_deg: f64, lat_deg: f64) -> DemResult<(f64, f64)> {
        if !lon_deg.is_finite() || !lat_deg.is_finite() {
            return Err(DemError::reprojection(format!(
                "non-finite geodetic coordinate ({}, {})",
                lon_deg, lat_deg
            )));
        }
        if lat_deg.abs() >= MAX_LATITUDE {
            return Err(DemError::reprojection(format!(
                "latitude {} is outside the projection domain (|lat| < {})",
                lat_deg, MAX_LATITUDE
            )));
        }

        let lon = lon_deg.to_radians();
        let lat = lat_deg.to_radians();

        let x = self.a * lon;
        let es = self.e * lat.sin();
        let y = self.a
            * ((FRAC_PI_4 + lat / 2.0).tan() * ((1.0 - es) / (1.0 + es)).powf(self.e / 2.0)).ln();

        Ok((x, y))
    }

    /// Unproject (x, y) in meters back to (longitude, latitude) in degrees.
    ///
    /// The latitude has no closed form; it is recovered by iterating the
    /// conformal-latitude relation to convergence.
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let lon = x / self.a;

        let t = (-y / self.a).exp();
        let mut lat = FRAC_PI_2 - 2.0 * t.atan();
        for _ in 0..INVERSE_MAX_ITERATIONS {
            let es = self.e * lat.sin();
            let next = FRAC_PI_2 - 2.0 * (t * ((1.0 - es) / (1.0 + es)).powf(self.e / 2.0)).atan();
            if (next - lat).abs() < INVERSE_TOLERANCE {
                lat = next;
                break;
            }
            lat = next;
        }

        (lon.to_degrees(), lat.to_degrees())
    }

    /// Easting of the antimeridian, i.e. the projection's half-width in meters.
    pub fn half_width(&self) -> f64 {
        self.a * PI
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_reference_points() {
        let proj = WorldMercator::wgs84();

        // Independently computed EPSG:3395 coordinates.
        let (x, y) = proj.forward(37.0, 55.0).unwrap();
        assert!((x - 4_118_821.159).abs() < 1e-3, "x was {}", x);
        assert!((y - 7_326_837.715).abs() < 1e-3, "y was {}", y);

        let (x, y) = proj.forward(-122.4194, 37.7749).unwrap();
        assert!((x - -13_627_665.271).abs() < 1e-3, "x was {}", x);
        assert!((y - 4_521_498.499).abs() < 1e-3, "y was {}", y);
    }

    #[test]
    fn test_forward_equator_and_antimeridian() {
        let proj = WorldMercator::wgs84();

        let (x, y) = proj.forward(0.0, 0.0).unwrap();
        assert_eq!(x, 0.0);
        assert!(y.abs() < 1e-6, "equator northing was {}", y);

        let (x, _) = proj.forward(180.0, 0.0).unwrap();
        assert!((x - 20_037_508.343).abs() < 1e-3, "x was {}", x);
        assert!((x - proj.half_width()).abs() < 1e-6);
    }

    #[test]
    fn test_forward_rejects_pole() {
        let proj = WorldMercator::wgs84();
        assert!(proj.forward(0.0, 89.9).is_err());
        assert!(proj.forward(0.0, -90.0).is_err());
        assert!(proj.forward(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_inverse_roundtrip() {
        let proj = WorldMercator::wgs84();
        for &(lon, lat) in &[
            (37.0, 55.0),
            (-122.4194, 37.7749),
            (10.0, -45.0),
            (0.0, 84.0),
            (179.5, -0.001),
        ] {
            let (x, y) = proj.forward(lon, lat).unwrap();
            let (lon2, lat2) = proj.inverse(x, y);
            assert!((lon - lon2).abs() < 1e-9, "lon {} vs {}", lon, lon2);
            assert!((lat - lat2).abs() < 1e-9, "lat {} vs {}", lat, lat2);
        }
    }
}
