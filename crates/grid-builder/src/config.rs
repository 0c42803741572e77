//! Grid builder configuration.

use projection::WorldMercator;
use relief_common::{CrsCode, DemError, DemResult};
use serde::{Deserialize, Serialize};

/// Source and target coordinate systems for grid building.
///
/// Both default to the classic DEM pipeline: geodetic WGS-84 in, World
/// Mercator meters out. The source system is validated against whatever the
/// dataset declares instead of being silently assumed wherever possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBuilderConfig {
    pub source_crs: CrsCode,
    pub target_crs: CrsCode,
}

impl Default for GridBuilderConfig {
    fn default() -> Self {
        Self {
            source_crs: CrsCode::Epsg4326,
            target_crs: CrsCode::Epsg3395,
        }
    }
}

impl GridBuilderConfig {
    /// The forward projection for the configured target system.
    pub fn target_projection(&self) -> DemResult<WorldMercator> {
        match self.target_crs {
            CrsCode::Epsg3395 => Ok(WorldMercator::wgs84()),
            other => Err(DemError::reprojection(format!(
                "{} is not a supported target projection",
                other
            ))),
        }
    }

    /// Check that the configured pair can be projected at all.
    pub fn validate(&self) -> DemResult<()> {
        if !self.source_crs.is_geographic() {
            return Err(DemError::reprojection(format!(
                "source system {} is not geodetic",
                self.source_crs
            )));
        }
        self.target_projection().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair() {
        let config = GridBuilderConfig::default();
        assert_eq!(config.source_crs, CrsCode::Epsg4326);
        assert_eq!(config.target_crs, CrsCode::Epsg3395);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_projected_source_rejected() {
        let config = GridBuilderConfig {
            source_crs: CrsCode::Epsg3395,
            target_crs: CrsCode::Epsg3395,
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            DemError::Reprojection(_)
        ));
    }

    #[test]
    fn test_geographic_target_rejected() {
        let config = GridBuilderConfig {
            source_crs: CrsCode::Epsg4326,
            target_crs: CrsCode::Epsg4326,
        };
        assert!(matches!(
            config.target_projection().unwrap_err(),
            DemError::Reprojection(_)
        ));
    }
}
