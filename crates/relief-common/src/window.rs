//! Rectangular read windows over a raster.

use crate::error::{DemError, DemResult};
use serde::{Deserialize, Serialize};

/// A requested sub-rectangle of a raster.
///
/// Offsets default to 0 and an omitted size extends to the raster's edge.
/// A request that is degenerate or reaches outside the raster fails to
/// resolve; reads are never silently truncated or padded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadWindow {
    pub x_off: usize,
    pub y_off: usize,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl ReadWindow {
    /// The full extent of whatever raster the window is resolved against.
    pub fn full() -> Self {
        Self::default()
    }

    /// A window with explicit offsets and size.
    pub fn new(x_off: usize, y_off: usize, width: usize, height: usize) -> Self {
        Self {
            x_off,
            y_off,
            width: Some(width),
            height: Some(height),
        }
    }

    /// Resolve against a raster of `raster_width` x `raster_height` pixels.
    pub fn resolve(&self, raster_width: usize, raster_height: usize) -> DemResult<ResolvedWindow> {
        if raster_width == 0 || raster_height == 0 {
            return Err(DemError::read_window("raster has no pixels"));
        }
        if self.x_off >= raster_width || self.y_off >= raster_height {
            return Err(DemError::read_window(format!(
                "offset ({}, {}) is outside the {}x{} raster",
                self.x_off, self.y_off, raster_width, raster_height
            )));
        }

        let width = self.width.unwrap_or(raster_width - self.x_off);
        let height = self.height.unwrap_or(raster_height - self.y_off);

        if width == 0 || height == 0 {
            return Err(DemError::read_window(format!(
                "window size {}x{} is degenerate",
                width, height
            )));
        }
        if self.x_off + width > raster_width || self.y_off + height > raster_height {
            return Err(DemError::read_window(format!(
                "window ({}, {}) {}x{} extends past the {}x{} raster",
                self.x_off, self.y_off, width, height, raster_width, raster_height
            )));
        }

        Ok(ResolvedWindow {
            x_off: self.x_off,
            y_off: self.y_off,
            width,
            height,
        })
    }
}

/// A window fully bounded against a concrete raster: nonzero size, entirely
/// inside the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWindow {
    pub x_off: usize,
    pub y_off: usize,
    pub width: usize,
    pub height: usize,
}
