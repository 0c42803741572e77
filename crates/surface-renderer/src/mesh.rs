//! Surface mesh construction from coordinate and elevation grids.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use relief_common::{DemError, DemResult, SurfaceGrid};

use crate::colormap::elevation_color;

/// Span of the larger horizontal extent in display units.
const DISPLAY_SPAN: f64 = 2.0;

/// One mesh vertex: display-space position, surface normal, vertex color.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// An indexed triangle mesh ready for upload.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SurfaceMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// Build a lit, colored triangle mesh from a surface grid.
///
/// `scale` multiplies elevations for vertical exaggeration before display.
///
/// Projected coordinates are megameter-sized, far outside comfortable f32
/// camera range, so positions are recentered about the grid midpoint and
/// uniformly scaled to a ~2-unit box. That normalization is presentation
/// only; the grids themselves are untouched. Colors stay keyed to the
/// unexaggerated elevations.
pub fn build_surface_mesh(grid: &SurfaceGrid, scale: f64) -> DemResult<SurfaceMesh> {
    let (width, height) = validate_shape(grid)?;

    let (min_x, max_x) = grid.x.min_max().ok_or_else(all_nan)?;
    let (min_y, max_y) = grid.y.min_max().ok_or_else(all_nan)?;
    let (min_z, max_z) = grid.z.min_max().ok_or_else(all_nan)?;

    let span = (max_x - min_x).max(max_y - min_y);
    if span <= 0.0 {
        return Err(DemError::shape_mismatch(
            "surface collapses to a point in map space",
        ));
    }
    let unit = DISPLAY_SPAN / span;
    let center_x = (min_x + max_x) / 2.0;
    let center_y = (min_y + max_y) / 2.0;
    let z_range = max_z - min_z;

    let position = |col: usize, row: usize| -> Vec3 {
        let x = grid.x.data[row * width + col];
        let y = grid.y.data[row * width + col];
        let z = grid.z.data[row * width + col];
        let z = if z.is_nan() { min_z } else { z };
        Vec3::new(
            ((x - center_x) * unit) as f32,
            ((y - center_y) * unit) as f32,
            (z * scale * unit) as f32,
        )
    };

    let mut vertices = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let p = position(col, row);

            // Central differences where neighbors exist, one-sided at edges.
            let left = position(col.saturating_sub(1), row);
            let right = position((col + 1).min(width - 1), row);
            let up = position(col, row.saturating_sub(1));
            let down = position(col, (row + 1).min(height - 1));
            let normal = (right - left).cross(down - up).normalize_or_zero();
            let normal = if normal == Vec3::ZERO { Vec3::Z } else { normal };
            let normal = if normal.z < 0.0 { -normal } else { normal };

            let z = grid.z.data[row * width + col];
            let t = if z_range > 0.0 && !z.is_nan() {
                ((z - min_z) / z_range) as f32
            } else {
                0.5
            };
            vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
                color: elevation_color(t).to_rgb_f32(),
            });
        }
    }

    let mut indices = Vec::with_capacity((width - 1) * (height - 1) * 6);
    for row in 0..height - 1 {
        for col in 0..width - 1 {
            let i = (row * width + col) as u32;
            let w = width as u32;
            indices.extend_from_slice(&[i, i + 1, i + w, i + 1, i + w + 1, i + w]);
        }
    }

    Ok(SurfaceMesh { vertices, indices })
}

/// Validate the shared-shape invariant and the minimum renderable size.
fn validate_shape(grid: &SurfaceGrid) -> DemResult<(usize, usize)> {
    let shape = (grid.x.width, grid.x.height);
    if (grid.y.width, grid.y.height) != shape || (grid.z.width, grid.z.height) != shape {
        return Err(DemError::shape_mismatch(format!(
            "X {}x{}, Y {}x{}, Z {}x{}",
            grid.x.width,
            grid.x.height,
            grid.y.width,
            grid.y.height,
            grid.z.width,
            grid.z.height
        )));
    }
    let (width, height) = shape;
    if width < 2 || height < 2 {
        return Err(DemError::shape_mismatch(format!(
            "a {}x{} grid has no surface to triangulate",
            width, height
        )));
    }
    Ok((width, height))
}

fn all_nan() -> DemError {
    DemError::shape_mismatch("grid contains no finite samples")
}
