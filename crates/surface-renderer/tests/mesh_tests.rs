//! Tests for surface mesh construction.

use relief_common::{DemError, Grid, SurfaceGrid};
use surface_renderer::build_surface_mesh;
use test_utils::bump_grid;

/// A w x h surface whose map coordinates step by 100 m and whose
/// elevations are supplied row-major.
fn surface(width: usize, height: usize, z: Vec<f64>) -> SurfaceGrid {
    let mut x = Grid::filled(width, height, 0.0);
    let mut y = Grid::filled(width, height, 0.0);
    for row in 0..height {
        for col in 0..width {
            x.data[row * width + col] = col as f64 * 100.0;
            y.data[row * width + col] = (height - 1 - row) as f64 * 100.0;
        }
    }
    SurfaceGrid::new(x, y, Grid::from_vec(z, width, height).unwrap()).unwrap()
}

// ============================================================================
// Shape validation
// ============================================================================

#[test]
fn test_mismatched_shapes_fail_fast() {
    // Bypass the SurfaceGrid constructor to simulate a corrupted triple.
    let grid = SurfaceGrid {
        x: Grid::filled(3, 3, 0.0),
        y: Grid::filled(3, 3, 0.0),
        z: Grid::filled(2, 3, 0.0),
    };
    let err = build_surface_mesh(&grid, 1.0).unwrap_err();
    assert!(matches!(err, DemError::ShapeMismatch(_)));
}

#[test]
fn test_degenerate_grid_rejected() {
    let grid = surface(1, 1, vec![0.0]);
    assert!(matches!(
        build_surface_mesh(&grid, 1.0).unwrap_err(),
        DemError::ShapeMismatch(_)
    ));

    let grid = surface(5, 1, vec![0.0; 5]);
    assert!(matches!(
        build_surface_mesh(&grid, 1.0).unwrap_err(),
        DemError::ShapeMismatch(_)
    ));
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_vertex_and_index_counts() {
    let grid = surface(4, 3, vec![0.0; 12]);
    let mesh = build_surface_mesh(&grid, 1.0).unwrap();
    assert_eq!(mesh.vertex_count(), 12);
    // (4-1) * (3-1) cells, two triangles each
    assert_eq!(mesh.index_count(), 3 * 2 * 6);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < 12));
}

#[test]
fn test_positions_normalized_to_display_box() {
    let grid = surface(5, 5, vec![250.0; 25]);
    let mesh = build_surface_mesh(&grid, 1.0).unwrap();
    for v in &mesh.vertices {
        assert!(v.position[0].abs() <= 1.0 + 1e-5);
        assert!(v.position[1].abs() <= 1.0 + 1e-5);
    }
    // Flat surface sits at a single height.
    let z0 = mesh.vertices[0].position[2];
    assert!(mesh.vertices.iter().all(|v| (v.position[2] - z0).abs() < 1e-6));
}

#[test]
fn test_scale_exaggerates_relief() {
    let mut z = vec![0.0; 9];
    z[4] = 50.0;
    let grid = surface(3, 3, z);

    let flat = build_surface_mesh(&grid, 1.0).unwrap();
    let tall = build_surface_mesh(&grid, 2.0).unwrap();
    let relief = |m: &surface_renderer::SurfaceMesh| {
        m.vertices[4].position[2] - m.vertices[0].position[2]
    };
    assert!((relief(&tall) - 2.0 * relief(&flat)).abs() < 1e-6);
}

// ============================================================================
// Elevation coloring
// ============================================================================

#[test]
fn test_colors_keyed_to_elevation() {
    let grid = surface(2, 2, vec![0.0, 0.0, 0.0, 100.0]);
    let mesh = build_surface_mesh(&grid, 1.0).unwrap();

    let low = mesh.vertices[0].color;
    let high = mesh.vertices[3].color;
    assert!(low[2] > low[0], "lowest vertex should be blue, got {:?}", low);
    assert!(high[0] > high[2], "highest vertex should be red, got {:?}", high);
}

#[test]
fn test_terrain_bump_peaks_at_center() {
    let grid = surface(9, 9, bump_grid(9, 9, 500.0));
    let mesh = build_surface_mesh(&grid, 1.0).unwrap();

    let center = &mesh.vertices[4 * 9 + 4];
    let corner = &mesh.vertices[0];
    assert!(center.position[2] > corner.position[2]);
    // Hottest end of the ramp at the peak, coolest at the edge.
    assert!(center.color[0] > center.color[2]);
    assert!(corner.color[2] > corner.color[0]);
}

#[test]
fn test_flat_surface_uses_midscale_color() {
    let grid = surface(2, 2, vec![7.0; 4]);
    let mesh = build_surface_mesh(&grid, 1.0).unwrap();
    // Zero elevation range: every vertex gets the mid-ramp color.
    let c = mesh.vertices[0].color;
    assert!(mesh.vertices.iter().all(|v| v.color == c));
    assert!(c[1] > 0.9, "mid-ramp is green-heavy, got {:?}", c);
}
