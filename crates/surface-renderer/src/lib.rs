//! 3D surface rendering for projected elevation grids.
//!
//! Turns a [`relief_common::SurfaceGrid`] into a colored, lit triangle mesh
//! and displays it in an interactive window. The call blocks until the
//! window is closed; dragging orbits the camera and the wheel zooms.

pub mod camera;
pub mod colormap;
pub mod mesh;
pub mod viewer;

pub use mesh::{build_surface_mesh, SurfaceMesh, Vertex};
pub use viewer::{show, ViewerOptions};
