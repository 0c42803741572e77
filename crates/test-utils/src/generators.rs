//! Test data generators for creating synthetic elevation-like data.
//!
//! These generators create predictable, verifiable patterns that can be
//! used across the test suite.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as `col * 1000 + row`, which makes it easy
/// to verify that data is being read and sliced correctly.
///
/// # Example
///
/// ```
/// use test_utils::indexed_grid;
///
/// let grid = indexed_grid(10, 5);
/// assert_eq!(grid.len(), 50);
/// assert_eq!(grid[0], 0.0); // col=0, row=0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0
/// assert_eq!(grid[10], 1.0); // col=0, row=1
/// ```
pub fn indexed_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f64);
        }
    }
    data
}

/// Creates a terrain-like grid: a smooth bump peaking in the middle.
///
/// Values range from 0 at the edges to `peak` at the center, so centering
/// and colormap code sees a realistic spread.
pub fn bump_grid(width: usize, height: usize, peak: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    let (cx, cy) = ((width - 1) as f64 / 2.0, (height - 1) as f64 / 2.0);
    let half_span = cx.max(cy).max(1.0);
    for row in 0..height {
        for col in 0..width {
            let dx = (col as f64 - cx) / half_span;
            let dy = (row as f64 - cy) / half_span;
            let r2 = (dx * dx + dy * dy).min(1.0);
            data.push(peak * (1.0 - r2));
        }
    }
    data
}
