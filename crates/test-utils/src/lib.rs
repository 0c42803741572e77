//! Shared test utilities for the relief-view workspace.
//!
//! This crate provides common testing infrastructure:
//! - An in-memory `RasterSource` with a chosen transform and CRS
//! - Synthetic GeoTIFF writers for exercising the real decoder
//! - Predictable grid data generators
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;
pub mod synthetic;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use synthetic::*;
