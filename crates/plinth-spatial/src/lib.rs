//! Spatial data structures for the Plinth pipeline.
//!
//! This crate provides the voxel layer used when a prepared model is
//! turned into a blocky display form:
//!
//! - [`VoxelGrid`] - Sparse binary occupancy grid over 3D space
//! - [`VoxelCoord`] - Integer voxel coordinates
//! - [`GridBounds`] - Axis-aligned bounds in grid space
//! - [`subsample_occupied`] - Seeded draw of occupied cells under a display cap
//!
//! # Coordinate Systems
//!
//! The grid uses a **right-handed, Y-up coordinate system** consistent
//! with mesh-types. World coordinates are continuous `f64` values; grid
//! coordinates are discrete `i32` values. The [`VoxelGrid`] handles
//! conversion between the two.
//!
//! # Determinism
//!
//! Occupied cells are stored in a hash set, but every operation that
//! exposes an ordering ([`VoxelGrid::sorted_cells`],
//! [`subsample_occupied`]) sorts first. Given the same input points and
//! the same seed, the selected cells are always identical.
//!
//! # Example
//!
//! ```
//! use plinth_spatial::{subsample_occupied, VoxelGrid};
//! use nalgebra::Point3;
//!
//! // Grid cells are 0.5 units, origin at the world origin
//! let points = (0..1000).map(|i| {
//!     let t = f64::from(i) * 0.01;
//!     Point3::new(t.cos() * 3.0, t.sin() * 3.0, t)
//! });
//! let grid = VoxelGrid::from_points(0.5, Point3::origin(), points).unwrap();
//!
//! // Cap the cell count for display
//! let cells = subsample_occupied(&grid, 100, 42);
//! assert!(cells.len() <= 100);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod grid;
mod subsample;
mod voxel;

// Re-export core types
pub use error::SpatialError;
pub use grid::{auto_cell_size, GridBounds, VoxelGrid, AUTO_CELL_DIVISOR};
pub use subsample::subsample_occupied;
pub use voxel::VoxelCoord;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
