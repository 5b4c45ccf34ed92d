//! Core mesh types for the Plinth model preparation pipeline.
//!
//! This crate provides the foundational types for mesh processing:
//!
//! - [`Vertex`] - A point in 3D space with optional attributes
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`Axis`] - A named world axis (X, Y, or Z)
//! - [`PointCloud`] - Unstructured 3D points with optional attributes
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//! The canonicalization stage rescales models into meters by convention.
//!
//! # Coordinate System
//!
//! Uses a **right-handed, Y-up coordinate system**:
//! - X: width (left/right)
//! - Y: height (up/down)
//! - Z: depth (front/back)
//!
//! Input files may use any orientation; the canonicalization stage
//! rotates models so their tallest extent lies along Y.
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//! Normals point outward by the right-hand rule.
//!
//! # Value Semantics
//!
//! Pipeline stages treat meshes as values: each operation takes its
//! input by reference (or by value) and produces a new mesh or mutates
//! one it owns. Attributes (normals, colors) are `Option` and never
//! silently invented.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Vertex, IndexedMesh, Point3};
//!
//! // Create a simple triangle mesh
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(0.5, 1.0, 0.0)));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod axis;
mod bounds;
mod mesh;
mod pointcloud;
mod triangle;
mod vertex;

// Re-export core types
pub use axis::Axis;
pub use bounds::Aabb;
pub use mesh::{unit_cube, IndexedMesh, MeshStats};
pub use pointcloud::{CloudPoint, PointCloud};
pub use triangle::Triangle;
pub use vertex::{Vertex, VertexAttributes, VertexColor};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
