//! Mesh cleanup for models arriving from files and scanners.
//!
//! This crate provides tools for:
//! - Mesh validation (manifold checks, watertight checks, index checks)
//! - Exact duplicate vertex merging
//! - Exact duplicate face removal
//! - Non-manifold face pruning
//! - Normal filling for meshes that arrive without normals
//! - Unreferenced vertex removal
//!
//! Cleanup is exact by design: vertices merge only when their positions
//! match bit for bit, and faces are duplicates only when their index
//! triples match exactly. Nothing here moves a vertex or invents
//! geometry, so running cleanup twice changes nothing the second time.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, Vertex};
//! use mesh_repair::{validate_mesh, repair_mesh, RepairParams};
//!
//! // Create a simple mesh
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! // Validate the mesh
//! let report = validate_mesh(&mesh);
//! println!("Boundary edges: {}", report.boundary_edge_count);
//!
//! // Clean it up
//! let summary = repair_mesh(&mut mesh, &RepairParams::default())?;
//! println!("Vertices merged: {}", summary.vertices_deduped);
//! # Ok::<(), mesh_repair::RepairError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod error;
mod repair;
mod validate;

pub use adjacency::MeshAdjacency;
pub use error::{RepairError, RepairResult};
pub use repair::{
    RepairParams, RepairSummary, dedup_faces, dedup_vertices, fill_missing_normals,
    remove_collapsed_faces, remove_non_manifold_faces, remove_unreferenced_vertices, repair_mesh,
};
pub use validate::{MeshReport, ensure_valid, validate_mesh};
