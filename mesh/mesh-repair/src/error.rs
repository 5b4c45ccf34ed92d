//! Error types for mesh repair operations.

use thiserror::Error;

/// Result type for repair operations.
pub type RepairResult<T> = Result<T, RepairError>;

/// Errors that can occur during mesh repair.
#[derive(Debug, Error)]
pub enum RepairError {
    /// Mesh is empty (no vertices or no faces).
    ///
    /// An empty mesh cannot be prepared; callers should treat this as
    /// fatal rather than continuing with downstream stages.
    #[error("mesh is empty")]
    EmptyMesh,

    /// Mesh has a face referencing a vertex that does not exist.
    #[error("invalid vertex index {index} (mesh has {vertex_count} vertices)")]
    InvalidIndex {
        /// The invalid index.
        index: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },
}
