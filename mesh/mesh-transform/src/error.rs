//! Error types for transform-stage operations.

use thiserror::Error;

/// Result type for transform-stage operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that can occur in the pose and analysis stages.
///
/// Most operations here are total: clipping may legitimately produce an
/// empty mesh, and a degenerate coordinate range is painted black rather
/// than rejected. Only operations that need at least one vertex to give
/// a meaningful answer can fail.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The mesh has no vertices to operate on.
    #[error("mesh is empty")]
    EmptyMesh,
}
