//! Error types for spatial operations.

/// Errors that can occur during spatial operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpatialError {
    /// The voxel size must be positive and finite.
    #[error("voxel size must be positive, got {0}")]
    InvalidVoxelSize(f64),
}
