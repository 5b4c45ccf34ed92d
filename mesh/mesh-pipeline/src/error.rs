//! Error types for pipeline runs.

use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors that abort a pipeline run.
///
/// An empty clip result is deliberately absent: the runner falls back to
/// the unclipped mesh and records the fallback in the report instead of
/// failing (see [`crate::PipelineReport::clip_fallback`]).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration rejected before any file was touched.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What the configuration got wrong.
        reason: String,
    },

    /// The input mesh could not be repaired into a usable state.
    #[error("Mesh repair error: {0}")]
    Repair(#[from] mesh_repair::RepairError),

    /// Reading the model or writing an artifact failed.
    #[error("Mesh I/O error: {0}")]
    Io(#[from] mesh_io::IoError),

    /// A geometric stage (canonicalize, extrema) failed.
    #[error("Transform error: {0}")]
    Transform(#[from] mesh_transform::TransformError),

    /// Voxelization failed.
    #[error("Voxelization error: {0}")]
    Spatial(#[from] plinth_spatial::SpatialError),

    /// The surface reconstruction collaborator failed.
    #[error("Surface reconstruction failed: {message}")]
    Reconstruction {
        /// Collaborator-supplied failure description.
        message: String,
    },
}

impl PipelineError {
    /// Build an [`PipelineError::InvalidConfig`] from any message.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Build a [`PipelineError::Reconstruction`] from any message.
    #[must_use]
    pub fn reconstruction(message: impl Into<String>) -> Self {
        Self::Reconstruction {
            message: message.into(),
        }
    }
}
