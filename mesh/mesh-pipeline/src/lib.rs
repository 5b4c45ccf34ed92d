//! End-to-end mesh inspection pipeline for the Plinth toolkit.
//!
//! Wires the stage crates into one batch run:
//!
//! 1. Load a PLY model and repair it (mesh-io, mesh-repair)
//! 2. Canonical pose: target height, tallest extent on Y (mesh-transform)
//! 3. Surface sample via a [`SurfaceSampler`] collaborator
//! 4. Optional reconstruction via a [`SurfaceReconstructor`]
//! 5. Voxel occupancy and a capped display subsample (plinth-spatial)
//! 6. Half-space clip with an empty-result fallback
//! 7. Axis color gradient and extrema markers
//!
//! Numbered PLY artifacts land in the configured output directory;
//! display geometry goes to a [`StageViewer`] (a no-op by default, so
//! runs work headless anywhere).
//!
//! # Example
//!
//! ```no_run
//! use mesh_pipeline::{run_pipeline, PipelineConfig};
//!
//! let config = PipelineConfig::new("model.ply").with_headless(true);
//! let report = run_pipeline(&config)?;
//! println!("{report}");
//! # Ok::<(), mesh_pipeline::PipelineError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod artifacts;
mod collaborators;
mod config;
mod error;
mod runner;

pub use artifacts::{
    cut_plane_slab, icosphere, marker_mesh, voxel_art_mesh, PLANE_EXTENT_SCALE, PLANE_THICKNESS,
};
pub use collaborators::{
    NoopViewer, StageViewer, SurfaceReconstructor, SurfaceSampler, VertexSampler,
};
pub use config::{
    PipelineConfig, DEFAULT_DISPLAY_VOXEL_CAP, DEFAULT_MARKER_RADIUS_SCALE, DEFAULT_OUTPUT_DIR,
    DEFAULT_SAMPLE_COUNT, DEFAULT_SUBSAMPLE_SEED, DEFAULT_TARGET_HEIGHT,
};
pub use error::{PipelineError, PipelineResult};
pub use runner::{
    run_pipeline, run_pipeline_with, PipelineReport, CLIPPED_FILE, FINAL_FILE, ORIGINAL_FILE,
    POINT_CLOUD_FILE, POISSON_FILE,
};
