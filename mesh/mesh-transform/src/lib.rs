//! Pose and analysis stages for the Plinth model preparation pipeline.
//!
//! This crate provides the geometric stages that run between cleanup
//! and export:
//!
//! - [`canonicalize_mesh`] - Scale to a target height and stand the mesh upright (Y-up)
//! - [`clip_mesh`] - Keep one side of a cutting [`Plane`]
//! - [`colorize_by_axis`] - Paint a red/blue gradient along an axis
//! - [`find_axis_extrema`] - Locate extreme vertices and describe their markers
//! - [`Transform3D`] - 4x4 homogeneous transforms applied to whole meshes
//!
//! Each stage treats the mesh as a value: it either mutates a mesh the
//! caller owns and returns a summary, or builds a new mesh and leaves
//! the input untouched (clipping does the latter so the caller can fall
//! back to the unclipped mesh when everything is removed).
//!
//! # Example
//!
//! ```
//! use mesh_types::{unit_cube, Axis};
//! use mesh_transform::{
//!     canonicalize_mesh, clip_mesh, colorize_by_axis, CanonicalizeParams, ClipSide, Plane,
//! };
//!
//! let mut mesh = unit_cube();
//! canonicalize_mesh(&mut mesh, &CanonicalizeParams::default())?;
//!
//! let plane = Plane::from_axis(Axis::Y, mesh.bounds().center());
//! let (mut lower, summary) = clip_mesh(&mesh, &plane, ClipSide::Left);
//! assert!(summary.kept_faces > 0);
//!
//! colorize_by_axis(&mut lower, Axis::Y);
//! assert!(lower.has_colors());
//! # Ok::<(), mesh_transform::TransformError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod canonicalize;
mod clip;
mod colorize;
mod error;
mod extrema;
mod plane;
mod transform;

pub use canonicalize::{
    canonicalize_mesh, CanonicalRotation, CanonicalizeParams, CanonicalizeSummary,
};
pub use clip::{clip_mesh, ClipSide, ClipSummary};
pub use colorize::{colorize_by_axis, GradientSummary, DEGENERATE_SPREAD};
pub use error::{TransformError, TransformResult};
pub use extrema::{find_axis_extrema, AxisExtrema, ExtremaMarker};
pub use plane::Plane;
pub use transform::Transform3D;
