//! Canonical pose: scale to a target height and stand upright.
//!
//! Models arrive at arbitrary sizes (millimeters, raw scanner units)
//! and orientations (Z-up exports are common). This stage rescales the
//! mesh so its largest bounding-box extent matches a target height and
//! rotates it so that extent lies along Y, giving every later stage a
//! consistent frame to work in.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use mesh_types::{Axis, IndexedMesh, Vector3};
use tracing::debug;

use crate::error::{TransformError, TransformResult};
use crate::transform::Transform3D;

/// Configuration for the canonicalization stage.
///
/// # Example
///
/// ```
/// use mesh_transform::CanonicalizeParams;
///
/// // Human-sized output, standard orientation
/// let params = CanonicalizeParams::default();
///
/// // Flip the quarter turn for models that come out upside down
/// let params = CanonicalizeParams::default().with_invert_rotation(true);
/// ```
#[derive(Debug, Clone)]
pub struct CanonicalizeParams {
    /// The bounding-box height the largest extent is scaled to.
    ///
    /// Default: `1.8` (human height in meters)
    pub target_height: f64,

    /// Flip the sign of the quarter turn applied to Z-tallest meshes.
    ///
    /// Default: `false`
    pub invert_rotation: bool,

    /// Extents at or below this are considered degenerate and left
    /// unscaled, so a near-point mesh is not blown up by a huge factor.
    ///
    /// Default: `1e-3`
    pub min_extent: f64,
}

impl Default for CanonicalizeParams {
    fn default() -> Self {
        Self {
            target_height: 1.8,
            invert_rotation: false,
            min_extent: 1e-3,
        }
    }
}

impl CanonicalizeParams {
    /// Set the target height.
    #[must_use]
    pub fn with_target_height(mut self, height: f64) -> Self {
        self.target_height = height;
        self
    }

    /// Set whether the Z-to-Y quarter turn is inverted.
    #[must_use]
    pub fn with_invert_rotation(mut self, invert: bool) -> Self {
        self.invert_rotation = invert;
        self
    }
}

/// The rotation applied to bring the tallest extent onto Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanonicalRotation {
    /// The tallest extent already lay along Y.
    None,
    /// Quarter turn about X, moving the Z extent onto Y.
    AboutX {
        /// Signed rotation angle in radians.
        angle: f64,
    },
    /// Quarter turn about Z, moving the X extent onto Y.
    AboutZ {
        /// Signed rotation angle in radians.
        angle: f64,
    },
}

impl fmt::Display for CanonicalRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::AboutX { angle } => write!(f, "{:.0}° about X", angle.to_degrees()),
            Self::AboutZ { angle } => write!(f, "{:.0}° about Z", angle.to_degrees()),
        }
    }
}

/// Summary of a canonicalization pass.
#[derive(Debug, Clone)]
pub struct CanonicalizeSummary {
    /// The uniform scale factor applied (1.0 when degenerate).
    pub scale: f64,
    /// The rotation applied after scaling.
    pub rotation: CanonicalRotation,
    /// Bounding-box extents before any change.
    pub extents_before: Vector3<f64>,
    /// Bounding-box extents after scale and rotation.
    pub extents_after: Vector3<f64>,
}

impl fmt::Display for CanonicalizeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Canonical pose: scale {:.4}, rotation {}, height {:.3}",
            self.scale, self.rotation, self.extents_after.y
        )
    }
}

/// Scale a mesh to a target height and rotate its tallest extent onto Y.
///
/// The scale is uniform, chosen so the largest bounding-box extent
/// equals `params.target_height`, and pivots on the bounding-box center
/// so the mesh does not drift. If the largest extent is at or below
/// `params.min_extent` the mesh is left unscaled.
///
/// The rotation is decided from the post-scale bounds. A Z-tallest mesh
/// gets a quarter turn about X (sign flipped by
/// `params.invert_rotation`); an X-tallest mesh gets a quarter turn
/// about Z. Both pivot on the vertex centroid. A Y-tallest mesh is left
/// alone. Ties resolve toward the earliest axis in X, Y, Z order, so a
/// perfectly cubic mesh counts as X-tallest.
///
/// # Errors
///
/// Returns [`TransformError::EmptyMesh`] if the mesh has no vertices.
/// The mesh is not modified in that case.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_transform::{canonicalize_mesh, CanonicalizeParams};
///
/// let mut mesh = unit_cube();
/// let summary = canonicalize_mesh(&mut mesh, &CanonicalizeParams::default())?;
/// assert!((summary.scale - 1.8).abs() < 1e-12);
/// assert!((mesh.bounds().max_extent() - 1.8).abs() < 1e-12);
/// # Ok::<(), mesh_transform::TransformError>(())
/// ```
pub fn canonicalize_mesh(
    mesh: &mut IndexedMesh,
    params: &CanonicalizeParams,
) -> TransformResult<CanonicalizeSummary> {
    if mesh.vertices.is_empty() {
        return Err(TransformError::EmptyMesh);
    }

    let bounds = mesh.bounds();
    let extents_before = bounds.size();
    let max_extent = bounds.max_extent();

    let scale = if max_extent > params.min_extent {
        params.target_height / max_extent
    } else {
        1.0
    };
    mesh.scale_about(scale, bounds.center());
    debug!("Scaled by {:.4} about the bounds center", scale);

    let tallest = mesh.bounds().tallest_axis();
    let pivot = mesh.centroid().ok_or(TransformError::EmptyMesh)?;
    let rotation = match tallest {
        Axis::Y => CanonicalRotation::None,
        Axis::Z => {
            let angle = if params.invert_rotation {
                -FRAC_PI_2
            } else {
                FRAC_PI_2
            };
            *mesh = Transform3D::rotation_x(angle)
                .about_point(pivot)
                .apply_to_mesh(mesh);
            CanonicalRotation::AboutX { angle }
        }
        Axis::X => {
            let angle = FRAC_PI_2;
            *mesh = Transform3D::rotation_z(angle)
                .about_point(pivot)
                .apply_to_mesh(mesh);
            CanonicalRotation::AboutZ { angle }
        }
    };
    match rotation {
        CanonicalRotation::None => debug!("Tallest extent already on Y"),
        _ => debug!("Rotated {} to bring the {} extent onto Y", rotation, tallest),
    }

    Ok(CanonicalizeSummary {
        scale,
        rotation,
        extents_before,
        extents_after: mesh.bounds().size(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{unit_cube, Vertex};

    /// Vertices-only mesh spanning the origin to the given corner.
    fn span_mesh(x: f64, y: f64, z: f64) -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(x, y, z));
        mesh
    }

    #[test]
    fn scales_largest_extent_to_target() {
        let mut mesh = span_mesh(0.5, 2.0, 1.0);
        let summary = canonicalize_mesh(&mut mesh, &CanonicalizeParams::default()).unwrap();

        assert_relative_eq!(summary.scale, 0.9);
        assert_relative_eq!(mesh.bounds().max_extent(), 1.8, epsilon = 1e-12);
    }

    #[test]
    fn y_tallest_mesh_is_not_rotated() {
        let mut mesh = span_mesh(0.5, 2.0, 1.0);
        let summary = canonicalize_mesh(&mut mesh, &CanonicalizeParams::default()).unwrap();

        assert_eq!(summary.rotation, CanonicalRotation::None);
        assert_relative_eq!(mesh.bounds().extent(Axis::Y), 1.8, epsilon = 1e-12);
    }

    #[test]
    fn z_tallest_mesh_rotates_about_x() {
        let mut mesh = span_mesh(0.2, 0.3, 2.0);
        let summary = canonicalize_mesh(&mut mesh, &CanonicalizeParams::default()).unwrap();

        assert!(matches!(summary.rotation, CanonicalRotation::AboutX { .. }));
        let size = mesh.bounds().size();
        assert_relative_eq!(size.y, 1.8, epsilon = 1e-12);
        assert!(size.y >= size.x && size.y >= size.z);
    }

    #[test]
    fn x_tallest_mesh_rotates_about_z() {
        let mut mesh = span_mesh(3.0, 0.5, 1.0);
        let summary = canonicalize_mesh(&mut mesh, &CanonicalizeParams::default()).unwrap();

        assert!(matches!(summary.rotation, CanonicalRotation::AboutZ { .. }));
        let size = mesh.bounds().size();
        assert_relative_eq!(size.y, 1.8, epsilon = 1e-12);
        assert!(size.y >= size.x && size.y >= size.z);
    }

    #[test]
    fn y_extent_is_weakly_largest_after_canonicalization() {
        for corner in [
            (0.5, 2.0, 1.0),
            (0.2, 0.3, 2.0),
            (3.0, 0.5, 1.0),
            (1.0, 1.0, 1.0),
        ] {
            let mut mesh = span_mesh(corner.0, corner.1, corner.2);
            canonicalize_mesh(&mut mesh, &CanonicalizeParams::default()).unwrap();
            let size = mesh.bounds().size();
            assert!(
                size.y >= size.x - 1e-12 && size.y >= size.z - 1e-12,
                "Y extent not largest for {corner:?}: {size:?}"
            );
        }
    }

    #[test]
    fn invert_flips_quarter_turn_direction() {
        // Two vertices along Z; after the turn their Y order tells the sign.
        let default_params = CanonicalizeParams::default();
        let mut mesh = span_mesh(0.0, 0.0, 2.0);
        canonicalize_mesh(&mut mesh, &default_params).unwrap();
        let high_z = &mesh.vertices[1];
        let low_z = &mesh.vertices[0];
        assert!(high_z.position.y < low_z.position.y);

        let inverted = default_params.with_invert_rotation(true);
        let mut mesh = span_mesh(0.0, 0.0, 2.0);
        canonicalize_mesh(&mut mesh, &inverted).unwrap();
        let high_z = &mesh.vertices[1];
        let low_z = &mesh.vertices[0];
        assert!(high_z.position.y > low_z.position.y);
    }

    #[test]
    fn scale_pivots_on_bounds_center() {
        let mut mesh = span_mesh(0.5, 2.0, 1.0);
        let center_before = mesh.bounds().center();
        canonicalize_mesh(&mut mesh, &CanonicalizeParams::default()).unwrap();
        let center_after = mesh.bounds().center();

        assert_relative_eq!(center_before.x, center_after.x, epsilon = 1e-12);
        assert_relative_eq!(center_before.y, center_after.y, epsilon = 1e-12);
        assert_relative_eq!(center_before.z, center_after.z, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_extent_is_left_unscaled() {
        let mut mesh = span_mesh(1e-5, 1e-5, 1e-5);
        let summary = canonicalize_mesh(&mut mesh, &CanonicalizeParams::default()).unwrap();

        assert_relative_eq!(summary.scale, 1.0);
        assert!(mesh.bounds().max_extent() < 1e-4);
    }

    #[test]
    fn empty_mesh_is_rejected() {
        let mut mesh = IndexedMesh::new();
        let result = canonicalize_mesh(&mut mesh, &CanonicalizeParams::default());
        assert!(matches!(result, Err(TransformError::EmptyMesh)));
    }

    #[test]
    fn cube_counts_as_x_tallest_on_ties() {
        let mut mesh = unit_cube();
        let summary = canonicalize_mesh(&mut mesh, &CanonicalizeParams::default()).unwrap();
        assert!(matches!(summary.rotation, CanonicalRotation::AboutZ { .. }));
        assert_relative_eq!(mesh.bounds().max_extent(), 1.8, epsilon = 1e-12);
    }

    #[test]
    fn custom_target_height() {
        let params = CanonicalizeParams::default().with_target_height(0.5);
        let mut mesh = span_mesh(0.5, 2.0, 1.0);
        canonicalize_mesh(&mut mesh, &params).unwrap();
        assert_relative_eq!(mesh.bounds().max_extent(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn summary_display() {
        let mut mesh = span_mesh(0.2, 0.3, 2.0);
        let summary = canonicalize_mesh(&mut mesh, &CanonicalizeParams::default()).unwrap();
        let text = summary.to_string();
        assert!(text.contains("scale 0.9000"));
        assert!(text.contains("about X"));
        assert!(text.contains("height 1.800"));
    }
}
