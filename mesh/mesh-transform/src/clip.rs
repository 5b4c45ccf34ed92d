//! Half-space clipping at triangle granularity.
//!
//! Clipping keeps the triangles whose centroid lies on the chosen side
//! of a plane and rebuilds a compact mesh from them. Triangles that
//! straddle the plane are never subdivided, so the cut boundary is
//! jagged at triangle granularity rather than geometrically exact.

use std::fmt;

use mesh_types::{IndexedMesh, Vertex};
use tracing::debug;

use crate::plane::Plane;

/// Which side of the plane survives a clip.
///
/// Sides are named from the plane normal: `Right` is the side the
/// normal points into. Both tests are inclusive, so a triangle whose
/// centroid lies exactly on the plane survives either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipSide {
    /// Keep triangles with centroid signed distance <= 0.
    Left,
    /// Keep triangles with centroid signed distance >= 0.
    Right,
}

impl ClipSide {
    /// Whether a centroid at this signed distance survives.
    #[inline]
    #[must_use]
    pub fn keeps(self, signed_distance: f64) -> bool {
        match self {
            Self::Left => signed_distance <= 0.0,
            Self::Right => signed_distance >= 0.0,
        }
    }
}

impl fmt::Display for ClipSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Summary of a clipping pass.
#[derive(Debug, Clone, Copy)]
pub struct ClipSummary {
    /// Number of triangles in the input.
    pub input_faces: usize,
    /// Number of triangles that survived.
    pub kept_faces: usize,
    /// Number of triangles removed.
    pub removed_faces: usize,
    /// Number of vertices in the rebuilt mesh.
    pub kept_vertices: usize,
}

impl fmt::Display for ClipSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Clip: kept {} of {} faces ({} vertices)",
            self.kept_faces, self.input_faces, self.kept_vertices
        )
    }
}

/// Keep one side of a cutting plane and rebuild a compact mesh.
///
/// Every triangle is tested once: its centroid's signed distance to the
/// plane decides which side it belongs to. The surviving triangles are
/// re-indexed into a new vertex array holding only the vertices they
/// reference, in ascending original order, so clipping never leaves
/// orphaned vertices behind. Vertex colors are carried over through the
/// same remap; normals are recomputed from the surviving triangle set
/// rather than carried, since boundary vertices lose adjacent faces.
///
/// A clip that removes every triangle returns an empty mesh, not an
/// error. The caller decides whether that is a problem; the pipeline
/// falls back to the unclipped mesh and warns.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, Axis};
/// use mesh_transform::{clip_mesh, ClipSide, Plane};
/// use nalgebra::Point3;
///
/// let cube = unit_cube();
/// let plane = Plane::from_axis(Axis::Y, Point3::new(0.5, 0.5, 0.5));
/// let (lower, summary) = clip_mesh(&cube, &plane, ClipSide::Left);
///
/// assert_eq!(summary.kept_faces, 6);
/// assert!(lower.vertices.iter().all(|v| v.position.y <= 1.0));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)] // vertex counts stay below u32::MAX
pub fn clip_mesh(mesh: &IndexedMesh, plane: &Plane, keep: ClipSide) -> (IndexedMesh, ClipSummary) {
    let input_faces = mesh.faces.len();

    let mut kept_faces: Vec<[u32; 3]> = Vec::new();
    for (face, tri) in mesh.faces.iter().zip(mesh.triangles()) {
        if keep.keeps(plane.signed_distance(tri.centroid())) {
            kept_faces.push(*face);
        }
    }
    let kept_count = kept_faces.len();

    if kept_faces.is_empty() {
        debug!("Clip removed all {} faces", input_faces);
        let summary = ClipSummary {
            input_faces,
            kept_faces: 0,
            removed_faces: input_faces,
            kept_vertices: 0,
        };
        return (IndexedMesh::new(), summary);
    }

    // Compact rebuild: referenced vertices only, ascending original order.
    let mut referenced = vec![false; mesh.vertices.len()];
    for face in &kept_faces {
        for &i in face {
            referenced[i as usize] = true;
        }
    }

    let mut remap: Vec<u32> = vec![0; mesh.vertices.len()];
    let mut kept_vertices: Vec<Vertex> = Vec::new();
    for (old_idx, vertex) in mesh.vertices.iter().enumerate() {
        if referenced[old_idx] {
            remap[old_idx] = kept_vertices.len() as u32;
            kept_vertices.push(vertex.clone());
        }
    }

    for face in &mut kept_faces {
        face[0] = remap[face[0] as usize];
        face[1] = remap[face[1] as usize];
        face[2] = remap[face[2] as usize];
    }

    let summary = ClipSummary {
        input_faces,
        kept_faces: kept_count,
        removed_faces: input_faces - kept_count,
        kept_vertices: kept_vertices.len(),
    };
    let mut clipped = IndexedMesh::from_parts(kept_vertices, kept_faces);
    clipped.recompute_normals();

    debug!(
        "Clip kept {} of {} faces on the {} side",
        kept_count, input_faces, keep
    );
    (clipped, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{unit_cube, Axis, Point3, VertexColor};

    fn center_plane(axis: Axis) -> Plane {
        Plane::from_axis(axis, Point3::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn cube_halves_along_y() {
        let cube = unit_cube();
        let (lower, summary) = clip_mesh(&cube, &center_plane(Axis::Y), ClipSide::Left);

        // The y=0 face survives whole, the y=1 face goes, and each of
        // the four side faces keeps the one triangle whose centroid
        // falls below the midplane.
        assert_eq!(summary.kept_faces, 6);
        assert_eq!(summary.removed_faces, 6);
        assert_eq!(summary.input_faces, 12);

        // All four y=0 corners survive plus the three y=1 corners the
        // kept side triangles still reference.
        assert_eq!(lower.vertex_count(), 7);
        let low_corners = lower
            .vertices
            .iter()
            .filter(|v| v.position.y == 0.0)
            .count();
        assert_eq!(low_corners, 4);
    }

    #[test]
    fn sides_partition_the_cube() {
        let cube = unit_cube();
        let plane = center_plane(Axis::X);
        let (_, left) = clip_mesh(&cube, &plane, ClipSide::Left);
        let (_, right) = clip_mesh(&cube, &plane, ClipSide::Right);

        // No cube face centroid lies exactly on the midplane, so the
        // two sides split the face set exactly.
        assert_eq!(left.kept_faces + right.kept_faces, 12);
        assert_eq!(left.kept_faces, 6);
        assert_eq!(right.kept_faces, 6);
    }

    #[test]
    fn centroid_on_plane_survives_both_sides() {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, -1.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.5, 0.0));
        mesh.vertices.push(Vertex::from_coords(2.0, 0.5, 0.0));
        mesh.faces.push([0, 1, 2]); // centroid y = 0 exactly

        let plane = Plane::from_axis(Axis::Y, Point3::origin());
        let (_, left) = clip_mesh(&mesh, &plane, ClipSide::Left);
        let (_, right) = clip_mesh(&mesh, &plane, ClipSide::Right);

        assert_eq!(left.kept_faces, 1);
        assert_eq!(right.kept_faces, 1);
    }

    #[test]
    fn kept_side_matches_centroid_rule() {
        let cube = unit_cube();
        let plane = center_plane(Axis::Z);
        let (clipped, _) = clip_mesh(&cube, &plane, ClipSide::Right);

        for tri in clipped.triangles() {
            assert!(plane.signed_distance(tri.centroid()) >= 0.0);
        }
    }

    #[test]
    fn rebuild_is_compact_and_ordered() {
        let cube = unit_cube();
        let (clipped, summary) = clip_mesh(&cube, &center_plane(Axis::Y), ClipSide::Left);

        assert_eq!(summary.kept_vertices, clipped.vertex_count());

        // Every surviving vertex is referenced by some face.
        let mut referenced = vec![false; clipped.vertex_count()];
        for face in &clipped.faces {
            for &i in face {
                assert!((i as usize) < clipped.vertex_count());
                referenced[i as usize] = true;
            }
        }
        assert!(referenced.iter().all(|&r| r));

        // Survivors keep their relative order from the input.
        let survivors: Vec<Point3<f64>> = cube
            .vertices
            .iter()
            .map(|v| v.position)
            .filter(|p| clipped.vertices.iter().any(|v| v.position == *p))
            .collect();
        let rebuilt: Vec<Point3<f64>> = clipped.vertices.iter().map(|v| v.position).collect();
        assert_eq!(survivors, rebuilt);
    }

    #[test]
    fn colors_are_carried_over() {
        let mut cube = unit_cube();
        cube.paint_uniform(VertexColor::RED);

        let (clipped, _) = clip_mesh(&cube, &center_plane(Axis::Y), ClipSide::Left);
        assert!(clipped.has_colors());
        assert!(clipped
            .vertices
            .iter()
            .all(|v| v.color() == Some(VertexColor::RED)));
    }

    #[test]
    fn normals_are_recomputed_not_carried() {
        let mut cube = unit_cube();
        cube.recompute_normals();
        let corner_normal_before = cube.vertices[0].normal();

        let (clipped, _) = clip_mesh(&cube, &center_plane(Axis::Y), ClipSide::Left);
        assert!(clipped.has_normals());

        // Corner 0 lost its back-facing neighbors, so its averaged
        // normal must differ from the full cube's.
        let corner_after = clipped
            .vertices
            .iter()
            .find(|v| v.position == Point3::new(0.0, 0.0, 0.0))
            .and_then(Vertex::normal);
        assert_ne!(corner_normal_before, corner_after);
    }

    #[test]
    fn clip_removing_everything_yields_empty_mesh() {
        let cube = unit_cube();
        let far_plane = Plane::from_axis(Axis::X, Point3::new(5.0, 0.0, 0.0));
        let (clipped, summary) = clip_mesh(&cube, &far_plane, ClipSide::Right);

        assert!(clipped.is_empty());
        assert_eq!(clipped.vertex_count(), 0);
        assert_eq!(summary.kept_faces, 0);
        assert_eq!(summary.removed_faces, 12);
    }

    #[test]
    fn clip_of_empty_mesh_is_empty() {
        let empty = IndexedMesh::new();
        let (clipped, summary) = clip_mesh(&empty, &center_plane(Axis::Y), ClipSide::Left);
        assert!(clipped.is_empty());
        assert_eq!(summary.input_faces, 0);
        assert_eq!(summary.kept_faces, 0);
    }

    #[test]
    fn side_display_and_keeps() {
        assert_eq!(ClipSide::Left.to_string(), "left");
        assert_eq!(ClipSide::Right.to_string(), "right");
        assert!(ClipSide::Left.keeps(-1.0));
        assert!(ClipSide::Left.keeps(0.0));
        assert!(!ClipSide::Left.keeps(1.0));
        assert!(ClipSide::Right.keeps(0.0));
        assert!(ClipSide::Right.keeps(1.0));
    }

    #[test]
    fn summary_display() {
        let cube = unit_cube();
        let (_, summary) = clip_mesh(&cube, &center_plane(Axis::Y), ClipSide::Left);
        let text = summary.to_string();
        assert!(text.contains("kept 6 of 12 faces"));
        assert!(text.contains("7 vertices"));
    }
}
