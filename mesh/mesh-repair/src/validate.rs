//! Mesh validation and health reporting.
//!
//! Checks meshes for defects that trip up downstream processing, and
//! provides the hard validity check run before any cleanup.

use hashbrown::HashSet;
use mesh_types::IndexedMesh;

use crate::adjacency::MeshAdjacency;
use crate::error::{RepairError, RepairResult};

/// Report of mesh validation results.
///
/// Contains counts of mesh defects and overall health flags.
#[derive(Debug, Clone, Default)]
pub struct MeshReport {
    /// Total number of vertices.
    pub vertex_count: usize,
    /// Total number of faces.
    pub face_count: usize,
    /// Total number of edges.
    pub edge_count: usize,

    /// Number of boundary edges (edges with only one adjacent face).
    pub boundary_edge_count: usize,
    /// Number of non-manifold edges (edges with more than two adjacent faces).
    pub non_manifold_edge_count: usize,
    /// Number of faces whose index triple exactly repeats an earlier face.
    pub duplicate_face_count: usize,

    /// Whether the mesh is watertight (no boundary edges).
    pub is_watertight: bool,
    /// Whether the mesh is manifold (no non-manifold edges).
    pub is_manifold: bool,
}

impl MeshReport {
    /// Check if the mesh has any issues.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.boundary_edge_count > 0
            || self.non_manifold_edge_count > 0
            || self.duplicate_face_count > 0
    }

    /// Get a count of total issues found.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.boundary_edge_count + self.non_manifold_edge_count + self.duplicate_face_count
    }
}

impl std::fmt::Display for MeshReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mesh Report:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Faces: {}", self.face_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(f)?;
        writeln!(f, "  Status:")?;
        writeln!(
            f,
            "    Watertight: {}",
            if self.is_watertight { "Yes" } else { "No" }
        )?;
        writeln!(
            f,
            "    Manifold: {}",
            if self.is_manifold { "Yes" } else { "No" }
        )?;

        if self.has_issues() {
            writeln!(f)?;
            writeln!(f, "  Issues:")?;
            if self.boundary_edge_count > 0 {
                writeln!(f, "    Boundary edges: {}", self.boundary_edge_count)?;
            }
            if self.non_manifold_edge_count > 0 {
                writeln!(
                    f,
                    "    Non-manifold edges: {}",
                    self.non_manifold_edge_count
                )?;
            }
            if self.duplicate_face_count > 0 {
                writeln!(f, "    Duplicate faces: {}", self.duplicate_face_count)?;
            }
        }

        Ok(())
    }
}

/// Validate a mesh and return a report of any issues.
///
/// The report is advisory; use [`ensure_valid`] for the hard check that
/// gates cleanup.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
/// use mesh_repair::validate_mesh;
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// let report = validate_mesh(&mesh);
/// assert_eq!(report.face_count, 1);
/// assert_eq!(report.boundary_edge_count, 3); // Single triangle has 3 boundary edges
/// ```
#[must_use]
pub fn validate_mesh(mesh: &IndexedMesh) -> MeshReport {
    let adjacency = MeshAdjacency::build(&mesh.faces);

    MeshReport {
        vertex_count: mesh.vertices.len(),
        face_count: mesh.faces.len(),
        edge_count: adjacency.edge_count(),
        boundary_edge_count: adjacency.boundary_edge_count(),
        non_manifold_edge_count: adjacency.non_manifold_edge_count(),
        duplicate_face_count: count_duplicate_faces(&mesh.faces),
        is_watertight: adjacency.is_watertight(),
        is_manifold: adjacency.is_manifold(),
    }
}

/// Check the hard validity requirements for processing.
///
/// A processable mesh has at least one vertex, at least one face, and
/// every face index in range.
///
/// # Errors
///
/// Returns [`RepairError::EmptyMesh`] if the mesh has no vertices or no
/// faces, or [`RepairError::InvalidIndex`] naming the first
/// out-of-range face index found.
pub fn ensure_valid(mesh: &IndexedMesh) -> RepairResult<()> {
    if mesh.vertices.is_empty() || mesh.faces.is_empty() {
        return Err(RepairError::EmptyMesh);
    }

    let vertex_count = mesh.vertices.len();
    for face in &mesh.faces {
        for &index in face {
            if index as usize >= vertex_count {
                return Err(RepairError::InvalidIndex {
                    index,
                    vertex_count,
                });
            }
        }
    }

    Ok(())
}

/// Count faces whose exact index triple repeats an earlier face.
///
/// Matches the removal rule: rotated or reversed triples are distinct.
fn count_duplicate_faces(faces: &[[u32; 3]]) -> usize {
    let mut seen: HashSet<[u32; 3]> = HashSet::with_capacity(faces.len());
    faces.iter().filter(|face| !seen.insert(**face)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::Vertex;

    fn simple_triangle() -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(10.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 10.0, 0.0));
        mesh.faces.push([0, 1, 2]);
        mesh
    }

    fn unit_tetrahedron() -> IndexedMesh {
        // A closed tetrahedron with outward winding
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.5, 0.866, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.5, 0.289, 0.816));

        mesh.faces.push([0, 2, 1]); // bottom
        mesh.faces.push([0, 1, 3]); // front
        mesh.faces.push([1, 2, 3]); // right
        mesh.faces.push([2, 0, 3]); // left
        mesh
    }

    #[test]
    fn validate_single_triangle() {
        let report = validate_mesh(&simple_triangle());

        assert_eq!(report.vertex_count, 3);
        assert_eq!(report.face_count, 1);
        assert_eq!(report.boundary_edge_count, 3);
        assert!(!report.is_watertight);
    }

    #[test]
    fn validate_tetrahedron() {
        let report = validate_mesh(&unit_tetrahedron());

        assert_eq!(report.vertex_count, 4);
        assert_eq!(report.face_count, 4);
        assert_eq!(report.boundary_edge_count, 0);
        assert!(report.is_watertight);
        assert!(report.is_manifold);
        assert!(!report.has_issues());
    }

    #[test]
    fn duplicate_counts_exact_triples() {
        let mut mesh = simple_triangle();
        mesh.faces.push([0, 1, 2]); // exact duplicate
        mesh.faces.push([0, 1, 2]); // and another

        let report = validate_mesh(&mesh);
        assert_eq!(report.duplicate_face_count, 2);
    }

    #[test]
    fn rotated_and_reversed_faces_are_distinct() {
        let mut mesh = simple_triangle();
        mesh.faces.push([1, 2, 0]); // rotation
        mesh.faces.push([0, 2, 1]); // reversed winding

        let report = validate_mesh(&mesh);
        assert_eq!(report.duplicate_face_count, 0);
    }

    #[test]
    fn non_manifold_reported() {
        let mut mesh = simple_triangle();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 10.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, -10.0));
        mesh.faces.push([0, 1, 3]);
        mesh.faces.push([0, 1, 4]);

        let report = validate_mesh(&mesh);
        assert_eq!(report.non_manifold_edge_count, 1);
        assert!(!report.is_manifold);
    }

    #[test]
    fn ensure_valid_accepts_triangle() {
        assert!(ensure_valid(&simple_triangle()).is_ok());
    }

    #[test]
    fn ensure_valid_rejects_empty() {
        let result = ensure_valid(&IndexedMesh::new());
        assert!(matches!(result, Err(RepairError::EmptyMesh)));

        let mut no_faces = IndexedMesh::new();
        no_faces.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        assert!(matches!(
            ensure_valid(&no_faces),
            Err(RepairError::EmptyMesh)
        ));
    }

    #[test]
    fn ensure_valid_rejects_out_of_range_index() {
        let mut mesh = simple_triangle();
        mesh.faces.push([0, 1, 7]);

        match ensure_valid(&mesh) {
            Err(RepairError::InvalidIndex {
                index,
                vertex_count,
            }) => {
                assert_eq!(index, 7);
                assert_eq!(vertex_count, 3);
            }
            other => panic!("expected InvalidIndex, got {other:?}"),
        }
    }

    #[test]
    fn report_display() {
        let report = validate_mesh(&simple_triangle());
        let display = format!("{report}");

        assert!(display.contains("Vertices: 3"));
        assert!(display.contains("Watertight: No"));
        assert!(display.contains("Boundary edges: 3"));
    }

    #[test]
    fn has_issues_empty_report() {
        assert!(!MeshReport::default().has_issues());
    }

    #[test]
    fn issue_count_sums_categories() {
        let report = MeshReport {
            boundary_edge_count: 3,
            duplicate_face_count: 2,
            ..Default::default()
        };

        assert_eq!(report.issue_count(), 5);
    }
}
