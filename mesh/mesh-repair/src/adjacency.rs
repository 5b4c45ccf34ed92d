//! Mesh adjacency data structures.
//!
//! Provides efficient lookups from edges to the faces that share them,
//! which is what non-manifold pruning and watertightness checks need.

use hashbrown::HashMap;

/// Edge-to-face adjacency for a triangle mesh.
///
/// Edges are undirected: `(v0, v1)` and `(v1, v0)` map to the same
/// entry. An edge with one incident face lies on a boundary; an edge
/// with more than two incident faces is non-manifold.
#[derive(Debug, Clone)]
pub struct MeshAdjacency {
    /// Maps edge (v0, v1) to list of face indices. v0 < v1.
    edge_to_faces: HashMap<(u32, u32), Vec<usize>>,
}

impl MeshAdjacency {
    /// Build adjacency information from a list of faces.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_repair::MeshAdjacency;
    ///
    /// let faces = vec![[0, 1, 2], [1, 3, 2]];
    /// let adj = MeshAdjacency::build(&faces);
    ///
    /// assert_eq!(adj.boundary_edge_count(), 4);
    /// ```
    #[must_use]
    pub fn build(faces: &[[u32; 3]]) -> Self {
        let mut edge_to_faces: HashMap<(u32, u32), Vec<usize>> = HashMap::new();

        for (face_idx, face) in faces.iter().enumerate() {
            let edges = [
                normalize_edge(face[0], face[1]),
                normalize_edge(face[1], face[2]),
                normalize_edge(face[2], face[0]),
            ];

            for edge in edges {
                edge_to_faces.entry(edge).or_default().push(face_idx);
            }
        }

        Self { edge_to_faces }
    }

    /// Get faces adjacent to an edge.
    ///
    /// Returns `None` if the edge doesn't exist in the mesh.
    #[must_use]
    pub fn faces_for_edge(&self, v0: u32, v1: u32) -> Option<&[usize]> {
        let edge = normalize_edge(v0, v1);
        self.edge_to_faces.get(&edge).map(Vec::as_slice)
    }

    /// Iterate over all boundary edges (edges with exactly one adjacent face).
    ///
    /// Boundary edges indicate holes in the mesh surface.
    pub fn boundary_edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edge_to_faces
            .iter()
            .filter(|(_, faces)| faces.len() == 1)
            .map(|(&edge, _)| edge)
    }

    /// Count the number of boundary edges.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_to_faces
            .values()
            .filter(|faces| faces.len() == 1)
            .count()
    }

    /// Iterate over non-manifold edges together with their incident faces.
    ///
    /// A non-manifold edge has more than two adjacent faces.
    pub fn non_manifold_edges(&self) -> impl Iterator<Item = ((u32, u32), &[usize])> {
        self.edge_to_faces
            .iter()
            .filter(|(_, faces)| faces.len() > 2)
            .map(|(&edge, faces)| (edge, faces.as_slice()))
    }

    /// Count the number of non-manifold edges.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_to_faces
            .values()
            .filter(|faces| faces.len() > 2)
            .count()
    }

    /// Check if the mesh is manifold (all edges have at most 2 adjacent faces).
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.edge_to_faces.values().all(|faces| faces.len() <= 2)
    }

    /// Check if the mesh is watertight (no boundary edges).
    #[must_use]
    pub fn is_watertight(&self) -> bool {
        self.edge_to_faces.values().all(|faces| faces.len() >= 2)
    }

    /// Get the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_to_faces.len()
    }
}

/// Normalize edge direction so v0 < v1.
#[inline]
fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}
