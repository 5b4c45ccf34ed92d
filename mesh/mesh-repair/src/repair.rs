//! Core mesh cleanup operations.
//!
//! Models arriving from scanners and format converters commonly carry
//! exact duplicate vertices (from per-face vertex splitting), repeated
//! faces, and fins where three or more triangles meet along one edge.
//! The operations here remove those defects without otherwise touching
//! the geometry.

use hashbrown::hash_map::Entry;
use hashbrown::{HashMap, HashSet};
use mesh_types::{IndexedMesh, Point3, Vertex};
use tracing::debug;

use crate::adjacency::MeshAdjacency;
use crate::error::RepairResult;
use crate::validate::ensure_valid;

/// Configuration for the cleanup pass.
///
/// Each flag enables one operation; the defaults run the standard
/// preparation set.
///
/// # Example
///
/// ```
/// use mesh_repair::RepairParams;
///
/// // Standard cleanup
/// let params = RepairParams::default();
///
/// // Also drop vertices left orphaned by face removal
/// let params = RepairParams::default().with_remove_unreferenced(true);
/// ```
#[derive(Debug, Clone)]
pub struct RepairParams {
    /// Merge vertices whose positions are bit-for-bit identical.
    ///
    /// Default: `true`
    pub dedup_vertices: bool,

    /// Remove faces whose index triple exactly matches an earlier face.
    ///
    /// Default: `true`
    pub dedup_faces: bool,

    /// Remove every face touching an edge shared by more than two faces.
    ///
    /// Default: `true`
    pub remove_non_manifold: bool,

    /// Compute per-vertex normals when the mesh has none.
    ///
    /// Default: `true`
    pub fill_normals: bool,

    /// Remove vertices no face references, compacting the vertex array.
    ///
    /// Default: `false` (orphaned vertices are harmless to later stages
    /// and keeping them preserves the input's vertex numbering)
    pub remove_unreferenced: bool,
}

impl Default for RepairParams {
    fn default() -> Self {
        Self {
            dedup_vertices: true,
            dedup_faces: true,
            remove_non_manifold: true,
            fill_normals: true,
            remove_unreferenced: false,
        }
    }
}

impl RepairParams {
    /// Set whether to merge bit-identical vertices.
    #[must_use]
    pub fn with_dedup_vertices(mut self, enabled: bool) -> Self {
        self.dedup_vertices = enabled;
        self
    }

    /// Set whether to remove exactly repeated faces.
    #[must_use]
    pub fn with_dedup_faces(mut self, enabled: bool) -> Self {
        self.dedup_faces = enabled;
        self
    }

    /// Set whether to remove faces on non-manifold edges.
    #[must_use]
    pub fn with_remove_non_manifold(mut self, enabled: bool) -> Self {
        self.remove_non_manifold = enabled;
        self
    }

    /// Set whether to compute normals when the mesh has none.
    #[must_use]
    pub fn with_fill_normals(mut self, enabled: bool) -> Self {
        self.fill_normals = enabled;
        self
    }

    /// Set whether to remove unreferenced vertices after cleanup.
    #[must_use]
    pub fn with_remove_unreferenced(mut self, enabled: bool) -> Self {
        self.remove_unreferenced = enabled;
        self
    }
}

/// Merge vertices whose positions are bit-for-bit identical.
///
/// This is an exact merge, not a tolerance weld: positions are compared
/// by their IEEE-754 bit patterns, so `0.0` and `-0.0` stay distinct
/// and nearly-equal coordinates are never collapsed. The first
/// occurrence of each position keeps its attributes; later duplicates
/// are dropped and faces are remapped onto the survivor.
///
/// Returns the number of vertices removed.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
/// use mesh_repair::dedup_vertices;
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0)); // exact copy of vertex 1
/// mesh.faces.push([0, 1, 2]);
/// mesh.faces.push([0, 3, 2]);
///
/// let removed = dedup_vertices(&mut mesh);
/// assert_eq!(removed, 1);
/// assert_eq!(mesh.faces[1], [0, 1, 2]);
/// ```
pub fn dedup_vertices(mesh: &mut IndexedMesh) -> usize {
    let original_count = mesh.vertices.len();
    if original_count == 0 {
        return 0;
    }

    let mut seen: HashMap<[u64; 3], u32> = HashMap::with_capacity(original_count);
    let mut remap: Vec<u32> = Vec::with_capacity(original_count);
    let mut kept: Vec<Vertex> = Vec::with_capacity(original_count);

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported by design
    for vertex in &mesh.vertices {
        match seen.entry(position_bits(&vertex.position)) {
            Entry::Occupied(entry) => remap.push(*entry.get()),
            Entry::Vacant(entry) => {
                let new_idx = kept.len() as u32;
                entry.insert(new_idx);
                kept.push(vertex.clone());
                remap.push(new_idx);
            }
        }
    }

    if kept.len() == original_count {
        return 0;
    }

    for face in &mut mesh.faces {
        face[0] = remap[face[0] as usize];
        face[1] = remap[face[1] as usize];
        face[2] = remap[face[2] as usize];
    }

    mesh.vertices = kept;
    original_count - mesh.vertices.len()
}

/// Key a position by its exact bit pattern.
fn position_bits(position: &Point3<f64>) -> [u64; 3] {
    [
        position.x.to_bits(),
        position.y.to_bits(),
        position.z.to_bits(),
    ]
}

/// Remove faces that no longer have three distinct corners.
///
/// Vertex merging can collapse a face onto a repeated index; such a
/// face has no area and breaks edge bookkeeping, so it is dropped.
///
/// Returns the number of faces removed.
pub fn remove_collapsed_faces(mesh: &mut IndexedMesh) -> usize {
    let original_count = mesh.faces.len();
    mesh.faces
        .retain(|&[i0, i1, i2]| i0 != i1 && i1 != i2 && i0 != i2);
    original_count - mesh.faces.len()
}

/// Remove faces whose index triple exactly repeats an earlier face.
///
/// Two faces are duplicates only when their `[v0, v1, v2]` triples
/// match element for element. The same triangle written with rotated
/// or reversed indices is treated as a distinct face and kept.
///
/// Returns the number of faces removed.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
/// use mesh_repair::dedup_faces;
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
/// mesh.faces.push([0, 1, 2]); // exact duplicate
/// mesh.faces.push([1, 2, 0]); // rotation, kept
///
/// let removed = dedup_faces(&mut mesh);
/// assert_eq!(removed, 1);
/// assert_eq!(mesh.faces.len(), 2);
/// ```
pub fn dedup_faces(mesh: &mut IndexedMesh) -> usize {
    let original_count = mesh.faces.len();

    let mut seen: HashSet<[u32; 3]> = HashSet::with_capacity(original_count);
    mesh.faces.retain(|face| seen.insert(*face));

    original_count - mesh.faces.len()
}

/// Remove every face that touches a non-manifold edge.
///
/// An edge shared by more than two faces cannot belong to a valid
/// closed surface; all faces incident to such an edge are dropped in a
/// single pass. Well-formed neighbors that merely share a vertex with
/// the removed fan are kept.
///
/// Returns the number of faces removed.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
/// use mesh_repair::remove_non_manifold_faces;
///
/// let mut mesh = IndexedMesh::new();
/// for i in 0..5 {
///     mesh.vertices.push(Vertex::from_coords(f64::from(i), 0.0, 0.0));
/// }
/// // Three faces share edge (0, 1)
/// mesh.faces.push([0, 1, 2]);
/// mesh.faces.push([0, 1, 3]);
/// mesh.faces.push([0, 1, 4]);
///
/// let removed = remove_non_manifold_faces(&mut mesh);
/// assert_eq!(removed, 3);
/// assert!(mesh.faces.is_empty());
/// ```
pub fn remove_non_manifold_faces(mesh: &mut IndexedMesh) -> usize {
    let adjacency = MeshAdjacency::build(&mesh.faces);

    let mut doomed: HashSet<usize> = HashSet::new();
    for (_, faces) in adjacency.non_manifold_edges() {
        doomed.extend(faces.iter().copied());
    }

    if doomed.is_empty() {
        return 0;
    }

    let mut idx = 0;
    mesh.faces.retain(|_| {
        let keep = !doomed.contains(&idx);
        idx += 1;
        keep
    });

    doomed.len()
}

/// Compute per-vertex normals when the mesh has none.
///
/// A mesh counts as having normals only when every vertex carries one,
/// so a partial set is also replaced. Existing complete normals are
/// left untouched.
///
/// Returns `true` if normals were computed.
pub fn fill_missing_normals(mesh: &mut IndexedMesh) -> bool {
    if mesh.has_normals() {
        return false;
    }
    mesh.recompute_normals();
    true
}

/// Remove unreferenced vertices and compact the vertex array.
///
/// Returns the number of vertices removed.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
/// use mesh_repair::remove_unreferenced_vertices;
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(100.0, 100.0, 100.0)); // orphan
/// mesh.faces.push([0, 1, 2]);
///
/// let removed = remove_unreferenced_vertices(&mut mesh);
/// assert_eq!(removed, 1);
/// assert_eq!(mesh.vertices.len(), 3);
/// ```
#[allow(clippy::cast_possible_truncation)]
// Truncation: mesh indices are u32, so vertex counts > 4B are unsupported by design
pub fn remove_unreferenced_vertices(mesh: &mut IndexedMesh) -> usize {
    let original_count = mesh.vertices.len();

    let mut referenced = vec![false; original_count];
    for face in &mesh.faces {
        for &i in face {
            referenced[i as usize] = true;
        }
    }

    if referenced.iter().all(|&r| r) {
        return 0;
    }

    let mut remap: Vec<u32> = vec![0; original_count];
    let mut kept: Vec<Vertex> = Vec::new();
    for (old_idx, vertex) in mesh.vertices.iter().enumerate() {
        if referenced[old_idx] {
            remap[old_idx] = kept.len() as u32;
            kept.push(vertex.clone());
        }
    }

    for face in &mut mesh.faces {
        face[0] = remap[face[0] as usize];
        face[1] = remap[face[1] as usize];
        face[2] = remap[face[2] as usize];
    }

    let removed = original_count - kept.len();
    mesh.vertices = kept;
    removed
}

/// Run the cleanup pass on a mesh.
///
/// Operations run in a fixed order: vertex dedup (with collapsed-face
/// removal), face dedup, non-manifold pruning, optional unreferenced
/// vertex removal, then normal filling. Running the pass again on its
/// own output changes nothing.
///
/// # Errors
///
/// Returns [`RepairError::EmptyMesh`](crate::RepairError::EmptyMesh) if
/// the mesh has no vertices or no faces, and
/// [`RepairError::InvalidIndex`](crate::RepairError::InvalidIndex) if a
/// face references a missing vertex. The mesh is not modified in either
/// case.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
/// use mesh_repair::{repair_mesh, RepairParams};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(10.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 10.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// let summary = repair_mesh(&mut mesh, &RepairParams::default())?;
/// assert!(!summary.had_changes() || summary.normals_filled);
/// # Ok::<(), mesh_repair::RepairError>(())
/// ```
pub fn repair_mesh(mesh: &mut IndexedMesh, params: &RepairParams) -> RepairResult<RepairSummary> {
    ensure_valid(mesh)?;

    let initial_vertices = mesh.vertices.len();
    let initial_faces = mesh.faces.len();

    let (vertices_deduped, faces_collapsed) = if params.dedup_vertices {
        let merged = dedup_vertices(mesh);
        (merged, remove_collapsed_faces(mesh))
    } else {
        (0, 0)
    };

    let faces_deduped = if params.dedup_faces {
        dedup_faces(mesh)
    } else {
        0
    };

    let non_manifold_faces_removed = if params.remove_non_manifold {
        remove_non_manifold_faces(mesh)
    } else {
        0
    };

    let unreferenced_removed = if params.remove_unreferenced {
        remove_unreferenced_vertices(mesh)
    } else {
        0
    };

    let normals_filled = params.fill_normals && fill_missing_normals(mesh);

    if vertices_deduped > 0 {
        debug!("Merged {} duplicate vertices", vertices_deduped);
    }
    if faces_collapsed > 0 {
        debug!("Dropped {} faces collapsed by vertex merging", faces_collapsed);
    }
    if faces_deduped > 0 {
        debug!("Removed {} duplicate faces", faces_deduped);
    }
    if non_manifold_faces_removed > 0 {
        debug!(
            "Removed {} faces on non-manifold edges",
            non_manifold_faces_removed
        );
    }
    if unreferenced_removed > 0 {
        debug!("Removed {} unreferenced vertices", unreferenced_removed);
    }

    Ok(RepairSummary {
        initial_vertices,
        initial_faces,
        final_vertices: mesh.vertices.len(),
        final_faces: mesh.faces.len(),
        vertices_deduped,
        faces_collapsed,
        faces_deduped,
        non_manifold_faces_removed,
        unreferenced_removed,
        normals_filled,
    })
}

/// Summary of a cleanup pass.
#[derive(Debug, Clone, Default)]
pub struct RepairSummary {
    /// Number of vertices before cleanup.
    pub initial_vertices: usize,
    /// Number of faces before cleanup.
    pub initial_faces: usize,
    /// Number of vertices after cleanup.
    pub final_vertices: usize,
    /// Number of faces after cleanup.
    pub final_faces: usize,
    /// Number of bit-identical vertices merged.
    pub vertices_deduped: usize,
    /// Number of faces dropped for lacking three distinct corners.
    pub faces_collapsed: usize,
    /// Number of exactly repeated faces removed.
    pub faces_deduped: usize,
    /// Number of faces removed for touching a non-manifold edge.
    pub non_manifold_faces_removed: usize,
    /// Number of unreferenced vertices removed.
    pub unreferenced_removed: usize,
    /// Whether normals were computed for a mesh that had none.
    pub normals_filled: bool,
}

impl RepairSummary {
    /// Check if the pass changed the mesh.
    #[must_use]
    pub fn had_changes(&self) -> bool {
        self.vertices_deduped > 0
            || self.faces_collapsed > 0
            || self.faces_deduped > 0
            || self.non_manifold_faces_removed > 0
            || self.unreferenced_removed > 0
            || self.normals_filled
    }
}

impl std::fmt::Display for RepairSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cleanup: {} verts ({} merged, {} unreferenced), {} faces ({} duplicate, {} collapsed, {} non-manifold), normals {}",
            self.final_vertices,
            self.vertices_deduped,
            self.unreferenced_removed,
            self.final_faces,
            self.faces_deduped,
            self.faces_collapsed,
            self.non_manifold_faces_removed,
            if self.normals_filled { "filled" } else { "kept" }
        )
    }
}
