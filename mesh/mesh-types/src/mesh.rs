//! Indexed triangle mesh.

use std::fmt;

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Aabb, Triangle, Vertex, VertexColor};

/// An indexed triangle mesh.
///
/// This is the value passed between pipeline stages. It stores vertices
/// and faces separately, with faces referencing vertices by index.
/// Stages treat it as a value: each returns a new or repaired mesh
/// rather than aliasing caller state.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Vertex>` - Vertex positions and attributes
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as vertex indices
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside.
/// This means normals point outward by the right-hand rule.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, Vertex};
    ///
    /// let vertices = vec![
    ///     Vertex::from_coords(0.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 0.0),
    ///     Vertex::from_coords(0.0, 1.0, 0.0),
    /// ];
    /// let mesh = IndexedMesh::from_parts(vertices, vec![[0, 1, 2]]);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no renderable geometry.
    ///
    /// A mesh without faces counts as empty even when vertices exist.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// The triangle at a face index, with positions resolved.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces.get(face_index).map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }

    /// Iterate over all triangles with positions resolved.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }

    /// Check whether every vertex carries a normal.
    ///
    /// Returns `false` for a mesh with no vertices.
    #[must_use]
    pub fn has_normals(&self) -> bool {
        !self.vertices.is_empty()
            && self
                .vertices
                .iter()
                .all(|v| v.attributes.normal.is_some())
    }

    /// Check whether every vertex carries a color.
    ///
    /// Returns `false` for a mesh with no vertices.
    #[must_use]
    pub fn has_colors(&self) -> bool {
        !self.vertices.is_empty()
            && self
                .vertices
                .iter()
                .all(|v| v.attributes.color.is_some())
    }

    /// The axis-aligned bounding box of all vertices.
    ///
    /// Returns [`Aabb::empty`] for a mesh with no vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }

    /// The geometric center: the arithmetic mean of vertex positions.
    ///
    /// This differs from `bounds().center()` for meshes whose vertices are
    /// unevenly distributed, and is the pivot used when the canonicalizer
    /// rotates a mesh upright.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision loss: vertex counts beyond 2^52 are unsupported
    pub fn centroid(&self) -> Option<Point3<f64>> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.position.coords);
        Some(Point3::from(sum / self.vertices.len() as f64))
    }

    /// Translate the mesh by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Scale the mesh uniformly around the origin.
    pub fn scale(&mut self, factor: f64) {
        for vertex in &mut self.vertices {
            vertex.position.coords *= factor;
        }
    }

    /// Scale the mesh uniformly around a pivot point.
    pub fn scale_about(&mut self, factor: f64, pivot: Point3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position = pivot + (vertex.position - pivot) * factor;
        }
    }

    /// Recompute per-vertex normals from the current face set.
    ///
    /// Each vertex normal is the normalized sum of the unnormalized face
    /// normals of its adjacent triangles, which weights faces by area.
    /// Vertices not referenced by any face (or surrounded only by
    /// degenerate faces) get no normal.
    pub fn recompute_normals(&mut self) {
        let mut accumulated = vec![Vector3::zeros(); self.vertices.len()];

        for tri in 0..self.faces.len() {
            let [i0, i1, i2] = self.faces[tri];
            let weighted = match self.triangle(tri) {
                Some(t) => t.normal_unnormalized(),
                None => continue,
            };
            accumulated[i0 as usize] += weighted;
            accumulated[i1 as usize] += weighted;
            accumulated[i2 as usize] += weighted;
        }

        for (vertex, sum) in self.vertices.iter_mut().zip(accumulated) {
            let len = sum.norm();
            vertex.attributes.normal = if len > f64::EPSILON {
                Some(sum / len)
            } else {
                None
            };
        }
    }

    /// Clear all vertex normals.
    pub fn clear_normals(&mut self) {
        for vertex in &mut self.vertices {
            vertex.attributes.normal = None;
        }
    }

    /// Assign the same color to every vertex.
    pub fn paint_uniform(&mut self, color: VertexColor) {
        for vertex in &mut self.vertices {
            vertex.attributes.color = Some(color);
        }
    }

    /// Merge another mesh into this one.
    ///
    /// The other mesh's vertices and faces are appended, with face
    /// indices adjusted appropriately.
    ///
    /// # Note
    ///
    /// Vertex indices are u32, so merged meshes beyond ~4 billion
    /// vertices are not supported.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported by design
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;

        self.vertices.extend(other.vertices.iter().cloned());

        for face in &other.faces {
            self.faces.push([
                face[0] + vertex_offset,
                face[1] + vertex_offset,
                face[2] + vertex_offset,
            ]);
        }
    }

    /// Summarize counts and attribute presence for logging.
    #[must_use]
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertices: self.vertex_count(),
            triangles: self.face_count(),
            has_colors: self.has_colors(),
            has_normals: self.has_normals(),
        }
    }
}

/// Size and attribute summary of a mesh, for diagnostics.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
///
/// let stats = unit_cube().stats();
/// assert_eq!(stats.vertices, 8);
/// assert_eq!(stats.triangles, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshStats {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of triangle faces.
    pub triangles: usize,
    /// Whether every vertex has a color.
    pub has_colors: bool,
    /// Whether every vertex has a normal.
    pub has_normals: bool,
}

impl fmt::Display for MeshStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vertices, {} triangles, colors: {}, normals: {}",
            self.vertices, self.triangles, self.has_colors, self.has_normals
        )
    }
}

/// Helper function to create a unit cube mesh.
///
/// Creates a cube from (0,0,0) to (1,1,1) with outward-facing CCW winding.
/// Scale and translate it to build boxes of any size and placement.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> IndexedMesh {
    let mut mesh = IndexedMesh::with_capacity(8, 12);

    // 8 vertices of the cube
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0)); // 2
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0)); // 4
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 1.0)); // 6
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 1.0)); // 7

    // 12 triangles (2 per face), CCW winding when viewed from outside

    // Bottom face (z=0)
    mesh.faces.push([0, 2, 1]);
    mesh.faces.push([0, 3, 2]);

    // Top face (z=1)
    mesh.faces.push([4, 5, 6]);
    mesh.faces.push([4, 6, 7]);

    // Front face (y=0)
    mesh.faces.push([0, 1, 5]);
    mesh.faces.push([0, 5, 4]);

    // Back face (y=1)
    mesh.faces.push([3, 7, 6]);
    mesh.faces.push([3, 6, 2]);

    // Left face (x=0)
    mesh.faces.push([0, 4, 7]);
    mesh.faces.push([0, 7, 3]);

    // Right face (x=1)
    mesh.faces.push([1, 2, 6]);
    mesh.faces.push([1, 6, 5]);

    mesh
}
