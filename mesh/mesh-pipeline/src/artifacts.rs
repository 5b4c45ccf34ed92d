//! Display geometry for viewer stages.
//!
//! Three artifacts accompany the pipeline's own meshes in the viewer: a
//! blocky voxel rendition of the sampled surface, a thin slab marking
//! the clip plane, and sphere markers at the gradient extrema. Each is
//! built as an ordinary colored mesh so any viewer (or the PLY writer)
//! can consume it without special cases.

use std::collections::HashMap;

use mesh_transform::ExtremaMarker;
use mesh_types::{unit_cube, Axis, IndexedMesh, Point3, Vector3, Vertex, VertexColor};
use plinth_spatial::{VoxelCoord, VoxelGrid};

/// Slab thickness along the clip axis, in world units.
pub const PLANE_THICKNESS: f64 = 0.005;

/// Slab extent multiplier on the two non-clip axes.
pub const PLANE_EXTENT_SCALE: f64 = 1.5;

/// Build one cube per displayed voxel, merged into a single mesh.
///
/// Each cube has the grid's voxel size as its edge length and sits
/// centered on its cell. Brightness cycles through five steps so
/// neighboring cubes read as distinct blocks instead of one solid mass.
#[must_use]
pub fn voxel_art_mesh(grid: &VoxelGrid, cells: &[VoxelCoord]) -> IndexedMesh {
    let size = grid.voxel_size();
    let half = Vector3::new(size, size, size) * 0.5;
    let mut art = IndexedMesh::with_capacity(cells.len() * 8, cells.len() * 12);

    for (i, &cell) in cells.iter().enumerate() {
        let mut cube = unit_cube();
        cube.scale(size);
        cube.translate(grid.grid_to_world_center(cell).coords - half);

        #[allow(clippy::cast_precision_loss)] // i % 5 is at most 4
        let intensity = 0.3 + 0.7 * ((i % 5) as f64) / 4.0;
        cube.paint_uniform(VertexColor::from_float(
            intensity * 0.3,
            intensity * 0.1,
            intensity * 0.2,
        ));
        art.merge(&cube);
    }

    art.recompute_normals();
    art
}

/// Build a thin red slab visualizing the clip plane.
///
/// The slab is [`PLANE_THICKNESS`] thick along the clip axis and
/// [`PLANE_EXTENT_SCALE`] times the mesh extent on the other two axes,
/// centered on `center`, so it visibly cuts all the way through the
/// mesh it is shown with.
#[must_use]
pub fn cut_plane_slab(axis: Axis, center: Point3<f64>, extents: Vector3<f64>) -> IndexedMesh {
    let mut size = extents * PLANE_EXTENT_SCALE;
    size[axis.index()] = PLANE_THICKNESS;

    let mut slab = unit_cube();
    for vertex in &mut slab.vertices {
        vertex.position.x *= size.x;
        vertex.position.y *= size.y;
        vertex.position.z *= size.z;
    }
    slab.translate(center.coords - size * 0.5);
    slab.paint_uniform(VertexColor::from_float(0.9, 0.1, 0.1));
    slab.recompute_normals();
    slab
}

/// Build a colored sphere mesh at an extrema marker.
#[must_use]
pub fn marker_mesh(marker: &ExtremaMarker) -> IndexedMesh {
    let mut sphere = icosphere(2);
    sphere.scale(marker.radius);
    sphere.translate(marker.center.coords);
    sphere.paint_uniform(marker.color);
    sphere.recompute_normals();
    sphere
}

/// Build a unit-radius icosphere centered on the origin.
///
/// Subdivision level 0 is the bare icosahedron (20 faces); each level
/// quadruples the face count and reprojects the new vertices onto the
/// sphere.
///
/// # Example
///
/// ```
/// use mesh_pipeline::icosphere;
///
/// let sphere = icosphere(1);
/// assert_eq!(sphere.face_count(), 80);
/// ```
#[must_use]
pub fn icosphere(subdivisions: u32) -> IndexedMesh {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let a = 1.0;
    let b = 1.0 / phi;

    let corners = [
        [0.0, b, -a],
        [b, a, 0.0],
        [-b, a, 0.0],
        [0.0, b, a],
        [0.0, -b, a],
        [-a, 0.0, b],
        [0.0, -b, -a],
        [a, 0.0, -b],
        [a, 0.0, b],
        [-a, 0.0, -b],
        [b, -a, 0.0],
        [-b, -a, 0.0],
    ];

    let mut mesh = IndexedMesh::with_capacity(12, 20);
    for corner in &corners {
        let len = (corner[0] * corner[0] + corner[1] * corner[1] + corner[2] * corner[2]).sqrt();
        mesh.vertices.push(Vertex::from_coords(
            corner[0] / len,
            corner[1] / len,
            corner[2] / len,
        ));
    }

    mesh.faces.extend([
        [0, 1, 2],
        [3, 2, 1],
        [3, 4, 5],
        [3, 8, 4],
        [0, 6, 7],
        [0, 9, 6],
        [4, 10, 11],
        [6, 11, 10],
        [2, 5, 9],
        [11, 9, 5],
        [1, 7, 8],
        [10, 8, 7],
        [3, 5, 2],
        [3, 1, 8],
        [0, 2, 9],
        [0, 7, 1],
        [6, 9, 11],
        [6, 10, 7],
        [4, 11, 5],
        [4, 8, 10],
    ]);

    for _ in 0..subdivisions {
        mesh = subdivide_on_sphere(&mesh);
    }
    mesh
}

/// Split every face into four, lifting edge midpoints onto the sphere.
fn subdivide_on_sphere(mesh: &IndexedMesh) -> IndexedMesh {
    let mut refined = IndexedMesh::with_capacity(mesh.vertex_count() * 4, mesh.face_count() * 4);
    refined.vertices = mesh.vertices.clone();

    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
    for &[v0, v1, v2] in &mesh.faces {
        let m01 = sphere_midpoint(v0, v1, &mut refined.vertices, &mut midpoints);
        let m12 = sphere_midpoint(v1, v2, &mut refined.vertices, &mut midpoints);
        let m20 = sphere_midpoint(v2, v0, &mut refined.vertices, &mut midpoints);

        refined.faces.push([v0, m01, m20]);
        refined.faces.push([v1, m12, m01]);
        refined.faces.push([v2, m20, m12]);
        refined.faces.push([m01, m12, m20]);
    }

    refined
}

/// Midpoint of an edge, projected back onto the unit sphere.
///
/// Shared edges reuse the same midpoint vertex via the cache, keeping
/// the refined mesh watertight.
fn sphere_midpoint(
    v0: u32,
    v1: u32,
    vertices: &mut Vec<Vertex>,
    midpoints: &mut HashMap<(u32, u32), u32>,
) -> u32 {
    let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
    if let Some(&index) = midpoints.get(&key) {
        return index;
    }

    let mid = (vertices[v0 as usize].position.coords + vertices[v1 as usize].position.coords) * 0.5;
    let on_sphere = mid / mid.norm();

    #[allow(clippy::cast_possible_truncation)] // vertex counts stay far below u32::MAX
    let index = vertices.len() as u32;
    vertices.push(Vertex::new(Point3::from(on_sphere)));
    midpoints.insert(key, index);
    index
}
