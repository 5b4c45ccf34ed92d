//! PLY (Polygon File Format) support.
//!
//! PLY is the interchange format of the inspection pipeline: every stage
//! artifact (repaired mesh, sampled point cloud, clipped mesh, colorized
//! result) is written as a PLY file.
//!
//! # Supported Properties
//!
//! - Vertex positions (`x`, `y`, `z`, float or double) - required
//! - Vertex normals (`nx`, `ny`, `nz`, float or double) - optional
//! - Vertex colors (`red`, `green`, `blue`, uchar) - optional; an `alpha`
//!   property is ignored on load
//! - Face vertex indices (`vertex_indices` or `vertex_index`) - required
//!   for meshes, absent for point clouds
//!
//! Polygon faces with more than three indices are fan-triangulated on
//! load. Attributes are written only when every vertex carries them.
//!
//! # Format Variants
//!
//! - **ASCII** - Human-readable, larger files
//! - **Binary Little Endian** - Compact, fast to read/write
//! - **Binary Big Endian** - Compact, for big-endian systems (read only)
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_ply, save_ply};
//!
//! let mesh = load_ply("model.ply").unwrap();
//! save_ply(&mesh, "output.ply", true).unwrap(); // Binary
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use mesh_types::{CloudPoint, IndexedMesh, PointCloud, Vector3, VertexColor};
use ply_rs::parser::Parser;
use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
    ScalarType,
};
use ply_rs::writer::Writer;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Load a mesh from a PLY file.
///
/// Supports ASCII, binary little-endian, and binary big-endian formats.
/// Per-vertex normals and colors are read when present.
///
/// # Arguments
///
/// * `path` - Path to the PLY file
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist (`IoError::FileNotFound`)
/// - The file is not valid PLY format
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_ply;
///
/// let mesh = load_ply("model.ply").unwrap();
/// println!("Loaded {} vertices, {} faces", mesh.vertices.len(), mesh.faces.len());
/// ```
pub fn load_ply<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let mut reader = open_buffered(path)?;

    // Use generic DefaultElement parser - works for all element types
    let parser = Parser::<DefaultElement>::new();

    let header = parser
        .read_header(&mut reader)
        .map_err(|e| IoError::invalid_content(format!("failed to parse PLY header: {e}")))?;
    let payload = parser
        .read_payload(&mut reader, &header)
        .map_err(|e| IoError::invalid_content(format!("failed to read PLY payload: {e}")))?;

    let mut mesh = IndexedMesh::new();

    if let Some(vertex_elements) = payload.get("vertex") {
        mesh.vertices.reserve(vertex_elements.len());
        for element in vertex_elements {
            mesh.vertices.push(parse_vertex(element).to_vertex());
        }
    }

    if let Some(face_elements) = payload.get("face") {
        mesh.faces.reserve(face_elements.len());
        for element in face_elements {
            let indices = get_index_list(element);
            if indices.len() >= 3 {
                // Triangulate if necessary (fan triangulation for convex polygons)
                #[allow(clippy::cast_possible_truncation)]
                for i in 1..indices.len() - 1 {
                    mesh.faces
                        .push([indices[0] as u32, indices[i] as u32, indices[i + 1] as u32]);
                }
            }
        }
    }

    debug!(
        "Loaded PLY mesh: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}

/// Load a point cloud from a PLY file.
///
/// Reads the `vertex` element only; any `face` element is ignored, so a
/// mesh file can also be loaded as a bare point cloud.
///
/// # Errors
///
/// Returns an error if the file does not exist or is not valid PLY.
pub fn load_ply_cloud<P: AsRef<Path>>(path: P) -> IoResult<PointCloud> {
    let path = path.as_ref();
    let mut reader = open_buffered(path)?;

    let parser = Parser::<DefaultElement>::new();

    let header = parser
        .read_header(&mut reader)
        .map_err(|e| IoError::invalid_content(format!("failed to parse PLY header: {e}")))?;
    let payload = parser
        .read_payload(&mut reader, &header)
        .map_err(|e| IoError::invalid_content(format!("failed to read PLY payload: {e}")))?;

    let mut cloud = PointCloud::new();

    if let Some(vertex_elements) = payload.get("vertex") {
        cloud.points.reserve(vertex_elements.len());
        for element in vertex_elements {
            cloud.points.push(parse_vertex(element));
        }
    }

    debug!("Loaded PLY point cloud: {} points", cloud.len());
    Ok(cloud)
}

/// Open a file for buffered reading, mapping a missing file to
/// `IoError::FileNotFound`.
fn open_buffered(path: &Path) -> IoResult<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    Ok(BufReader::new(file))
}

/// Parse one PLY vertex element into a position plus optional attributes.
///
/// Meshes and point clouds share the `vertex` element layout, so both
/// loaders go through this and convert as needed.
fn parse_vertex(element: &DefaultElement) -> CloudPoint {
    let x = get_float_property(element, "x").unwrap_or(0.0);
    let y = get_float_property(element, "y").unwrap_or(0.0);
    let z = get_float_property(element, "z").unwrap_or(0.0);
    let mut point = CloudPoint::from_coords(f64::from(x), f64::from(y), f64::from(z));

    if let (Some(nx), Some(ny), Some(nz)) = (
        get_float_property(element, "nx"),
        get_float_property(element, "ny"),
        get_float_property(element, "nz"),
    ) {
        point.normal = Some(Vector3::new(f64::from(nx), f64::from(ny), f64::from(nz)));
    }

    if let (Some(r), Some(g), Some(b)) = (
        get_uchar_property(element, "red"),
        get_uchar_property(element, "green"),
        get_uchar_property(element, "blue"),
    ) {
        point.color = Some(VertexColor::new(r, g, b));
    }

    point
}

/// Extract a float property from a PLY element.
fn get_float_property(element: &DefaultElement, key: &str) -> Option<f32> {
    match element.get(key)? {
        Property::Float(v) => Some(*v),
        Property::Double(v) =>
        {
            #[allow(clippy::cast_possible_truncation)]
            Some(*v as f32)
        }
        _ => None,
    }
}

/// Extract a uchar property from a PLY element (color channels).
fn get_uchar_property(element: &DefaultElement, key: &str) -> Option<u8> {
    match element.get(key)? {
        Property::UChar(v) => Some(*v),
        _ => None,
    }
}

/// Extract vertex index list from a face element.
fn get_index_list(element: &DefaultElement) -> Vec<usize> {
    // Try common property names for face indices
    for key in &["vertex_indices", "vertex_index"] {
        if let Some(prop) = element.get(*key) {
            return match prop {
                Property::ListInt(v) =>
                {
                    #[allow(clippy::cast_sign_loss)]
                    v.iter().map(|&i| i as usize).collect()
                }
                Property::ListUInt(v) => v.iter().map(|&i| i as usize).collect(),
                Property::ListUChar(v) => v.iter().map(|&i| i as usize).collect(),
                Property::ListChar(v) =>
                {
                    #[allow(clippy::cast_sign_loss)]
                    v.iter().map(|&i| i as usize).collect()
                }
                Property::ListShort(v) =>
                {
                    #[allow(clippy::cast_sign_loss)]
                    v.iter().map(|&i| i as usize).collect()
                }
                Property::ListUShort(v) => v.iter().map(|&i| i as usize).collect(),
                _ => continue,
            };
        }
    }
    Vec::new()
}

/// Save a mesh to a PLY file.
///
/// Normals and colors are written only when every vertex carries them
/// (the all-or-nothing attribute rule of [`IndexedMesh`]).
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path
/// * `binary` - If true, save as binary little-endian; if false, save as ASCII
///
/// # Errors
///
/// Returns an error if the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use mesh_io::{load_ply, save_ply};
///
/// let mesh = load_ply("input.ply").unwrap();
/// save_ply(&mesh, "output.ply", true).unwrap(); // Binary
/// save_ply(&mesh, "output_ascii.ply", false).unwrap(); // ASCII
/// ```
pub fn save_ply<P: AsRef<Path>>(mesh: &IndexedMesh, path: P, binary: bool) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    if binary {
        save_ply_binary(mesh, &mut writer)?;
    } else {
        save_ply_ascii(mesh, &mut writer)?;
    }
    debug!(
        "Wrote PLY mesh: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(())
}

/// Save a point cloud to a PLY file (vertex element only, no faces).
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_ply_cloud<P: AsRef<Path>>(cloud: &PointCloud, path: P, binary: bool) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    if binary {
        save_cloud_binary(cloud, &mut writer)?;
    } else {
        save_cloud_ascii(cloud, &mut writer)?;
    }
    debug!("Wrote PLY point cloud: {} points", cloud.len());
    Ok(())
}

/// Save mesh as binary PLY (little-endian).
///
/// Note: We implement this manually because ply-rs has a bug with binary list
/// property writing where it uses element count instead of list length.
fn save_ply_binary<W: std::io::Write>(mesh: &IndexedMesh, writer: &mut W) -> IoResult<()> {
    let with_normals = mesh.has_normals();
    let with_colors = mesh.has_colors();

    // Write header
    writeln!(writer, "ply")?;
    writeln!(writer, "format binary_little_endian 1.0")?;
    writeln!(writer, "comment Generated by Plinth mesh-io")?;
    writeln!(writer, "element vertex {}", mesh.vertices.len())?;
    write_vertex_property_lines(writer, with_normals, with_colors)?;
    writeln!(writer, "element face {}", mesh.faces.len())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    // Write vertex data
    for v in &mesh.vertices {
        let point = CloudPoint {
            position: v.position,
            normal: v.attributes.normal,
            color: v.attributes.color,
        };
        write_vertex_binary(writer, &point, with_normals, with_colors)?;
    }

    // Write face data
    for &[i0, i1, i2] in &mesh.faces {
        // List count (3 vertices per face)
        writer.write_all(&[3u8])?;
        // Vertex indices as i32
        #[allow(clippy::cast_possible_wrap)]
        {
            writer.write_all(&(i0 as i32).to_le_bytes())?;
            writer.write_all(&(i1 as i32).to_le_bytes())?;
            writer.write_all(&(i2 as i32).to_le_bytes())?;
        }
    }

    Ok(())
}

/// Save point cloud as binary PLY (little-endian), manual for the same
/// ply-rs reason as the mesh writer.
fn save_cloud_binary<W: std::io::Write>(cloud: &PointCloud, writer: &mut W) -> IoResult<()> {
    let with_normals = cloud.has_normals();
    let with_colors = cloud.has_colors();

    writeln!(writer, "ply")?;
    writeln!(writer, "format binary_little_endian 1.0")?;
    writeln!(writer, "comment Generated by Plinth mesh-io")?;
    writeln!(writer, "element vertex {}", cloud.len())?;
    write_vertex_property_lines(writer, with_normals, with_colors)?;
    writeln!(writer, "end_header")?;

    for point in &cloud.points {
        write_vertex_binary(writer, point, with_normals, with_colors)?;
    }

    Ok(())
}

/// Write the vertex property declarations shared by mesh and cloud headers.
fn write_vertex_property_lines<W: std::io::Write>(
    writer: &mut W,
    with_normals: bool,
    with_colors: bool,
) -> IoResult<()> {
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    if with_normals {
        writeln!(writer, "property float nx")?;
        writeln!(writer, "property float ny")?;
        writeln!(writer, "property float nz")?;
    }
    if with_colors {
        writeln!(writer, "property uchar red")?;
        writeln!(writer, "property uchar green")?;
        writeln!(writer, "property uchar blue")?;
    }
    Ok(())
}

/// Write one vertex as little-endian binary.
fn write_vertex_binary<W: std::io::Write>(
    writer: &mut W,
    point: &CloudPoint,
    with_normals: bool,
    with_colors: bool,
) -> IoResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    {
        writer.write_all(&(point.position.x as f32).to_le_bytes())?;
        writer.write_all(&(point.position.y as f32).to_le_bytes())?;
        writer.write_all(&(point.position.z as f32).to_le_bytes())?;
    }
    if with_normals {
        let n = point.normal.unwrap_or_else(Vector3::zeros);
        #[allow(clippy::cast_possible_truncation)]
        {
            writer.write_all(&(n.x as f32).to_le_bytes())?;
            writer.write_all(&(n.y as f32).to_le_bytes())?;
            writer.write_all(&(n.z as f32).to_le_bytes())?;
        }
    }
    if with_colors {
        let c = point.color.unwrap_or(VertexColor::BLACK);
        writer.write_all(&[c.r, c.g, c.b])?;
    }
    Ok(())
}

/// Save mesh as ASCII PLY using ply-rs.
fn save_ply_ascii<W: std::io::Write>(mesh: &IndexedMesh, writer: &mut W) -> IoResult<()> {
    let with_normals = mesh.has_normals();
    let with_colors = mesh.has_colors();

    // Build PLY structure
    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;
    ply.header
        .comments
        .push("Generated by Plinth mesh-io".to_string());

    ply.header.elements.add(vertex_element_def(
        mesh.vertices.len(),
        with_normals,
        with_colors,
    ));

    // Define face element
    let mut face_def = ElementDef::new("face".to_string());
    face_def.properties.add(PropertyDef::new(
        "vertex_indices".to_string(),
        PropertyType::List(ScalarType::UChar, ScalarType::Int),
    ));
    face_def.count = mesh.faces.len();
    ply.header.elements.add(face_def);

    // Add vertex data
    let mut vertex_elements = Vec::with_capacity(mesh.vertices.len());
    for v in &mesh.vertices {
        let point = CloudPoint {
            position: v.position,
            normal: v.attributes.normal,
            color: v.attributes.color,
        };
        vertex_elements.push(vertex_payload_element(&point, with_normals, with_colors));
    }
    ply.payload.insert("vertex".to_string(), vertex_elements);

    // Add face data
    let mut face_elements = Vec::with_capacity(mesh.faces.len());
    for &[i0, i1, i2] in &mesh.faces {
        let mut element = DefaultElement::new();
        #[allow(clippy::cast_possible_wrap)]
        let indices = vec![i0 as i32, i1 as i32, i2 as i32];
        element.insert("vertex_indices".to_string(), Property::ListInt(indices));
        face_elements.push(element);
    }
    ply.payload.insert("face".to_string(), face_elements);

    // Write
    let ply_writer = Writer::new();
    ply_writer
        .write_ply(writer, &mut ply)
        .map_err(|e| IoError::invalid_content(format!("failed to write PLY: {e}")))?;

    Ok(())
}

/// Save point cloud as ASCII PLY using ply-rs.
fn save_cloud_ascii<W: std::io::Write>(cloud: &PointCloud, writer: &mut W) -> IoResult<()> {
    let with_normals = cloud.has_normals();
    let with_colors = cloud.has_colors();

    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;
    ply.header
        .comments
        .push("Generated by Plinth mesh-io".to_string());

    ply.header
        .elements
        .add(vertex_element_def(cloud.len(), with_normals, with_colors));

    let mut vertex_elements = Vec::with_capacity(cloud.len());
    for point in &cloud.points {
        vertex_elements.push(vertex_payload_element(point, with_normals, with_colors));
    }
    ply.payload.insert("vertex".to_string(), vertex_elements);

    let ply_writer = Writer::new();
    ply_writer
        .write_ply(writer, &mut ply)
        .map_err(|e| IoError::invalid_content(format!("failed to write PLY: {e}")))?;

    Ok(())
}

/// Build the vertex element definition shared by mesh and cloud headers.
fn vertex_element_def(count: usize, with_normals: bool, with_colors: bool) -> ElementDef {
    let mut def = ElementDef::new("vertex".to_string());
    for name in ["x", "y", "z"] {
        def.properties.add(PropertyDef::new(
            name.to_string(),
            PropertyType::Scalar(ScalarType::Float),
        ));
    }
    if with_normals {
        for name in ["nx", "ny", "nz"] {
            def.properties.add(PropertyDef::new(
                name.to_string(),
                PropertyType::Scalar(ScalarType::Float),
            ));
        }
    }
    if with_colors {
        for name in ["red", "green", "blue"] {
            def.properties.add(PropertyDef::new(
                name.to_string(),
                PropertyType::Scalar(ScalarType::UChar),
            ));
        }
    }
    def.count = count;
    def
}

/// Build one ASCII vertex payload element.
fn vertex_payload_element(
    point: &CloudPoint,
    with_normals: bool,
    with_colors: bool,
) -> DefaultElement {
    let mut element = DefaultElement::new();
    #[allow(clippy::cast_possible_truncation)]
    {
        element.insert("x".to_string(), Property::Float(point.position.x as f32));
        element.insert("y".to_string(), Property::Float(point.position.y as f32));
        element.insert("z".to_string(), Property::Float(point.position.z as f32));
        if with_normals {
            let n = point.normal.unwrap_or_else(Vector3::zeros);
            element.insert("nx".to_string(), Property::Float(n.x as f32));
            element.insert("ny".to_string(), Property::Float(n.y as f32));
            element.insert("nz".to_string(), Property::Float(n.z as f32));
        }
    }
    if with_colors {
        let c = point.color.unwrap_or(VertexColor::BLACK);
        element.insert("red".to_string(), Property::UChar(c.r));
        element.insert("green".to_string(), Property::UChar(c.g));
        element.insert("blue".to_string(), Property::UChar(c.b));
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{Point3, Vertex};

    fn create_test_triangle() -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.faces.push([0, 1, 2]);
        mesh
    }

    fn create_attributed_triangle() -> IndexedMesh {
        let mut mesh = create_test_triangle();
        let colors = [VertexColor::RED, VertexColor::GREEN, VertexColor::BLUE];
        for (vertex, color) in mesh.vertices.iter_mut().zip(colors) {
            vertex.attributes.normal = Some(Vector3::new(0.0, 0.0, 1.0));
            vertex.attributes.color = Some(color);
        }
        mesh
    }

    fn assert_positions_close(a: &IndexedMesh, b: &IndexedMesh) {
        for (va, vb) in a.vertices.iter().zip(b.vertices.iter()) {
            assert!((va.position.x - vb.position.x).abs() < 1e-5);
            assert!((va.position.y - vb.position.y).abs() < 1e-5);
            assert!((va.position.z - vb.position.z).abs() < 1e-5);
        }
    }

    #[test]
    fn roundtrip_binary() {
        let original = create_test_triangle();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.ply");

        save_ply(&original, &path, true).unwrap();
        let loaded = load_ply(&path).unwrap();

        assert_eq!(loaded.face_count(), original.face_count());
        assert_eq!(loaded.vertex_count(), original.vertex_count());
        assert_positions_close(&original, &loaded);
        assert!(!loaded.has_normals());
        assert!(!loaded.has_colors());
    }

    #[test]
    fn roundtrip_ascii() {
        let original = create_test_triangle();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_ascii.ply");

        save_ply(&original, &path, false).unwrap();
        let loaded = load_ply(&path).unwrap();

        assert_eq!(loaded.face_count(), original.face_count());
        assert_eq!(loaded.vertex_count(), original.vertex_count());
        assert_positions_close(&original, &loaded);
    }

    #[test]
    fn roundtrip_binary_with_normals_and_colors() {
        let original = create_attributed_triangle();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attributed.ply");

        save_ply(&original, &path, true).unwrap();
        let loaded = load_ply(&path).unwrap();

        assert!(loaded.has_normals());
        assert!(loaded.has_colors());
        // Colors are uchar on the wire, so they round-trip exactly
        assert_eq!(loaded.vertices[0].color(), Some(VertexColor::RED));
        assert_eq!(loaded.vertices[1].color(), Some(VertexColor::GREEN));
        assert_eq!(loaded.vertices[2].color(), Some(VertexColor::BLUE));
        let normal = loaded.vertices[0].normal().unwrap();
        assert!((normal.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn roundtrip_ascii_with_normals_and_colors() {
        let original = create_attributed_triangle();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attributed_ascii.ply");

        save_ply(&original, &path, false).unwrap();
        let loaded = load_ply(&path).unwrap();

        assert!(loaded.has_normals());
        assert!(loaded.has_colors());
        assert_eq!(loaded.vertices[2].color(), Some(VertexColor::BLUE));
    }

    #[test]
    fn quad_faces_are_fan_triangulated() {
        let source = "ply\n\
                      format ascii 1.0\n\
                      element vertex 4\n\
                      property float x\n\
                      property float y\n\
                      property float z\n\
                      element face 1\n\
                      property list uchar int vertex_indices\n\
                      end_header\n\
                      0 0 0\n\
                      1 0 0\n\
                      1 1 0\n\
                      0 1 0\n\
                      4 0 1 2 3\n";
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quad.ply");
        std::fs::write(&path, source).unwrap();

        let loaded = load_ply(&path).unwrap();
        assert_eq!(loaded.vertex_count(), 4);
        assert_eq!(loaded.faces, vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn alpha_channel_is_ignored() {
        let source = "ply\n\
                      format ascii 1.0\n\
                      element vertex 1\n\
                      property float x\n\
                      property float y\n\
                      property float z\n\
                      property uchar red\n\
                      property uchar green\n\
                      property uchar blue\n\
                      property uchar alpha\n\
                      end_header\n\
                      0 0 0 10 20 30 255\n";
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.ply");
        std::fs::write(&path, source).unwrap();

        let loaded = load_ply(&path).unwrap();
        assert_eq!(
            loaded.vertices[0].color(),
            Some(VertexColor::new(10, 20, 30))
        );
    }

    #[test]
    fn double_precision_positions_are_read() {
        let source = "ply\n\
                      format ascii 1.0\n\
                      element vertex 1\n\
                      property double x\n\
                      property double y\n\
                      property double z\n\
                      end_header\n\
                      0.5 1.5 2.5\n";
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("double.ply");
        std::fs::write(&path, source).unwrap();

        let loaded = load_ply(&path).unwrap();
        assert!((loaded.vertices[0].position.y - 1.5).abs() < 1e-5);
    }

    #[test]
    fn cloud_roundtrip_binary() {
        let mut cloud = PointCloud::new();
        cloud.push(CloudPoint::with_normal(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ));
        cloud.push(CloudPoint::with_normal(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::new(1.0, 0.0, 0.0),
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloud.ply");
        save_ply_cloud(&cloud, &path, true).unwrap();
        let loaded = load_ply_cloud(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert!(loaded.has_normals());
        assert!((loaded.points[1].position.z - 3.0).abs() < 1e-5);
        let normal = loaded.points[0].normal.unwrap();
        assert!((normal.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn cloud_roundtrip_ascii() {
        let cloud = PointCloud::from_positions(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.5, 0.5, 0.5),
        ]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloud_ascii.ply");
        save_ply_cloud(&cloud, &path, false).unwrap();
        let loaded = load_ply_cloud(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert!(!loaded.has_normals());
        assert!(!loaded.has_colors());
    }

    #[test]
    fn mesh_file_loads_as_point_cloud() {
        let original = create_test_triangle();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh_as_cloud.ply");

        save_ply(&original, &path, true).unwrap();
        let cloud = load_ply_cloud(&path).unwrap();
        assert_eq!(cloud.len(), original.vertex_count());
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_ply("nonexistent_file_12345.ply");
        assert!(result.is_err());
        if let Err(IoError::FileNotFound { path }) = result {
            assert!(path.to_string_lossy().contains("nonexistent"));
        }
    }
}
