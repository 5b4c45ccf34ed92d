//! Point cloud data structures.
//!
//! A [`PointCloud`] is the intermediate the pipeline hands to surface
//! sampling and reconstruction collaborators, and the payload of the
//! point-cloud export stage.
//!
//! # Example
//!
//! ```
//! use mesh_types::PointCloud;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let cloud = PointCloud::from_positions(&positions);
//!
//! assert_eq!(cloud.len(), 3);
//! assert!(!cloud.is_empty());
//! ```

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Aabb, IndexedMesh, Vertex, VertexColor};

/// A point in a point cloud with optional attributes.
///
/// # Example
///
/// ```
/// use mesh_types::CloudPoint;
/// use nalgebra::{Point3, Vector3};
///
/// let p1 = CloudPoint::new(Point3::new(1.0, 2.0, 3.0));
/// let p2 = CloudPoint::with_normal(
///     Point3::new(1.0, 2.0, 3.0),
///     Vector3::new(0.0, 0.0, 1.0),
/// );
///
/// assert!(p1.normal.is_none());
/// assert!(p2.normal.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CloudPoint {
    /// The 3D position of the point.
    pub position: Point3<f64>,

    /// Optional unit normal vector at this point.
    pub normal: Option<Vector3<f64>>,

    /// Optional RGB color.
    pub color: Option<VertexColor>,
}

impl CloudPoint {
    /// Creates a new point with just a position.
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            normal: None,
            color: None,
        }
    }

    /// Creates a point from x, y, z coordinates.
    #[must_use]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Creates a point with position and normal.
    #[must_use]
    pub const fn with_normal(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            position,
            normal: Some(normal),
            color: None,
        }
    }

    /// Converts this cloud point to a mesh vertex, carrying attributes over.
    #[must_use]
    pub fn to_vertex(self) -> Vertex {
        let mut vertex = Vertex::new(self.position);
        vertex.attributes.normal = self.normal;
        vertex.attributes.color = self.color;
        vertex
    }

    /// Returns true if this point has a normal.
    #[must_use]
    pub const fn has_normal(&self) -> bool {
        self.normal.is_some()
    }

    /// Returns true if this point has a color.
    #[must_use]
    pub const fn has_color(&self) -> bool {
        self.color.is_some()
    }
}

impl Default for CloudPoint {
    fn default() -> Self {
        Self::new(Point3::origin())
    }
}

impl From<Point3<f64>> for CloudPoint {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

/// A collection of 3D points with optional attributes.
///
/// # Example
///
/// ```
/// use mesh_types::PointCloud;
///
/// let mut cloud = PointCloud::new();
/// cloud.push_coords(0.0, 0.0, 0.0);
/// cloud.push_coords(1.0, 0.0, 0.0);
/// cloud.push_coords(0.0, 1.0, 0.0);
///
/// assert_eq!(cloud.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointCloud {
    /// The points in this cloud.
    pub points: Vec<CloudPoint>,
}

impl PointCloud {
    /// Creates an empty point cloud.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a point cloud with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Creates a point cloud from a slice of 3D positions.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::PointCloud;
    /// use nalgebra::Point3;
    ///
    /// let positions = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    /// ];
    /// let cloud = PointCloud::from_positions(&positions);
    /// assert_eq!(cloud.len(), 2);
    /// ```
    #[must_use]
    pub fn from_positions(positions: &[Point3<f64>]) -> Self {
        let points = positions.iter().map(|p| CloudPoint::new(*p)).collect();
        Self { points }
    }

    /// Creates a point cloud from mesh vertices, carrying attributes over.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, PointCloud, Vertex};
    ///
    /// let mut mesh = IndexedMesh::new();
    /// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
    /// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
    ///
    /// let cloud = PointCloud::from_mesh(&mesh);
    /// assert_eq!(cloud.len(), 2);
    /// ```
    #[must_use]
    pub fn from_mesh(mesh: &IndexedMesh) -> Self {
        let points = mesh
            .vertices
            .iter()
            .map(|v| CloudPoint {
                position: v.position,
                normal: v.attributes.normal,
                color: v.attributes.color,
            })
            .collect();
        Self { points }
    }

    /// Returns the number of points in the cloud.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the cloud has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if all points have normals.
    #[must_use]
    pub fn has_normals(&self) -> bool {
        !self.points.is_empty() && self.points.iter().all(CloudPoint::has_normal)
    }

    /// Returns true if all points have colors.
    #[must_use]
    pub fn has_colors(&self) -> bool {
        !self.points.is_empty() && self.points.iter().all(CloudPoint::has_color)
    }

    /// Adds a point to the cloud.
    pub fn push(&mut self, point: CloudPoint) {
        self.points.push(point);
    }

    /// Adds a point with the given coordinates.
    pub fn push_coords(&mut self, x: f64, y: f64, z: f64) {
        self.points.push(CloudPoint::from_coords(x, y, z));
    }

    /// Iterates over point positions.
    pub fn positions(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.points.iter().map(|p| &p.position)
    }

    /// Returns the axis-aligned bounding box of the point cloud.
    ///
    /// Returns `None` if the cloud is empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        if self.points.is_empty() {
            return None;
        }
        Some(Aabb::from_points(self.positions()))
    }

    /// Returns the centroid (arithmetic mean of positions) of the cloud.
    ///
    /// Returns `None` if the cloud is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision loss: point counts beyond 2^52 are unsupported
    pub fn centroid(&self) -> Option<Point3<f64>> {
        if self.points.is_empty() {
            return None;
        }
        let sum: Vector3<f64> = self.points.iter().map(|p| p.position.coords).sum();
        Some(Point3::from(sum / self.points.len() as f64))
    }
}

impl FromIterator<Point3<f64>> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(CloudPoint::new).collect(),
        }
    }
}
