//! 3D transformation matrix operations.

use mesh_types::IndexedMesh;
use nalgebra::{Matrix4, Point3, Vector3, Vector4};

/// A 3D transformation represented as a 4x4 matrix.
///
/// The canonicalization stage uses these to stand a model upright, and
/// the display-artifact builders use them to place boxes and markers.
/// Transforms compose with [`Transform3D::then`] and apply to whole
/// meshes with [`Transform3D::apply_to_mesh`].
///
/// # Example
///
/// ```
/// use mesh_transform::Transform3D;
///
/// let translate = Transform3D::translation(1.0, 2.0, 3.0);
/// let scale = Transform3D::uniform_scale(2.0);
/// let combined = translate.then(&scale);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transform3D {
    /// The 4x4 transformation matrix in column-major order.
    matrix: Matrix4<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create the identity transformation (no change).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation.
    #[must_use]
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(tx, ty, tz)),
        }
    }

    /// Create a translation from a vector.
    #[must_use]
    pub fn from_translation(v: Vector3<f64>) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Create a uniform scaling transformation.
    #[must_use]
    pub fn uniform_scale(factor: f64) -> Self {
        Self::scale(factor, factor, factor)
    }

    /// Create a non-uniform scaling transformation.
    #[must_use]
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)),
        }
    }

    /// Create a rotation around the X axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_x(angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            1.0,   0.0,    0.0, 0.0,
            0.0, cos_a, -sin_a, 0.0,
            0.0, sin_a,  cos_a, 0.0,
            0.0,   0.0,    0.0, 1.0,
        );
        Self { matrix }
    }

    /// Create a rotation around the Y axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_y(angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
             cos_a, 0.0, sin_a, 0.0,
               0.0, 1.0,   0.0, 0.0,
            -sin_a, 0.0, cos_a, 0.0,
               0.0, 0.0,   0.0, 1.0,
        );
        Self { matrix }
    }

    /// Create a rotation around the Z axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_z(angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            cos_a, -sin_a, 0.0, 0.0,
            sin_a,  cos_a, 0.0, 0.0,
              0.0,    0.0, 1.0, 0.0,
              0.0,    0.0, 0.0, 1.0,
        );
        Self { matrix }
    }

    /// Re-anchor this transformation at a pivot point.
    ///
    /// Translates the pivot to the origin, applies `self`, and
    /// translates back, so rotations and scales act around `pivot`
    /// instead of the world origin. The canonicalizer uses this to
    /// rotate meshes about their centroid.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_transform::Transform3D;
    /// use nalgebra::Point3;
    /// use std::f64::consts::PI;
    ///
    /// let pivot = Point3::new(1.0, 0.0, 0.0);
    /// let spin = Transform3D::rotation_z(PI).about_point(pivot);
    /// let p = spin.transform_point(Point3::new(2.0, 0.0, 0.0));
    /// assert!((p.x - 0.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn about_point(&self, pivot: Point3<f64>) -> Self {
        Self::from_translation(-pivot.coords)
            .then(self)
            .then(&Self::from_translation(pivot.coords))
    }

    /// Get the underlying 4x4 matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Compose this transformation with another (self then other).
    ///
    /// The result applies `self` first, then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Transform a point (applies translation).
    #[must_use]
    pub fn transform_point(&self, point: Point3<f64>) -> Point3<f64> {
        let p = Vector4::new(point.x, point.y, point.z, 1.0);
        let result = self.matrix * p;
        Point3::new(result.x, result.y, result.z)
    }

    /// Transform a direction vector (ignores translation).
    #[must_use]
    pub fn transform_vector(&self, vector: Vector3<f64>) -> Vector3<f64> {
        let v = Vector4::new(vector.x, vector.y, vector.z, 0.0);
        let result = self.matrix * v;
        Vector3::new(result.x, result.y, result.z)
    }

    /// Transform a normal vector (uses inverse transpose).
    ///
    /// # Returns
    ///
    /// The transformed normal, or the original if the matrix is not invertible.
    #[must_use]
    pub fn transform_normal(&self, normal: Vector3<f64>) -> Vector3<f64> {
        // For normals, we need to use the inverse transpose of the upper 3x3
        let m = self.matrix.fixed_view::<3, 3>(0, 0);
        m.try_inverse()
            .map_or(normal, |inv| inv.transpose() * normal)
    }

    /// Apply this transformation to all vertices of a mesh.
    ///
    /// Creates a new mesh with transformed positions. Vertex normals are
    /// transformed and renormalized; colors and faces pass through
    /// untouched.
    #[must_use]
    pub fn apply_to_mesh(&self, mesh: &IndexedMesh) -> IndexedMesh {
        let mut result = mesh.clone();

        for vertex in &mut result.vertices {
            vertex.position = self.transform_point(vertex.position);

            if let Some(norm) = vertex.attributes.normal {
                let transformed_normal = self.transform_normal(norm);
                if let Some(normalized) = transformed_normal.try_normalize(f64::EPSILON) {
                    vertex.attributes.normal = Some(normalized);
                }
            }
        }

        result
    }
}
