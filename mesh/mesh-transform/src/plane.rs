//! Cutting plane with signed-distance queries.

use mesh_types::Axis;
use nalgebra::{Point3, Vector3};

/// A plane in 3D space defined by a point and unit normal.
///
/// The plane equation is: `normal · (p - point) = 0`. The signed
/// distance of a query point is positive on the side the normal points
/// to and negative on the other, which is the test the clipping stage
/// runs on every triangle centroid.
///
/// # Example
///
/// ```
/// use mesh_transform::Plane;
/// use mesh_types::Axis;
/// use nalgebra::Point3;
///
/// let plane = Plane::from_axis(Axis::Y, Point3::new(0.0, 0.9, 0.0));
/// assert!(plane.signed_distance(Point3::new(5.0, 1.2, 0.0)) > 0.0);
/// assert!(plane.signed_distance(Point3::new(5.0, 0.5, 0.0)) < 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// A point on the plane.
    pub point: Point3<f64>,
    /// The plane normal (unit vector).
    pub normal: Vector3<f64>,
}

impl Plane {
    /// Create a new plane from a point and normal.
    ///
    /// The normal is automatically normalized.
    ///
    /// # Returns
    ///
    /// `Some(Plane)` if the normal is non-zero, `None` otherwise.
    #[must_use]
    pub fn new(point: Point3<f64>, normal: Vector3<f64>) -> Option<Self> {
        let norm = normal.norm();
        if norm < f64::EPSILON {
            return None;
        }
        Some(Self {
            point,
            normal: normal / norm,
        })
    }

    /// Create a plane perpendicular to a coordinate axis, through a point.
    ///
    /// The normal is the positive unit vector of `axis`. This is how the
    /// pipeline builds its cutting plane: perpendicular to the chosen
    /// axis, through the bounding-box center.
    #[must_use]
    pub fn from_axis(axis: Axis, through: Point3<f64>) -> Self {
        Self {
            point: through,
            normal: axis.unit(),
        }
    }

    /// Compute the signed distance from a point to the plane.
    ///
    /// Positive distance means the point is on the side the normal points to.
    /// Negative distance means the point is on the opposite side.
    #[must_use]
    pub fn signed_distance(&self, point: Point3<f64>) -> f64 {
        self.normal.dot(&(point - self.point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Fallback plane (Y=0) so tests can unwrap without panicking helpers.
    fn default_plane() -> Plane {
        Plane {
            point: Point3::origin(),
            normal: Vector3::y(),
        }
    }

    #[test]
    fn plane_from_point_normal() {
        let plane = Plane::new(
            Point3::origin(),
            Vector3::new(0.0, 0.0, 2.0), // Not normalized
        );

        assert!(plane.is_some());
        let plane = plane.unwrap_or_else(default_plane);
        assert_relative_eq!(plane.normal.norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(plane.normal.z, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn zero_normal_no_plane() {
        let plane = Plane::new(Point3::origin(), Vector3::zeros());
        assert!(plane.is_none());
    }

    #[test]
    fn from_axis_uses_positive_unit_normal() {
        let through = Point3::new(1.0, 2.0, 3.0);
        for axis in Axis::ALL {
            let plane = Plane::from_axis(axis, through);
            assert_eq!(plane.normal, axis.unit());
            assert_eq!(plane.point, through);
        }
    }

    #[test]
    fn signed_distance() {
        let plane = Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0));
        let plane = plane.unwrap_or_else(default_plane);

        // Point above plane
        let above = Point3::new(0.0, 0.0, 5.0);
        assert_relative_eq!(plane.signed_distance(above), 5.0, epsilon = 1e-10);

        // Point below plane
        let below = Point3::new(0.0, 0.0, -3.0);
        assert_relative_eq!(plane.signed_distance(below), -3.0, epsilon = 1e-10);

        // Point on plane
        let on = Point3::new(10.0, 20.0, 0.0);
        assert_relative_eq!(plane.signed_distance(on), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn signed_distance_respects_plane_point_offset() {
        let plane = Plane::from_axis(Axis::X, Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(
            plane.signed_distance(Point3::new(3.0, 9.0, -4.0)),
            1.0,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            plane.signed_distance(Point3::new(0.0, 0.0, 0.0)),
            -2.0,
            epsilon = 1e-10
        );
    }
}
