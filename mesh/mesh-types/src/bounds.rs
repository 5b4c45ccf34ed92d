//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Axis;

/// An axis-aligned bounding box in 3D space.
///
/// Derived from geometry on demand and never persisted; recompute it
/// whenever vertex positions change.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Point3};
///
/// let bounds = Aabb::from_points([
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 4.0, 6.0),
/// ]);
/// assert_eq!(bounds.size().y, 4.0);
/// assert_eq!(bounds.center(), Point3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a bounding box from corner points.
    ///
    /// The corners are corrected if min > max on any axis.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create an empty bounding box.
    ///
    /// The empty box has `min` at positive infinity and `max` at negative
    /// infinity, so that expanding it by any point yields that point.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Compute the bounding box of a set of points.
    ///
    /// Returns the empty box if the iterator yields no points.
    #[must_use]
    pub fn from_points<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: std::borrow::Borrow<Point3<f64>>,
    {
        let mut bounds = Self::empty();
        for point in points {
            bounds.expand_to_include(point.borrow());
        }
        bounds
    }

    /// Check whether no points were ever added to this box.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// The extent of the box along each axis.
    ///
    /// Returns zero extents for an empty box.
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        if self.is_empty() {
            return Vector3::zeros();
        }
        self.max - self.min
    }

    /// The extent along one axis.
    #[inline]
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f64 {
        axis.vector_component(&self.size())
    }

    /// The largest extent across the three axes.
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// The axis with the largest extent.
    ///
    /// Ties resolve to the earliest axis in X, Y, Z order.
    #[must_use]
    pub fn tallest_axis(&self) -> Axis {
        let size = self.size();
        let mut tallest = Axis::X;
        let mut best = size.x;
        for axis in [Axis::Y, Axis::Z] {
            let extent = axis.vector_component(&size);
            if extent > best {
                best = extent;
                tallest = axis;
            }
        }
        tallest
    }

    /// The center point of the box.
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        self.min + self.size() * 0.5
    }

    /// The length of the box diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.size().norm()
    }

    /// Grow the box to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Check whether a point lies inside the box (inclusive).
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
