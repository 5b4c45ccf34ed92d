//! Voxel coordinate types.

use nalgebra::{Point3, Vector3};

/// A discrete 3D coordinate in voxel/grid space.
///
/// Uses `i32` coordinates to support both positive and negative indices,
/// allowing the grid origin to be placed anywhere in world space.
///
/// Coordinates order lexicographically by `(x, y, z)`, which gives
/// occupied-cell listings a stable order independent of hash state.
///
/// # Example
///
/// ```
/// use plinth_spatial::VoxelCoord;
///
/// let coord = VoxelCoord::new(1, 2, 3);
/// assert_eq!(coord.x, 1);
///
/// // Supports negative coordinates
/// let neg = VoxelCoord::new(-5, -10, -15);
/// assert_eq!(neg.y, -10);
///
/// // Lexicographic ordering
/// assert!(VoxelCoord::new(0, 9, 9) < VoxelCoord::new(1, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelCoord {
    /// X coordinate (width axis).
    pub x: i32,
    /// Y coordinate (height axis).
    pub y: i32,
    /// Z coordinate (depth axis).
    pub z: i32,
}

impl VoxelCoord {
    /// Creates a new voxel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a coordinate at the origin (0, 0, 0).
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the coordinate as a tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    /// Returns the coordinate as an array.
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to a floating-point point.
    ///
    /// # Example
    ///
    /// ```
    /// use plinth_spatial::VoxelCoord;
    /// use nalgebra::Point3;
    ///
    /// let coord = VoxelCoord::new(1, 2, 3);
    /// assert_eq!(coord.to_point(), Point3::new(1.0, 2.0, 3.0));
    /// ```
    #[must_use]
    pub fn to_point(self) -> Point3<f64> {
        Point3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Converts to a floating-point vector.
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }
}

impl From<(i32, i32, i32)> for VoxelCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for VoxelCoord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<VoxelCoord> for (i32, i32, i32) {
    fn from(coord: VoxelCoord) -> Self {
        coord.as_tuple()
    }
}

impl From<VoxelCoord> for [i32; 3] {
    fn from(coord: VoxelCoord) -> Self {
        coord.as_array()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let coord = VoxelCoord::new(1, 2, 3);
        assert_eq!(coord.x, 1);
        assert_eq!(coord.y, 2);
        assert_eq!(coord.z, 3);
    }

    #[test]
    fn test_negative_coords() {
        let coord = VoxelCoord::new(-5, -10, -15);
        assert_eq!(coord.as_array(), [-5, -10, -15]);
    }

    #[test]
    fn test_to_point() {
        let point = VoxelCoord::new(1, 2, 3).to_point();
        assert_eq!(point.x, 1.0);
        assert_eq!(point.y, 2.0);
        assert_eq!(point.z, 3.0);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut coords = vec![
            VoxelCoord::new(1, 0, 0),
            VoxelCoord::new(0, 2, 0),
            VoxelCoord::new(0, 0, 3),
            VoxelCoord::new(0, 2, -1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                VoxelCoord::new(0, 0, 3),
                VoxelCoord::new(0, 2, -1),
                VoxelCoord::new(0, 2, 0),
                VoxelCoord::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_from_tuple_and_array() {
        let a: VoxelCoord = (1, 2, 3).into();
        let b: VoxelCoord = [1, 2, 3].into();
        assert_eq!(a, b);

        let tuple: (i32, i32, i32) = a.into();
        assert_eq!(tuple, (1, 2, 3));
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(VoxelCoord::new(1, 2, 3));
        set.insert(VoxelCoord::new(1, 2, 3)); // Duplicate
        set.insert(VoxelCoord::new(4, 5, 6));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_default() {
        assert_eq!(VoxelCoord::default(), VoxelCoord::origin());
    }
}
