//! Coordinate axis selection.

use std::fmt;

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three coordinate axes.
///
/// Used to select which coordinate drives clipping, colorization, and
/// extrema detection, and to name the tallest axis of a bounding box.
///
/// # Example
///
/// ```
/// use mesh_types::{Axis, Point3};
///
/// let p = Point3::new(1.0, 2.0, 3.0);
/// assert_eq!(Axis::Y.component(&p), 2.0);
/// assert_eq!(Axis::Z.index(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All three axes in X, Y, Z order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// The component index of this axis (X = 0, Y = 1, Z = 2).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The axis with the given component index, if in range.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }

    /// The unit vector along this axis.
    #[inline]
    #[must_use]
    pub fn unit(self) -> Vector3<f64> {
        match self {
            Self::X => Vector3::x(),
            Self::Y => Vector3::y(),
            Self::Z => Vector3::z(),
        }
    }

    /// The coordinate of `point` along this axis.
    #[inline]
    #[must_use]
    pub fn component(self, point: &Point3<f64>) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
            Self::Z => point.z,
        }
    }

    /// The component of `vector` along this axis.
    #[inline]
    #[must_use]
    pub fn vector_component(self, vector: &Vector3<f64>) -> f64 {
        match self {
            Self::X => vector.x,
            Self::Y => vector.y,
            Self::Z => vector.z,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        write!(f, "{label}")
    }
}
