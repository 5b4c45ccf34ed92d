//! Sparse voxel occupancy grid.
//!
//! The [`VoxelGrid`] records which cells of a regular lattice contain at
//! least one observed point. It is sparse: only occupied cells are
//! stored, so empty space costs nothing.

use std::collections::HashSet;

use nalgebra::Point3;

use crate::error::SpatialError;
use crate::voxel::VoxelCoord;

/// Divisor applied to a bounding-box diagonal to pick an automatic cell size.
///
/// A model spanning `d` world units gets cells of `d / 120`, roughly a
/// hundred cells across its longest span.
pub const AUTO_CELL_DIVISOR: f64 = 120.0;

/// Derives a voxel cell size from a bounding-box diagonal.
///
/// Used when the caller passes a cell size of zero and wants a
/// resolution proportional to the model.
///
/// # Example
///
/// ```
/// use plinth_spatial::auto_cell_size;
///
/// let size = auto_cell_size(12.0);
/// assert!((size - 0.1).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn auto_cell_size(bbox_diagonal: f64) -> f64 {
    bbox_diagonal / AUTO_CELL_DIVISOR
}

/// Axis-aligned bounds in grid (voxel) space.
///
/// Represents a rectangular region of voxels defined by minimum and maximum
/// coordinates. Both bounds are inclusive.
///
/// # Example
///
/// ```
/// use plinth_spatial::{GridBounds, VoxelCoord};
///
/// let bounds = GridBounds::new(
///     VoxelCoord::new(0, 0, 0),
///     VoxelCoord::new(10, 10, 10),
/// );
///
/// assert!(bounds.contains(VoxelCoord::new(5, 5, 5)));
/// assert!(!bounds.contains(VoxelCoord::new(15, 5, 5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    /// Minimum corner (inclusive).
    pub min: VoxelCoord,
    /// Maximum corner (inclusive).
    pub max: VoxelCoord,
}

impl GridBounds {
    /// Creates new grid bounds from min and max coordinates.
    ///
    /// The coordinates are automatically ordered so min ≤ max on each axis.
    #[must_use]
    pub fn new(a: VoxelCoord, b: VoxelCoord) -> Self {
        Self {
            min: VoxelCoord::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: VoxelCoord::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates bounds containing a single voxel.
    #[must_use]
    pub const fn from_point(coord: VoxelCoord) -> Self {
        Self {
            min: coord,
            max: coord,
        }
    }

    /// Returns the size of the bounds as (x, y, z) extents in cells.
    ///
    /// Each dimension is at least 1 (for a single voxel).
    ///
    /// # Example
    ///
    /// ```
    /// use plinth_spatial::{GridBounds, VoxelCoord};
    ///
    /// let bounds = GridBounds::new(
    ///     VoxelCoord::new(0, 0, 0),
    ///     VoxelCoord::new(9, 19, 29),
    /// );
    /// assert_eq!(bounds.size(), (10, 20, 30));
    /// ```
    #[must_use]
    pub const fn size(&self) -> (u32, u32, u32) {
        (
            self.max.x.abs_diff(self.min.x).saturating_add(1),
            self.max.y.abs_diff(self.min.y).saturating_add(1),
            self.max.z.abs_diff(self.min.z).saturating_add(1),
        )
    }

    /// Returns the total number of cells in this bounds.
    #[must_use]
    pub fn volume(&self) -> u64 {
        let (w, d, h) = self.size();
        u64::from(w)
            .saturating_mul(u64::from(d))
            .saturating_mul(u64::from(h))
    }

    /// Checks if the bounds contain a coordinate.
    #[must_use]
    pub const fn contains(&self, coord: VoxelCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
            && coord.z >= self.min.z
            && coord.z <= self.max.z
    }

    /// Expands the bounds to include a coordinate.
    pub fn expand_to_include(&mut self, coord: VoxelCoord) {
        self.min = VoxelCoord::new(
            self.min.x.min(coord.x),
            self.min.y.min(coord.y),
            self.min.z.min(coord.z),
        );
        self.max = VoxelCoord::new(
            self.max.x.max(coord.x),
            self.max.y.max(coord.y),
            self.max.z.max(coord.z),
        );
    }
}

/// A sparse binary occupancy grid over 3D space.
///
/// Each cell is a cube of `voxel_size` world units. A cell is either
/// occupied (at least one point fell inside it) or empty. Cells are
/// addressed by [`VoxelCoord`] relative to a world-space origin.
///
/// # Example
///
/// ```
/// use plinth_spatial::{VoxelGrid, VoxelCoord};
/// use nalgebra::Point3;
///
/// let mut grid = VoxelGrid::new(0.1);
///
/// // Mark the cell containing a world point
/// grid.insert_world(Point3::new(0.55, 0.25, 0.05));
///
/// let coord = VoxelCoord::new(5, 2, 0);
/// assert!(grid.contains(coord));
/// assert_eq!(grid.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct VoxelGrid {
    /// Size of each voxel in world units.
    voxel_size: f64,
    /// Inverse of voxel size for faster coordinate conversion.
    inv_voxel_size: f64,
    /// Origin offset in world space.
    origin: Point3<f64>,
    /// Sparse storage of occupied cells.
    occupied: HashSet<VoxelCoord>,
}

impl VoxelGrid {
    /// Creates a new empty grid with the specified voxel size.
    ///
    /// The origin is placed at the world origin. Non-positive sizes are
    /// clamped to a tiny positive value; use [`VoxelGrid::try_new`] to
    /// reject them instead.
    #[must_use]
    pub fn new(voxel_size: f64) -> Self {
        Self::with_origin(voxel_size, Point3::origin())
    }

    /// Creates a new empty grid with the specified voxel size and origin.
    ///
    /// # Arguments
    ///
    /// * `voxel_size` - The size of each voxel in world units. Must be positive.
    /// * `origin` - The world-space position of grid coordinate (0, 0, 0).
    #[must_use]
    pub fn with_origin(voxel_size: f64, origin: Point3<f64>) -> Self {
        let voxel_size = voxel_size.abs().max(f64::EPSILON);
        Self {
            voxel_size,
            inv_voxel_size: 1.0 / voxel_size,
            origin,
            occupied: HashSet::new(),
        }
    }

    /// Attempts to create a new grid, rejecting invalid voxel sizes.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidVoxelSize`] if `voxel_size` is not
    /// positive and finite.
    ///
    /// # Example
    ///
    /// ```
    /// use plinth_spatial::{SpatialError, VoxelGrid};
    ///
    /// assert!(VoxelGrid::try_new(0.1).is_ok());
    /// assert!(matches!(
    ///     VoxelGrid::try_new(-1.0),
    ///     Err(SpatialError::InvalidVoxelSize(_))
    /// ));
    /// ```
    pub fn try_new(voxel_size: f64) -> Result<Self, SpatialError> {
        if voxel_size <= 0.0 || !voxel_size.is_finite() {
            return Err(SpatialError::InvalidVoxelSize(voxel_size));
        }
        Ok(Self::new(voxel_size))
    }

    /// Attempts to create a new grid with an explicit origin.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidVoxelSize`] if `voxel_size` is not
    /// positive and finite.
    pub fn try_with_origin(voxel_size: f64, origin: Point3<f64>) -> Result<Self, SpatialError> {
        if voxel_size <= 0.0 || !voxel_size.is_finite() {
            return Err(SpatialError::InvalidVoxelSize(voxel_size));
        }
        Ok(Self::with_origin(voxel_size, origin))
    }

    /// Builds an occupancy grid from a set of world-space points.
    ///
    /// Each point marks the cell it falls in as occupied. Duplicate
    /// cells collapse to one.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidVoxelSize`] if `voxel_size` is not
    /// positive and finite.
    ///
    /// # Example
    ///
    /// ```
    /// use plinth_spatial::VoxelGrid;
    /// use nalgebra::Point3;
    ///
    /// let points = [
    ///     Point3::new(0.01, 0.01, 0.01),
    ///     Point3::new(0.02, 0.03, 0.04), // same cell
    ///     Point3::new(0.95, 0.01, 0.01),
    /// ];
    /// let grid = VoxelGrid::from_points(0.1, Point3::origin(), points).unwrap();
    /// assert_eq!(grid.len(), 2);
    /// ```
    pub fn from_points<I>(
        voxel_size: f64,
        origin: Point3<f64>,
        points: I,
    ) -> Result<Self, SpatialError>
    where
        I: IntoIterator<Item = Point3<f64>>,
    {
        let mut grid = Self::try_with_origin(voxel_size, origin)?;
        for point in points {
            grid.insert_world(point);
        }
        Ok(grid)
    }

    /// Returns the voxel size.
    #[must_use]
    pub const fn voxel_size(&self) -> f64 {
        self.voxel_size
    }

    /// Returns the grid origin in world space.
    #[must_use]
    pub const fn origin(&self) -> &Point3<f64> {
        &self.origin
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    /// Returns `true` if no cells are occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Converts a world-space point to the grid coordinate of its cell.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn world_to_grid(&self, point: Point3<f64>) -> VoxelCoord {
        let relative = point - self.origin;
        VoxelCoord::new(
            (relative.x * self.inv_voxel_size).floor() as i32,
            (relative.y * self.inv_voxel_size).floor() as i32,
            (relative.z * self.inv_voxel_size).floor() as i32,
        )
    }

    /// Converts a grid coordinate to the world-space center of that cell.
    ///
    /// # Example
    ///
    /// ```
    /// use plinth_spatial::{VoxelGrid, VoxelCoord};
    ///
    /// let grid = VoxelGrid::new(0.1);
    /// let center = grid.grid_to_world_center(VoxelCoord::origin());
    /// assert!((center.x - 0.05).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn grid_to_world_center(&self, coord: VoxelCoord) -> Point3<f64> {
        let half = self.voxel_size * 0.5;
        Point3::new(
            f64::from(coord.x).mul_add(self.voxel_size, self.origin.x) + half,
            f64::from(coord.y).mul_add(self.voxel_size, self.origin.y) + half,
            f64::from(coord.z).mul_add(self.voxel_size, self.origin.z) + half,
        )
    }

    /// Marks a cell as occupied.
    ///
    /// Returns `true` if the cell was newly occupied.
    pub fn insert(&mut self, coord: VoxelCoord) -> bool {
        self.occupied.insert(coord)
    }

    /// Marks the cell containing a world-space point as occupied.
    ///
    /// Returns `true` if the cell was newly occupied.
    pub fn insert_world(&mut self, point: Point3<f64>) -> bool {
        self.insert(self.world_to_grid(point))
    }

    /// Checks whether a cell is occupied.
    #[must_use]
    pub fn contains(&self, coord: VoxelCoord) -> bool {
        self.occupied.contains(&coord)
    }

    /// Returns an iterator over occupied cells, in no particular order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = &VoxelCoord> {
        self.occupied.iter()
    }

    /// Returns the occupied cells sorted by coordinate.
    ///
    /// Unlike [`VoxelGrid::occupied_cells`], the result does not depend
    /// on hash state, so repeated runs see the same order.
    #[must_use]
    pub fn sorted_cells(&self) -> Vec<VoxelCoord> {
        let mut cells: Vec<VoxelCoord> = self.occupied.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Computes the bounding box of all occupied cells.
    ///
    /// Returns `None` if the grid is empty.
    #[must_use]
    pub fn bounds(&self) -> Option<GridBounds> {
        let mut iter = self.occupied.iter();
        let first = *iter.next()?;

        let mut bounds = GridBounds::from_point(first);
        for coord in iter {
            bounds.expand_to_include(*coord);
        }

        Some(bounds)
    }

    /// Removes all occupied cells.
    pub fn clear(&mut self) {
        self.occupied.clear();
    }
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new(1.0)
    }
}
