//! Seeded subsampling of occupied cells.
//!
//! Display frontends cannot always draw every occupied cell of a dense
//! grid, so the pipeline caps the cell count before rendering. The draw
//! is uniform without replacement and driven by an explicit seed, so the
//! same grid and seed always select the same cells.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::grid::VoxelGrid;
use crate::voxel::VoxelCoord;

/// Selects at most `max_cells` occupied cells from the grid.
///
/// When the grid has `max_cells` or fewer occupied cells, all of them
/// are returned in sorted coordinate order. Otherwise exactly
/// `max_cells` cells are drawn uniformly without replacement.
///
/// The candidate list is sorted before the draw, so the selection
/// depends only on the grid contents and the seed, never on hash
/// iteration order.
///
/// # Example
///
/// ```
/// use plinth_spatial::{subsample_occupied, VoxelCoord, VoxelGrid};
///
/// let mut grid = VoxelGrid::new(1.0);
/// for x in 0..100 {
///     grid.insert(VoxelCoord::new(x, 0, 0));
/// }
///
/// let picked = subsample_occupied(&grid, 10, 42);
/// assert_eq!(picked.len(), 10);
///
/// // Same seed, same selection
/// assert_eq!(picked, subsample_occupied(&grid, 10, 42));
/// ```
#[must_use]
pub fn subsample_occupied(grid: &VoxelGrid, max_cells: usize, seed: u64) -> Vec<VoxelCoord> {
    let cells = grid.sorted_cells();
    if cells.len() <= max_cells {
        return cells;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let picked = rand::seq::index::sample(&mut rng, cells.len(), max_cells);
    picked.iter().map(|i| cells[i]).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line_grid(count: i32) -> VoxelGrid {
        let mut grid = VoxelGrid::new(1.0);
        for x in 0..count {
            grid.insert(VoxelCoord::new(x, 0, 0));
        }
        grid
    }

    #[test]
    fn test_under_cap_returns_all_sorted() {
        let mut grid = VoxelGrid::new(1.0);
        grid.insert(VoxelCoord::new(5, 0, 0));
        grid.insert(VoxelCoord::new(1, 0, 0));
        grid.insert(VoxelCoord::new(3, 0, 0));

        let picked = subsample_occupied(&grid, 10, 0);
        assert_eq!(
            picked,
            vec![
                VoxelCoord::new(1, 0, 0),
                VoxelCoord::new(3, 0, 0),
                VoxelCoord::new(5, 0, 0),
            ]
        );
    }

    #[test]
    fn test_over_cap_draws_exactly_cap() {
        let grid = line_grid(100);
        let picked = subsample_occupied(&grid, 30, 7);
        assert_eq!(picked.len(), 30);
    }

    #[test]
    fn test_draw_is_without_replacement() {
        let grid = line_grid(50);
        let mut picked = subsample_occupied(&grid, 20, 3);
        let before = picked.len();
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), before);
    }

    #[test]
    fn test_draw_is_subset_of_occupied() {
        let grid = line_grid(50);
        let picked = subsample_occupied(&grid, 20, 3);
        assert!(picked.iter().all(|c| grid.contains(*c)));
    }

    #[test]
    fn test_same_seed_same_selection() {
        let grid = line_grid(200);
        let a = subsample_occupied(&grid, 50, 42);
        let b = subsample_occupied(&grid, 50, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_selection() {
        let grid = line_grid(200);
        let a = subsample_occupied(&grid, 50, 1);
        let b = subsample_occupied(&grid, 50, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_cap_returns_empty() {
        let grid = line_grid(10);
        assert!(subsample_occupied(&grid, 0, 0).is_empty());
    }

    #[test]
    fn test_empty_grid_returns_empty() {
        let grid = VoxelGrid::new(1.0);
        assert!(subsample_occupied(&grid, 10, 0).is_empty());
    }
}
