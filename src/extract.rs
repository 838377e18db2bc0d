//! Region extraction: partition the grid into maximal connected components
//! of identical cell state.

use std::collections::BTreeSet;

use tracing::debug;

use crate::grid::Grid;
use crate::region::Region;
use crate::union_find::DisjointSet;

/// Partition `grid` into regions of orthogonally connected points with equal
/// cells (all empty points count as one state).
///
/// The sweep is row-major and only looks right and down; uniting with those
/// two neighbors covers every orthogonal edge exactly once. Regions are
/// returned in order of their first point, with ids `0..len`.
pub fn extract_regions(grid: &Grid) -> Vec<Region> {
    let n = grid.size();
    let mut sets = DisjointSet::new(n * n);

    for (row, col) in grid.points() {
        let here = grid.get((row, col));
        if col + 1 < n && grid.get((row, col + 1)) == here {
            sets.union(row * n + col, row * n + col + 1);
        }
        if row + 1 < n && grid.get((row + 1, col)) == here {
            sets.union(row * n + col, (row + 1) * n + col);
        }
    }

    let regions: Vec<Region> = sets
        .groups()
        .into_iter()
        .enumerate()
        .map(|(id, members)| {
            let pieces: BTreeSet<_> = members.into_iter().map(|i| (i / n, i % n)).collect();
            Region::new(id, grid, pieces)
        })
        .collect();

    debug!("Detected {} total regions.", regions.len());
    regions
}
