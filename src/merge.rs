//! Region merging: join stone regions of one color that share a liberty.
//!
//! Two groups of the same color touching a common empty point are scored as a
//! single unit, even though the stones themselves are not connected.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::grid::{Cell, Grid, Point};
use crate::region::Region;
use crate::union_find::DisjointSet;

/// Join every pair of distinct same-color stone regions that share at least
/// one liberty, until no such pair is left.
///
/// Regions are united transitively through their liberties, so the result is
/// already a fixed point: applying this again changes nothing. Regions that take
/// part in no merge keep their id; each merged region gets a fresh id above all
/// ids in `regions`. Empty regions are passed through untouched.
pub fn join_nearby_regions(grid: &Grid, regions: Vec<Region>) -> Vec<Region> {
    let mut sets = DisjointSet::new(regions.len());
    let mut by_liberty: BTreeMap<(Point, Cell), usize> = BTreeMap::new();

    for (i, region) in regions.iter().enumerate() {
        if region.is_vacant() {
            continue;
        }
        for liberty in region.liberties(grid) {
            match by_liberty.get(&(liberty, region.cell())) {
                Some(&j) => {
                    sets.union(i, j);
                }
                None => {
                    by_liberty.insert((liberty, region.cell()), i);
                }
            }
        }
    }

    let mut next_id = regions.iter().map(Region::id).max().map_or(0, |m| m + 1);
    let mut merged: Vec<Region> = Vec::with_capacity(regions.len());
    let mut removed = 0;
    let mut seen: BTreeSet<BTreeSet<Point>> = BTreeSet::new();

    for group in sets.groups() {
        if let [single] = group[..] {
            merged.push(regions[single].clone());
            continue;
        }
        let pieces: BTreeSet<Point> = group
            .iter()
            .flat_map(|&i| regions[i].pieces().iter().copied())
            .collect();
        removed += group.len();
        if !seen.insert(pieces.clone()) {
            continue;
        }
        let joined = Region::new(next_id, grid, pieces);
        debug!("Joining regions {:?} into #{}:\n{}", group, next_id, joined.describe(grid));
        next_id += 1;
        merged.push(joined);
    }

    debug!(
        "Finished joining regions. Removed intermediate regions: {removed}. Regions now: {}",
        merged.len()
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_regions;
    use crate::grid::Color;

    const B: Cell = Cell::Stone(Color::Black);
    const W: Cell = Cell::Stone(Color::White);
    const E: Cell = Cell::Empty;

    fn analyze(grid: &Grid) -> Vec<Region> {
        join_nearby_regions(grid, extract_regions(grid))
    }

    #[test]
    fn test_join_across_shared_liberty() {
        let grid = Grid::from_rows(vec![
            vec![B, E, B],
            vec![W, W, W],
            vec![E, E, E],
        ])
        .unwrap();
        let before = extract_regions(&grid);
        assert_eq!(before.len(), 5);

        let after = join_nearby_regions(&grid, before);
        assert_eq!(after.len(), 4);
        let black = after.iter().find(|r| r.color() == Some(Color::Black)).unwrap();
        assert_eq!(black.size(), 2);
        assert_eq!(black.liberties(&grid).len(), 1);
        // Fresh id above the extracted ones (0..5).
        assert_eq!(black.id(), 5);
    }

    #[test]
    fn test_different_colors_do_not_join() {
        let grid = Grid::from_rows(vec![
            vec![B, E, W],
            vec![E, E, E],
            vec![E, E, E],
        ])
        .unwrap();
        let after = analyze(&grid);
        assert_eq!(after.len(), 3);
        assert_eq!(after.iter().map(Region::id).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_chain_of_merges_is_transitive() {
        // Three black stones linked pairwise through two different liberties.
        let grid = Grid::from_rows(vec![
            vec![B, E, B, E, B],
            vec![W, W, W, W, W],
            vec![E, E, E, E, E],
            vec![E, E, E, E, E],
            vec![E, E, E, E, E],
        ])
        .unwrap();
        let after = analyze(&grid);
        let blacks: Vec<_> = after
            .iter()
            .filter(|r| r.color() == Some(Color::Black))
            .collect();
        assert_eq!(blacks.len(), 1);
        assert_eq!(blacks[0].size(), 3);
    }

    #[test]
    fn test_merge_is_a_fixed_point() {
        let grid = Grid::from_rows(vec![
            vec![B, E, B, W],
            vec![E, B, W, E],
            vec![B, W, E, W],
            vec![W, E, W, B],
        ])
        .unwrap();
        let once = analyze(&grid);
        let twice = join_nearby_regions(&grid, once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_regions_pass_through() {
        let grid = Grid::new(4);
        let after = analyze(&grid);
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id(), 0);
    }
}
