//! Adjacency graph over regions.
//!
//! Nodes are region ids; an undirected edge joins two regions whenever a
//! member of one touches a member of the other orthogonally, whatever their
//! colors. Scoring does not walk the graph, but it is kept alongside the
//! regions for shape analysis such as seki.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::grid::Grid;
use crate::region::{Region, RegionId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    edges: BTreeMap<RegionId, BTreeSet<RegionId>>,
}

impl AdjacencyGraph {
    /// Build the graph for `regions`, which must partition `grid`.
    pub fn build(grid: &Grid, regions: &[Region]) -> Self {
        let n = grid.size();
        let mut owner = vec![RegionId::MAX; n * n];
        let mut edges: BTreeMap<RegionId, BTreeSet<RegionId>> = BTreeMap::new();
        for region in regions {
            edges.entry(region.id()).or_default();
            for &(row, col) in region.pieces() {
                owner[row * n + col] = region.id();
            }
        }

        let mut graph = Self { edges };
        for (row, col) in grid.points() {
            let here = owner[row * n + col];
            if col + 1 < n {
                graph.add_edge(here, owner[row * n + col + 1]);
            }
            if row + 1 < n {
                graph.add_edge(here, owner[(row + 1) * n + col]);
            }
        }

        debug!(
            "Built region graph: {} nodes, {} edges.",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    fn add_edge(&mut self, a: RegionId, b: RegionId) {
        if a == b {
            return;
        }
        self.edges.entry(a).or_default().insert(b);
        self.edges.entry(b).or_default().insert(a);
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn nodes(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.edges.keys().copied()
    }

    /// Regions touching `id`, in ascending id order.
    pub fn neighbors(&self, id: RegionId) -> impl Iterator<Item = RegionId> + '_ {
        self.edges.get(&id).into_iter().flatten().copied()
    }

    pub fn contains_edge(&self, a: RegionId, b: RegionId) -> bool {
        self.edges.get(&a).is_some_and(|s| s.contains(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_regions;
    use crate::grid::{Cell, Color};
    use crate::merge::join_nearby_regions;

    const B: Cell = Cell::Stone(Color::Black);
    const W: Cell = Cell::Stone(Color::White);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_single_region_has_no_edges() {
        let grid = Grid::new(5);
        let graph = AdjacencyGraph::build(&grid, &extract_regions(&grid));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.neighbors(0).count(), 0);
    }

    #[test]
    fn test_edges_between_touching_regions() {
        let grid = Grid::from_rows(vec![
            vec![B, E, E],
            vec![E, W, E],
            vec![E, E, E],
        ])
        .unwrap();
        let regions = extract_regions(&grid);
        let graph = AdjacencyGraph::build(&grid, &regions);
        let black = regions.iter().find(|r| r.color() == Some(Color::Black)).unwrap();
        let white = regions.iter().find(|r| r.color() == Some(Color::White)).unwrap();
        let empty = regions.iter().find(|r| r.is_vacant()).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert!(graph.contains_edge(black.id(), empty.id()));
        assert!(graph.contains_edge(empty.id(), white.id()));
        // Diagonal contact is not adjacency.
        assert!(!graph.contains_edge(black.id(), white.id()));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_graph_uses_merged_ids() {
        let grid = Grid::from_rows(vec![
            vec![B, E, B],
            vec![W, W, W],
            vec![E, E, E],
        ])
        .unwrap();
        let regions = join_nearby_regions(&grid, extract_regions(&grid));
        let graph = AdjacencyGraph::build(&grid, &regions);
        let ids: Vec<_> = graph.nodes().collect();
        let mut expected: Vec<_> = regions.iter().map(Region::id).collect();
        expected.sort();
        assert_eq!(ids, expected);

        let black = regions.iter().find(|r| r.color() == Some(Color::Black)).unwrap();
        let white = regions.iter().find(|r| r.color() == Some(Color::White)).unwrap();
        assert!(graph.contains_edge(black.id(), white.id()));
        assert!(graph.neighbors(white.id()).any(|id| id == black.id()));
    }
}
