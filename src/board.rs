//! Board state and the region analysis pipeline.
//!
//! A [`Board`] owns the grid, the color mapping and the capture counters, and
//! keeps the current region partition and region graph. Regions are always
//! recomputed wholesale by [`analyze`]; clearing dead regions is the only
//! operation that changes the board after construction.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, info};

use crate::colors::{Captures, ColorMap};
use crate::error::ConfigError;
use crate::extract::extract_regions;
use crate::graph::AdjacencyGraph;
use crate::grid::{Cell, Grid};
use crate::merge::join_nearby_regions;
use crate::region::Region;

/// Run the full pipeline on `grid`: extraction, merging of regions sharing a
/// liberty, and the region graph.
pub fn analyze(grid: &Grid) -> (Vec<Region>, AdjacencyGraph) {
    let regions = join_nearby_regions(grid, extract_regions(grid));
    let graph = AdjacencyGraph::build(grid, &regions);
    (regions, graph)
}

#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    colors: ColorMap,
    captures: Captures,
    regions: Vec<Region>,
    graph: AdjacencyGraph,
}

impl Board {
    pub fn new(grid: Grid, colors: ColorMap, captures: Captures) -> Self {
        info!("Pieces: {colors}");
        info!("Starting board:\n\n{grid}");
        let (regions, graph) = analyze(&grid);
        Self {
            grid,
            colors,
            captures,
            regions,
            graph,
        }
    }

    /// Build a board from the board loader's numeric grid, a color name→value
    /// map and a color name→capture count map.
    ///
    /// Fails if the colors are not exactly Black and White with distinct
    /// numeric values, if the capture keys differ from the color keys, or if
    /// the grid is not square or holds an unknown value.
    pub fn from_values(
        values: &[Vec<f64>],
        colors: &BTreeMap<String, f64>,
        captures: &BTreeMap<String, u32>,
    ) -> Result<Self, ConfigError> {
        let color_map = ColorMap::from_named(colors)?;
        let captures = Captures::from_named(captures, colors)?;
        let grid = Grid::from_values(values, &color_map)?;
        Ok(Self::new(grid, color_map, captures))
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    /// Current region partition, merged regions included.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Stone regions with at most one liberty. A group in atari is treated
    /// as already captured.
    pub fn dead_regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.regions
            .iter()
            .filter(|r| !r.is_vacant() && r.is_dead(&self.grid))
    }

    /// Number of stones per color in dead regions.
    pub fn dead_stone_counts(&self) -> Captures {
        let mut dead = Captures::default();
        for region in self.dead_regions() {
            if let Some(color) = region.color() {
                dead.add(color, region.size() as u32);
            }
        }
        dead
    }

    /// Number of regions per cell state.
    pub fn region_counts(&self) -> BTreeMap<Cell, usize> {
        let mut counts = BTreeMap::new();
        for region in &self.regions {
            *counts.entry(region.cell()).or_insert(0) += 1;
        }
        counts
    }

    /// Remove dead regions from the grid in region order, count their stones
    /// as captured, and recompute regions and graph.
    ///
    /// Each region is checked again against the grid as it stands just before
    /// its removal. A group that gained liberties from an earlier capture in
    /// the same pass stays on the board. Once no region is dead this leaves
    /// grid and captures unchanged.
    pub fn clear_dead_regions(&mut self) -> &mut Self {
        info!("Clearing dead regions from board.");
        let candidates: Vec<Region> = self.dead_regions().cloned().collect();

        for region in &candidates {
            let Some(color) = region.color() else {
                continue;
            };
            if !region.is_dead(&self.grid) {
                debug!(
                    "Region #{} regained liberties after earlier captures. Kept.",
                    region.id()
                );
                continue;
            }
            info!(
                "Removed {} {color} pieces from board.\n{}",
                region.size(),
                region.describe(&self.grid)
            );
            self.captures.add(color, region.size() as u32);
            for &pt in region.pieces() {
                self.grid.set(pt, Cell::Empty);
            }
        }

        let (regions, graph) = analyze(&self.grid);
        self.regions = regions;
        self.graph = graph;
        debug!("Updated and joined adjacent board regions after clearing dead regions.");
        self
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Goban: {0} x {0}", self.size())?;
        writeln!(f, "Pieces: {}", self.colors)?;
        writeln!(f, "Captures: {}", self.captures)?;
        writeln!(f, "Regions (Including Empty): {}", self.regions.len())?;
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Color;

    const B: Cell = Cell::Stone(Color::Black);
    const W: Cell = Cell::Stone(Color::White);
    const E: Cell = Cell::Empty;

    fn board(rows: Vec<Vec<Cell>>) -> Board {
        Board::new(
            Grid::from_rows(rows).unwrap(),
            ColorMap::new(1.0, 0.0).unwrap(),
            Captures::new(0, 0),
        )
    }

    fn named<V: Copy>(pairs: &[(&str, V)]) -> BTreeMap<String, V> {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_from_values() {
        let nan = f64::NAN;
        let board = Board::from_values(
            &[vec![1.0, nan, nan], vec![nan, 0.0, nan], vec![nan, nan, nan]],
            &named(&[("Black", 1.0), ("White", 0.0)]),
            &named(&[("Black", 0), ("White", 3)]),
        )
        .unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.grid().get((1, 1)), W);
        assert_eq!(board.captures().get(Color::White), 3);
        assert_eq!(board.regions().len(), 3);
    }

    #[test]
    fn test_from_values_validation() {
        let colors = named(&[("Black", 1.0), ("White", 0.0)]);
        let captures = named(&[("Black", 0), ("White", 0)]);
        let square = vec![vec![f64::NAN; 2]; 2];

        let err = Board::from_values(&[vec![f64::NAN; 3]], &colors, &captures).unwrap_err();
        assert!(matches!(err, ConfigError::NonSquareGrid { .. }));

        let err = Board::from_values(&square, &named(&[("White", 0.0)]), &captures).unwrap_err();
        assert!(matches!(err, ConfigError::MissingColors(_)));

        let err = Board::from_values(&square, &colors, &named(&[("White", 0)])).unwrap_err();
        assert!(matches!(err, ConfigError::CaptureKeysMismatch { .. }));

        let err = Board::from_values(
            &square,
            &named(&[("Black", f64::NAN), ("White", 0.0)]),
            &captures,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::NonNumericColor { .. }));
    }

    #[test]
    fn test_dead_regions() {
        let board = board(vec![
            vec![W, B, E, E],
            vec![B, E, E, E],
            vec![E, B, W, B],
            vec![E, E, B, E],
        ]);
        let dead: Vec<_> = board.dead_regions().map(|r| *r.pieces().first().unwrap()).collect();
        // Corner white stone has no liberties; (2,2) has one left. The black
        // stones at (2,3) and (3,2) share the liberty (3,3) and hold together.
        assert_eq!(dead, vec![(0, 0), (2, 2)]);
        assert_eq!(board.dead_stone_counts(), Captures::new(0, 2));
    }

    #[test]
    fn test_clear_dead_regions() {
        let mut board = board(vec![
            vec![W, B, E],
            vec![B, E, E],
            vec![E, E, E],
        ]);
        board.clear_dead_regions();
        assert_eq!(board.grid().get((0, 0)), E);
        assert_eq!(board.captures(), &Captures::new(0, 1));
        assert_eq!(board.dead_regions().count(), 0);
        // Black pair now shares (0,0) and (1,1).
        assert_eq!(board.region_counts(), BTreeMap::from([(E, 2), (B, 1)]));
    }

    #[test]
    fn test_clear_keeps_capturing_stones() {
        // All three corner groups are in atari, but removing the white corner
        // stone gives both black stones a second liberty.
        let mut board = board(vec![
            vec![W, B, E],
            vec![B, W, E],
            vec![E, E, E],
        ]);
        assert_eq!(board.dead_stone_counts(), Captures::new(2, 1));

        board.clear_dead_regions();
        assert_eq!(board.captures(), &Captures::new(0, 1));
        assert_eq!(board.grid().get((0, 0)), E);
        assert_eq!(board.grid().get((0, 1)), B);
        assert_eq!(board.grid().get((1, 0)), B);
        assert_eq!(board.grid().get((1, 1)), W);
        assert_eq!(board.dead_regions().count(), 0);
    }

    #[test]
    fn test_clear_saturates_capture_count() {
        let mut board = Board::new(
            Grid::from_rows(vec![vec![B]]).unwrap(),
            ColorMap::new(1.0, 0.0).unwrap(),
            Captures::new(u32::MAX, 0),
        );
        board.clear_dead_regions();
        assert_eq!(board.grid().get((0, 0)), E);
        assert_eq!(board.captures().get(Color::Black), u32::MAX);
    }

    #[test]
    fn test_clear_dead_regions_idempotent() {
        let mut board = board(vec![
            vec![W, B, E],
            vec![B, E, E],
            vec![E, E, E],
        ]);
        board.clear_dead_regions();
        let grid = board.grid().clone();
        let captures = board.captures().clone();
        board.clear_dead_regions();
        assert_eq!(board.grid(), &grid);
        assert_eq!(board.captures(), &captures);
    }

    #[test]
    fn test_display() {
        let board = board(vec![vec![B, E], vec![E, W]]);
        let text = board.to_string();
        assert!(text.starts_with("Goban: 2 x 2\n"));
        assert!(text.contains("Captures: {Black: 0, White: 0}"));
        assert!(text.ends_with("X . \n. O \n"));
    }
}
