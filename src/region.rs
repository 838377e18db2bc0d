//! Regions: sets of points sharing one cell state.
//!
//! A region only stores its id, its cell state and its member points. Every
//! other attribute (adjacencies, liberties, neighbor tally, liveness, border
//! contact) is recomputed from the grid on each call, so a region never
//! carries information from an older board state.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::grid::{Cell, Color, Grid, Point};

/// Identity of a region within one analysis pass.
pub type RegionId = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    id: RegionId,
    cell: Cell,
    pieces: BTreeSet<Point>,
}

impl Region {
    /// Create a region from its member points. The cell state is read from the
    /// first member; all members must share it.
    pub fn new(id: RegionId, grid: &Grid, pieces: BTreeSet<Point>) -> Self {
        let first = *pieces.first().expect("a region has at least one point");
        let cell = grid.get(first);
        debug_assert!(
            pieces.iter().all(|&p| grid.get(p) == cell),
            "region mixes cell states"
        );
        Self { id, cell, pieces }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Stone color, or `None` for a region of empty points.
    pub fn color(&self) -> Option<Color> {
        self.cell.color()
    }

    pub fn is_vacant(&self) -> bool {
        self.cell.is_empty()
    }

    pub fn pieces(&self) -> &BTreeSet<Point> {
        &self.pieces
    }

    pub fn size(&self) -> usize {
        self.pieces.len()
    }

    pub fn contains(&self, pt: Point) -> bool {
        self.pieces.contains(&pt)
    }

    /// Points outside the region that touch a member orthogonally.
    pub fn adjacencies(&self, grid: &Grid) -> BTreeSet<Point> {
        self.pieces
            .iter()
            .flat_map(|&p| grid.neighbors(p))
            .filter(|p| !self.pieces.contains(p))
            .collect()
    }

    /// Adjacent points that are empty.
    pub fn liberties(&self, grid: &Grid) -> BTreeSet<Point> {
        self.adjacencies(grid)
            .into_iter()
            .filter(|&p| grid.get(p).is_empty())
            .collect()
    }

    /// Number of adjacent points per cell state, empty points included.
    pub fn neighbor_tally(&self, grid: &Grid) -> BTreeMap<Cell, usize> {
        let mut tally = BTreeMap::new();
        for p in self.adjacencies(grid) {
            *tally.entry(grid.get(p)).or_insert(0) += 1;
        }
        tally
    }

    /// At most one liberty left. Only meaningful for stone regions.
    pub fn is_dead(&self, grid: &Grid) -> bool {
        self.liberties(grid).len() <= 1
    }

    pub fn is_on_border(&self, grid: &Grid) -> bool {
        self.pieces.iter().any(|&p| grid.is_border(p))
    }

    /// Human-readable summary against the grid the region was built from.
    pub fn describe<'a>(&'a self, grid: &'a Grid) -> RegionSummary<'a> {
        RegionSummary { region: self, grid }
    }
}

pub struct RegionSummary<'a> {
    region: &'a Region,
    grid: &'a Grid,
}

impl fmt::Display for RegionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.region;
        writeln!(f, "Region #{} of {} pieces of {}.", r.id, r.size(), r.cell)?;
        writeln!(f, "Number of liberties: {}", r.liberties(self.grid).len())?;
        writeln!(f, "Pieces: {:?}", r.pieces)?;
        writeln!(f, "On border: {}", r.is_on_border(self.grid))?;
        write!(f, "Number adjacencies: {:?}", r.neighbor_tally(self.grid))
    }
}
