//! Square board grid of empty points and stones.
//!
//! The grid is stored row-major in a flat `Vec`. Points are `(row, col)`
//! pairs, zero-based, with row 0 at the top as it appears in the source image.

use std::fmt;

use crate::colors::ColorMap;
use crate::constants::{EMPTY, STONE_BLACK, STONE_WHITE};
use crate::error::ConfigError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => crate::constants::BLACK,
            Color::White => crate::constants::WHITE,
        }
    }

    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of a single point.
///
/// `Empty` is an ordinary variant, so cells can key counting maps directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    Empty,
    Stone(Color),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Stone(c) => Some(c),
        }
    }

    pub fn symbol(self) -> char {
        let b = match self {
            Cell::Empty => EMPTY,
            Cell::Stone(Color::Black) => STONE_BLACK,
            Cell::Stone(Color::White) => STONE_WHITE,
        };
        b as char
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str("Empty"),
            Cell::Stone(c) => write!(f, "{c}"),
        }
    }
}

/// A point on the board as `(row, col)`.
pub type Point = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a grid from typed rows. Fails unless the rows form a non-empty square.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ConfigError> {
        check_square(rows.iter().map(Vec::len))?;
        let size = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { size, cells })
    }

    /// Build a grid from the numeric contract of the board loader: `NaN` marks an
    /// empty point, any other value must be one of the two color values.
    pub fn from_values(values: &[Vec<f64>], colors: &ColorMap) -> Result<Self, ConfigError> {
        check_square(values.iter().map(Vec::len))?;
        let mut cells = Vec::with_capacity(values.len() * values.len());
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                let cell = if value.is_nan() {
                    Cell::Empty
                } else {
                    let color = colors
                        .color_of(value)
                        .ok_or(ConfigError::UnknownCellValue { row, col, value })?;
                    Cell::Stone(color)
                };
                cells.push(cell);
            }
        }
        Ok(Self {
            size: values.len(),
            cells,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, (row, col): Point) -> usize {
        row * self.size + col
    }

    /// Cell at `pt`. Panics if `pt` is off the board.
    pub fn get(&self, pt: Point) -> Cell {
        assert!(self.contains(pt), "point {pt:?} is off a {0}x{0} board", self.size);
        self.cells[self.idx(pt)]
    }

    pub fn set(&mut self, pt: Point, cell: Cell) {
        assert!(self.contains(pt), "point {pt:?} is off a {0}x{0} board", self.size);
        let i = self.idx(pt);
        self.cells[i] = cell;
    }

    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        (0..s).flat_map(move |row| (0..s).map(move |col| (row, col)))
    }

    /// The up to four orthogonal neighbors of `pt` that lie on the board.
    pub fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if row + 1 < s {
            v.push((row + 1, col));
        }
        if row > 0 {
            v.push((row - 1, col));
        }
        if col + 1 < s {
            v.push((row, col + 1));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        v.into_iter()
    }

    pub fn is_border(&self, (row, col): Point) -> bool {
        let last = self.size - 1;
        row == 0 || col == 0 || row == last || col == last
    }

    /// Number of points holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

fn check_square(row_lens: impl ExactSizeIterator<Item = usize>) -> Result<(), ConfigError> {
    let rows = row_lens.len();
    if rows == 0 {
        return Err(ConfigError::EmptyGrid);
    }
    for (row, cols) in row_lens.enumerate() {
        if cols != rows {
            return Err(ConfigError::NonSquareGrid { rows, row, cols });
        }
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{} ", self.get((row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B: Cell = Cell::Stone(Color::Black);
    const W: Cell = Cell::Stone(Color::White);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_from_rows_rejects_non_square() {
        let err = Grid::from_rows(vec![vec![E, E], vec![E]]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonSquareGrid {
                rows: 2,
                row: 1,
                cols: 1
            }
        );

        let err = Grid::from_rows(vec![vec![E, E, E], vec![E, E, E]]).unwrap_err();
        assert!(matches!(err, ConfigError::NonSquareGrid { rows: 2, .. }));

        assert_eq!(Grid::from_rows(vec![]).unwrap_err(), ConfigError::EmptyGrid);
    }

    #[test]
    fn test_from_values() {
        let colors = ColorMap::new(1.0, 0.0).unwrap();
        let grid = Grid::from_values(&[vec![1.0, f64::NAN], vec![0.0, 1.0]], &colors).unwrap();
        assert_eq!(grid.get((0, 0)), B);
        assert_eq!(grid.get((0, 1)), E);
        assert_eq!(grid.get((1, 0)), W);
        assert_eq!(grid.get((1, 1)), B);
    }

    #[test]
    fn test_from_values_unknown_value() {
        let colors = ColorMap::new(1.0, 0.0).unwrap();
        let err = Grid::from_values(&[vec![1.0, 2.0], vec![0.0, 1.0]], &colors).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownCellValue {
                row: 0,
                col: 1,
                value: 2.0
            }
        );
    }

    #[test]
    fn test_neighbors() {
        let grid = Grid::new(3);
        let mut corner: Vec<Point> = grid.neighbors((0, 0)).collect();
        corner.sort();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);
        assert_eq!(grid.neighbors((1, 1)).count(), 4);
        assert_eq!(grid.neighbors((2, 1)).count(), 3);
        assert_eq!(Grid::new(1).neighbors((0, 0)).count(), 0);
    }

    #[test]
    fn test_border_and_count() {
        let mut grid = Grid::new(3);
        assert!(grid.is_border((0, 1)));
        assert!(grid.is_border((2, 2)));
        assert!(!grid.is_border((1, 1)));

        grid.set((1, 1), B);
        grid.set((0, 2), W);
        assert_eq!(grid.count(B), 1);
        assert_eq!(grid.count(W), 1);
        assert_eq!(grid.count(E), 7);
        assert_eq!(grid.points().count(), 9);
        assert_eq!(grid.points().nth(4), Some((1, 1)));
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(vec![vec![B, E], vec![E, W]]).unwrap();
        assert_eq!(grid.to_string(), "X . \n. O \n");
    }
}
