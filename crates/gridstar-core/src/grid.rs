//! The [`Grid`] type — a 2D occupancy grid of [`CellState`]s.
//!
//! A `Grid` owns its cells and carries its own dimensions. It is built once
//! by the caller and only read by the path finder, so a shared `&Grid` can be
//! searched from several threads at the same time.
//!
//! # Text format
//!
//! One line per row, one character per cell: `.` or `1` for passable cells,
//! `#` or `0` for blocked ones. Blank lines and surrounding whitespace are
//! ignored.
//!
//! ```text
//! .#....#...
//! ...#...#..
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cell::CellState;
use crate::geom::{Bounds, BoundsIter, Coord};

/// Errors produced while building a [`Grid`] from rows or text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell {ch:?} at ({row},{col})")]
    UnknownCell { row: usize, col: usize, ch: char },

    #[error("grid rows describe a {found} grid, expected {expected}")]
    Dimensions { expected: Bounds, found: Bounds },
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A 2D grid of passable / blocked cells stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct Grid {
    cells: Vec<CellState>,
    bounds: Bounds,
}

impl Grid {
    /// Create a `rows × cols` grid with every cell passable.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            cells: vec![CellState::Passable; bounds.len()],
            bounds,
        }
    }

    /// Build a grid from fixed-width integer rows (`1` passable, else blocked).
    pub fn from_rows<const C: usize>(rows: &[[i32; C]]) -> Self {
        let cells = rows
            .iter()
            .flat_map(|r| r.iter().map(|&v| CellState::from(v)))
            .collect();
        Self {
            cells,
            bounds: Bounds::new(rows.len() as i32, C as i32),
        }
    }

    /// Build a grid from integer rows of possibly different lengths.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_vecs(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        let expected = rows.first().map(Vec::len).ok_or(GridError::Empty)?;
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, r) in rows.iter().enumerate() {
            if r.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: r.len(),
                });
            }
            cells.extend(r.iter().map(|&v| CellState::from(v)));
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(rows.len() as i32, expected as i32),
        })
    }

    /// The dimensions of this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// The state of the cell at `c`, or `None` if `c` is outside the grid.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellState> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is inside the grid and passable.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(CellState::is_passable)
    }

    /// Set the cell at `c`. No-op if `c` is outside the grid.
    pub fn set(&mut self, c: Coord, state: CellState) {
        if let Some(i) = self.bounds.index(c) {
            self.cells[i] = state;
        }
    }

    /// Count cells with the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Row-major iterator over `(Coord, CellState)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let expected = lines.first().map(|l| l.chars().count()).ok_or(GridError::Empty)?;

        let mut cells = Vec::with_capacity(expected * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let state =
                    CellState::from_char(ch).ok_or(GridError::UnknownCell { row, col, ch })?;
                cells.push(state);
            }
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(lines.len() as i32, expected as i32),
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.bounds.cols.max(1) as usize) {
            for s in row {
                write!(f, "{}", s.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Coord, CellState)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: BoundsIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Coord, CellState);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.inner.next()?;
        let i = self.grid.bounds.index(c)?;
        Some((c, self.grid.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Coord, CellState);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Serde representation
// ---------------------------------------------------------------------------

/// Grids serialize as their dimensions plus their text rows. The dimensions
/// keep grids with no cells (`0 × n` or `n × 0`) intact, since their text is
/// empty.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    bounds: Bounds,
    rows: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        let rows = g.to_string().lines().map(str::to_owned).collect();
        Self {
            bounds: g.bounds,
            rows,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(r: GridRepr) -> Result<Self, Self::Error> {
        let expected = Bounds::new(r.bounds.rows, r.bounds.cols);
        if expected.is_empty() && r.rows.iter().all(|row| row.trim().is_empty()) {
            return Ok(Grid::new(expected.rows, expected.cols));
        }
        let grid: Grid = r.rows.join("\n").parse()?;
        if grid.bounds != expected {
            return Err(GridError::Dimensions {
                expected,
                found: grid.bounds,
            });
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_is_all_passable() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.count(CellState::Passable), 12);
        assert!(g.is_passable(Coord::new(2, 3)));
    }

    #[test]
    fn grid_set_and_at() {
        let mut g = Grid::new(4, 4);
        let c = Coord::new(2, 3);
        g.set(c, CellState::Blocked);
        assert_eq!(g.at(c), Some(CellState::Blocked));
        assert!(!g.is_passable(c));
        assert_eq!(g.at(Coord::new(10, 10)), None);
        // out of bounds set is a no-op
        g.set(Coord::new(-1, 0), CellState::Blocked);
        assert_eq!(g.count(CellState::Blocked), 1);
    }

    #[test]
    fn from_rows_uses_integer_literals() {
        let g = Grid::from_rows(&[[1, 0, 1], [0, 1, 1]]);
        assert_eq!(g.bounds(), Bounds::new(2, 3));
        assert!(g.is_passable(Coord::new(0, 0)));
        assert!(!g.is_passable(Coord::new(0, 1)));
        assert!(!g.is_passable(Coord::new(1, 0)));
        assert!(g.is_passable(Coord::new(1, 2)));
    }

    #[test]
    fn from_vecs_rejects_ragged_rows() {
        let err = Grid::from_vecs(vec![vec![1, 1, 1], vec![1, 1]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(Grid::from_vecs(Vec::new()).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn from_vecs_matches_from_rows() {
        let a = Grid::from_rows(&[[1, 0], [0, 1]]);
        let b = Grid::from_vecs(vec![vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_and_display() {
        let text = "\n  .#..\n  1100\n\n";
        let g: Grid = text.parse().unwrap();
        assert_eq!(g.bounds(), Bounds::new(2, 4));
        assert!(!g.is_passable(Coord::new(0, 1)));
        assert!(g.is_passable(Coord::new(1, 1)));
        assert!(!g.is_passable(Coord::new(1, 3)));
        assert_eq!(g.to_string(), ".#..\n..##\n");
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Grid>().unwrap_err(), GridError::Empty);
        assert!(matches!(
            "...\n..".parse::<Grid>(),
            Err(GridError::Ragged { row: 1, .. })
        ));
        assert_eq!(
            "..\n.x".parse::<Grid>().unwrap_err(),
            GridError::UnknownCell {
                row: 1,
                col: 1,
                ch: 'x'
            }
        );
    }

    #[test]
    fn iter_is_row_major() {
        let g = Grid::from_rows(&[[1, 0], [1, 1]]);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1], (Coord::new(0, 1), CellState::Blocked));
        assert_eq!(items[2], (Coord::new(1, 0), CellState::Passable));
    }
}
