use std::collections::HashSet;
use std::fmt;

use gridstar_core::Coord;

use crate::traits::Occupancy;

/// Cost of a single move, orthogonal or diagonal.
pub const STEP_COST: f64 = 1.0;

/// A sequence of cells from a source to a destination, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    pub(crate) fn from_cells(cells: Vec<Coord>) -> Self {
        Self { cells }
    }

    /// The cells in source → destination order.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path has no cells. A path returned by a search never is.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell.
    #[inline]
    pub fn source(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    /// Last cell.
    #[inline]
    pub fn destination(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// Number of moves.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Total cost: one [`STEP_COST`] per move.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.steps() as f64 * STEP_COST
    }

    /// Whether this is a walkable route on `grid`: non-empty, every cell
    /// passable and in bounds, consecutive cells 8-adjacent, no cell
    /// visited twice.
    pub fn is_valid_on<O: Occupancy + ?Sized>(&self, grid: &O) -> bool {
        if self.cells.is_empty() {
            return false;
        }
        let bounds = grid.bounds();
        let mut seen = HashSet::with_capacity(self.cells.len());
        for &c in &self.cells {
            if !bounds.contains(c) || !grid.is_passable(c) || !seen.insert(c) {
                return false;
            }
        }
        self.cells.windows(2).all(|w| w[0].is_adjacent_8(w[1]))
    }

    /// Iterate over the cells from source to destination.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// Consume the path, returning its cells.
    pub fn into_inner(self) -> Vec<Coord> {
        self.cells
    }
}

/// Renders the chain as `-> (r,c) -> (r,c) `.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cells {
            write!(f, "-> {c} ")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl From<Path> for Vec<Coord> {
    fn from(p: Path) -> Self {
        p.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Grid;

    fn path(cells: &[(i32, i32)]) -> Path {
        Path::from_cells(cells.iter().map(|&c| Coord::from(c)).collect())
    }

    #[test]
    fn accessors() {
        let p = path(&[(2, 0), (1, 1), (0, 1)]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.cost(), 2.0);
        assert_eq!(p.source(), Some(Coord::new(2, 0)));
        assert_eq!(p.destination(), Some(Coord::new(0, 1)));
        assert_eq!(p.to_string(), "-> (2,0) -> (1,1) -> (0,1) ");
    }

    #[test]
    fn validity_checks() {
        let g = Grid::from_rows(&[[1, 1, 1], [1, 0, 1], [1, 1, 1]]);
        assert!(path(&[(0, 0), (0, 1), (0, 2), (1, 2)]).is_valid_on(&g));
        // through a blocked cell
        assert!(!path(&[(0, 0), (1, 1), (2, 2)]).is_valid_on(&g));
        // gap between cells
        assert!(!path(&[(0, 0), (0, 2)]).is_valid_on(&g));
        // revisits a cell
        assert!(!path(&[(0, 0), (0, 1), (0, 0)]).is_valid_on(&g));
        // leaves the grid
        assert!(!path(&[(0, 0), (-1, 0)]).is_valid_on(&g));
        assert!(!path(&[]).is_valid_on(&g));
    }

    #[test]
    fn empty_path_has_zero_cost() {
        let p = path(&[]);
        assert!(p.is_empty());
        assert_eq!(p.steps(), 0);
        assert_eq!(p.source(), None);
    }
}
