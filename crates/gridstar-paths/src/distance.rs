use gridstar_core::Coord;

/// Euclidean (L2) distance between two cells.
///
/// Equal to the [`chebyshev`] step count when the cells share a row or a
/// column, and above it otherwise, by at most a factor of `√2`. With unit
/// diagonal steps it can therefore overestimate the remaining cost.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

/// Chebyshev (L∞) distance: the step count between two cells on an
/// obstacle-free 8-connected grid.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Cost-to-destination estimate used to order the A* frontier.
///
/// Every step, diagonal or not, costs `1.0`, so the exact obstacle-free
/// distance is [`chebyshev`]. [`Heuristic::Euclidean`] is never below it and
/// exceeds it off the axes; a search using it can, on some layouts, settle
/// a cell through a longer route and return a path that is not the
/// shortest. [`Heuristic::Chebyshev`] never overestimates, and with it the
/// returned path is always of minimal cost.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    Euclidean,
    Chebyshev,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Coord, to: Coord) -> f64 {
        match self {
            Heuristic::Euclidean => euclidean(from, to),
            Heuristic::Chebyshev => f64::from(chebyshev(from, to)),
        }
    }
}
