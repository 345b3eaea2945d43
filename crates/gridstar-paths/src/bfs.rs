use std::collections::VecDeque;

use gridstar_core::{Bounds, Coord};

use crate::traits::Occupancy;

/// Sentinel step count for cells that were not reached.
pub const UNREACHABLE: u32 = u32::MAX;

/// Exact step counts from one source cell, as computed by [`distance_map`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    source: Coord,
    bounds: Bounds,
    dist: Vec<u32>,
}

impl DistanceMap {
    /// The cell distances were measured from.
    #[inline]
    pub fn source(&self) -> Coord {
        self.source
    }

    /// Number of unit moves from the source to `c`, or `None` if `c` is out
    /// of bounds, blocked, or not connected to the source.
    pub fn at(&self, c: Coord) -> Option<u32> {
        let i = self.bounds.index(c)?;
        match self.dist[i] {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    /// Number of cells reached, the source included.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }
}

/// Breadth-first distance map over the same moves as the A* search: eight
/// directions, every move costing one step.
///
/// Because all moves cost the same, the BFS layer of a cell is its exact
/// shortest-path cost. A source outside the grid or on a blocked cell
/// reaches nothing.
pub fn distance_map<O: Occupancy + ?Sized>(grid: &O, source: Coord) -> DistanceMap {
    let bounds = grid.bounds();
    let mut dist = vec![UNREACHABLE; bounds.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    if let Some(si) = bounds.index(source) {
        if grid.is_passable(source) {
            dist[si] = 0;
            queue.push_back(si);
        }
    }

    while let Some(ci) = queue.pop_front() {
        let current = dist[ci];
        for np in bounds.coord(ci).neighbors_8() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE || !grid.is_passable(np) {
                continue;
            }
            dist[ni] = current + 1;
            queue.push_back(ni);
        }
    }

    DistanceMap {
        source,
        bounds,
        dist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::chebyshev;
    use gridstar_core::Grid;

    #[test]
    fn open_grid_matches_chebyshev() {
        let g = Grid::new(6, 7);
        let src = Coord::new(2, 3);
        let m = distance_map(&g, src);
        assert_eq!(m.reached(), 42);
        for c in g.bounds() {
            assert_eq!(m.at(c), Some(chebyshev(src, c) as u32));
        }
    }

    #[test]
    fn walls_force_detours() {
        let g: Grid = "\
            ...
            ##.
            ..."
        .parse()
        .unwrap();
        let m = distance_map(&g, Coord::new(0, 0));
        assert_eq!(m.at(Coord::new(0, 2)), Some(2));
        assert_eq!(m.at(Coord::new(2, 0)), Some(4));
        assert_eq!(m.at(Coord::new(1, 0)), None);
        assert_eq!(m.at(Coord::new(5, 5)), None);
    }

    #[test]
    fn blocked_or_outside_source_reaches_nothing() {
        let g = Grid::from_rows(&[[0, 1], [1, 1]]);
        assert_eq!(distance_map(&g, Coord::new(0, 0)).reached(), 0);
        assert_eq!(distance_map(&g, Coord::new(4, 4)).reached(), 0);
    }

    #[test]
    fn disconnected_regions() {
        let g = Grid::from_rows(&[[1, 0, 1], [1, 0, 1]]);
        let m = distance_map(&g, Coord::new(0, 0));
        assert_eq!(m.source(), Coord::new(0, 0));
        assert_eq!(m.reached(), 2);
        assert_eq!(m.at(Coord::new(0, 2)), None);
    }
}
