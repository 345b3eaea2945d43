use std::fmt;

use gridstar_core::Coord;
use log::{debug, trace};

use crate::distance::Heuristic;
use crate::error::SearchFailure;
use crate::frontier::Frontier;
use crate::path::{Path, STEP_COST};
use crate::table::SearchTable;
use crate::traits::Occupancy;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells closed (popped and expanded).
    pub expanded: usize,
    /// Frontier insertions, the seed included.
    pub pushed: usize,
    /// Popped entries ignored because their cell was already closed.
    pub stale_skipped: usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded={} pushed={} stale={} peak={}",
            self.expanded, self.pushed, self.stale_skipped, self.peak_frontier
        )
    }
}

/// A* search over an [`Occupancy`] grid with 8-directional unit-cost moves.
///
/// A `PathFinder` only borrows the grid. Each call to
/// [`search`](PathFinder::search) allocates its own frontier and cost table
/// and drops them on return, so one finder (or several finders over the same
/// grid) can be used from multiple threads at once.
pub struct PathFinder<'a, O: ?Sized> {
    grid: &'a O,
    heuristic: Heuristic,
}

impl<O: ?Sized> Clone for PathFinder<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ?Sized> Copy for PathFinder<'_, O> {}

impl<'a, O: Occupancy + ?Sized> PathFinder<'a, O> {
    /// Create a finder using the default [`Heuristic::Euclidean`] estimate.
    pub fn new(grid: &'a O) -> Self {
        Self {
            grid,
            heuristic: Heuristic::default(),
        }
    }

    /// Use `heuristic` for subsequent searches.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// The heuristic in use.
    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Compute a least-cost path from `source` to `destination`.
    ///
    /// The returned path includes both endpoints. Identical inputs always
    /// produce the identical path.
    pub fn search(&self, source: Coord, destination: Coord) -> Result<Path, SearchFailure> {
        self.search_with_stats(source, destination).0
    }

    /// Like [`search`](PathFinder::search), also returning the counters of
    /// the run. Inputs rejected by validation report zeroed counters.
    pub fn search_with_stats(
        &self,
        source: Coord,
        destination: Coord,
    ) -> (Result<Path, SearchFailure>, SearchStats) {
        let mut stats = SearchStats::default();
        let result = self
            .validate(source, destination)
            .and_then(|(start, goal)| self.run(start, goal, destination, &mut stats));

        match &result {
            Ok(path) => debug!(
                "search {source} -> {destination}: {} steps ({stats})",
                path.steps()
            ),
            Err(e) => debug!("search {source} -> {destination}: {e} ({stats})"),
        }
        (result, stats)
    }

    /// Check both endpoints before any search state is built, returning
    /// their flat indices.
    fn validate(&self, source: Coord, destination: Coord) -> Result<(usize, usize), SearchFailure> {
        let bounds = self.grid.bounds();
        let (Some(start), Some(goal)) = (bounds.index(source), bounds.index(destination)) else {
            return Err(SearchFailure::InvalidCoordinate);
        };
        if !self.grid.is_passable(source) || !self.grid.is_passable(destination) {
            return Err(SearchFailure::BlockedEndpoint);
        }
        if start == goal {
            return Err(SearchFailure::AlreadyAtDestination);
        }
        Ok((start, goal))
    }

    fn run(
        &self,
        start: usize,
        goal: usize,
        destination: Coord,
        stats: &mut SearchStats,
    ) -> Result<Path, SearchFailure> {
        let bounds = self.grid.bounds();
        let mut table = SearchTable::new(bounds);
        let mut open = Frontier::with_capacity(bounds.len().min(1024));

        table.seed(start);
        open.push(start, 0.0, 0.0);
        stats.pushed = 1;
        stats.peak_frontier = 1;

        let found = 'search: loop {
            let Some(ci) = open.pop() else {
                break 'search false;
            };

            // Skip stale entries.
            if table.cells[ci].closed {
                stats.stale_skipped += 1;
                continue;
            }
            table.cells[ci].closed = true;
            stats.expanded += 1;

            let current = bounds.coord(ci);
            let cell = &table.cells[ci];
            let current_g = cell.g;
            trace!("expand {current} g={current_g} h={:.3} f={:.3}", cell.h, cell.f);

            for np in current.neighbors_8() {
                let Some(ni) = bounds.index(np) else {
                    continue;
                };
                if !self.grid.is_passable(np) || table.cells[ni].closed {
                    continue;
                }

                // The destination is accepted on sight, not when popped.
                if ni == goal {
                    table.cells[ni].parent = ci;
                    break 'search true;
                }

                let g = current_g + STEP_COST;
                let h = self.heuristic.estimate(np, destination);
                if table.relax(ni, ci, g, h) {
                    open.push(ni, g + h, h);
                    stats.pushed += 1;
                    stats.peak_frontier = stats.peak_frontier.max(open.len());
                }
            }
        };

        if !found {
            debug_assert!(open.is_empty());
            return Err(SearchFailure::NoPathFound);
        }
        Ok(Path::from_cells(table.trace_path(goal)))
    }
}

/// Compute a least-cost path on `grid` with the default heuristic.
///
/// Shorthand for `PathFinder::new(grid).search(source, destination)`.
pub fn search<O: Occupancy + ?Sized>(
    grid: &O,
    source: Coord,
    destination: Coord,
) -> Result<Path, SearchFailure> {
    PathFinder::new(grid).search(source, destination)
}
