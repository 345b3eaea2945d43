use gridstar_core::{Bounds, Coord};

/// Parent index of a cell that has not been relaxed yet.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell search record
// ---------------------------------------------------------------------------

/// Bookkeeping for one grid cell during a single search.
///
/// `parent` is a flat index into the owning [`SearchTable`]. The source cell
/// is its own parent; that self-link is what ends path reconstruction.
#[derive(Clone, Debug)]
pub(crate) struct SearchCell {
    pub(crate) parent: usize,
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) f: f64,
    pub(crate) closed: bool,
}

impl Default for SearchCell {
    fn default() -> Self {
        Self {
            parent: NO_PARENT,
            g: f64::INFINITY,
            h: 0.0,
            f: f64::INFINITY,
            closed: false,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchTable
// ---------------------------------------------------------------------------

/// Arena of [`SearchCell`]s indexed row-major, owned by one search call.
pub(crate) struct SearchTable {
    pub(crate) bounds: Bounds,
    pub(crate) cells: Vec<SearchCell>,
}

impl SearchTable {
    /// Fresh table with every cell at infinite cost and open.
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![SearchCell::default(); bounds.len()],
        }
    }

    /// Mark `idx` as the search origin: zero cost, parent of itself.
    pub(crate) fn seed(&mut self, idx: usize) {
        let c = &mut self.cells[idx];
        c.g = 0.0;
        c.h = 0.0;
        c.f = 0.0;
        c.parent = idx;
    }

    /// Record a cheaper route into `idx` coming from `parent`.
    ///
    /// Returns `false` (and leaves the cell untouched) unless `g + h` is
    /// strictly lower than the cell's current `f`. A cell with no finite `f`
    /// yet always accepts.
    pub(crate) fn relax(&mut self, idx: usize, parent: usize, g: f64, h: f64) -> bool {
        let f = g + h;
        let c = &mut self.cells[idx];
        if f >= c.f {
            return false;
        }
        c.g = g;
        c.h = h;
        c.f = f;
        c.parent = parent;
        true
    }

    /// Walk parent links from `goal` back to the self-parented source and
    /// return the coordinates in source → goal order.
    ///
    /// The walk is capped at one visit per cell; a longer chain would mean
    /// the parent links form a cycle.
    pub(crate) fn trace_path(&self, goal: usize) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut ci = goal;
        while path.len() < self.cells.len() {
            path.push(self.bounds.coord(ci));
            let parent = self.cells[ci].parent;
            if parent == ci || parent == NO_PARENT {
                debug_assert_eq!(parent, ci, "parent chain broken at {}", self.bounds.coord(ci));
                break;
            }
            ci = parent;
        }
        debug_assert!(
            self.cells[ci].parent == ci,
            "parent chain from {} did not reach the source",
            self.bounds.coord(goal)
        );
        path.reverse();
        path
    }
}
