use gridstar_core::{Bounds, Coord, Grid};

/// Read-only occupancy interface consumed by the searches.
///
/// Implementations must not change while a search borrows them.
pub trait Occupancy {
    /// Dimensions of the searchable area.
    fn bounds(&self) -> Bounds;

    /// Whether `c` can be entered. Only called for coordinates inside
    /// [`bounds`](Occupancy::bounds).
    fn is_passable(&self, c: Coord) -> bool;
}

impl Occupancy for Grid {
    #[inline]
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    #[inline]
    fn is_passable(&self, c: Coord) -> bool {
        Grid::is_passable(self, c)
    }
}
