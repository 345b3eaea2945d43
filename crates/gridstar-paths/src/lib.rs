//! A* least-cost path search on 2D occupancy grids.
//!
//! Movement is 8-directional and every move, diagonal or not, costs one
//! step. The entry points are the free function [`search`] and the
//! [`PathFinder`] it wraps:
//!
//! ```
//! use gridstar_core::{Coord, Grid};
//! use gridstar_paths::search;
//!
//! let grid: Grid = "\
//!     ..#
//!     .#.
//!     ...".parse().unwrap();
//! let path = search(&grid, Coord::new(0, 0), Coord::new(1, 2)).unwrap();
//! assert_eq!(path.steps(), 2);
//! ```
//!
//! Each search allocates its own frontier and cost table and drops them on
//! return; nothing is shared between calls. [`distance_map`] computes exact
//! step counts by breadth-first search and serves as a reference for the
//! cost of A* results.
//!
//! | Item | Role |
//! |---|---|
//! | [`Occupancy`] | Read-only grid interface, implemented for [`gridstar_core::Grid`] |
//! | [`Heuristic`] | Cost-to-destination estimate ordering the frontier |
//! | [`SearchFailure`] | Why no path was returned |
//! | [`SearchStats`] | Counters of one search run |

mod astar;
mod bfs;
mod distance;
mod error;
mod frontier;
mod path;
mod table;
mod traits;

pub use astar::{PathFinder, SearchStats, search};
pub use bfs::{DistanceMap, UNREACHABLE, distance_map};
pub use distance::{Heuristic, chebyshev, euclidean};
pub use error::SearchFailure;
pub use path::{Path, STEP_COST};
pub use traits::Occupancy;
