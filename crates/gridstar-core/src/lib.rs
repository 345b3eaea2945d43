//! **gridstar-core** — occupancy grid and geometry types.
//!
//! This crate provides the value types shared across the *gridstar*
//! workspace: grid coordinates, grid bounds, cell states and the immutable
//! occupancy [`Grid`] consumed by the path finder.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::CellState;
pub use geom::{Bounds, Coord};
pub use grid::{Grid, GridError};
