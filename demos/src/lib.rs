//! Shared pieces of the `astar-demo` binary: the built-in grid, argument
//! parsing helpers and terminal rendering.

pub mod render;

use std::path::Path as FsPath;

use gridstar_core::{Coord, Grid, GridError};
use thiserror::Error;

/// Rows of the built-in grid (`1` passable, `0` blocked).
pub const DEMO_ROWS: [[i32; 10]; 9] = [
    [1, 0, 1, 1, 1, 1, 0, 1, 1, 1],
    [1, 1, 1, 0, 1, 1, 1, 0, 1, 1],
    [1, 1, 1, 0, 1, 1, 0, 1, 0, 1],
    [0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    [1, 1, 1, 0, 1, 1, 1, 0, 1, 0],
    [1, 0, 1, 1, 1, 1, 0, 1, 0, 0],
    [1, 0, 0, 0, 0, 1, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 1, 0, 0, 1],
];

/// Default source on the built-in grid: bottom-left corner.
pub const DEMO_SOURCE: Coord = Coord::new(8, 0);

/// Default destination on the built-in grid: top-left corner.
pub const DEMO_DESTINATION: Coord = Coord::new(0, 0);

/// Errors reported by the demo before or around the search itself.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("cannot read grid file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("invalid coordinate {0:?}, expected ROW,COL")]
    Coord(String),
}

/// The 9×10 grid searched when no file is given.
pub fn demo_grid() -> Grid {
    Grid::from_rows(&DEMO_ROWS)
}

/// Load a grid in the text format from `path`.
pub fn load_grid(path: &FsPath) -> Result<Grid, DemoError> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.parse()?)
}

/// Parse `"R,C"` (whitespace around either number allowed) into a [`Coord`].
pub fn parse_coord(s: &str) -> Result<Coord, DemoError> {
    let bad = || DemoError::Coord(s.to_owned());
    let (r, c) = s.split_once(',').ok_or_else(bad)?;
    let row = r.trim().parse().map_err(|_| bad())?;
    let col = c.trim().parse().map_err(|_| bad())?;
    Ok(Coord::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_grid_shape() {
        let g = demo_grid();
        assert_eq!(g.rows(), 9);
        assert_eq!(g.cols(), 10);
        assert!(g.is_passable(DEMO_SOURCE));
        assert!(g.is_passable(DEMO_DESTINATION));
    }

    #[test]
    fn coords() {
        assert_eq!(parse_coord("8,0").unwrap(), Coord::new(8, 0));
        assert_eq!(parse_coord(" 3 , 12 ").unwrap(), Coord::new(3, 12));
        assert_eq!(parse_coord("-1,2").unwrap(), Coord::new(-1, 2));
        assert!(matches!(parse_coord("3"), Err(DemoError::Coord(_))));
        assert!(matches!(parse_coord("a,b"), Err(DemoError::Coord(_))));
    }

    #[test]
    fn load_grid_reports_missing_file() {
        let err = load_grid(FsPath::new("/definitely/not/here.grid")).unwrap_err();
        assert!(matches!(err, DemoError::Io(_)));
    }

    #[test]
    fn load_grid_parses_file() {
        let path = std::env::temp_dir().join(format!("gridstar-demo-{}.grid", std::process::id()));
        std::fs::write(&path, "..#\n#..\n").unwrap();
        let g = load_grid(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(g.rows(), 2);
        assert!(!g.is_passable(Coord::new(0, 2)));
    }
}
