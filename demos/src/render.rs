//! Terminal output for search results.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use gridstar_core::{Coord, Grid};
use gridstar_paths::Path;

/// What a rendered map cell shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Source,
    Destination,
    Route,
    Wall,
    Floor,
}

impl Mark {
    fn glyph(self) -> char {
        match self {
            Mark::Source => 'S',
            Mark::Destination => 'D',
            Mark::Route => '*',
            Mark::Wall => '#',
            Mark::Floor => '.',
        }
    }

    fn color(self) -> Color {
        match self {
            Mark::Source => Color::Green,
            Mark::Destination => Color::Red,
            Mark::Route => Color::Cyan,
            Mark::Wall => Color::DarkGrey,
            Mark::Floor => Color::Reset,
        }
    }
}

/// Write the found-path report: a header line, then the `-> (r,c)` chain.
pub fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "The destination cell is found")?;
    writeln!(out, "The Path is ")?;
    writeln!(out, "{path}")
}

/// Draw `grid` with the cells of `path` marked.
///
/// With `color` off the output is plain text, one line per grid row.
pub fn draw_map<W: Write>(
    out: &mut W,
    grid: &Grid,
    path: Option<&Path>,
    color: bool,
) -> io::Result<()> {
    let route: HashSet<Coord> = path.map(|p| p.iter().copied().collect()).unwrap_or_default();
    let source = path.and_then(Path::source);
    let destination = path.and_then(Path::destination);

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = Coord::new(row, col);
            let mark = if Some(c) == source {
                Mark::Source
            } else if Some(c) == destination {
                Mark::Destination
            } else if route.contains(&c) {
                Mark::Route
            } else if grid.is_passable(c) {
                Mark::Floor
            } else {
                Mark::Wall
            };

            if color && mark != Mark::Floor {
                queue!(out, SetForegroundColor(mark.color()))?;
                if mark != Mark::Wall {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                queue!(
                    out,
                    Print(mark.glyph()),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
            } else {
                queue!(out, Print(mark.glyph()))?;
            }
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}
