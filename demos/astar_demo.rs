//! Run an A* search and print the path.
//!
//! Run: cargo run --bin astar-demo -- [--grid FILE] [--from R,C] [--to R,C]

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gridstar_core::Coord;
use gridstar_demos::render::{draw_map, write_path};
use gridstar_demos::{DEMO_DESTINATION, DEMO_SOURCE, DemoError, demo_grid, load_grid, parse_coord};
use gridstar_paths::{Heuristic, PathFinder};
use log::{error, info};

#[derive(Parser)]
#[command(name = "astar-demo")]
#[command(about = "Find a least-cost 8-directional path on an occupancy grid")]
struct Args {
    /// Grid file, one line per row ('.'/'1' passable, '#'/'0' blocked).
    /// Without it the built-in 9x10 grid is used.
    #[arg(short, long, value_name = "FILE")]
    grid: Option<PathBuf>,

    /// Source cell
    #[arg(short, long, value_name = "R,C", value_parser = parse_coord_arg)]
    from: Option<Coord>,

    /// Destination cell
    #[arg(short, long, value_name = "R,C", value_parser = parse_coord_arg)]
    to: Option<Coord>,

    /// Use the Chebyshev estimate, which always yields a shortest path
    #[arg(long)]
    chebyshev: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn parse_coord_arg(s: &str) -> Result<Coord, String> {
    parse_coord(s).map_err(|e| e.to_string())
}

fn run(args: &Args) -> Result<bool, DemoError> {
    let grid = match &args.grid {
        Some(path) => load_grid(path)?,
        None => demo_grid(),
    };
    let source = args.from.unwrap_or(DEMO_SOURCE);
    let destination = args.to.unwrap_or(DEMO_DESTINATION);
    info!("searching {} grid from {source} to {destination}", grid.bounds());

    let heuristic = if args.chebyshev {
        Heuristic::Chebyshev
    } else {
        Heuristic::Euclidean
    };
    let (result, stats) = PathFinder::new(&grid)
        .with_heuristic(heuristic)
        .search_with_stats(source, destination);
    info!("{stats}");

    let mut stdout = io::stdout().lock();
    match result {
        Ok(path) => {
            write_path(&mut stdout, &path)?;
            draw_map(&mut stdout, &grid, Some(&path), !args.no_color)?;
            Ok(true)
        }
        Err(failure) => {
            writeln!(stdout, "{}", capitalize(&failure.to_string()))?;
            Ok(false)
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
