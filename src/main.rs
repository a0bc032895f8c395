use docopt::Docopt;
use log::info;
use maze_solver::{
    generators,
    grid::Grid,
    pathing,
    renderers,
    units::{ColumnLength, RowLength},
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;

const USAGE: &str = "Maze Solver

Carves a maze and reports whether the bottom right corner is reachable from the top left.
Set RUST_LOG (e.g. RUST_LOG=debug) to log to stderr.

Usage:
    maze_solver_driver -h | --help
    maze_solver_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The grid width in a w*h grid [default: 10].
    --grid-height=<h>      The grid height in a w*h grid [default: 10].
    --seed=<s>             Seed for the maze carving random number generator. Random if not given.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::maze_solver::errors::Error, ::maze_solver::errors::ErrorKind);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };
    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("carving a {}x{} maze with seed {}", width, height, seed);

    let mut maze_grid = Grid::new(RowLength(width), ColumnLength(height))
        .chain_err(|| "Failed to create the maze grid")?;
    let start = maze_grid.top_left();
    let end = maze_grid.bottom_right();

    let mut rng = XorShiftRng::seed_from_u64(seed);
    generators::recursive_backtracker(&mut maze_grid, start, &mut rng)?;
    info!("{} of {} cells open", maze_grid.open_cells_count(), maze_grid.size());

    let path_found = pathing::solve(&maze_grid, start, end)?;
    info!("path from {} to {}: {}", start, end, path_found);

    print!("{}", renderers::text_report(&maze_grid, start, end, path_found));

    Ok(())
}
