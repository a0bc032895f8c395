use bit_set::BitSet;
use log::{debug, trace};
use rand::Rng;

use crate::cells::{CellState, CompassPrimary, Coordinate};
use crate::errors::*;
use crate::grid::Grid;

/// Carving moves two cells at a time so rooms stay on the even lattice with one wall cell between them.
const CARVE_STEP: u32 = 2;

/// One cell on the carving path, with the directions still left to try from it.
struct CarveFrame {
    coord: Coordinate,
    directions: [CompassPrimary; 4],
    next_direction: usize,
}

/// Apply the recursive backtracker maze generation algorithm to a grid, starting from `start`.
///
/// A randomised depth first search: from the current cell pick the unvisited neighbours
/// two cells away in a random order, knocking down the wall cell in between before moving on.
/// When every direction from a cell has been tried we backtrack to the previous cell.
/// The result is a perfect maze (a spanning tree) over every lattice cell reachable from `start`.
///
/// The walk uses an explicit stack rather than the call stack, so grid size is limited by memory
/// only. Cells are visited, and `rng` is consumed, in exactly the order the recursive
/// formulation would: the direction order for a cell is drawn when the cell is entered and the
/// visited check for a direction happens when that direction comes up.
///
/// Fails without touching the grid if `start` lies outside it.
pub fn recursive_backtracker<R>(grid: &mut Grid, start: Coordinate, rng: &mut R) -> Result<()>
    where R: Rng + ?Sized
{
    if !grid.is_valid_coordinate(start) {
        return Err(ErrorKind::InvalidCoordinate(start).into());
    }

    let mut visited = BitSet::with_capacity(grid.size());
    let mut stack = vec![enter_cell(grid, &mut visited, start, rng)?];
    let mut carved_links = 0;

    while let Some(frame) = stack.last_mut() {

        if frame.next_direction == frame.directions.len() {
            trace!("backtrack from {}", frame.coord);
            stack.pop();
            continue;
        }
        let direction = frame.directions[frame.next_direction];
        frame.next_direction += 1;
        let current = frame.coord;

        let unvisited_neighbour = grid.neighbour_at_distance(current, direction, CARVE_STEP)
            .filter(|&coord| !is_visited(grid, &visited, coord));

        if let Some(next_coord) = unvisited_neighbour {
            if let Some(wall_coord) = grid.neighbour_at_direction(current, direction) {
                grid.set_cell_state(wall_coord, CellState::Open)?;
                carved_links += 1;
            }
            let next_frame = enter_cell(grid, &mut visited, next_coord, rng)?;
            stack.push(next_frame);
        }
    }

    debug!("recursive backtracker carved {} cells and {} links from {}",
           visited.len(), carved_links, start);
    Ok(())
}

fn enter_cell<R>(grid: &mut Grid,
                 visited: &mut BitSet,
                 coord: Coordinate,
                 rng: &mut R)
                 -> Result<CarveFrame>
    where R: Rng + ?Sized
{
    let index = grid.grid_coordinate_to_index(coord)
        .ok_or_else(|| Error::from(ErrorKind::InvalidCoordinate(coord)))?;
    visited.insert(index);
    grid.set_cell_state(coord, CellState::Open)?;

    Ok(CarveFrame {
        coord,
        directions: CompassPrimary::shuffled(rng),
        next_direction: 0,
    })
}

#[inline]
fn is_visited(grid: &Grid, visited: &BitSet, coord: Coordinate) -> bool {
    grid.grid_coordinate_to_index(coord).map_or(false, |index| visited.contains(index))
}
