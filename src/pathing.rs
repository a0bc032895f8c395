use fnv::FnvHashSet;
use log::debug;
use std::collections::VecDeque;

use crate::cells::Coordinate;
use crate::errors::*;
use crate::grid::Grid;

/// Is there a path of open cells, moving one step North, East, South or West at a time,
/// from `start` to `goal`?
///
/// A breadth first search over the open cells. Each reachable open cell is expanded at most once
/// and the search stops as soon as `goal` comes off the frontier.
///
/// A start or goal outside the grid is an error. A start or goal that is a wall cannot be on a
/// path of open cells, so there is no path to it.
pub fn solve(grid: &Grid, start: Coordinate, goal: Coordinate) -> Result<bool> {

    for &coord in &[start, goal] {
        if !grid.is_valid_coordinate(coord) {
            return Err(ErrorKind::InvalidCoordinate(coord).into());
        }
    }
    if !grid.is_open(start) || !grid.is_open(goal) {
        debug!("no path from {} to {}: an end point is a wall", start, goal);
        return Ok(false);
    }

    // `seen` holds every cell ever queued, so no cell is queued twice.
    let mut seen = FnvHashSet::with_capacity_and_hasher(grid.size(), Default::default());
    let mut frontier = VecDeque::new();
    seen.insert(start);
    frontier.push_back(start);

    while let Some(coord) = frontier.pop_front() {
        if coord == goal {
            debug!("path found from {} to {} after seeing {} cells", start, goal, seen.len());
            return Ok(true);
        }

        for &neighbour in grid.neighbours(coord).iter() {
            if grid.is_open(neighbour) && seen.insert(neighbour) {
                frontier.push_back(neighbour);
            }
        }
    }

    debug!("no path from {} to {}, {} cells reachable", start, goal, seen.len());
    Ok(false)
}
