//! **maze_solver** carves perfect mazes with a randomised recursive backtracker and answers
//! whether the bottom right corner can be reached from the top left one.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod pathing;
pub mod renderers;
pub mod units;
