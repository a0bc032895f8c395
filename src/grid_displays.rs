use itertools::Itertools;
use std::fmt;

use crate::cells::{CellState, Coordinate};
use crate::grid::Grid;

pub const WALL: &str = "#";
pub const OPEN: &str = ".";
pub const START: &str = "S";
pub const END: &str = "E";

pub trait GridDisplay {
    /// Text to show in place of the cell's wall/open glyph, if any.
    fn render_cell_body(&self, _: Coordinate) -> Option<&'static str> {
        None
    }
}

/// Marks the path start with `S` and the path end with `E`, whatever the state of those cells.
/// The start marker wins if they are the same cell.
#[derive(Debug, Copy, Clone)]
pub struct StartEndPointsDisplay {
    start: Coordinate,
    end: Coordinate,
}

impl StartEndPointsDisplay {
    pub fn new(start: Coordinate, end: Coordinate) -> StartEndPointsDisplay {
        StartEndPointsDisplay { start, end }
    }
}

impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: Coordinate) -> Option<&'static str> {
        if coord == self.start {
            Some(START)
        } else if coord == self.end {
            Some(END)
        } else {
            None
        }
    }
}

/// One line per row, cells separated by a space, every line newline terminated.
pub fn render_text(grid: &Grid, grid_display: Option<&dyn GridDisplay>) -> String {
    let mut output = String::with_capacity(grid.size() * 2);

    for row in grid.iter_row() {
        let line = row.into_iter()
            .map(|coord| {
                grid_display.and_then(|displayer| displayer.render_cell_body(coord))
                    .unwrap_or_else(|| cell_glyph(grid, coord))
            })
            .join(" ");
        output.push_str(&line);
        output.push('\n');
    }

    output
}

fn cell_glyph(grid: &Grid, coord: Coordinate) -> &'static str {
    match grid.cell_state(coord) {
        Some(CellState::Open) => OPEN,
        _ => WALL,
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self, None))
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{ColumnLength, RowLength};

    fn gc(row: u32, column: u32) -> Coordinate {
        Coordinate::new(row, column)
    }

    fn sample_grid() -> Grid {
        let mut g = Grid::new(RowLength(3), ColumnLength(2)).unwrap();
        for &coord in &[gc(0, 0), gc(0, 1), gc(1, 1), gc(1, 2)] {
            g.set_cell_state(coord, CellState::Open).unwrap();
        }
        g
    }

    #[test]
    fn plain_grid_display() {
        assert_eq!(format!("{}", sample_grid()), ". . #\n# . .\n");
    }

    #[test]
    fn all_wall_grid_display() {
        let g = Grid::square(2).unwrap();
        assert_eq!(g.to_string(), "# #\n# #\n");
    }

    #[test]
    fn start_and_end_marked_regardless_of_state() {
        let g = sample_grid();
        let display = StartEndPointsDisplay::new(g.top_left(), g.bottom_right());
        assert_eq!(render_text(&g, Some(&display)), "S . #\n# . E\n");

        let on_walls = StartEndPointsDisplay::new(gc(0, 2), gc(1, 0));
        assert_eq!(render_text(&g, Some(&on_walls)), ". . S\nE . .\n");
    }

    #[test]
    fn start_wins_over_end() {
        let g = Grid::square(1).unwrap();
        let display = StartEndPointsDisplay::new(gc(0, 0), gc(0, 0));
        assert_eq!(render_text(&g, Some(&display)), "S\n");
    }

    #[test]
    fn default_display_changes_nothing() {
        struct Plain;
        impl GridDisplay for Plain {}

        let g = sample_grid();
        assert_eq!(render_text(&g, Some(&Plain)), g.to_string());
    }
}
