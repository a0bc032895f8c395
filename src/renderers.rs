use crate::cells::Coordinate;
use crate::grid::Grid;
use crate::grid_displays::{render_text, StartEndPointsDisplay};

pub const HEADER: &str = "Generated Maze:";
pub const PATH_FOUND: &str = "Path Found!";
pub const NO_PATH_FOUND: &str = "No Path Found!";

/// The full program output: a blank line, the header, the maze with its start and end marked,
/// a blank line and the path status.
pub fn text_report(grid: &Grid, start: Coordinate, end: Coordinate, path_found: bool) -> String {
    let display = StartEndPointsDisplay::new(start, end);
    let status = if path_found { PATH_FOUND } else { NO_PATH_FOUND };

    format!("\n{}\n{}\n{}\n", HEADER, render_text(grid, Some(&display)), status)
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators;
    use crate::pathing;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn report_for_square(n: usize, seed: u64) -> String {
        let mut g = Grid::square(n).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let (start, end) = (g.top_left(), g.bottom_right());
        generators::recursive_backtracker(&mut g, start, &mut rng).unwrap();
        let found = pathing::solve(&g, start, end).unwrap();
        text_report(&g, start, end, found)
    }

    #[test]
    fn report_layout() {
        let g = Grid::new(crate::units::RowLength(2), crate::units::ColumnLength(1)).unwrap();
        let report = text_report(&g, g.top_left(), g.bottom_right(), false);
        assert_eq!(report, "\nGenerated Maze:\nS E\n\nNo Path Found!\n");
    }

    #[test]
    fn ten_by_ten_has_no_path() {
        let report = report_for_square(10, 42);
        let lines = report.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 1 + 1 + 10 + 1 + 1);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], HEADER);
        for row in &lines[2..12] {
            let tokens = row.split(' ').collect::<Vec<_>>();
            assert_eq!(tokens.len(), 10);
            assert!(tokens.iter().all(|t| ["S", "E", "#", "."].contains(t)));
        }
        assert!(lines[2].starts_with("S "));
        assert!(lines[11].ends_with(" E"));
        assert_eq!(lines[12], "");
        assert_eq!(lines[13], NO_PATH_FOUND);
    }

    #[test]
    fn fifteen_by_fifteen_has_a_path() {
        let report = report_for_square(15, 42);
        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1 + 1 + 15 + 1 + 1);
        assert!(lines[2].starts_with("S "));
        assert!(lines[16].ends_with(" E"));
        assert_eq!(lines[18], PATH_FOUND);
    }

    #[test]
    fn single_cell_report() {
        assert_eq!(report_for_square(1, 0), "\nGenerated Maze:\nS\n\nPath Found!\n");
    }
}
