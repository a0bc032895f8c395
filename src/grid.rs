use log::trace;
use smallvec::SmallVec;
use std::fmt;
use std::u32;

use crate::cells::{CellState, CompassPrimary, Coordinate, ALL_DIRECTIONS};
use crate::errors::*;
use crate::units::{ColumnLength, ColumnsCount, RowLength, RowsCount};

pub type CoordinateSmallVec = SmallVec<[Coordinate; 4]>;

/// A fixed size rectangle of cells, each either a wall or open.
///
/// Cells are stored row major. The dimensions never change after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    row_length: usize,
    column_length: usize,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: rows: {:?}, columns: {:?}, open: {:?}",
               self.column_length, self.row_length, self.open_cells_count())
    }
}

impl Grid {
    /// A grid where every cell is a wall.
    ///
    /// Fails if either dimension is zero or too large to address with a `Coordinate`.
    pub fn new(row_length: RowLength, column_length: ColumnLength) -> Result<Grid> {
        let (RowLength(columns), ColumnLength(rows)) = (row_length, column_length);
        let max_side = u32::MAX as usize;
        if columns == 0 || rows == 0 || columns > max_side || rows > max_side {
            return Err(ErrorKind::InvalidDimensions(rows, columns).into());
        }
        let cells_count = rows.checked_mul(columns)
            .ok_or_else(|| Error::from(ErrorKind::InvalidDimensions(rows, columns)))?;

        trace!("new {}x{} grid", rows, columns);
        Ok(Grid {
            cells: vec![CellState::Wall; cells_count],
            row_length: columns,
            column_length: rows,
        })
    }

    /// An `n * n` grid.
    pub fn square(n: usize) -> Result<Grid> {
        Grid::new(RowLength(n), ColumnLength(n))
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        RowsCount(self.column_length)
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.row_length)
    }

    #[inline]
    pub fn row_length(&self) -> RowLength {
        RowLength(self.row_length)
    }

    #[inline]
    pub fn column_length(&self) -> ColumnLength {
        ColumnLength(self.column_length)
    }

    /// The fixed start corner.
    #[inline]
    pub fn top_left(&self) -> Coordinate {
        Coordinate::new(0, 0)
    }

    /// The fixed goal corner.
    #[inline]
    pub fn bottom_right(&self) -> Coordinate {
        Coordinate::new((self.column_length - 1) as u32, (self.row_length - 1) as u32)
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Coordinate) -> bool {
        (coord.row as usize) < self.column_length && (coord.column as usize) < self.row_length
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Coordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row as usize * self.row_length + coord.column as usize)
        } else {
            None
        }
    }

    pub fn cell_state(&self, coord: Coordinate) -> Option<CellState> {
        self.grid_coordinate_to_index(coord).map(|index| self.cells[index])
    }

    /// Invalid coordinates are never open.
    #[inline]
    pub fn is_open(&self, coord: Coordinate) -> bool {
        self.cell_state(coord) == Some(CellState::Open)
    }

    pub fn set_cell_state(&mut self, coord: Coordinate, state: CellState) -> Result<()> {
        let index = self.grid_coordinate_to_index(coord)
            .ok_or_else(|| Error::from(ErrorKind::InvalidCoordinate(coord)))?;
        self.cells[index] = state;
        Ok(())
    }

    pub fn open_cells_count(&self) -> usize {
        self.cells.iter().filter(|&&state| state == CellState::Open).count()
    }

    /// The cell `distance` steps away in `direction`, if it lies within the grid.
    pub fn neighbour_at_distance(&self,
                                 coord: Coordinate,
                                 direction: CompassPrimary,
                                 distance: u32)
                                 -> Option<Coordinate> {
        direction.offset_coordinate(coord, distance)
            .filter(|&neighbour_coord| self.is_valid_coordinate(neighbour_coord))
    }

    #[inline]
    pub fn neighbour_at_direction(&self,
                                  coord: Coordinate,
                                  direction: CompassPrimary)
                                  -> Option<Coordinate> {
        self.neighbour_at_distance(coord, direction, 1)
    }

    /// Cells that are to the North, East, South or West of a particular cell, whether open or not.
    pub fn neighbours(&self, coord: Coordinate) -> CoordinateSmallVec {
        ALL_DIRECTIONS.iter()
            .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
            .collect()
    }

    /// Every coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> {
        let row_length = self.row_length;
        (0..self.size()).map(move |index| {
            Coordinate::new((index / row_length) as u32, (index % row_length) as u32)
        })
    }

    /// Each row's coordinates, top row first.
    pub fn iter_row(&self) -> impl Iterator<Item = Vec<Coordinate>> {
        let row_length = self.row_length;
        (0..self.column_length).map(move |row| {
            (0..row_length).map(|column| Coordinate::new(row as u32, column as u32)).collect()
        })
    }
}
