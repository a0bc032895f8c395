use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// A grid position, `row` counting down from the top and `column` counting right from the left.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Coordinate {
    pub row: u32,
    pub column: u32,
}

impl Coordinate {
    pub fn new(row: u32, column: u32) -> Coordinate {
        Coordinate { row, column }
    }

    /// Both components even: a "room" the maze generator carves between.
    #[inline]
    pub fn is_lattice(&self) -> bool {
        self.row % 2 == 0 && self.column % 2 == 0
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

/// Up, right, down, left.
pub const ALL_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                 CompassPrimary::East,
                                                 CompassPrimary::South,
                                                 CompassPrimary::West];

impl CompassPrimary {
    /// The coordinate `distance` cells away in this direction.
    ///
    /// Returns None if the coordinate is not representable (below zero or overflowing),
    /// it says nothing about whether the coordinate lies within some grid.
    pub fn offset_coordinate(self, coord: Coordinate, distance: u32) -> Option<Coordinate> {
        let Coordinate { row, column } = coord;
        match self {
            CompassPrimary::North => row.checked_sub(distance).map(|r| Coordinate::new(r, column)),
            CompassPrimary::East => column.checked_add(distance).map(|c| Coordinate::new(row, c)),
            CompassPrimary::South => row.checked_add(distance).map(|r| Coordinate::new(r, column)),
            CompassPrimary::West => column.checked_sub(distance).map(|c| Coordinate::new(row, c)),
        }
    }

    /// The four directions in a uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> [CompassPrimary; 4] {
        let mut dirs = ALL_DIRECTIONS;
        dirs.shuffle(rng);
        dirs
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellState {
    Wall,
    Open,
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Wall
    }
}
