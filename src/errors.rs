//! Error types for the maze library.
//!
//! Other modules `use crate::errors::*;` to get the `Error`, `ErrorKind`, `ResultExt`
//! and `Result` types that `error_chain!` creates.

use crate::cells::Coordinate;
use error_chain::*;

error_chain! {

    errors {
        InvalidCoordinate(coord: Coordinate) {
            description("coordinate lies outside of the grid")
            display("coordinate {} lies outside of the grid", coord)
        }
        InvalidDimensions(rows: usize, columns: usize) {
            description("grid dimensions must both be at least 1")
            display("invalid grid dimensions {} rows x {} columns", rows, columns)
        }
    }
}
