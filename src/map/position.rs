//! Grid coordinates and toroidal neighbour arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::map::direction::Direction;

/// The dimensions of a maze grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub columns: usize,
}

impl GridSize {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Returns true if the position lies inside the grid.
    pub const fn contains(self, position: Position) -> bool {
        position.row < self.rows && position.column < self.columns
    }

    /// Total number of cells.
    pub const fn area(self) -> usize {
        self.rows * self.columns
    }
}

/// An immutable (row, column) cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the neighbouring cell in `direction`, wrapping around the edges of a grid of `size`.
    ///
    /// Leaving the grid on one side re-enters it on the opposite side, so the result is
    /// always within `[0, rows) x [0, columns)`.
    pub fn next_position(self, direction: Direction, size: GridSize) -> Position {
        let delta = direction.as_ivec2();
        Position {
            row: wrap(self.row, delta.y, size.rows),
            column: wrap(self.column, delta.x, size.columns),
        }
    }
}

fn wrap(value: usize, delta: i8, len: usize) -> usize {
    (value as isize + delta as isize).rem_euclid(len as isize) as usize
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({};{})", self.row, self.column)
    }
}
