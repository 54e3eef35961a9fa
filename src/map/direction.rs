//! Cardinal directions, their grid steps and their delta encoding.

use glam::I8Vec2;
use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;

use crate::error::EntityError;

/// The four cardinal directions.
///
/// Rows grow downwards, so `North` moves towards row 0 and `West` towards column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Serialize, Deserialize)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The four cardinal directions.
    /// This is just a convenience constant for iterating over the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Returns the grid step as an I8Vec2, `x` being the column step and `y` the row step.
    pub fn as_ivec2(self) -> I8Vec2 {
        self.into()
    }

    /// Returns the `(delta_column, delta_row)` encoding of the direction.
    pub fn delta(self) -> Delta {
        self.into()
    }

    /// Returns the direction as a usize (0-3). Constant time.
    /// This is useful for indexing into arrays.
    pub const fn as_usize(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

impl From<Direction> for I8Vec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => -I8Vec2::Y,
            Direction::South => I8Vec2::Y,
            Direction::East => I8Vec2::X,
            Direction::West => -I8Vec2::X,
        }
    }
}

/// A `(delta_column, delta_row)` pair as exchanged with hosts.
///
/// The encoding is `North = (1, 0)`, `South = (-1, 0)`, `East = (0, 1)` and `West = (0, -1)`.
/// Construction only checks that both components lie within `-1..=1`; diagonal and zero
/// deltas are representable and simply map to no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Delta {
    column: i8,
    row: i8,
}

impl Delta {
    pub fn new(delta_column: i8, delta_row: i8) -> Result<Self, EntityError> {
        if !(-1..=1).contains(&delta_column) || !(-1..=1).contains(&delta_row) {
            return Err(EntityError::InvalidDelta {
                delta_column: delta_column.into(),
                delta_row: delta_row.into(),
            });
        }
        Ok(Self {
            column: delta_column,
            row: delta_row,
        })
    }

    pub fn column(self) -> i8 {
        self.column
    }

    pub fn row(self) -> i8 {
        self.row
    }

    /// The cardinal direction this delta encodes, if any.
    pub fn direction(self) -> Option<Direction> {
        match (self.column, self.row) {
            (1, 0) => Some(Direction::North),
            (-1, 0) => Some(Direction::South),
            (0, 1) => Some(Direction::East),
            (0, -1) => Some(Direction::West),
            _ => None,
        }
    }
}

impl From<Direction> for Delta {
    fn from(dir: Direction) -> Self {
        let (column, row) = match dir {
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        };
        Self { column, row }
    }
}

impl TryFrom<(i8, i8)> for Direction {
    type Error = EntityError;

    /// Converts a `(delta_column, delta_row)` pair into a direction.
    fn try_from((delta_column, delta_row): (i8, i8)) -> Result<Self, Self::Error> {
        let delta = Delta::new(delta_column, delta_row)?;
        delta.direction().ok_or(EntityError::NonCardinalDelta {
            delta_column: delta_column.into(),
            delta_row: delta_row.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }

    #[test]
    fn test_direction_as_usize_is_unique() {
        let mut seen = [false; 4];
        for dir in Direction::DIRECTIONS {
            assert!(!seen[dir.as_usize()]);
            seen[dir.as_usize()] = true;
        }
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::North.as_ref(), "north");
        assert_eq!(Direction::West.as_ref(), "west");
    }
}
