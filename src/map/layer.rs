//! Fixed-size, bounds-checked grid of optional tiles.

use crate::error::MapError;
use crate::map::position::{GridSize, Position};
use crate::map::tile::Tile;

/// A `rows x columns` grid where every cell holds at most one [`Tile`].
///
/// Every accessor fails with [`MapError::OutOfBounds`] when handed a position outside the grid.
/// Tiles are never mutated in place; a slot is only ever overwritten whole.
#[derive(Debug, Clone)]
pub struct Layer {
    size: GridSize,
    cells: Vec<Option<Tile>>,
}

impl Layer {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![None; size.area()],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn columns(&self) -> usize {
        self.size.columns
    }

    /// Returns true if the position lies inside this layer.
    pub fn contains(&self, position: Position) -> bool {
        self.size.contains(position)
    }

    /// Overwrites the slot at `position`; `None` empties it.
    pub fn set_tile(&mut self, position: Position, tile: Option<Tile>) -> Result<(), MapError> {
        let index = self.index(position)?;
        self.cells[index] = tile;
        Ok(())
    }

    pub fn get_tile(&self, position: Position) -> Result<Option<&Tile>, MapError> {
        let index = self.index(position)?;
        Ok(self.cells[index].as_ref())
    }

    pub fn has_tile(&self, position: Position) -> Result<bool, MapError> {
        Ok(self.get_tile(position)?.is_some())
    }

    /// Empties the slot at `position`, returning what it held.
    pub fn take_tile(&mut self, position: Position) -> Result<Option<Tile>, MapError> {
        let index = self.index(position)?;
        Ok(self.cells[index].take())
    }

    /// Iterates over every occupied slot in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    fn index(&self, position: Position) -> Result<usize, MapError> {
        if !self.contains(position) {
            return Err(MapError::OutOfBounds {
                position,
                rows: self.size.rows,
                columns: self.size.columns,
            });
        }
        Ok(position.row * self.size.columns + position.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut layer = Layer::new(GridSize::new(3, 4));
        let pos = Position::new(2, 3);
        assert_eq!(layer.has_tile(pos), Ok(false));

        layer.set_tile(pos, Some(Tile::dot(pos, false))).unwrap();
        assert_eq!(layer.has_tile(pos), Ok(true));
        assert_eq!(layer.get_tile(pos).unwrap(), Some(&Tile::dot(pos, false)));

        layer.set_tile(pos, None).unwrap();
        assert_eq!(layer.has_tile(pos), Ok(false));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut layer = Layer::new(GridSize::new(3, 4));
        let outside = Position::new(3, 0);
        let expected = MapError::OutOfBounds {
            position: outside,
            rows: 3,
            columns: 4,
        };
        assert_eq!(layer.get_tile(outside), Err(expected.clone()));
        assert_eq!(layer.has_tile(outside), Err(expected.clone()));
        assert_eq!(layer.set_tile(outside, None), Err(expected));
    }
}
