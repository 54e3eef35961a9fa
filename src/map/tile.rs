//! Static cell contents: walls and dots.

use serde::Serialize;

use crate::map::position::Position;

/// What a static tile is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TileKind {
    /// Blocks entry, unless `traversable` in which case it is a one-way gate.
    Wall { traversable: bool },
    /// A pickup; an energizer opens the feeding window.
    Dot { energizer: bool },
}

/// An immutable piece of maze content, identified by the cell it was placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    pub position: Position,
    pub kind: TileKind,
}

impl Tile {
    pub const fn wall(position: Position, traversable: bool) -> Self {
        Self {
            position,
            kind: TileKind::Wall { traversable },
        }
    }

    pub const fn dot(position: Position, energizer: bool) -> Self {
        Self {
            position,
            kind: TileKind::Dot { energizer },
        }
    }

    /// Stable identifier derived from the grid position, e.g. `(2;3)`.
    pub fn id(&self) -> String {
        self.position.to_string()
    }

    pub const fn is_wall(&self) -> bool {
        matches!(self.kind, TileKind::Wall { .. })
    }

    pub const fn is_traversable(&self) -> bool {
        matches!(self.kind, TileKind::Wall { traversable: true })
    }

    pub const fn is_dot(&self) -> bool {
        matches!(self.kind, TileKind::Dot { .. })
    }

    pub const fn is_energizer(&self) -> bool {
        matches!(self.kind, TileKind::Dot { energizer: true })
    }
}
