//! The maze: static walls, pickable dots and spawn cells.

use tracing::debug;

use crate::constants::MapTile;
use crate::error::MapError;
use crate::map::layer::Layer;
use crate::map::parser::RawMaze;
use crate::map::position::{GridSize, Position};
use crate::map::tile::Tile;

/// The playing field of one level.
///
/// Walls never change once built; dots are removed as Pac-Man picks them. A new `Maze`
/// is built from the same [`RawMaze`] whenever a level starts.
#[derive(Debug, Clone)]
pub struct Maze {
    walls: Layer,
    dots: Layer,
    remaining_dots: usize,
    pacman_respawn: Position,
    ghost_respawn: Position,
}

impl Maze {
    /// Builds the wall and dot layers from a validated topology.
    pub fn new(raw: &RawMaze) -> Result<Self, MapError> {
        let mut walls = Layer::new(raw.size());
        let mut dots = Layer::new(raw.size());
        let mut remaining_dots = 0;

        for (position, tile) in raw.iter() {
            match tile {
                MapTile::Wall => walls.set_tile(position, Some(Tile::wall(position, false)))?,
                MapTile::HouseDoor => walls.set_tile(position, Some(Tile::wall(position, true)))?,
                MapTile::Pellet | MapTile::PowerPellet => {
                    dots.set_tile(position, Some(Tile::dot(position, tile == MapTile::PowerPellet)))?;
                    remaining_dots += 1;
                }
                MapTile::Empty | MapTile::PacmanSpawn | MapTile::GhostSpawn => {}
            }
        }

        debug!(
            rows = raw.rows(),
            columns = raw.columns(),
            dots = remaining_dots,
            "Maze built"
        );

        Ok(Self {
            walls,
            dots,
            remaining_dots,
            pacman_respawn: raw.pacman_spawn(),
            ghost_respawn: raw.ghost_spawn(),
        })
    }

    pub fn size(&self) -> GridSize {
        self.walls.size()
    }

    pub fn rows(&self) -> usize {
        self.walls.rows()
    }

    pub fn columns(&self) -> usize {
        self.walls.columns()
    }

    pub fn pacman_respawn(&self) -> Position {
        self.pacman_respawn
    }

    pub fn ghost_respawn(&self) -> Position {
        self.ghost_respawn
    }

    pub fn wall_tile(&self, position: Position) -> Result<Option<&Tile>, MapError> {
        self.walls.get_tile(position)
    }

    pub fn dot_tile(&self, position: Position) -> Result<Option<&Tile>, MapError> {
        self.dots.get_tile(position)
    }

    /// Dots still present in the maze, in row-major order.
    pub fn dots(&self) -> impl Iterator<Item = &Tile> {
        self.dots.tiles()
    }

    /// Decides whether a sprite standing on `current` may step onto `next`.
    ///
    /// `next` must be inside the maze and either free of walls, or a traversable wall
    /// entered from the cell right below it (moving towards row 0). Traversable walls are
    /// thus one-way gates; every other wall is impassable from all sides.
    pub fn can_walk_on(&self, current: Position, next: Position) -> bool {
        match self.walls.get_tile(next) {
            Ok(None) => true,
            Ok(Some(wall)) => {
                wall.is_traversable() && current.column == next.column && current.row.checked_sub(1) == Some(next.row)
            }
            Err(_) => false,
        }
    }

    pub fn can_pick(&self, position: Position) -> bool {
        matches!(self.dots.has_tile(position), Ok(true))
    }

    /// Removes and returns the dot at `position`.
    ///
    /// # Errors
    ///
    /// Returns `MapError::NothingToPick` if [`Maze::can_pick`] is false there.
    pub fn pick(&mut self, position: Position) -> Result<Tile, MapError> {
        if !self.can_pick(position) {
            return Err(MapError::NothingToPick(position));
        }
        let tile = self.dots.take_tile(position)?.ok_or(MapError::NothingToPick(position))?;
        self.remaining_dots -= 1;
        Ok(tile)
    }

    pub fn remaining_dots(&self) -> usize {
        self.remaining_dots
    }

    /// True once every dot of the level has been picked.
    pub fn is_empty(&self) -> bool {
        self.remaining_dots == 0
    }
}
