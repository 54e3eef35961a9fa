//! Read-only view of a game, for renderers and tests.

use serde::Serialize;

use crate::entity::{EntityId, Sprite};
use crate::map::direction::Direction;
use crate::map::position::Position;
use crate::map::tile::Tile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpriteSnapshot {
    pub id: EntityId,
    pub position: Position,
    pub direction: Direction,
    pub eatable: bool,
    pub dead: bool,
    pub moving: bool,
}

impl From<&Sprite> for SpriteSnapshot {
    fn from(sprite: &Sprite) -> Self {
        Self {
            id: sprite.id(),
            position: sprite.position(),
            direction: sprite.direction(),
            eatable: sprite.is_eatable(),
            dead: sprite.is_dead(),
            moving: sprite.is_moving(),
        }
    }
}

/// Everything a view needs after a tick.
///
/// `removed_dot` is the single pickup consumed during the last tick, so a renderer can erase
/// exactly that cell without rescanning the maze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub level: u32,
    pub score: u32,
    pub high_score: u32,
    pub lives: u8,
    pub remaining_dots: usize,
    pub removed_dot: Option<Tile>,
    pub feeding: bool,
    pub game_over: bool,
    pub level_succeeded: bool,
    pub pacman: SpriteSnapshot,
    pub ghosts: Vec<SpriteSnapshot>,
}
