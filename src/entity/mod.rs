//! Mobile entities: Pac-Man and the four ghosts.
//!
//! Both share one [`Sprite`] record; what differs between them lives in [`EntityRole`].

use std::fmt;

use serde::Serialize;
use strum_macros::{AsRefStr, EnumIter};

use crate::error::EntityError;
use crate::map::direction::Direction;
use crate::map::position::{GridSize, Position};

pub mod ghost;

pub use ghost::SpawnRegion;

/// The four classic ghost types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, AsRefStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GhostType {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

/// Stable identity of a mobile entity within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityId {
    Pacman,
    Ghost(GhostType),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Pacman => f.write_str("pacman"),
            EntityId::Ghost(ghost_type) => f.write_str(ghost_type.as_ref()),
        }
    }
}

/// Role-specific state carried by a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRole {
    /// The player; loses a life every time it is eaten.
    Player { lives: u8 },
    /// A ghost, which must leave its house before wandering.
    Pursuer { spawn: SpawnRegion },
}

/// How [`Sprite::can_eat`] treats two sprites that swapped cells during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionRule {
    /// Crossing paths only counts when the prey is vulnerable.
    #[default]
    Strict,
    /// Crossing paths always counts, whatever the prey's vulnerability.
    Legacy,
}

/// A mobile entity on the grid.
///
/// `previous_position` is the cell held right before the last successful move, and is what
/// detects two sprites crossing each other between two ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    id: EntityId,
    role: EntityRole,
    position: Position,
    previous_position: Position,
    initial_position: Position,
    direction: Direction,
    initial_direction: Direction,
    asked_direction: Option<Direction>,
    is_dead: bool,
    is_moving: bool,
    eatable: bool,
}

impl Sprite {
    fn new(id: EntityId, role: EntityRole, position: Position, direction: Direction, eatable: bool) -> Self {
        Self {
            id,
            role,
            position,
            previous_position: position,
            initial_position: position,
            direction,
            initial_direction: direction,
            asked_direction: None,
            is_dead: false,
            is_moving: false,
            eatable,
        }
    }

    /// Creates Pac-Man; it is always vulnerable to non-frightened ghosts.
    pub fn pacman(position: Position, direction: Direction, lives: u8) -> Self {
        Self::new(EntityId::Pacman, EntityRole::Player { lives }, position, direction, true)
    }

    /// Creates a ghost facing north, invulnerable until a feeding window opens.
    pub fn ghost(ghost_type: GhostType, position: Position, spawn: SpawnRegion) -> Self {
        Self::new(
            EntityId::Ghost(ghost_type),
            EntityRole::Pursuer { spawn },
            position,
            Direction::North,
            false,
        )
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn role(&self) -> &EntityRole {
        &self.role
    }

    pub fn ghost_type(&self) -> Option<GhostType> {
        match self.id {
            EntityId::Ghost(ghost_type) => Some(ghost_type),
            EntityId::Pacman => None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn previous_position(&self) -> Position {
        self.previous_position
    }

    pub fn initial_position(&self) -> Position {
        self.initial_position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn initial_direction(&self) -> Direction {
        self.initial_direction
    }

    /// The pending direction change, if one was requested since the last respawn.
    pub fn asked_direction(&self) -> Option<Direction> {
        self.asked_direction
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub fn is_eatable(&self) -> bool {
        self.eatable
    }

    /// Remaining lives for the player, `None` for ghosts.
    pub fn lives(&self) -> Option<u8> {
        match self.role {
            EntityRole::Player { lives } => Some(lives),
            EntityRole::Pursuer { .. } => None,
        }
    }

    /// True while a ghost stands inside its house. The player is never in a spawn region.
    pub fn in_spawn(&self) -> bool {
        match self.role {
            EntityRole::Pursuer { spawn } => spawn.contains(self.position),
            EntityRole::Player { .. } => false,
        }
    }

    /// The cell one step ahead in `direction`, wrapped to `size`.
    pub fn position_towards(&self, direction: Direction, size: GridSize) -> Position {
        self.position.next_position(direction, size)
    }

    /// Steps one cell forward in the current direction.
    ///
    /// No legality check happens here; the caller must have consulted the maze.
    pub fn move_forward(&mut self, size: GridSize) {
        self.is_moving = true;
        self.previous_position = self.position;
        self.position = self.position.next_position(self.direction, size);
    }

    /// Records a pending direction change, validated lazily by the engine.
    pub fn ask_to_change_direction(&mut self, direction: Direction) {
        self.asked_direction = Some(direction);
    }

    /// Commits the pending direction change.
    ///
    /// The request stays pending afterwards; only [`Sprite::respawn`] clears it.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::NoDirectionRequested` if nothing was asked.
    pub fn change_direction(&mut self) -> Result<(), EntityError> {
        let direction = self.asked_direction.ok_or(EntityError::NoDirectionRequested(self.id))?;
        self.direction = direction;
        Ok(())
    }

    pub fn notify_is_blocked(&mut self) {
        self.is_moving = false;
    }

    /// Marks the sprite dead; the player also loses a life.
    pub fn has_been_eaten(&mut self) {
        self.is_dead = true;
        if let EntityRole::Player { lives } = &mut self.role {
            *lives = lives.saturating_sub(1);
        }
    }

    /// Puts the sprite back on its initial cell and direction, alive and idle.
    ///
    /// The player comes back vulnerable, ghosts come back invulnerable.
    pub fn respawn(&mut self) {
        self.is_dead = false;
        self.is_moving = false;
        self.position = self.initial_position;
        self.previous_position = self.initial_position;
        self.direction = self.initial_direction;
        self.asked_direction = None;
        self.eatable = matches!(self.role, EntityRole::Player { .. });
    }

    pub fn become_eatable(&mut self) {
        self.eatable = true;
    }

    pub fn become_uneatable(&mut self) {
        self.eatable = false;
    }

    /// Whether this sprite catches `other` this tick.
    ///
    /// A vulnerable `other` standing on this sprite's cell is always caught. An `other` whose
    /// previous cell is this sprite's current cell crossed paths with it; under
    /// [`CollisionRule::Strict`] that only counts when `other` is vulnerable.
    pub fn can_eat(&self, other: &Sprite, rule: CollisionRule) -> bool {
        let same_cell = other.position == self.position;
        let crossed = other.previous_position == self.position;
        match rule {
            CollisionRule::Strict => other.eatable && (same_cell || crossed),
            CollisionRule::Legacy => (other.eatable && same_cell) || crossed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: GridSize = GridSize::new(5, 5);

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId::Pacman.to_string(), "pacman");
        assert_eq!(EntityId::Ghost(GhostType::Clyde).to_string(), "clyde");
    }

    #[test]
    fn test_change_direction_requires_request() {
        let mut pacman = Sprite::pacman(Position::new(1, 1), Direction::West, 2);
        assert_eq!(
            pacman.change_direction(),
            Err(EntityError::NoDirectionRequested(EntityId::Pacman))
        );

        pacman.ask_to_change_direction(Direction::South);
        assert_eq!(pacman.change_direction(), Ok(()));
        assert_eq!(pacman.direction(), Direction::South);
        assert_eq!(pacman.asked_direction(), Some(Direction::South));
    }

    #[test]
    fn test_move_tracks_previous_position() {
        let mut pacman = Sprite::pacman(Position::new(2, 0), Direction::West, 2);
        pacman.move_forward(SIZE);
        assert!(pacman.is_moving());
        assert_eq!(pacman.previous_position(), Position::new(2, 0));
        assert_eq!(pacman.position(), Position::new(2, 4));
    }

    #[test]
    fn test_pacman_loses_lives() {
        let mut pacman = Sprite::pacman(Position::new(1, 1), Direction::West, 1);
        pacman.has_been_eaten();
        assert!(pacman.is_dead());
        assert_eq!(pacman.lives(), Some(0));
        pacman.has_been_eaten();
        assert_eq!(pacman.lives(), Some(0));
    }
}
