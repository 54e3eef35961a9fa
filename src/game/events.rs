//! Events emitted by a tick and the outcome of a scheduler step.

use serde::Serialize;

use crate::entity::GhostType;
use crate::map::position::Position;

/// Something notable that happened during a tick, in the order it happened.
///
/// The engine appends events as it resolves a tick; hosts drain them with
/// [`crate::game::Game::drain_events`] to drive sounds, animations or logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    DotEaten { tile: Position, energizer: bool, points: u32 },
    FeedingStarted,
    GhostEaten { ghost: GhostType, points: u32 },
    PacmanEaten { lives_left: u8 },
    FeedingEnded,
    LevelCompleted { level: u32 },
}

/// What a scheduler step ([`crate::game::Game::advance`]) led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TickOutcome {
    /// Nothing beyond regular movement; keep ticking.
    Continue,
    /// Pac-Man was eaten and every sprite went back to its spawn.
    PacmanRespawned,
    /// At least one ghost was eaten and sent back home.
    GhostsRespawned,
    /// The maze was cleared and the next level started.
    LevelCompleted,
    /// Pac-Man has no lives left. The session is over.
    GameOver,
}
