//! Centralized error types for the Pac-Man engine.
//!
//! This module defines all error types used throughout the engine,
//! providing a consistent error handling approach. Every contract violation
//! surfaces synchronously to the caller; nothing is retried internally.

use std::io;

use crate::entity::EntityId;
use crate::map::position::Position;

/// Main error type for the Pac-Man engine.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur during a play session.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Entity error: {0}")]
    Entity(#[from] EntityError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("The current level is not yet finished ({remaining} dots remaining)")]
    LevelNotFinished { remaining: usize },
}

impl From<figment::Error> for GameError {
    fn from(error: figment::Error) -> Self {
        GameError::Figment(Box::new(error))
    }
}

/// Error type for maze topology loading.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown cell code in topology: {0}")]
    UnknownCode(u8),
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),
    #[error("Topology has no cells")]
    Empty,
    #[error("Row {row} has {found} cells, expected {expected}")]
    NotRectangular { row: usize, expected: usize, found: usize },
    #[error("Topology is missing the {0} spawn cell")]
    MissingSpawn(&'static str),
    #[error("Topology has a second {kind} spawn cell at {second} (first at {first})")]
    DuplicateSpawn {
        kind: &'static str,
        first: Position,
        second: Position,
    },
}

/// Errors related to grid and maze operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("Position {position} is outside of the {rows}x{columns} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        columns: usize,
    },

    #[error("There is no dot to pick at {0}")]
    NothingToPick(Position),
}

/// Errors related to sprite operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    #[error("No direction change has been requested for {0}")]
    NoDirectionRequested(EntityId),

    #[error("Direction delta ({delta_column};{delta_row}) must have components within -1..=1")]
    InvalidDelta { delta_column: i32, delta_row: i32 },

    /// The delta is in range, so it is a valid [`Delta`](crate::map::direction::Delta),
    /// but zero or diagonal deltas name no direction.
    #[error("Direction delta ({delta_column};{delta_row}) is not one of the four cardinal directions")]
    NonCardinalDelta { delta_column: i32, delta_row: i32 },
}

/// Errors raised by high score stores.
#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed high score data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;
