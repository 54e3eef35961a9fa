//! This module defines the game map and provides functions for interacting with it.

pub mod direction;
pub mod layer;
pub mod maze;
pub mod parser;
pub mod position;
pub mod tile;

pub use direction::{Delta, Direction};
pub use layer::Layer;
pub use maze::Maze;
pub use parser::{MapTileParser, RawMaze};
pub use position::{GridSize, Position};
pub use tile::{Tile, TileKind};
