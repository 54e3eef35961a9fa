//! This module contains all the constants used by the engine.

use strum_macros::FromRepr;

/// Milliseconds between two scheduler ticks.
pub const TICK_INTERVAL_MS: u64 = 300;
/// Milliseconds between two random wandering decisions of a ghost.
pub const GHOST_DIRECTION_CHANGE_INTERVAL_MS: u64 = 4000;
/// Milliseconds during which ghosts stay vulnerable after an energizer.
pub const FEEDING_DURATION_MS: u64 = 10_000;

/// Lives Pac-Man starts a session with.
pub const PACMAN_LIVES: u8 = 2;

/// Points awarded for a plain dot.
pub const DOT_SCORE: u32 = 10;
/// Points awarded for an energizer.
pub const ENERGIZER_SCORE: u32 = 100;
/// Points awarded for the first ghost eaten within a feeding window.
pub const GHOST_SCORE: u32 = 200;

/// An enum representing the different cell codes of a raw maze topology.
///
/// The discriminants are the numeric codes accepted by [`crate::map::parser::RawMaze::from_codes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum MapTile {
    /// An empty, walkable cell.
    Empty = 0,
    /// An impassable wall.
    Wall = 1,
    /// A regular pellet.
    Pellet = 2,
    /// A power pellet.
    PowerPellet = 3,
    /// Pac-Man's respawn cell.
    PacmanSpawn = 4,
    /// The ghosts' respawn cell.
    GhostSpawn = 5,
    /// The one-way door of the ghost house.
    HouseDoor = 6,
}

/// The raw layout of the classic game board, as a 2D array of characters.
///
/// See [`crate::map::parser::MapTileParser::parse_character`] for the vocabulary.
pub const RAW_BOARD: [&str; 31] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "     #.##### ## #####.#     ",
    "     #.##          ##.#     ",
    "     #.## ###==### ##.#     ",
    "######.## #      # ##.######",
    "      .   #  G   #   .      ",
    "######.## #      # ##.######",
    "     #.## ######## ##.#     ",
    "     #.##          ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......X .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];
