#![allow(dead_code)]

use pacman_engine::config::GameConfig;
use pacman_engine::game::Game;
use pacman_engine::highscore::MemoryHighScores;
use pacman_engine::map::parser::{MapTileParser, RawMaze};

/// One plain dot right east of Pac-Man and another out of the way. Ghosts are walled in.
pub const PICKUP_BOARD: [&str; 6] = ["#####", "# . #", "# X.#", "#####", "#G###", "#####"];

/// A corridor with a dot and an energizer east of Pac-Man; the ghost house opens on it
/// through a one-way door.
pub const POWER_BOARD: [&str; 5] = [
    "###########",
    "#X.o      #",
    "#####=#####",
    "#####G#####",
    "###########",
];

/// Like [`POWER_BOARD`], with a second energizer right above the ghost house door.
pub const DOUBLE_POWER_BOARD: [&str; 5] = [
    "###########",
    "#X.o o    #",
    "#####=#####",
    "#####G#####",
    "###########",
];

/// A cell right above the ghost house door; the ghosts walk out and corner Pac-Man.
pub const TRAP_BOARD: [&str; 5] = ["####", "#X.#", "##=#", "##G#", "####"];

/// An energizer next to Pac-Man; the ghosts can never leave their cell.
pub const SEALED_BOARD: [&str; 5] = ["#######", "#Xo   #", "#######", "###G###", "#######"];

/// A corridor open on both sides.
pub const TUNNEL_BOARD: [&str; 5] = ["#####", "  X  ", "#####", "##G##", "#####"];

pub fn board(rows: &[&str]) -> RawMaze {
    MapTileParser::parse_board(rows).unwrap()
}

/// A configuration whose ghosts never wander on their own, with a fixed seed.
pub fn quiet_config() -> GameConfig {
    GameConfig {
        ghost_direction_change_interval_ms: u64::MAX,
        rng_seed: Some(1),
        ..GameConfig::default()
    }
}

pub fn game_with(rows: &[&str], config: GameConfig) -> Game {
    Game::new(board(rows), config, Box::new(MemoryHighScores::default())).unwrap()
}

pub fn game(rows: &[&str]) -> Game {
    game_with(rows, quiet_config())
}
