use pacman_engine::config::GameConfig;
use pacman_engine::entity::ghost::Wanderer;
use pacman_engine::entity::{EntityId, SpawnRegion};
use pacman_engine::map::direction::Direction;
use pacman_engine::map::position::Position;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{board, game_with, quiet_config, SEALED_BOARD, TRAP_BOARD};

#[test]
fn test_spawn_region_includes_door_row() {
    let raw = board(&TRAP_BOARD);
    let region = SpawnRegion::scan(&raw, raw.ghost_spawn());
    assert_eq!(
        region,
        SpawnRegion {
            top: 2,
            left: 2,
            bottom: 3,
            right: 2,
        }
    );
    assert!(region.contains(Position::new(2, 2)));
    assert!(!region.contains(Position::new(1, 2)));
}

#[test]
fn test_ghosts_leave_through_door() {
    let mut game = game_with(&TRAP_BOARD, quiet_config());
    game.tick().unwrap();
    assert!(game.ghosts().iter().all(|ghost| ghost.position() == Position::new(2, 2)));
    game.tick().unwrap();
    assert!(game.ghosts().iter().all(|ghost| ghost.position() == Position::new(1, 2)));
    assert!(game.ghosts().iter().all(|ghost| !ghost.in_spawn()));
}

#[test]
fn test_blocked_ghost_turns_to_only_exit() {
    let mut game = game_with(&TRAP_BOARD, quiet_config());
    for _ in 0..3 {
        game.tick().unwrap();
    }
    for ghost in game.ghosts() {
        assert_eq!(ghost.position(), Position::new(1, 2));
        assert_that(&ghost.is_moving()).is_false();
        assert_eq!(ghost.asked_direction(), Some(Direction::West));
    }
}

#[test]
fn test_walled_in_ghost_gets_no_request() {
    let config = GameConfig {
        ghost_direction_change_interval_ms: 300,
        ..quiet_config()
    };
    let mut game = game_with(&SEALED_BOARD, config);
    for _ in 0..5 {
        game.tick().unwrap();
        assert_eq!(game.pending_requests().count(), 0);
    }
    assert!(game.ghosts().iter().all(|ghost| ghost.asked_direction().is_none()));
}

#[test]
fn test_wandering_only_outside_spawn() {
    let config = GameConfig {
        ghost_direction_change_interval_ms: 300,
        ..quiet_config()
    };
    let mut game = game_with(&TRAP_BOARD, config);

    // Still in the doorway after the first tick.
    game.tick().unwrap();
    assert_eq!(game.pending_requests().count(), 0);

    game.tick().unwrap();
    let requested: Vec<EntityId> = game.pending_requests().map(|(id, _)| *id).collect();
    let expected: Vec<EntityId> = game.ghosts().iter().map(|ghost| ghost.id()).collect();
    assert_eq!(requested, expected);
}

#[test]
fn test_wandering_is_reproducible() {
    let mut a = Wanderer::new(300, Some(11));
    let mut b = Wanderer::new(300, Some(11));
    let left: Vec<Direction> = (0..20).map(|_| a.random_direction()).collect();
    let right: Vec<Direction> = (0..20).map(|_| b.random_direction()).collect();
    assert_eq!(left, right);
}
