use pacman_engine::error::MapError;
use pacman_engine::map::maze::Maze;
use pacman_engine::map::parser::{MapTileParser, RawMaze};
use pacman_engine::map::position::Position;
use pacman_engine::map::tile::{Tile, TileKind};
use speculoos::prelude::*;

fn maze(rows: &[&str]) -> Maze {
    Maze::new(&MapTileParser::parse_board(rows).unwrap()).unwrap()
}

#[test]
fn test_classic_maze() {
    let maze = Maze::new(&RawMaze::classic().unwrap()).unwrap();
    assert_eq!(maze.remaining_dots(), 244);
    assert_eq!(maze.dots().filter(|dot| dot.is_energizer()).count(), 4);
    assert_eq!(
        maze.wall_tile(Position::new(12, 13)).unwrap(),
        Some(&Tile::wall(Position::new(12, 13), true))
    );
    assert_eq!(maze.pacman_respawn(), Position::new(23, 13));
    assert_eq!(maze.ghost_respawn(), Position::new(14, 13));
}

#[test]
fn test_pickup_monotonicity() {
    let mut maze = maze(&["#####", "#X.o#", "#.G.#", "#####"]);
    let mut remaining = maze.remaining_dots();
    assert_eq!(remaining, 4);

    let positions: Vec<Position> = maze.dots().map(|dot| dot.position).collect();
    for position in positions {
        assert_that(&maze.is_empty()).is_false();
        let dot = maze.pick(position).unwrap();
        assert!(matches!(dot.kind, TileKind::Dot { .. }));
        assert_eq!(maze.remaining_dots(), remaining - 1);
        remaining -= 1;
        assert_eq!(maze.pick(position), Err(MapError::NothingToPick(position)));
        assert_eq!(maze.remaining_dots(), remaining);
    }
    assert_that(&maze.is_empty()).is_true();
}

#[test]
fn test_one_way_gate_from_every_side() {
    let maze = maze(&["#####", "#   #", "# = #", "# G #", "#X###"]);
    let gate = Position::new(2, 2);

    assert!(maze.can_walk_on(Position::new(3, 2), gate));
    for neighbour in [Position::new(1, 2), Position::new(2, 1), Position::new(2, 3)] {
        assert!(!maze.can_walk_on(neighbour, gate), "entered the gate from {neighbour}");
    }
}

#[test]
fn test_out_of_bounds_queries() {
    let maze = maze(&["#X#", "#G#"]);
    let outside = Position::new(2, 0);
    assert!(!maze.can_walk_on(Position::new(1, 1), outside));
    assert!(!maze.can_pick(outside));
    assert_eq!(
        maze.dot_tile(outside),
        Err(MapError::OutOfBounds {
            position: outside,
            rows: 2,
            columns: 3,
        })
    );
}
