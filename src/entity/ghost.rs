//! Ghost behaviour: the ghost house and random wandering.
//!
//! Ghosts do not chase. On a fixed cadence every ghost that has left its house asks for a
//! uniformly random direction, and a blocked ghost is offered one of the directions that
//! are still open.

use rand::prelude::*;
use smallvec::SmallVec;
use tracing::trace;

use crate::constants::MapTile;
use crate::map::direction::Direction;
use crate::map::parser::RawMaze;
use crate::map::position::Position;

/// The rectangular ghost house, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRegion {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl SpawnRegion {
    /// Scans outward from `origin` in the raw topology.
    ///
    /// Left, right and down stop right before the nearest wall. Upwards the scan runs until
    /// the house door, and the door row itself belongs to the house so that a ghost standing
    /// in the doorway still counts as inside.
    pub fn scan(raw: &RawMaze, origin: Position) -> Self {
        let is = |row: usize, column: usize, tile: MapTile| raw.tile(Position::new(row, column)) == Some(tile);

        let mut left = origin.column;
        while left > 0 && !is(origin.row, left - 1, MapTile::Wall) {
            left -= 1;
        }

        let mut right = origin.column;
        while right + 1 < raw.columns() && !is(origin.row, right + 1, MapTile::Wall) {
            right += 1;
        }

        let mut top = origin.row;
        while top > 0 && !is(top - 1, origin.column, MapTile::HouseDoor) {
            top -= 1;
        }
        let top = top.saturating_sub(1);

        let mut bottom = origin.row;
        while bottom + 1 < raw.rows() && !is(bottom + 1, origin.column, MapTile::Wall) {
            bottom += 1;
        }

        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        (self.top..=self.bottom).contains(&position.row) && (self.left..=self.right).contains(&position.column)
    }
}

/// Drives random ghost direction choices.
///
/// Time is fed in explicitly by the engine once per tick; nothing here runs on its own clock.
#[derive(Debug, Clone)]
pub struct Wanderer {
    rng: SmallRng,
    interval_ms: u64,
    elapsed_ms: u64,
}

impl Wanderer {
    /// Creates a wanderer choosing a new direction every `interval_ms`.
    ///
    /// A seed makes every choice reproducible; without one the generator is seeded from the OS.
    pub fn new(interval_ms: u64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            rng,
            interval_ms,
            elapsed_ms: 0,
        }
    }

    /// Accounts for `elapsed_ms` of game time and returns how many wandering rounds are due.
    pub fn advance(&mut self, elapsed_ms: u64) -> u64 {
        let mut due = elapsed_ms / self.interval_ms;
        // Both terms stay below the interval; on overflow the true sum still exceeds it.
        let (sum, overflowed) = self.elapsed_ms.overflowing_add(elapsed_ms % self.interval_ms);
        if overflowed || sum >= self.interval_ms {
            due += 1;
            self.elapsed_ms = sum.wrapping_sub(self.interval_ms);
        } else {
            self.elapsed_ms = sum;
        }
        if due > 0 {
            trace!(due, "Ghost wandering round due");
        }
        due
    }

    /// Restarts the wandering cadence from zero.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    /// A uniformly random direction among the four.
    pub fn random_direction(&mut self) -> Direction {
        Direction::DIRECTIONS[self.rng.random_range(0..Direction::DIRECTIONS.len())]
    }

    /// A uniformly random direction that is not in `blocked`, or `None` when all four are.
    pub fn escape_direction(&mut self, blocked: &[Direction]) -> Option<Direction> {
        let open: SmallVec<[Direction; 4]> = Direction::DIRECTIONS
            .into_iter()
            .filter(|direction| !blocked.contains(direction))
            .collect();
        open.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::parser::MapTileParser;

    #[test]
    fn test_scan_classic_house() {
        let raw = RawMaze::classic().unwrap();
        let region = SpawnRegion::scan(&raw, raw.ghost_spawn());
        assert_eq!(
            region,
            SpawnRegion {
                top: 12,
                left: 11,
                bottom: 15,
                right: 16,
            }
        );
        assert!(region.contains(Position::new(12, 13)));
        assert!(!region.contains(Position::new(11, 13)));
    }

    #[test]
    fn test_scan_without_door_reaches_top() {
        let raw = MapTileParser::parse_board(&["#   #", "# G #", "#X###"]).unwrap();
        let region = SpawnRegion::scan(&raw, raw.ghost_spawn());
        assert_eq!(region.top, 0);
        assert_eq!((region.left, region.right, region.bottom), (1, 3, 1));
    }

    #[test]
    fn test_wanderer_cadence() {
        let mut wanderer = Wanderer::new(1000, Some(7));
        assert_eq!(wanderer.advance(300), 0);
        assert_eq!(wanderer.advance(300), 0);
        assert_eq!(wanderer.advance(300), 0);
        assert_eq!(wanderer.advance(300), 1);
        assert_eq!(wanderer.advance(2000), 2);
    }

    #[test]
    fn test_wanderer_huge_elapsed_does_not_overflow() {
        let mut wanderer = Wanderer::new(u64::MAX, Some(7));
        assert_eq!(wanderer.advance(u64::MAX - 1), 0);
        assert_eq!(wanderer.advance(3), 1);
        assert_eq!(wanderer.advance(1), 0);
        assert_eq!(wanderer.advance(0), 0);

        let mut wanderer = Wanderer::new(1000, Some(7));
        assert_eq!(wanderer.advance(999), 0);
        assert_eq!(wanderer.advance(u64::MAX), u64::MAX / 1000 + 1);
    }

    #[test]
    fn test_escape_direction_avoids_blocked() {
        let mut wanderer = Wanderer::new(1000, Some(42));
        let blocked = [Direction::North, Direction::South, Direction::West];
        for _ in 0..16 {
            assert_eq!(wanderer.escape_direction(&blocked), Some(Direction::East));
        }
        assert_eq!(wanderer.escape_direction(&Direction::DIRECTIONS), None);
    }

    #[test]
    fn test_seeded_wanderers_agree() {
        let mut a = Wanderer::new(1000, Some(3));
        let mut b = Wanderer::new(1000, Some(3));
        for _ in 0..32 {
            assert_eq!(a.random_direction(), b.random_direction());
        }
    }
}
