//! Map parsing functionality for converting raw board layouts into validated topologies.

use tracing::trace;

use crate::constants::{MapTile, RAW_BOARD};
use crate::error::ParseError;
use crate::map::position::{GridSize, Position};

/// A validated raw maze topology: a rectangular grid of cell codes with exactly one
/// Pac-Man spawn and exactly one ghost spawn.
///
/// This is the description a [`crate::map::maze::Maze`] is (re)built from at the start
/// of every level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMaze {
    size: GridSize,
    cells: Vec<MapTile>,
    pacman_spawn: Position,
    ghost_spawn: Position,
}

impl RawMaze {
    /// Builds a topology from rows of numeric cell codes.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown codes, ragged rows, or a missing/duplicated spawn cell.
    pub fn from_codes<R: AsRef<[u8]>>(table: &[R]) -> Result<Self, ParseError> {
        let rows = table
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|&code| MapTile::from_repr(code).ok_or(ParseError::UnknownCode(code)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_tiles(rows)
    }

    /// Builds a topology from rows of already decoded tiles.
    pub fn from_tiles(rows: Vec<Vec<MapTile>>) -> Result<Self, ParseError> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || columns == 0 {
            return Err(ParseError::Empty);
        }

        let size = GridSize::new(rows.len(), columns);
        let mut cells = Vec::with_capacity(size.area());
        let mut pacman_spawn: Option<Position> = None;
        let mut ghost_spawn: Option<Position> = None;

        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != columns {
                return Err(ParseError::NotRectangular {
                    row,
                    expected: columns,
                    found: line.len(),
                });
            }

            for (column, tile) in line.into_iter().enumerate() {
                let position = Position::new(row, column);
                match tile {
                    MapTile::PacmanSpawn => record_spawn(&mut pacman_spawn, "pacman", position)?,
                    MapTile::GhostSpawn => record_spawn(&mut ghost_spawn, "ghost", position)?,
                    _ => {}
                }
                cells.push(tile);
            }
        }

        Ok(Self {
            size,
            cells,
            pacman_spawn: pacman_spawn.ok_or(ParseError::MissingSpawn("pacman"))?,
            ghost_spawn: ghost_spawn.ok_or(ParseError::MissingSpawn("ghost"))?,
        })
    }

    /// The classic 28x31 board shipped with the engine.
    pub fn classic() -> Result<Self, ParseError> {
        MapTileParser::parse_board(&RAW_BOARD)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn columns(&self) -> usize {
        self.size.columns
    }

    /// The cell code at `position`, or `None` outside of the grid.
    pub fn tile(&self, position: Position) -> Option<MapTile> {
        self.size
            .contains(position)
            .then(|| self.cells[position.row * self.size.columns + position.column])
    }

    pub fn pacman_spawn(&self) -> Position {
        self.pacman_spawn
    }

    pub fn ghost_spawn(&self) -> Position {
        self.ghost_spawn
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, MapTile)> + '_ {
        let columns = self.size.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &tile)| (Position::new(index / columns, index % columns), tile))
    }
}

fn record_spawn(slot: &mut Option<Position>, kind: &'static str, position: Position) -> Result<(), ParseError> {
    if let Some(first) = *slot {
        return Err(ParseError::DuplicateSpawn {
            kind,
            first,
            second: position,
        });
    }
    *slot = Some(position);
    Ok(())
}

/// Parser for converting ASCII board layouts into raw topologies.
pub struct MapTileParser;

impl MapTileParser {
    /// Converts ASCII characters from the board layout into corresponding cell codes.
    ///
    /// Walls (`#`), the one-way ghost house door (`=`), pellets (`.` and `o`),
    /// empty space (` `) and the two spawn markers (`X` for Pac-Man, `G` for the ghosts).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnknownCharacter` for any character outside this vocabulary.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '#' => Ok(MapTile::Wall),
            '=' => Ok(MapTile::HouseDoor),
            '.' => Ok(MapTile::Pellet),
            'o' => Ok(MapTile::PowerPellet),
            ' ' => Ok(MapTile::Empty),
            'X' => Ok(MapTile::PacmanSpawn),
            'G' => Ok(MapTile::GhostSpawn),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into a validated topology.
    ///
    /// # Errors
    ///
    /// Returns an error if the board contains unknown characters, is not rectangular,
    /// or does not have exactly one spawn cell of each kind.
    pub fn parse_board<S: AsRef<str>>(raw_board: &[S]) -> Result<RawMaze, ParseError> {
        let rows = raw_board
            .iter()
            .map(|line| line.as_ref().chars().map(Self::parse_character).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        let maze = RawMaze::from_tiles(rows)?;
        trace!(rows = maze.rows(), columns = maze.columns(), "Parsed board layout");
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_character() {
        assert_eq!(MapTileParser::parse_character('#'), Ok(MapTile::Wall));
        assert_eq!(MapTileParser::parse_character('='), Ok(MapTile::HouseDoor));
        assert_eq!(MapTileParser::parse_character('.'), Ok(MapTile::Pellet));
        assert_eq!(MapTileParser::parse_character('o'), Ok(MapTile::PowerPellet));
        assert_eq!(MapTileParser::parse_character(' '), Ok(MapTile::Empty));
        assert_eq!(MapTileParser::parse_character('X'), Ok(MapTile::PacmanSpawn));
        assert_eq!(MapTileParser::parse_character('G'), Ok(MapTile::GhostSpawn));
        assert_eq!(MapTileParser::parse_character('Z'), Err(ParseError::UnknownCharacter('Z')));
    }

    #[test]
    fn test_parse_classic_board() {
        let maze = RawMaze::classic().unwrap();
        assert_eq!(maze.size(), GridSize::new(31, 28));
        assert_eq!(maze.pacman_spawn(), Position::new(23, 13));
        assert_eq!(maze.ghost_spawn(), Position::new(14, 13));
        assert_eq!(maze.tile(Position::new(12, 13)), Some(MapTile::HouseDoor));
        assert_eq!(maze.tile(Position::new(31, 0)), None);
    }

    #[test]
    fn test_from_codes_matches_ascii() {
        let ascii = MapTileParser::parse_board(&["#X.", "oG#"]).unwrap();
        let codes = RawMaze::from_codes(&[[1u8, 4, 2], [3, 5, 1]]).unwrap();
        assert_eq!(ascii, codes);
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(RawMaze::from_codes(&[[4u8, 5, 9]]), Err(ParseError::UnknownCode(9)));
    }
}
