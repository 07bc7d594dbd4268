//! Map parsing functionality for converting raw board layouts into structured data.

use crate::constants::{COLLECTED_CHAR, MAX_PURSUERS, PLAYER_START_CHAR, POINT_CHAR, WALL_CHAR};
use crate::error::ParseError;
use crate::map::cell::{Cell, CellState};

/// What a single board character means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardTile {
    /// A plain cell in the given state.
    Plain(CellState),
    /// The player's starting cell. Holds a point.
    PlayerStart,
    /// A pursuer's starting cell, 0-indexed. Holds a point.
    PursuerStart(u8),
}

impl BoardTile {
    /// The cell state the tile starts the session in.
    pub fn state(self) -> CellState {
        match self {
            BoardTile::Plain(state) => state,
            BoardTile::PlayerStart | BoardTile::PursuerStart(_) => CellState::Empty,
        }
    }
}

/// Represents the parsed data from a raw board layout.
#[derive(Debug)]
pub struct ParsedMap {
    /// The parsed tile states, row-major.
    pub tiles: Vec<Vec<CellState>>,
    /// The player's starting position.
    pub player_start: Cell,
    /// Pursuer starting positions, indexed by marker order. A missing marker leaves a gap.
    pub pursuer_starts: [Option<Cell>; MAX_PURSUERS as usize],
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapParser;

impl MapParser {
    /// Parses a single character into a board tile.
    pub fn parse_character(c: char) -> Result<BoardTile, ParseError> {
        match c {
            WALL_CHAR => Ok(BoardTile::Plain(CellState::Wall)),
            POINT_CHAR => Ok(BoardTile::Plain(CellState::Empty)),
            COLLECTED_CHAR => Ok(BoardTile::Plain(CellState::Collected)),
            PLAYER_START_CHAR => Ok(BoardTile::PlayerStart),
            '1'..='9' => {
                let index = c as u8 - b'1';
                if index < MAX_PURSUERS {
                    Ok(BoardTile::PursuerStart(index))
                } else {
                    Err(ParseError::UnknownCharacter(c))
                }
            }
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty or ragged, contains unknown characters,
    /// repeats a starting marker, or has no player start.
    pub fn parse_board<S: AsRef<str>>(raw_board: &[S]) -> Result<ParsedMap, ParseError> {
        let width = raw_board.first().ok_or(ParseError::EmptyBoard)?.as_ref().chars().count();
        if width == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(raw_board.len());
        let mut player_start = None;
        let mut pursuer_starts = [None; MAX_PURSUERS as usize];

        for (row, line) in raw_board.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            let mut tile_row = Vec::with_capacity(width);
            for (col, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character)?;
                let cell = Cell::new(row, col);

                // Track starting positions
                let slot = match tile {
                    BoardTile::PlayerStart => Some(&mut player_start),
                    BoardTile::PursuerStart(index) => Some(&mut pursuer_starts[index as usize]),
                    BoardTile::Plain(_) => None,
                };
                if let Some(slot) = slot {
                    if slot.replace(cell).is_some() {
                        return Err(ParseError::DuplicateStart(character));
                    }
                }

                tile_row.push(tile.state());
            }
            tiles.push(tile_row);
        }

        Ok(ParsedMap {
            tiles,
            player_start: player_start.ok_or(ParseError::MissingPlayerStart)?,
            pursuer_starts,
        })
    }
}
