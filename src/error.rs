//! Centralized error types for the pursuit game core.
//!
//! Construction-time failures (board parsing, configuration) are fatal and
//! surface through [`GameError`]. Move failures are recovered inside the
//! frame that produced them and never reach a render collaborator.

use std::time::Duration;

use crate::map::cell::Cell;
use crate::map::direction::Direction;

/// Main error type for the game core.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Error type for board parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Board has no rows")]
    EmptyBoard,
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),
    #[error("Row {row} has width {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Starting position {0:?} appears more than once")]
    DuplicateStart(char),
    #[error("Board has no player starting position")]
    MissingPlayerStart,
}

/// Errors related to maze layout edits.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("Cell {0} is outside the maze")]
    OutOfBounds(Cell),
}

/// Session configuration values outside their allowed bounds.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Pursuer count must be between {min} and {max}, got {count}")]
    PursuerCount { count: u8, min: u8, max: u8 },

    #[error("The {name} interval must be between {min:?} and {max:?}, got {value:?}")]
    Interval {
        name: &'static str,
        value: Duration,
        min: Duration,
        max: Duration,
    },

    #[error("Board defines no starting position for pursuer {0}")]
    MissingPursuerStart(u8),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] figment::Error),
}

/// Movement failures recovered locally within a frame.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Cannot move {} from {from}: destination is a wall", direction.as_ref())]
    Blocked { from: Cell, direction: Direction },

    #[error("No path from {from} to {to}")]
    UnreachableTarget { from: Cell, to: Cell },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
