//! Maze construction and cell state bookkeeping.

use tracing::debug;

use crate::constants::MAX_PURSUERS;
use crate::error::{GameResult, MapError};
use crate::map::cell::{Cell, CellState};
use crate::map::direction::Direction;
use crate::map::graph::GridGraph;
use crate::map::parser::{MapParser, ParsedMap};

/// The maze: a fixed-size grid of cells plus the starting positions it defines.
///
/// Dimensions never change. During play the only mutation is `Empty -> Collected`;
/// traversability edits through [`Maze::set_wall`] bump the layout revision so that
/// cached structures derived from the graph can tell they are stale.
#[derive(Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    /// Row-major cell states.
    tiles: Vec<CellState>,
    player_start: Cell,
    pursuer_starts: [Option<Cell>; MAX_PURSUERS as usize],
    /// Number of cells still in the `Empty` state.
    remaining: usize,
    revision: u64,
}

impl Maze {
    /// Parses a raw board layout and builds a maze from it.
    pub fn parse<S: AsRef<str>>(raw_board: &[S]) -> GameResult<Maze> {
        let parsed = MapParser::parse_board(raw_board)?;
        Ok(Self::from_parsed(parsed))
    }

    /// Builds a maze from already parsed board data.
    pub fn from_parsed(parsed: ParsedMap) -> Maze {
        let height = parsed.tiles.len();
        let width = parsed.tiles.first().map_or(0, Vec::len);
        let tiles: Vec<CellState> = parsed.tiles.into_iter().flatten().collect();
        let remaining = tiles.iter().filter(|&&state| state == CellState::Empty).count();

        debug!(width, height, remaining, "Maze built");

        Maze {
            width,
            height,
            tiles,
            player_start: parsed.player_start,
            pursuer_starts: parsed.pursuer_starts,
            remaining,
            revision: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn player_start(&self) -> Cell {
        self.player_start
    }

    /// The starting cell of the pursuer at `index` (0-based), if the board defines one.
    pub fn pursuer_start(&self, index: usize) -> Option<Cell> {
        self.pursuer_starts.get(index).copied().flatten()
    }

    /// Number of cells still holding a point.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Monotonic counter bumped whenever traversability changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns a graph view over the traversable cells.
    pub fn graph(&self) -> GridGraph<'_> {
        GridGraph::new(self)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Dense row-major index of an in-bounds cell.
    pub fn index(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }

    /// Inverse of [`Maze::index`].
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.width, index % self.width)
    }

    /// The state of a cell, or `None` if it lies outside the maze.
    pub fn get(&self, cell: Cell) -> Option<CellState> {
        self.in_bounds(cell).then(|| self.tiles[self.index(cell)])
    }

    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(CellState::is_traversable)
    }

    /// The in-bounds, traversable neighbour of `cell` in `direction`, if any.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.step(direction).filter(|&next| self.is_traversable(next))
    }

    /// Iterates over every cell and its state, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(move |(index, &state)| (self.cell_at(index), state))
    }

    /// Marks the point in `cell` as collected.
    ///
    /// Returns `true` only if the cell was `Empty` before the call.
    pub fn collect(&mut self, cell: Cell) -> bool {
        if self.get(cell) != Some(CellState::Empty) {
            return false;
        }
        let index = self.index(cell);
        self.tiles[index] = CellState::Collected;
        self.remaining -= 1;
        true
    }

    /// Turns a cell into a wall, or opens a wall into a collected cell.
    ///
    /// Bumps the layout revision when traversability actually changes.
    pub fn set_wall(&mut self, cell: Cell, wall: bool) -> Result<(), MapError> {
        let current = self.get(cell).ok_or(MapError::OutOfBounds(cell))?;
        if current.is_traversable() != wall {
            return Ok(());
        }

        if current == CellState::Empty {
            self.remaining -= 1;
        }
        let index = self.index(cell);
        self.tiles[index] = if wall { CellState::Wall } else { CellState::Collected };
        self.revision += 1;

        debug!(%cell, wall, revision = self.revision, "Maze layout changed");
        Ok(())
    }
}
