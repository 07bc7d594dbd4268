use glam::IVec2;
use strum_macros::AsRefStr;

use super::cell::Cell;

/// The four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four cardinal directions, in neighbour scan order.
    /// Every traversal in the crate iterates this constant, which keeps path selection reproducible.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the direction as an IVec2 (`x` is the column delta, `y` the row delta).
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// Returns the direction that leads from `from` to the adjacent cell `to`.
    ///
    /// `None` if the cells are not 4-adjacent.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        let delta = to.as_ivec2() - from.as_ivec2();
        Self::DIRECTIONS.into_iter().find(|direction| direction.as_ivec2() == delta)
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}
