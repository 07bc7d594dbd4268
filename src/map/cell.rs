use std::fmt;

use glam::IVec2;

use super::direction::Direction;

/// A grid position, addressed as (row, column).
///
/// Ordering is lexicographic on row, then column. Planners rely on this order
/// to break ties between otherwise equal edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the cell as an IVec2, with `x` as the column and `y` as the row.
    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.col as i32, self.row as i32)
    }

    /// Returns the adjacent cell in the given direction, or `None` if it would underflow.
    ///
    /// Upper bounds are not checked here; that is the maze's job.
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let next = self.as_ivec2() + direction.as_ivec2();
        if next.x < 0 || next.y < 0 {
            return None;
        }
        Some(Cell::new(next.y as usize, next.x as usize))
    }

    /// Manhattan distance between two cells.
    pub fn distance(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The state of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Impassable; never changes during a session.
    Wall,
    /// Traversable and still holding a point.
    Empty,
    /// Traversable, point already taken.
    Collected,
}

impl CellState {
    pub const fn is_traversable(self) -> bool {
        !matches!(self, CellState::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_ordering_is_row_major() {
        assert!(Cell::new(0, 5) < Cell::new(1, 0));
        assert!(Cell::new(2, 1) < Cell::new(2, 3));
    }

    #[test]
    fn test_cell_step() {
        let cell = Cell::new(1, 1);
        assert_eq!(cell.step(Direction::Up), Some(Cell::new(0, 1)));
        assert_eq!(cell.step(Direction::Down), Some(Cell::new(2, 1)));
        assert_eq!(cell.step(Direction::Left), Some(Cell::new(1, 0)));
        assert_eq!(cell.step(Direction::Right), Some(Cell::new(1, 2)));
        assert_eq!(Cell::new(0, 0).step(Direction::Up), None);
        assert_eq!(Cell::new(0, 0).step(Direction::Left), None);
    }

    #[test]
    fn test_cell_distance() {
        assert_eq!(Cell::new(1, 1).distance(Cell::new(3, 4)), 5);
        assert_eq!(Cell::new(3, 4).distance(Cell::new(1, 1)), 5);
        assert_eq!(Cell::new(2, 2).distance(Cell::new(2, 2)), 0);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::new(7, 13).to_string(), "(7, 13)");
    }
}
