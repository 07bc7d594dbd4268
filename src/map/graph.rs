use smallvec::SmallVec;

use super::builder::Maze;
use super::cell::Cell;
use super::direction::Direction;

/// Neighbour list of a single cell. Never holds more than four entries.
pub type Neighbors = SmallVec<[Cell; 4]>;

/// A 4-connected graph over the traversable cells of a [`Maze`].
///
/// The graph is a borrowed view rather than a stored adjacency list: two cells are
/// adjacent iff both are traversable and differ by one step along exactly one axis.
/// Because it is derived on demand, it always reflects the maze's current layout,
/// and adjacency is symmetric by construction.
#[derive(Debug, Clone, Copy)]
pub struct GridGraph<'a> {
    maze: &'a Maze,
}

impl<'a> GridGraph<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self { maze }
    }

    pub fn maze(&self) -> &'a Maze {
        self.maze
    }

    /// Whether `cell` is a node of the graph (in bounds and not a wall).
    pub fn contains(&self, cell: Cell) -> bool {
        self.maze.is_traversable(cell)
    }

    /// Returns the traversable neighbours of `cell`, in `Up, Down, Left, Right` order.
    ///
    /// `cell` must be a node of the graph. Callers derive it from agent positions,
    /// which are always traversable.
    pub fn neighbors(&self, cell: Cell) -> Neighbors {
        debug_assert!(self.contains(cell), "neighbors queried for non-node {cell}");
        Direction::DIRECTIONS
            .into_iter()
            .filter_map(|direction| self.maze.neighbor(cell, direction))
            .collect()
    }

    /// Iterates over every node, row-major.
    pub fn nodes(&self) -> impl Iterator<Item = Cell> + 'a {
        self.maze
            .cells()
            .filter_map(|(cell, state)| state.is_traversable().then_some(cell))
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Iterates over every undirected edge exactly once, as `(from, to)` with `from < to`.
    ///
    /// Only the downward and rightward neighbours of each node are considered, so an
    /// edge is never reported twice.
    pub fn edges(&self) -> impl Iterator<Item = (Cell, Cell)> + 'a {
        let maze = self.maze;
        self.nodes().flat_map(move |cell| {
            [Direction::Down, Direction::Right]
                .into_iter()
                .filter_map(move |direction| maze.neighbor(cell, direction).map(|next| (cell, next)))
        })
    }

    /// Dense index of a cell, suitable for indexing per-node arrays of length [`GridGraph::index_bound`].
    pub fn index(&self, cell: Cell) -> usize {
        self.maze.index(cell)
    }

    /// Exclusive upper bound of [`GridGraph::index`].
    pub fn index_bound(&self) -> usize {
        self.maze.width() * self.maze.height()
    }

    /// The layout revision of the underlying maze.
    pub fn revision(&self) -> u64 {
        self.maze.revision()
    }
}
