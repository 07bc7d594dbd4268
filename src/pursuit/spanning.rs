use std::collections::BTreeMap;

use pathfinding::prelude::{bfs, kruskal};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::{Path, Planner};
use crate::map::cell::Cell;
use crate::map::graph::GridGraph;

/// A spanning tree (or forest, for a disconnected maze) over every traversable cell.
///
/// Built from the grid graph with Kruskal's algorithm under a fixed edge order,
/// so rebuilding from an unchanged maze always yields the same edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    /// Tree neighbours of each node. Nodes without tree edges map to an empty list.
    adjacency: BTreeMap<Cell, SmallVec<[Cell; 4]>>,
    /// Accepted edges as `(from, to)` with `from < to`, sorted.
    edges: Vec<(Cell, Cell)>,
    /// Layout revision of the maze the tree was built from.
    revision: u64,
}

impl SpanningTree {
    /// Builds the tree from the current layout of `graph`.
    pub fn build(graph: &GridGraph<'_>) -> SpanningTree {
        let mut adjacency: BTreeMap<Cell, SmallVec<[Cell; 4]>> =
            graph.nodes().map(|cell| (cell, SmallVec::new())).collect();

        // All edges weigh the same, so the weight handed to Kruskal is the edge's
        // rank in lexicographic endpoint order. That makes the processing order total.
        let mut candidates: Vec<(Cell, Cell)> = graph.edges().collect();
        candidates.sort_unstable();
        let ranked: Vec<(Cell, Cell, usize)> = candidates
            .into_iter()
            .enumerate()
            .map(|(rank, (from, to))| (from, to, rank))
            .collect();

        let mut edges: Vec<(Cell, Cell)> = kruskal(&ranked).map(|(&from, &to, _)| (from, to)).collect();
        edges.sort_unstable();

        for &(from, to) in &edges {
            adjacency.entry(from).or_default().push(to);
            adjacency.entry(to).or_default().push(from);
        }

        let tree = SpanningTree {
            adjacency,
            edges,
            revision: graph.revision(),
        };

        let components = tree.component_count();
        if components > 1 {
            warn!(components, "Maze is not connected; spanning structure is a forest");
        }
        debug!(
            nodes = tree.node_count(),
            edges = tree.edges.len(),
            revision = tree.revision,
            "Spanning tree built"
        );

        tree
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.adjacency.contains_key(&cell)
    }

    /// Tree neighbours of `cell`; empty if the cell is not part of the tree.
    pub fn neighbors(&self, cell: Cell) -> &[Cell] {
        self.adjacency.get(&cell).map(|neighbors| neighbors.as_slice()).unwrap_or(&[])
    }

    pub fn edges(&self) -> &[(Cell, Cell)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of connected components; `1` for a proper spanning tree of a connected maze.
    pub fn component_count(&self) -> usize {
        self.node_count() - self.edges.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the tree no longer matches the layout of `graph`.
    pub fn is_stale(&self, graph: &GridGraph<'_>) -> bool {
        self.revision != graph.revision()
    }

    /// The unique tree path from `start` (exclusive) to `goal` (inclusive).
    ///
    /// Empty if either cell is outside the tree, the cells lie in different
    /// components, or `start == goal`.
    pub fn path(&self, start: Cell, goal: Cell) -> Path {
        if !self.contains(start) || !self.contains(goal) {
            return Path::new();
        }

        bfs(&start, |cell| self.neighbors(*cell).to_vec(), |cell| *cell == goal)
            .map(|path| path.into_iter().skip(1).collect())
            .unwrap_or_default()
    }
}

/// Pursuit confined to a spanning tree of the maze.
///
/// The tree is built once and reused for every query; it is only rebuilt when the
/// maze's traversable layout changes. Paths along the tree are unique and usually
/// longer than the true shortest path, which gives pursuers a meandering chase.
#[derive(Debug, Clone)]
pub struct SpanningTreePlanner {
    tree: SpanningTree,
}

impl SpanningTreePlanner {
    pub fn new(graph: &GridGraph<'_>) -> Self {
        Self {
            tree: Self::build_tree(graph),
        }
    }

    /// Builds a spanning tree over `graph`. Call once and reuse the result.
    pub fn build_tree(graph: &GridGraph<'_>) -> SpanningTree {
        SpanningTree::build(graph)
    }

    pub fn tree(&self) -> &SpanningTree {
        &self.tree
    }

    /// Rebuilds the tree if the maze layout changed since it was built.
    ///
    /// Returns `true` if a rebuild happened.
    pub fn refresh(&mut self, graph: &GridGraph<'_>) -> bool {
        if !self.tree.is_stale(graph) {
            return false;
        }
        debug!(
            from = self.tree.revision(),
            to = graph.revision(),
            "Maze layout changed; rebuilding spanning tree"
        );
        self.tree = Self::build_tree(graph);
        true
    }
}

impl Planner for SpanningTreePlanner {
    fn plan(&self, _graph: &GridGraph<'_>, start: Cell, goal: Cell) -> Path {
        let path = self.tree.path(start, goal);
        trace!(%start, %goal, length = path.len(), "Spanning tree path planned");
        path
    }
}
