//! Pursuit planning: the two chase algorithms and the per-pursuer controller.
//!
//! Both planners answer the same question through [`Planner::plan`]: the sequence
//! of cells leading from `start` (exclusive) to `goal` (inclusive). They differ in
//! character. [`ShortestPathPlanner`] beelines along a true shortest path, while
//! [`SpanningTreePlanner`] is confined to a precomputed spanning tree and meanders.

use serde::Deserialize;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::map::cell::Cell;
use crate::map::graph::GridGraph;

pub mod controller;
pub mod shortest;
pub mod spanning;

pub use controller::{Agent, PursuerState, PursuitController, Role};
pub use shortest::ShortestPathPlanner;
pub use spanning::{SpanningTree, SpanningTreePlanner};

/// Cells from start (exclusive) to goal (inclusive). Empty means "no move".
pub type Path = Vec<Cell>;

/// A pathfinding strategy usable by pursuers.
pub trait Planner {
    /// Plans a path from `start` to `goal`, excluding `start` and including `goal`.
    ///
    /// Returns an empty path when the goal is unreachable or equal to the start.
    fn plan(&self, graph: &GridGraph<'_>, start: Cell, goal: Cell) -> Path;
}

/// Which pursuit algorithm a session uses. Chosen once, at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, EnumString, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PursuitAlgorithm {
    /// Dijkstra shortest path, recomputed every pursuit round.
    #[default]
    #[serde(alias = "dijkstra")]
    #[strum(to_string = "shortest_path", serialize = "dijkstra")]
    ShortestPath,
    /// Breadth-first search over a Kruskal spanning tree built once per layout.
    #[serde(alias = "kruskal")]
    #[strum(to_string = "spanning_tree", serialize = "kruskal")]
    SpanningTree,
}

/// The planner selected for a session.
#[derive(Debug, Clone)]
pub enum ActivePlanner {
    ShortestPath(ShortestPathPlanner),
    SpanningTree(SpanningTreePlanner),
}

impl ActivePlanner {
    /// Creates the planner for `algorithm`, doing any up-front work it needs.
    pub fn new(algorithm: PursuitAlgorithm, graph: &GridGraph<'_>) -> Self {
        match algorithm {
            PursuitAlgorithm::ShortestPath => ActivePlanner::ShortestPath(ShortestPathPlanner),
            PursuitAlgorithm::SpanningTree => ActivePlanner::SpanningTree(SpanningTreePlanner::new(graph)),
        }
    }

    pub fn algorithm(&self) -> PursuitAlgorithm {
        match self {
            ActivePlanner::ShortestPath(_) => PursuitAlgorithm::ShortestPath,
            ActivePlanner::SpanningTree(_) => PursuitAlgorithm::SpanningTree,
        }
    }

    /// Brings cached structures up to date with the graph's layout.
    ///
    /// Returns `true` if anything was rebuilt.
    pub fn refresh(&mut self, graph: &GridGraph<'_>) -> bool {
        match self {
            ActivePlanner::ShortestPath(_) => false,
            ActivePlanner::SpanningTree(planner) => planner.refresh(graph),
        }
    }
}

impl Planner for ActivePlanner {
    fn plan(&self, graph: &GridGraph<'_>, start: Cell, goal: Cell) -> Path {
        match self {
            ActivePlanner::ShortestPath(planner) => planner.plan(graph, start, goal),
            ActivePlanner::SpanningTree(planner) => planner.plan(graph, start, goal),
        }
    }
}
