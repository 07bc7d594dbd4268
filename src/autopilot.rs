//! A simple input collaborator that plays the seeker without a human.
//!
//! Used by the headless binary. Each frame it walks toward the nearest remaining
//! point, refusing to step next to a pursuer when another route exists.

use pathfinding::prelude::bfs;

use crate::game::state::SessionState;
use crate::map::cell::{Cell, CellState};
use crate::map::direction::Direction;

/// Returns the direction the seeker should try this frame, if any.
pub fn next_intent(state: &SessionState) -> Option<Direction> {
    let maze = state.maze();
    let graph = state.graph();
    let start = state.player();
    let threatened = |cell: Cell| state.pursuer_positions().any(|pursuer| pursuer.distance(cell) <= 1);

    let is_point = |cell: &Cell| maze.get(*cell) == Some(CellState::Empty);

    // Prefer a route that keeps clear of pursuers; fall back to any route.
    let path = bfs(
        &start,
        |cell| {
            graph
                .neighbors(*cell)
                .into_iter()
                .filter(|&next| !threatened(next))
                .collect::<Vec<_>>()
        },
        is_point,
    )
    .or_else(|| bfs(&start, |cell| graph.neighbors(*cell), is_point))?;

    path.get(1).and_then(|&next| Direction::between(start, next))
}
