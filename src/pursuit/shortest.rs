use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use super::{Path, Planner};
use crate::map::cell::Cell;
use crate::map::graph::GridGraph;

/// Single-source shortest path over unit-weight edges (Dijkstra).
///
/// The frontier is keyed on `(cost, insertion sequence)`, so equal-cost entries
/// leave the queue in the order they were discovered. Neighbours are discovered in
/// the graph's fixed `Up, Down, Left, Right` order and a predecessor is only replaced
/// on a strict improvement, which makes the chosen path a pure function of the
/// maze, the start and the goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathPlanner;

impl Planner for ShortestPathPlanner {
    fn plan(&self, graph: &GridGraph<'_>, start: Cell, goal: Cell) -> Path {
        if start == goal || !graph.contains(start) || !graph.contains(goal) {
            return Path::new();
        }

        let bound = graph.index_bound();
        let mut cost: Vec<Option<u32>> = vec![None; bound];
        let mut previous: Vec<Option<Cell>> = vec![None; bound];
        let mut frontier = BinaryHeap::new();
        let mut sequence: u64 = 0;

        cost[graph.index(start)] = Some(0);
        frontier.push((Reverse(0u32), Reverse(sequence), start));

        let mut reached = false;
        while let Some((Reverse(current_cost), _, current)) = frontier.pop() {
            if current == goal {
                reached = true;
                break;
            }
            // Skip entries superseded by a cheaper discovery
            if cost[graph.index(current)].is_some_and(|best| current_cost > best) {
                continue;
            }

            for neighbor in graph.neighbors(current) {
                let next_cost = current_cost + 1;
                let slot = &mut cost[graph.index(neighbor)];
                if slot.is_none_or(|best| next_cost < best) {
                    *slot = Some(next_cost);
                    previous[graph.index(neighbor)] = Some(current);
                    sequence += 1;
                    frontier.push((Reverse(next_cost), Reverse(sequence), neighbor));
                }
            }
        }

        if !reached {
            trace!(%start, %goal, "Shortest path: goal unreachable");
            return Path::new();
        }

        // Walk predecessor links back from the goal
        let mut path = Path::new();
        let mut cursor = goal;
        while cursor != start {
            path.push(cursor);
            match previous[graph.index(cursor)] {
                Some(prev) => cursor = prev,
                None => return Path::new(),
            }
        }
        path.reverse();

        trace!(%start, %goal, length = path.len(), "Shortest path planned");
        path
    }
}
