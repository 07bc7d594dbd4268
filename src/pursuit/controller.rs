use strum_macros::AsRefStr;
use tracing::trace;

use super::Planner;
use crate::error::MoveError;
use crate::map::cell::Cell;
use crate::map::graph::GridGraph;

/// What an agent is in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
pub enum Role {
    /// The player, collecting points.
    Seeker,
    /// A chaser trying to reach the player's cell.
    Pursuer,
}

/// An agent on the grid. Only its position changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub role: Role,
    pub position: Cell,
}

impl Agent {
    pub fn seeker(position: Cell) -> Self {
        Self {
            role: Role::Seeker,
            position,
        }
    }

    pub fn pursuer(position: Cell) -> Self {
        Self {
            role: Role::Pursuer,
            position,
        }
    }
}

/// Per-pursuer state machine. `Idle` until the first pursuit round, `Advancing` after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
pub enum PursuerState {
    #[default]
    Idle,
    Advancing,
}

/// Drives one pursuer toward a target, one cell per pursuit round.
#[derive(Debug, Clone)]
pub struct PursuitController {
    id: usize,
    agent: Agent,
    state: PursuerState,
}

impl PursuitController {
    pub fn new(id: usize, start: Cell) -> Self {
        Self {
            id,
            agent: Agent::pursuer(start),
            state: PursuerState::Idle,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn position(&self) -> Cell {
        self.agent.position
    }

    pub fn state(&self) -> PursuerState {
        self.state
    }

    /// The cell a pursuer at `current` should occupy next when chasing `target`.
    ///
    /// This is always the first cell of the planned path, so the result is exactly
    /// one step from `current`, never further.
    pub fn next_position<P: Planner + ?Sized>(
        current: Cell,
        target: Cell,
        planner: &P,
        graph: &GridGraph<'_>,
    ) -> Result<Cell, MoveError> {
        planner
            .plan(graph, current, target)
            .first()
            .copied()
            .ok_or(MoveError::UnreachableTarget {
                from: current,
                to: target,
            })
    }

    /// Advances the pursuer one cell toward `target` and returns its new position.
    ///
    /// If the target cannot be reached the pursuer holds its position for this round.
    pub fn step<P: Planner + ?Sized>(&mut self, target: Cell, planner: &P, graph: &GridGraph<'_>) -> Cell {
        self.state = PursuerState::Advancing;

        match Self::next_position(self.agent.position, target, planner, graph) {
            Ok(next) => {
                trace!(pursuer = self.id, from = %self.agent.position, to = %next, "Pursuer advanced");
                self.agent.position = next;
            }
            Err(error) => {
                trace!(pursuer = self.id, %error, "Pursuer holding position");
            }
        }

        self.agent.position
    }
}
