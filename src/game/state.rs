use std::fmt;
use std::time::Duration;

use strum_macros::{AsRefStr, Display};
use tracing::{info, trace};

use crate::constants::{COLLECTED_CHAR, POINT_CHAR, WALL_CHAR};
use crate::error::MoveError;
use crate::map::builder::Maze;
use crate::map::cell::{Cell, CellState};
use crate::map::direction::Direction;
use crate::map::graph::GridGraph;
use crate::pursuit::{Agent, Planner, PursuitController};

/// Whether a session is still running, and how it ended if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr)]
pub enum SessionStatus {
    #[default]
    Active,
    /// A pursuer reached the player's cell.
    Captured,
    /// Every point in the maze was collected.
    Cleared,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::Active)
    }
}

/// Everything a render collaborator can observe about a session.
///
/// Owned by the session's tick loop; all mutation goes through the crate-internal
/// methods below and stops once the status becomes terminal.
#[derive(Debug, Clone)]
pub struct SessionState {
    maze: Maze,
    player: Agent,
    pursuers: Vec<PursuitController>,
    score: u32,
    elapsed: Duration,
    frames: u64,
    status: SessionStatus,
}

impl SessionState {
    /// Places the player and pursuers at their starting cells and collects the player's start.
    pub(crate) fn new(mut maze: Maze, pursuer_starts: Vec<Cell>) -> Self {
        let player = Agent::seeker(maze.player_start());
        let score = u32::from(maze.collect(player.position));
        let pursuers = pursuer_starts
            .into_iter()
            .enumerate()
            .map(|(id, start)| PursuitController::new(id, start))
            .collect();

        SessionState {
            maze,
            player,
            pursuers,
            score,
            elapsed: Duration::ZERO,
            frames: 0,
            status: SessionStatus::Active,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn graph(&self) -> GridGraph<'_> {
        GridGraph::new(&self.maze)
    }

    pub fn player(&self) -> Cell {
        self.player.position
    }

    pub fn player_agent(&self) -> &Agent {
        &self.player
    }

    pub fn pursuers(&self) -> &[PursuitController] {
        &self.pursuers
    }

    pub fn pursuer_positions(&self) -> impl Iterator<Item = Cell> + '_ {
        self.pursuers.iter().map(PursuitController::position)
    }

    /// Number of cells collected so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Session time accumulated from frame deltas.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of frames processed while active.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// True iff any pursuer shares the player's cell.
    pub fn is_captured(&self) -> bool {
        self.pursuer_positions().any(|position| position == self.player.position)
    }

    /// True iff no `Empty` cell remains.
    pub fn is_cleared(&self) -> bool {
        self.maze.remaining() == 0
    }

    pub(crate) fn advance_time(&mut self, dt: Duration) -> Duration {
        self.elapsed += dt;
        self.frames += 1;
        self.elapsed
    }

    /// Moves the player one cell in `direction` unless the destination is a wall.
    pub(crate) fn move_player(&mut self, direction: Direction) -> Result<Cell, MoveError> {
        let from = self.player.position;
        let next = self
            .maze
            .neighbor(from, direction)
            .ok_or(MoveError::Blocked { from, direction })?;
        self.player.position = next;
        Ok(next)
    }

    /// Collects the point under the player, if any. Returns whether the score changed.
    pub(crate) fn collect_under_player(&mut self) -> bool {
        let collected = self.maze.collect(self.player.position);
        if collected {
            self.score += 1;
            trace!(cell = %self.player.position, score = self.score, "Point collected");
        }
        collected
    }

    /// Advances every pursuer one step toward the player, in pursuer order.
    pub(crate) fn pursuit_round<P: Planner + ?Sized>(&mut self, planner: &P) {
        let graph = GridGraph::new(&self.maze);
        let target = self.player.position;
        for pursuer in &mut self.pursuers {
            pursuer.step(target, planner, &graph);
        }
    }

    /// Applies the terminal predicates, capture first, and freezes the status if one holds.
    pub(crate) fn evaluate_terminal(&mut self) -> SessionStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        let status = if self.is_captured() {
            SessionStatus::Captured
        } else if self.is_cleared() {
            SessionStatus::Cleared
        } else {
            SessionStatus::Active
        };

        if status.is_terminal() {
            self.status = status;
            info!(
                status = status.as_ref(),
                score = self.score,
                seconds = self.elapsed.as_secs(),
                frames = self.frames,
                "Session ended"
            );
        }
        self.status
    }
}

/// Renders the board as text: walls, points, collected cells, `P` for the player
/// and `G` for pursuers (drawn over the player).
impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.maze.height() {
            for col in 0..self.maze.width() {
                let cell = Cell::new(row, col);
                let glyph = if self.pursuer_positions().any(|position| position == cell) {
                    'G'
                } else if self.player.position == cell {
                    'P'
                } else {
                    match self.maze.get(cell) {
                        Some(CellState::Wall) | None => WALL_CHAR,
                        Some(CellState::Empty) => POINT_CHAR,
                        Some(CellState::Collected) => COLLECTED_CHAR,
                    }
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
