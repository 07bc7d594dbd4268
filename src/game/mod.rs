//! The session: owns the game state and advances it one frame per [`Session::tick`].

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::config::SessionConfig;
use crate::error::{ConfigError, GameResult};
use crate::map::builder::Maze;
use crate::map::direction::Direction;
use crate::pursuit::{ActivePlanner, PursuitAlgorithm};

pub mod clock;
pub mod state;

use clock::TickScheduler;
use state::{SessionState, SessionStatus};

/// A single game session.
///
/// All state lives here and is passed explicitly; nothing is kept at process scope.
/// Between two `tick` calls the state is always complete and renderable.
pub struct Session {
    config: SessionConfig,
    state: SessionState,
    planner: ActivePlanner,
    scheduler: TickScheduler,
}

impl Session {
    /// Validates `config` against `maze` and sets up a fresh session.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a value is out of range or the maze lacks a
    /// starting cell for one of the requested pursuers.
    pub fn new(maze: Maze, config: SessionConfig) -> GameResult<Session> {
        config.validate()?;

        let pursuer_starts = (0..config.pursuer_count)
            .map(|index| {
                maze.pursuer_start(index as usize)
                    .ok_or(ConfigError::MissingPursuerStart(index + 1))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let planner = ActivePlanner::new(config.algorithm, &maze.graph());
        let scheduler = TickScheduler::new(config.move_interval, config.pursuit_interval);
        let state = SessionState::new(maze, pursuer_starts);

        info!(
            pursuers = config.pursuer_count,
            algorithm = config.algorithm.as_ref(),
            move_ms = config.move_interval.as_millis() as u64,
            pursuit_ms = config.pursuit_interval.as_millis() as u64,
            "Session started"
        );
        debug!(
            player = %state.player(),
            remaining = state.maze().remaining(),
            "Initial placement"
        );

        Ok(Session {
            config,
            state,
            planner,
            scheduler,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn algorithm(&self) -> PursuitAlgorithm {
        self.planner.algorithm()
    }

    pub fn planner(&self) -> &ActivePlanner {
        &self.planner
    }

    pub fn status(&self) -> SessionStatus {
        self.state.status()
    }

    /// Processes one frame that lasted `dt`, with the player's current intent.
    ///
    /// In order: due timers are polled, the intent is applied if a player move is due,
    /// the point under the player is collected, a pursuit round runs if due, and the
    /// terminal conditions are checked. Once the session is terminal this is a no-op.
    pub fn tick(&mut self, dt: Duration, intent: Option<Direction>) -> SessionStatus {
        if self.state.status().is_terminal() {
            return self.state.status();
        }

        let now = self.state.advance_time(dt);
        let due = self.scheduler.poll(now);

        if due.player {
            if let Some(direction) = intent {
                match self.state.move_player(direction) {
                    Ok(cell) => trace!(%cell, direction = direction.as_ref(), "Player moved"),
                    Err(error) => trace!(%error, "Ignoring player move"),
                }
            }
        }

        self.state.collect_under_player();

        if due.pursuit {
            if self.planner.refresh(&self.state.graph()) {
                debug!("Planner refreshed after layout change");
            }
            self.state.pursuit_round(&self.planner);
        }

        self.state.evaluate_terminal()
    }
}
