use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use figment::{providers::Env, Figment};
use tracing::{info, warn};

use maze_pursuit::autopilot;
use maze_pursuit::config::{SessionConfig, ENV_PREFIX};
use maze_pursuit::constants::{DEFAULT_BOARD, FRAME_TIME};
use maze_pursuit::formatter;
use maze_pursuit::game::Session;
use maze_pursuit::logging::setup_logging;
use maze_pursuit::map::builder::Maze;

/// Default cap on how long a headless run may last, in seconds.
const DEFAULT_MAX_SECONDS: u64 = 120;

pub fn main() -> Result<()> {
    setup_logging();

    let config = SessionConfig::load().context("Invalid session configuration")?;
    let max_seconds: u64 = Figment::new()
        .merge(Env::prefixed(ENV_PREFIX).only(&["max_seconds"]))
        .extract_inner("max_seconds")
        .unwrap_or(DEFAULT_MAX_SECONDS);
    let max_duration = Duration::from_secs(max_seconds);

    let maze = Maze::parse(&DEFAULT_BOARD)?;
    let mut session = Session::new(maze, config)?;

    let mut last_tick = Instant::now();
    loop {
        let start = Instant::now();
        formatter::increment_frame();

        let intent = autopilot::next_intent(session.state());
        let dt = last_tick.elapsed();
        last_tick = Instant::now();

        if session.tick(dt, intent).is_terminal() {
            break;
        }
        if session.state().elapsed() >= max_duration {
            warn!(seconds = max_seconds, "Session time limit reached, quitting");
            break;
        }

        let time = FRAME_TIME.saturating_sub(start.elapsed());
        if time != Duration::ZERO {
            spin_sleep::sleep(time);
        }
    }

    let state = session.state();
    print!("{state}");
    info!(
        status = state.status().as_ref(),
        score = state.score(),
        seconds = state.elapsed().as_secs(),
        "Finished"
    );

    Ok(())
}
