//! Fixed-interval timers that pace movement independently of the frame rate.

use std::time::Duration;

/// A timer that fires at most once per elapsed interval.
///
/// Firing resets the reference point to the poll time rather than advancing it by
/// one interval, so a long frame never produces a burst of catch-up firings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    interval: Duration,
    last_fired: Duration,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Session time of the last firing (zero if the timer never fired).
    pub fn last_fired(&self) -> Duration {
        self.last_fired
    }

    /// Returns `true` if at least one interval has passed since the last firing at session time `now`.
    pub fn poll(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.last_fired) >= self.interval {
            self.last_fired = now;
            true
        } else {
            false
        }
    }
}

/// Which timers fired during a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DueTimers {
    /// One player move attempt is due.
    pub player: bool,
    /// One full pursuit round is due.
    pub pursuit: bool,
}

/// The two independent movement timers of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickScheduler {
    player: IntervalTimer,
    pursuit: IntervalTimer,
}

impl TickScheduler {
    pub fn new(move_interval: Duration, pursuit_interval: Duration) -> Self {
        Self {
            player: IntervalTimer::new(move_interval),
            pursuit: IntervalTimer::new(pursuit_interval),
        }
    }

    pub fn player(&self) -> &IntervalTimer {
        &self.player
    }

    pub fn pursuit(&self) -> &IntervalTimer {
        &self.pursuit
    }

    /// Polls both timers at session time `now`.
    pub fn poll(&mut self, now: Duration) -> DueTimers {
        DueTimers {
            player: self.player.poll(now),
            pursuit: self.pursuit.poll(now),
        }
    }
}
