//! Session configuration: chosen once, validated before the session starts, then immutable.

use std::time::Duration;

use figment::{providers::Env, Figment};
use serde::Deserialize;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::constants::{
    DEFAULT_MOVE_INTERVAL, DEFAULT_PURSUIT_INTERVAL, MAX_INTERVAL, MAX_PURSUERS, MIN_INTERVAL, MIN_PURSUERS,
};
use crate::error::ConfigError;
use crate::pursuit::PursuitAlgorithm;

/// Prefix of the environment variables read by [`SessionConfig::load`].
pub const ENV_PREFIX: &str = "PURSUIT_";

/// Difficulty presets; each one fixes the number of pursuers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// One pursuer.
    #[default]
    Easy,
    /// Two pursuers.
    Medium,
    /// Three pursuers.
    Hard,
}

impl Difficulty {
    pub const fn pursuer_count(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

/// Settings supplied once at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of pursuers, `1..=3`.
    pub pursuer_count: u8,
    /// Which chase algorithm every pursuer uses.
    pub algorithm: PursuitAlgorithm,
    /// Interval between player move attempts.
    pub move_interval: Duration,
    /// Interval between pursuit rounds.
    pub pursuit_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Difficulty::default(), PursuitAlgorithm::default())
    }
}

impl SessionConfig {
    pub fn new(difficulty: Difficulty, algorithm: PursuitAlgorithm) -> Self {
        Self {
            pursuer_count: difficulty.pursuer_count(),
            algorithm,
            move_interval: DEFAULT_MOVE_INTERVAL,
            pursuit_interval: DEFAULT_PURSUIT_INTERVAL,
        }
    }

    pub fn with_pursuers(mut self, pursuer_count: u8) -> Self {
        self.pursuer_count = pursuer_count;
        self
    }

    pub fn with_intervals(mut self, move_interval: Duration, pursuit_interval: Duration) -> Self {
        self.move_interval = move_interval;
        self.pursuit_interval = pursuit_interval;
        self
    }

    /// Checks every value against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PURSUERS..=MAX_PURSUERS).contains(&self.pursuer_count) {
            return Err(ConfigError::PursuerCount {
                count: self.pursuer_count,
                min: MIN_PURSUERS,
                max: MAX_PURSUERS,
            });
        }
        validate_interval("move", self.move_interval)?;
        validate_interval("pursuit", self.pursuit_interval)?;
        Ok(())
    }

    /// Loads and validates configuration from `PURSUIT_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Figment::new().merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extracts and validates configuration from an arbitrary figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let raw: RawConfig = figment.extract()?;
        let config = SessionConfig::from(raw);
        config.validate()?;
        Ok(config)
    }
}

fn validate_interval(name: &'static str, value: Duration) -> Result<(), ConfigError> {
    if (MIN_INTERVAL..=MAX_INTERVAL).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Interval {
            name,
            value,
            min: MIN_INTERVAL,
            max: MAX_INTERVAL,
        })
    }
}

/// Raw configuration as read from the environment.
/// This is an intermediate representation that gets converted and validated into [`SessionConfig`].
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    difficulty: Difficulty,
    /// Overrides the difficulty's pursuer count when set.
    pursuers: Option<u8>,
    #[serde(default)]
    algorithm: PursuitAlgorithm,
    #[serde(default = "default_move_interval_ms")]
    move_interval_ms: u64,
    #[serde(default = "default_pursuit_interval_ms")]
    pursuit_interval_ms: u64,
}

impl From<RawConfig> for SessionConfig {
    fn from(raw: RawConfig) -> Self {
        SessionConfig {
            pursuer_count: raw.pursuers.unwrap_or(raw.difficulty.pursuer_count()),
            algorithm: raw.algorithm,
            move_interval: Duration::from_millis(raw.move_interval_ms),
            pursuit_interval: Duration::from_millis(raw.pursuit_interval_ms),
        }
    }
}

fn default_move_interval_ms() -> u64 {
    DEFAULT_MOVE_INTERVAL.as_millis() as u64
}

fn default_pursuit_interval_ms() -> u64 {
    DEFAULT_PURSUIT_INTERVAL.as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_pursuer_counts() {
        assert_eq!(Difficulty::Easy.pursuer_count(), 1);
        assert_eq!(Difficulty::Medium.pursuer_count(), 2);
        assert_eq!(Difficulty::Hard.pursuer_count(), 3);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pursuer_count, 1);
        assert_eq!(config.algorithm, PursuitAlgorithm::ShortestPath);
    }

    #[test]
    fn test_raw_config_pursuers_override_difficulty() {
        let raw = RawConfig {
            difficulty: Difficulty::Hard,
            pursuers: Some(2),
            algorithm: PursuitAlgorithm::SpanningTree,
            move_interval_ms: 100,
            pursuit_interval_ms: 500,
        };
        let config = SessionConfig::from(raw);
        assert_eq!(config.pursuer_count, 2);
        assert_eq!(config.move_interval, Duration::from_millis(100));
        assert_eq!(config.pursuit_interval, Duration::from_millis(500));
    }
}
