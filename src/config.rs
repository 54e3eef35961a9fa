//! Engine configuration.
//!
//! Every tunable the engine reads lives in one immutable [`GameConfig`] handed to
//! [`crate::game::Game::new`]. Hosts can build it by hand, or layer `PACMAN_*`
//! environment variables over the defaults with [`GameConfig::load`].

use std::time::Duration;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DOT_SCORE, ENERGIZER_SCORE, FEEDING_DURATION_MS, GHOST_DIRECTION_CHANGE_INTERVAL_MS, GHOST_SCORE, PACMAN_LIVES,
    TICK_INTERVAL_MS,
};
use crate::entity::CollisionRule;
use crate::error::{GameError, GameResult};

/// Prefix of the environment variables read by [`GameConfig::load`].
pub const ENV_PREFIX: &str = "PACMAN_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Period of the scheduler calling `tick`, in milliseconds.
    pub tick_interval_ms: u64,
    /// Period between two random wandering decisions of the ghosts, in milliseconds.
    pub ghost_direction_change_interval_ms: u64,
    /// Length of the feeding window opened by an energizer, in milliseconds.
    pub feeding_duration_ms: u64,
    /// Lives Pac-Man starts the session with.
    pub pacman_lives: u8,
    pub dot_score: u32,
    pub energizer_score: u32,
    /// Score of the first ghost eaten in a feeding window; doubled for each following one.
    pub ghost_score: u32,
    /// Let ghosts and Pac-Man catch each other when crossing paths regardless of vulnerability.
    pub legacy_crossing_collisions: bool,
    /// Seed of the ghost wandering generator. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            ghost_direction_change_interval_ms: GHOST_DIRECTION_CHANGE_INTERVAL_MS,
            feeding_duration_ms: FEEDING_DURATION_MS,
            pacman_lives: PACMAN_LIVES,
            dot_score: DOT_SCORE,
            energizer_score: ENERGIZER_SCORE,
            ghost_score: GHOST_SCORE,
            legacy_crossing_collisions: false,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Loads the defaults overridden by `PACMAN_*` environment variables, then validates.
    pub fn load() -> GameResult<Self> {
        Self::from_figment(Self::figment())
    }

    /// The figment [`GameConfig::load`] extracts from, for hosts that want to merge more providers.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(GameConfig::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: Figment) -> GameResult<Self> {
        let config: GameConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the engine cannot run with.
    pub fn validate(&self) -> GameResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfig("tick_interval_ms must be positive".into()));
        }
        if self.ghost_direction_change_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "ghost_direction_change_interval_ms must be positive".into(),
            ));
        }
        if self.pacman_lives == 0 {
            return Err(GameError::InvalidConfig("pacman_lives must be positive".into()));
        }
        Ok(())
    }

    /// The feeding window length in ticks, rounded to the nearest tick.
    pub fn feeding_ticks(&self) -> u64 {
        self.feeding_duration_ms.saturating_add(self.tick_interval_ms / 2) / self.tick_interval_ms
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn collision_rule(&self) -> CollisionRule {
        if self.legacy_crossing_collisions {
            CollisionRule::Legacy
        } else {
            CollisionRule::Strict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feeding_ticks() {
        assert_eq!(GameConfig::default().feeding_ticks(), 33);
    }

    #[test]
    fn test_feeding_ticks_rounds_half_up() {
        let config = GameConfig {
            feeding_duration_ms: 450,
            ..GameConfig::default()
        };
        assert_eq!(config.feeding_ticks(), 2);
    }

    #[test]
    fn test_feeding_ticks_saturates() {
        let config = GameConfig {
            feeding_duration_ms: u64::MAX,
            ..GameConfig::default()
        };
        assert_eq!(config.feeding_ticks(), u64::MAX / config.tick_interval_ms);
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }
}
