//! Game configuration.
//!
//! Hosts build a `GameConfig` at startup with the `with_*` builders or
//! deserialize one. Defaults reproduce the reference game: six pairs,
//! an 800ms flip-back delay and a one second clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of distinct images dealt per game.
pub const DEFAULT_SELECT_COUNT: usize = 6;

/// Delay before a mismatched pair is turned back over.
pub const DEFAULT_FLIP_DELAY_MS: u64 = 800;

/// Period of the elapsed-time clock.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distinct images per deal. The deck holds twice as many cards.
    pub select_count: usize,

    /// Mismatch resolution delay in milliseconds.
    pub flip_delay_ms: u64,

    /// Elapsed-time tick period in milliseconds. Must be non-zero.
    pub tick_interval_ms: u64,

    /// Seed for dealing. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            select_count: DEFAULT_SELECT_COUNT,
            flip_delay_ms: DEFAULT_FLIP_DELAY_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the number of distinct images per deal.
    #[must_use]
    pub fn with_select_count(mut self, count: usize) -> Self {
        self.select_count = count;
        self
    }

    /// Set the mismatch resolution delay.
    #[must_use]
    pub fn with_flip_delay_ms(mut self, ms: u64) -> Self {
        self.flip_delay_ms = ms;
        self
    }

    /// Set the clock period.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Fix the dealing seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn flip_delay(&self) -> Duration {
        Duration::from_millis(self.flip_delay_ms)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check the configuration against a catalog of `catalog_len` images.
    pub fn validate(&self, catalog_len: usize) -> Result<(), ConfigError> {
        if self.select_count > catalog_len {
            return Err(ConfigError::SelectionTooLarge {
                requested: self.select_count,
                available: catalog_len,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.select_count, 6);
        assert_eq!(config.flip_delay(), Duration::from_millis(800));
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_select_count(3)
            .with_flip_delay_ms(250)
            .with_tick_interval_ms(500)
            .with_seed(123);

        assert_eq!(config.select_count, 3);
        assert_eq!(config.flip_delay_ms, 250);
        assert_eq!(config.tick_interval_ms, 500);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_validate() {
        let config = GameConfig::default();
        assert!(config.validate(47).is_ok());
        assert!(config.validate(6).is_ok());
        assert_eq!(
            config.validate(5),
            Err(ConfigError::SelectionTooLarge {
                requested: 6,
                available: 5
            })
        );

        let zero_tick = GameConfig::default().with_tick_interval_ms(0);
        assert_eq!(zero_tick.validate(47), Err(ConfigError::ZeroTickInterval));

        // An empty selection is a legal, instantly finished game
        assert!(GameConfig::default().with_select_count(0).validate(0).is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "select_count": 4 }"#).unwrap();
        assert_eq!(config.select_count, 4);
        assert_eq!(config.flip_delay_ms, DEFAULT_FLIP_DELAY_MS);
        assert_eq!(config.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
    }
}
