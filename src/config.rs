//! Match configuration read from the environment.

use std::env;

use crate::models::constants::{
    DEFAULT_DICE_PER_VESSEL, DEFAULT_DIE_MAX, DEFAULT_FRAME_MS, DEFAULT_MAX_VOLLEY,
};

/// Settings for one match. Command line flags override these.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleConfig {
    pub seed: u64,
    pub dice_per_vessel: usize,
    /// Dice are rolled in `1..=die_max`.
    pub die_max: i32,
    /// Volleys are rolled in `0..=max_volley`.
    pub max_volley: i32,
    /// Virtual time per simulated frame.
    pub frame_ms: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            dice_per_vessel: DEFAULT_DICE_PER_VESSEL,
            die_max: DEFAULT_DIE_MAX,
            max_volley: DEFAULT_MAX_VOLLEY,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl BattleConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BROADSIDE_SEED` - RNG seed (default: 0)
    /// - `BROADSIDE_DICE` - Dice per vessel (default: 6, min 1)
    /// - `BROADSIDE_DIE_MAX` - Highest die value (default: 6, min 1)
    /// - `BROADSIDE_MAX_VOLLEY` - Highest volley damage (default: 6)
    /// - `BROADSIDE_FRAME_MS` - Simulated frame length (default: 16, min 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = read::<u64>(&lookup, "BROADSIDE_SEED") {
            config.seed = seed;
        }
        if let Some(dice) = read::<usize>(&lookup, "BROADSIDE_DICE") {
            config.dice_per_vessel = dice.max(1);
        }
        if let Some(max) = read::<i32>(&lookup, "BROADSIDE_DIE_MAX") {
            config.die_max = max.max(1);
        }
        if let Some(max) = read::<i32>(&lookup, "BROADSIDE_MAX_VOLLEY") {
            config.max_volley = max.max(0);
        }
        if let Some(frame) = read::<u64>(&lookup, "BROADSIDE_FRAME_MS") {
            config.frame_ms = frame.max(1);
        }

        config
    }
}

fn read<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    match lookup(key)?.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, "ignoring unparsable setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> BattleConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BattleConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), BattleConfig::default());
    }

    #[test]
    fn reads_and_clamps_values() {
        let config = config_from(&[
            ("BROADSIDE_SEED", "42"),
            ("BROADSIDE_DICE", "0"),
            ("BROADSIDE_DIE_MAX", "12"),
            ("BROADSIDE_FRAME_MS", "0"),
        ]);
        assert_eq!(config.seed, 42);
        assert_eq!(config.dice_per_vessel, 1);
        assert_eq!(config.die_max, 12);
        assert_eq!(config.frame_ms, 1);
    }

    #[test]
    fn garbage_falls_back_to_default() {
        let config = config_from(&[("BROADSIDE_DICE", "lots")]);
        assert_eq!(config.dice_per_vessel, DEFAULT_DICE_PER_VESSEL);
    }
}
