//! Match configuration.
//!
//! `BattleConfig` collects the tunable starting values of a match. The
//! defaults describe the standard ruleset; builder-style setters allow
//! variants without touching the engine.

use serde::{Deserialize, Serialize};

/// Starting values and limits for a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Starting (and maximum) player health.
    pub starting_health: i32,

    /// Cards drawn into each opening hand.
    pub starting_hand_size: usize,

    /// Mana available on the first turn.
    pub starting_mana: i32,

    /// Maximum mana a player can ever ramp to.
    pub mana_ceiling: i32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            starting_health: 30,
            starting_hand_size: 5,
            starting_mana: 1,
            mana_ceiling: 10,
        }
    }
}

impl BattleConfig {
    /// Create a configuration with the standard ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting health.
    #[must_use]
    pub fn starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the first-turn mana.
    #[must_use]
    pub fn starting_mana(mut self, mana: i32) -> Self {
        self.starting_mana = mana;
        self
    }

    /// Set the mana ceiling.
    #[must_use]
    pub fn mana_ceiling(mut self, ceiling: i32) -> Self {
        self.mana_ceiling = ceiling;
        self
    }
}
