//! Base stat model and authoring-time validation.
//!
//! Card stats are produced by an external creation pipeline (image
//! analysis, manual authoring) and must land inside closed ranges before a
//! definition enters play. `clamped` is the stat filter that pipeline runs;
//! `validate` is the strict check applied when a definition is registered.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

use super::definition::CardId;

/// Allowed base health values.
pub const HEALTH_RANGE: RangeInclusive<i32> = 1..=12;

/// Allowed base attack values.
pub const ATTACK_RANGE: RangeInclusive<i32> = 0..=12;

/// Allowed mana cost values.
pub const MANA_COST_RANGE: RangeInclusive<i32> = 0..=10;

/// Errors raised at the definition-authoring boundary.
///
/// The battle engine itself never returns these; they exist so authoring
/// tools and the card library can reject malformed definitions before a
/// match starts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card {0} is already registered")]
    DuplicateId(CardId),

    #[error("{stat} value {value} is outside {min}..={max}")]
    StatOutOfRange {
        stat: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// Immutable base stats of a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub health: i32,
    pub attack: i32,
    pub mana_cost: i32,
}

impl StatBlock {
    /// Create a stat block. Values are taken as-is; run `clamped` or
    /// `validate` to enforce the ranges.
    #[must_use]
    pub const fn new(health: i32, attack: i32, mana_cost: i32) -> Self {
        Self {
            health,
            attack,
            mana_cost,
        }
    }

    /// Force every value into its allowed range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            health: self.health.clamp(*HEALTH_RANGE.start(), *HEALTH_RANGE.end()),
            attack: self.attack.clamp(*ATTACK_RANGE.start(), *ATTACK_RANGE.end()),
            mana_cost: self
                .mana_cost
                .clamp(*MANA_COST_RANGE.start(), *MANA_COST_RANGE.end()),
        }
    }

    /// Check every value against its allowed range.
    pub fn validate(&self) -> Result<(), CardError> {
        check_range("health", self.health, HEALTH_RANGE)?;
        check_range("attack", self.attack, ATTACK_RANGE)?;
        check_range("mana cost", self.mana_cost, MANA_COST_RANGE)?;
        Ok(())
    }

    /// True when all values are within range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn check_range(stat: &'static str, value: i32, range: RangeInclusive<i32>) -> Result<(), CardError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(CardError::StatOutOfRange {
            stat,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_block() {
        let stats = StatBlock::new(5, 3, 1);

        assert!(stats.is_valid());
        assert_eq!(stats.clamped(), stats);
    }

    #[test]
    fn test_clamp_overshoot() {
        let stats = StatBlock::new(40, -2, 15).clamped();

        assert_eq!(stats, StatBlock::new(12, 0, 10));
        assert!(stats.is_valid());
    }

    #[test]
    fn test_clamp_zero_health() {
        // Health has a floor of 1, not 0.
        assert_eq!(StatBlock::new(0, 0, 0).clamped().health, 1);
    }

    #[test]
    fn test_validate_reports_field() {
        let err = StatBlock::new(5, 13, 1).validate().unwrap_err();

        assert_eq!(
            err,
            CardError::StatOutOfRange {
                stat: "attack",
                value: 13,
                min: 0,
                max: 12,
            }
        );
    }

    proptest! {
        /// Clamping always yields a valid block, for any input values.
        #[test]
        fn clamp_always_validates(health in -100i32..100, attack in -100i32..100, cost in -100i32..100) {
            prop_assert!(StatBlock::new(health, attack, cost).clamped().is_valid());
        }
    }
}
