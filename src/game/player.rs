//! Player aggregate: life total, mana, and card containers.

use serde::{Deserialize, Serialize};

use super::battlefield::Battlefield;
use crate::cards::{CardDefinition, CardInstance};
use crate::core::{BattleConfig, PlayerId};

/// A player's mana pool.
///
/// `current <= max` always; `max` never exceeds the configured ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaPool {
    pub current: i32,
    pub max: i32,
}

impl ManaPool {
    /// Create a full pool of the given size.
    #[must_use]
    pub const fn new(amount: i32) -> Self {
        Self {
            current: amount,
            max: amount,
        }
    }

    /// Can this pool pay the given cost?
    #[must_use]
    pub fn can_afford(&self, cost: i32) -> bool {
        self.current >= cost
    }

    /// Pay a cost. Returns false (and changes nothing) if unaffordable.
    pub fn spend(&mut self, cost: i32) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.current -= cost;
        true
    }

    /// Grow the maximum to `target` (never shrinking) and refill.
    pub fn ramp_to(&mut self, target: i32) {
        self.max = self.max.max(target);
        self.current = self.max;
    }
}

/// One of the two combatants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Seat identifier.
    pub id: PlayerId,

    /// Current life total. At or below zero the player is defeated.
    pub health: i32,

    /// Life total ceiling.
    pub max_health: i32,

    /// Mana pool.
    pub mana: ManaPool,

    /// Remaining deck; the tail is the top.
    pub deck: Vec<CardDefinition>,

    /// Drawn cards not yet placed.
    pub hand: Vec<CardInstance>,

    /// This player's six board slots.
    pub battlefield: Battlefield,

    /// Instances that died on the battlefield.
    pub graveyard: Vec<CardInstance>,
}

impl Player {
    /// Create a player at the configured starting values with the given
    /// (already shuffled) deck.
    #[must_use]
    pub fn new(id: PlayerId, config: &BattleConfig, deck: Vec<CardDefinition>) -> Self {
        Self {
            id,
            health: config.starting_health,
            max_health: config.starting_health,
            mana: ManaPool::new(config.starting_mana),
            deck,
            hand: Vec::new(),
            battlefield: Battlefield::new(),
            graveyard: Vec::new(),
        }
    }

    /// Has this player taken lethal damage?
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardType, StatBlock};

    fn config() -> BattleConfig {
        BattleConfig::default()
    }

    fn deck() -> Vec<CardDefinition> {
        vec![CardDefinition::new(
            CardId::new(1),
            "Creature",
            CardType::Creature,
            StatBlock::new(5, 3, 1),
        )]
    }

    #[test]
    fn test_new_player_starting_values() {
        let player = Player::new(PlayerId::FIRST, &config(), deck());

        assert_eq!(player.health, 30);
        assert_eq!(player.max_health, 30);
        assert_eq!(player.mana, ManaPool::new(1));
        assert_eq!(player.deck.len(), 1);
        assert!(player.hand.is_empty());
        assert!(player.graveyard.is_empty());
        assert!(!player.is_defeated());
    }

    #[test]
    fn test_mana_spend() {
        let mut mana = ManaPool::new(3);

        assert!(mana.spend(2));
        assert_eq!(mana.current, 1);
        assert_eq!(mana.max, 3);

        assert!(!mana.spend(2));
        assert_eq!(mana.current, 1);
    }

    #[test]
    fn test_mana_ramp_refills() {
        let mut mana = ManaPool::new(1);
        mana.spend(1);

        mana.ramp_to(3);
        assert_eq!(mana.max, 3);
        assert_eq!(mana.current, 3);

        // Ramping never shrinks the maximum.
        mana.ramp_to(2);
        assert_eq!(mana.max, 3);
        assert_eq!(mana.current, 3);
    }

    #[test]
    fn test_defeated_at_zero() {
        let mut player = Player::new(PlayerId::SECOND, &config(), deck());
        player.health = 0;
        assert!(player.is_defeated());

        player.health = -4;
        assert!(player.is_defeated());
    }
}
