//! Card instances - runtime card state.
//!
//! `CardInstance` represents one physical copy of a card inside a match.
//! It is created when a definition leaves the deck (draw) and is owned by
//! exactly one container at a time - a hand, a battlefield slot, or a
//! graveyard - so a copy can never be in two places at once.
//!
//! Exactly two stats are mutable at runtime: health and attack. Mana cost
//! is always read from the definition when the card is paid for.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::CardDefinition;
use crate::core::BoardPosition;
use crate::effects::EffectId;

/// Unique identifier for a card instance within one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// A runtime application of an effect to an instance.
///
/// Entries only exist while `turns_remaining > 0`; the start-of-turn pass
/// decrements and prunes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// The effect definition this entry was applied from.
    pub effect_id: EffectId,

    /// Whole turns left before the entry expires.
    pub turns_remaining: u32,

    /// Magnitude recorded at application time.
    pub magnitude: i32,
}

/// One physical copy of a card in a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique ID within the match.
    pub id: InstanceId,

    /// Owned copy of the definition this instance was spawned from.
    /// The shared definition is never mutated through an instance.
    pub definition: CardDefinition,

    /// Current health. May go negative from damage overshoot.
    pub current_health: i32,

    /// Current attack. Floored at 0 by stat modification.
    pub current_attack: i32,

    /// Transient effect applications with their countdown timers.
    #[serde(default)]
    pub active_effects: SmallVec<[ActiveEffect; 4]>,

    /// Board slot while on a battlefield; `None` in hand or graveyard.
    pub position: Option<BoardPosition>,

    /// May this instance initiate combat this turn?
    pub can_attack: bool,

    /// Has this instance already acted this turn?
    pub is_exhausted: bool,
}

impl CardInstance {
    /// Spawn a fresh instance from a definition.
    ///
    /// Current stats start as a verbatim copy of the base stats; the
    /// instance cannot attack until its owner's next turn starts.
    #[must_use]
    pub fn spawn(id: InstanceId, definition: CardDefinition) -> Self {
        let current_health = definition.stats.health;
        let current_attack = definition.stats.attack;
        Self {
            id,
            definition,
            current_health,
            current_attack,
            active_effects: SmallVec::new(),
            position: None,
            can_attack: false,
            is_exhausted: false,
        }
    }

    /// The card's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Base health from the definition (the healing cap).
    #[must_use]
    pub fn base_health(&self) -> i32 {
        self.definition.stats.health
    }

    /// Mana cost, read from the definition.
    #[must_use]
    pub fn mana_cost(&self) -> i32 {
        self.definition.stats.mana_cost
    }

    /// Has this instance taken lethal damage?
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.current_health <= 0
    }

    /// Is an application of the given effect currently active?
    #[must_use]
    pub fn has_active(&self, effect_id: EffectId) -> bool {
        self.active_effects.iter().any(|e| e.effect_id == effect_id)
    }

    /// Register a timed effect application: refresh the countdown if an
    /// entry for this effect already exists, otherwise append one.
    pub fn register_active(&mut self, effect_id: EffectId, turns: u32, magnitude: i32) {
        if let Some(entry) = self
            .active_effects
            .iter_mut()
            .find(|e| e.effect_id == effect_id)
        {
            entry.turns_remaining = turns;
        } else {
            self.active_effects.push(ActiveEffect {
                effect_id,
                turns_remaining: turns,
                magnitude,
            });
        }
    }

    /// Append a timer entry unconditionally.
    ///
    /// Used for control markers, where simultaneous applications keep
    /// independent countdowns instead of refreshing one another.
    pub fn push_active(&mut self, effect_id: EffectId, turns: u32, magnitude: i32) {
        self.active_effects.push(ActiveEffect {
            effect_id,
            turns_remaining: turns,
            magnitude,
        });
    }

    /// Decrement every timer and prune entries that reach zero.
    pub fn tick_active_effects(&mut self) {
        for entry in self.active_effects.iter_mut() {
            entry.turns_remaining = entry.turns_remaining.saturating_sub(1);
        }
        self.active_effects.retain(|e| e.turns_remaining > 0);
    }

    /// Ready the instance for its owner's turn.
    pub fn ready(&mut self) {
        self.can_attack = true;
        self.is_exhausted = false;
    }
}
