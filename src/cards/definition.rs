//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: identity,
//! classification, base stats, and the effects printed on it. Instance
//! state (current stats, active-effect timers, board position) is stored
//! separately in `CardInstance`.

use serde::{Deserialize, Serialize};

use super::stats::StatBlock;
use crate::effects::Effect;

/// Unique identifier for a card definition.
///
/// This identifies the card as authored, not a specific copy in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Rarity tier, ordered from most to least common.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Creature,
    Spell,
    Artifact,
}

/// Elemental affinity.
///
/// The matchup cycle is informational only: the battle engine does not
/// scale damage by element. Fire, Air, Earth and Water form a cycle;
/// Light and Shadow oppose each other; Neutral has no matchup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
    Light,
    Shadow,
    #[default]
    Neutral,
}

impl Element {
    /// The element this one is strong against, if any.
    #[must_use]
    pub const fn strong_against(self) -> Option<Element> {
        match self {
            Element::Fire => Some(Element::Air),
            Element::Air => Some(Element::Earth),
            Element::Earth => Some(Element::Water),
            Element::Water => Some(Element::Fire),
            Element::Light => Some(Element::Shadow),
            Element::Shadow => Some(Element::Light),
            Element::Neutral => None,
        }
    }

    /// The element this one is weak against, if any.
    #[must_use]
    pub const fn weak_against(self) -> Option<Element> {
        match self {
            Element::Fire => Some(Element::Water),
            Element::Water => Some(Element::Earth),
            Element::Earth => Some(Element::Air),
            Element::Air => Some(Element::Fire),
            Element::Light => Some(Element::Shadow),
            Element::Shadow => Some(Element::Light),
            Element::Neutral => None,
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use cardverse_battle::cards::{CardDefinition, CardId, CardType, Element, Rarity, StatBlock};
///
/// let ember = CardDefinition::new(
///     CardId::new(1),
///     "Ember Whelp",
///     CardType::Creature,
///     StatBlock::new(3, 2, 1),
/// )
/// .with_element(Element::Fire)
/// .with_rarity(Rarity::Common)
/// .with_description("A hatchling that spits sparks.");
///
/// assert_eq!(ember.stats.attack, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this definition.
    pub id: CardId,

    /// Card name.
    pub name: String,

    /// Display text. Never consulted for rules dispatch.
    pub description: String,

    /// Flavor text.
    pub lore: String,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Card type.
    pub card_type: CardType,

    /// Elemental affinity (informational).
    pub element: Element,

    /// Base stats.
    pub stats: StatBlock,

    /// Effects printed on the card, in resolution order. Distinct from
    /// the transient active effects a copy accumulates during a match.
    pub effects: Vec<Effect>,

    /// Creation timestamp (epoch milliseconds).
    pub created_at: u64,

    /// Opaque creator identifier.
    pub created_by: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType, stats: StatBlock) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            lore: String::new(),
            rarity: Rarity::default(),
            card_type,
            element: Element::default(),
            stats,
            effects: Vec::new(),
            created_at: 0,
            created_by: String::new(),
        }
    }

    /// Set the display text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the flavor text (builder pattern).
    #[must_use]
    pub fn with_lore(mut self, lore: impl Into<String>) -> Self {
        self.lore = lore.into();
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set the element (builder pattern).
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Add a printed effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set provenance (builder pattern).
    #[must_use]
    pub fn with_provenance(mut self, created_at: u64, created_by: impl Into<String>) -> Self {
        self.created_at = created_at;
        self.created_by = created_by.into();
        self
    }
}
