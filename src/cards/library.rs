//! Card library for definition lookup.
//!
//! The `CardLibrary` stores authored card definitions and provides fast
//! lookup by `CardId`. Registration validates base stats, so anything the
//! library hands out satisfies the stat-range invariant.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardType};
use super::stats::CardError;

/// Registry of validated card definitions.
///
/// ## Example
///
/// ```
/// use cardverse_battle::cards::{CardDefinition, CardId, CardLibrary, CardType, StatBlock};
///
/// let mut library = CardLibrary::new();
///
/// let wisp = CardDefinition::new(CardId::new(1), "Wisp", CardType::Creature, StatBlock::new(1, 1, 0));
/// library.register(wisp).unwrap();
///
/// assert_eq!(library.get(CardId::new(1)).unwrap().name, "Wisp");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardLibrary {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardLibrary {
    /// Create a new empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Rejects duplicate IDs and out-of-range base stats.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), CardError> {
        if self.cards.contains_key(&card.id) {
            return Err(CardError::DuplicateId(card.id));
        }
        card.stats.validate()?;
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.card_type == card_type)
    }

    /// Build a deck from an ordered list of card IDs.
    ///
    /// Returns `None` if any ID is unknown; otherwise owned copies of the
    /// definitions, in the given order. This is the deck source handed to
    /// a new battle.
    #[must_use]
    pub fn build_deck(&self, ids: &[CardId]) -> Option<Vec<CardDefinition>> {
        ids.iter().map(|id| self.get(*id).cloned()).collect()
    }
}
