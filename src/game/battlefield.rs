//! One player's battlefield: 3 front slots and 3 back slots.
//!
//! Slots own their card instances. Placing moves an instance in, taking
//! moves it out; an instance therefore cannot occupy two locations, and
//! its `position` field is kept in sync by this container.

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{BoardPosition, Row, ROW_SLOTS};

/// Fixed six-slot board for one player.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Battlefield {
    front: [Option<CardInstance>; ROW_SLOTS],
    back: [Option<CardInstance>; ROW_SLOTS],
}

impl Battlefield {
    /// Create an empty battlefield.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn row(&self, row: Row) -> &[Option<CardInstance>; ROW_SLOTS] {
        match row {
            Row::Front => &self.front,
            Row::Back => &self.back,
        }
    }

    fn row_mut(&mut self, row: Row) -> &mut [Option<CardInstance>; ROW_SLOTS] {
        match row {
            Row::Front => &mut self.front,
            Row::Back => &mut self.back,
        }
    }

    /// The card at a position, if any. Out-of-range positions read as
    /// unoccupied.
    #[must_use]
    pub fn slot(&self, pos: BoardPosition) -> Option<&CardInstance> {
        self.row(pos.row).get(pos.index)?.as_ref()
    }

    /// Mutable access to the card at a position, if any.
    pub fn slot_mut(&mut self, pos: BoardPosition) -> Option<&mut CardInstance> {
        self.row_mut(pos.row).get_mut(pos.index)?.as_mut()
    }

    /// Is a position occupied?
    #[must_use]
    pub fn is_occupied(&self, pos: BoardPosition) -> bool {
        self.slot(pos).is_some()
    }

    /// Place an instance into a slot, setting its position.
    ///
    /// Returns the instance back if the slot is occupied or out of range.
    pub fn place(&mut self, pos: BoardPosition, mut card: CardInstance) -> Result<(), CardInstance> {
        if !pos.in_bounds() {
            return Err(card);
        }
        let slot = &mut self.row_mut(pos.row)[pos.index];
        if slot.is_some() {
            return Err(card);
        }
        card.position = Some(pos);
        *slot = Some(card);
        Ok(())
    }

    /// Remove and return the instance at a position, clearing its
    /// position field.
    pub fn take(&mut self, pos: BoardPosition) -> Option<CardInstance> {
        let mut card = self.row_mut(pos.row).get_mut(pos.index)?.take()?;
        card.position = None;
        Some(card)
    }

    /// Iterate over all cards on the board, front row first.
    pub fn cards(&self) -> impl Iterator<Item = &CardInstance> {
        self.front
            .iter()
            .chain(self.back.iter())
            .filter_map(|slot| slot.as_ref())
    }

    /// Iterate mutably over all cards on the board.
    pub fn cards_mut(&mut self) -> impl Iterator<Item = &mut CardInstance> {
        self.front
            .iter_mut()
            .chain(self.back.iter_mut())
            .filter_map(|slot| slot.as_mut())
    }

    /// Positions currently occupied, front row first.
    #[must_use]
    pub fn occupied_positions(&self) -> Vec<BoardPosition> {
        BoardPosition::all()
            .filter(|pos| self.is_occupied(*pos))
            .collect()
    }

    /// Positions currently empty, front row first.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<BoardPosition> {
        BoardPosition::all()
            .filter(|pos| !self.is_occupied(*pos))
            .collect()
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards().count()
    }

    /// Is the board full?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count() == 2 * ROW_SLOTS
    }
}
