//! Game state: the aggregate root of one match.
//!
//! `GameState` owns both players and everything they own, the turn/phase
//! bookkeeping, the append-only event log, and the match RNG. All mutation
//! happens in place from a single call stack; there is no locking and no
//! version counter (see the concurrency notes in the crate docs).

use im::Vector;
use log::debug;

use super::phase::Phase;
use super::player::Player;
use crate::cards::{CardInstance, InstanceId};
use crate::core::{BoardPosition, GameRng, PlayerId, PlayerPair};

/// Outcome of a draw attempt.
///
/// Drawing from an empty deck is not a loss condition and not an error;
/// it just reports `DeckEmpty` and changes nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawResult {
    /// A card was drawn into the hand; here is its instance ID.
    Drawn(InstanceId),
    /// The deck was empty; hand and deck are unchanged.
    DeckEmpty,
}

impl DrawResult {
    /// The drawn instance ID, if any.
    #[must_use]
    pub fn drawn(self) -> Option<InstanceId> {
        match self {
            DrawResult::Drawn(id) => Some(id),
            DrawResult::DeckEmpty => None,
        }
    }
}

/// Full state of one match.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Both combatants.
    pub players: PlayerPair<Player>,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Current phase.
    pub phase: Phase,

    /// Turn number, starting at 1. Increments when control returns to
    /// the first player.
    pub turn_number: u32,

    /// Append-only human-readable match log.
    pub event_log: Vector<String>,

    /// Terminal flag. Set once, never reverted.
    pub is_game_over: bool,

    /// The winning seat once the game is over.
    pub winner: Option<PlayerId>,

    /// Match RNG (deck shuffling).
    pub(crate) rng: GameRng,

    /// Next instance ID to allocate.
    next_instance_id: u32,

    /// Caller-maintained turn countdown. Bookkeeping only; the engine
    /// never acts on it.
    turn_timer: Option<u32>,
}

impl GameState {
    /// Create a state for a match about to begin.
    pub(crate) fn new(players: PlayerPair<Player>, rng: GameRng) -> Self {
        Self {
            players,
            current_player: PlayerId::FIRST,
            phase: Phase::Upkeep,
            turn_number: 1,
            event_log: Vector::new(),
            is_game_over: false,
            winner: None,
            rng,
            next_instance_id: 0,
            turn_timer: None,
        }
    }

    /// Allocate an instance ID.
    pub(crate) fn alloc_instance_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance_id);
        self.next_instance_id += 1;
        id
    }

    /// Append a line to the event log.
    pub fn log_event(&mut self, message: impl Into<String>) {
        self.event_log.push_back(message.into());
    }

    /// Shuffle a player's deck in place, uniformly over all permutations.
    pub fn shuffle_deck(&mut self, player: PlayerId) {
        let deck = &mut self.players[player].deck;
        self.rng.shuffle(deck);
    }

    /// Draw one card for a player.
    ///
    /// Pops the top of the deck, wraps it into a fresh instance (current
    /// stats copied verbatim from the base stats) and puts it in the hand.
    pub fn draw_card(&mut self, player: PlayerId) -> DrawResult {
        let Some(definition) = self.players[player].deck.pop() else {
            debug!("{} drew from an empty deck", player);
            return DrawResult::DeckEmpty;
        };

        let id = self.alloc_instance_id();
        let instance = CardInstance::spawn(id, definition);
        self.players[player].hand.push(instance);
        self.log_event(format!("{} drew a card", player));
        DrawResult::Drawn(id)
    }

    /// The card at a battlefield position, if any.
    #[must_use]
    pub fn instance_at(&self, player: PlayerId, pos: BoardPosition) -> Option<&CardInstance> {
        self.players[player].battlefield.slot(pos)
    }

    /// Mutable access to the card at a battlefield position, if any.
    pub fn instance_at_mut(
        &mut self,
        player: PlayerId,
        pos: BoardPosition,
    ) -> Option<&mut CardInstance> {
        self.players[player].battlefield.slot_mut(pos)
    }

    /// Iterate mutably over every card on both battlefields, first
    /// player's board first.
    pub fn battlefield_cards_mut(&mut self) -> impl Iterator<Item = &mut CardInstance> {
        self.players
            .iter_mut()
            .flat_map(|(_, player)| player.battlefield.cards_mut())
    }

    /// Record the caller's turn countdown. Bookkeeping only.
    pub fn update_timer(&mut self, remaining: Option<u32>) {
        self.turn_timer = remaining;
    }

    /// The recorded turn countdown, if any.
    #[must_use]
    pub fn turn_timer(&self) -> Option<u32> {
        self.turn_timer
    }
}
