//! The battle orchestrator.
//!
//! `Battle` owns one `GameState` and drives the turn/phase machine over
//! it: phase advancement, the end-of-turn / start-of-turn sequence with
//! its triggered-effect passes, the precondition-checked play path, the
//! explicit death pass, and the on-demand game-over check.
//!
//! Nothing here raises on an illegal call. Advancing a phase that cannot
//! advance, drawing from an empty deck, or playing an unaffordable card
//! all degrade to no-ops or outcome values the caller can inspect.

use log::debug;

use super::combat::{self, AttackOutcome, AttackTarget};
use super::phase::Phase;
use super::player::Player;
use super::state::{DrawResult, GameState};
use crate::cards::{CardDefinition, InstanceId};
use crate::core::{BattleConfig, BoardPosition, GameRng, PlayerId, PlayerPair};
use crate::effects::{EffectCondition, EffectProcessor};

/// Outcome of a play attempt.
///
/// The rejection variants are the precondition layer: callers can show
/// them to a user, and nothing about the state changed when one comes
/// back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card is on the battlefield.
    Played(InstanceId),
    /// The acting player is not the current player.
    NotYourTurn,
    /// No card at that hand index.
    NoSuchCard,
    /// The player cannot pay the card's mana cost.
    NotEnoughMana,
    /// The position is out of range or already occupied.
    SlotOccupied,
}

/// One running match.
pub struct Battle {
    state: GameState,
    config: BattleConfig,
}

impl Battle {
    /// Create a new game.
    ///
    /// Each deck is shuffled independently (uniform Fisher-Yates), each
    /// player draws an opening hand, and play begins with player 0 in
    /// the upkeep phase of turn 1.
    #[must_use]
    pub fn new(config: BattleConfig, decks: [Vec<CardDefinition>; 2], seed: u64) -> Self {
        let [deck_first, deck_second] = decks;
        let players = PlayerPair::new(
            Player::new(PlayerId::FIRST, &config, deck_first),
            Player::new(PlayerId::SECOND, &config, deck_second),
        );

        let mut battle = Self {
            state: GameState::new(players, GameRng::new(seed)),
            config,
        };

        battle.state.log_event("battle begins");
        for player in PlayerId::both() {
            battle.state.shuffle_deck(player);
        }
        for player in PlayerId::both() {
            for _ in 0..battle.config.starting_hand_size {
                let _ = battle.state.draw_card(player);
            }
        }

        debug!("new battle created, {} to act", PlayerId::FIRST);
        battle
    }

    /// The full game state, for rendering and inspection.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for drivers resolving their own actions
    /// (manual spell casts, combat cleanup, test setups).
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.state.players[self.state.current_player]
    }

    /// Advance one phase.
    ///
    /// In the end phase this rolls the turn over instead; in the setup
    /// phase (or any state that cannot advance) it does nothing.
    pub fn next_phase(&mut self) {
        match self.state.phase {
            Phase::End => self.end_turn(),
            current => {
                if let Some(next) = current.next() {
                    debug!("phase {} -> {}", current, next);
                    self.state.phase = next;
                }
            }
        }
    }

    /// End the current player's turn and start the other player's.
    ///
    /// Runs the end-of-turn effect pass over both battlefields, flips the
    /// current player, bumps the turn counter when control returns to
    /// player 0, resets the phase to upkeep, and runs the new player's
    /// turn start.
    pub fn end_turn(&mut self) {
        let ending = self.state.current_player;
        EffectProcessor::process_turn_end(self.state.battlefield_cards_mut());
        self.state.log_event(format!("{} ended their turn", ending));

        let next = ending.opponent();
        self.state.current_player = next;
        if next == PlayerId::FIRST {
            self.state.turn_number += 1;
        }
        self.state.phase = Phase::Upkeep;

        self.start_turn();
    }

    /// Turn-start sequence for the new current player: draw, mana ramp
    /// and refill, ready the board, then the start-of-turn effect pass
    /// over both battlefields.
    fn start_turn(&mut self) {
        let player = self.state.current_player;
        let turn = self.state.turn_number;
        debug!("turn {} starts for {}", turn, player);
        self.state.log_event(format!("turn {}: {} begins", turn, player));

        let _ = self.state.draw_card(player);

        // Mana grows with the turn counter: the Nth turn of either seat
        // is game turn N, so both ramp on their second turn and onward.
        let target = self
            .config
            .mana_ceiling
            .min(self.config.starting_mana + turn as i32 - 1);
        let current = &mut self.state.players[player];
        current.mana.ramp_to(target);

        for card in current.battlefield.cards_mut() {
            card.ready();
        }

        EffectProcessor::process_turn_start(self.state.battlefield_cards_mut());
    }

    /// Draw one card for a player. Safe on an empty deck.
    pub fn draw_card(&mut self, player: PlayerId) -> DrawResult {
        self.state.draw_card(player)
    }

    /// Can this player pay for and place the card at `hand_index`?
    #[must_use]
    pub fn can_play_card(&self, player: PlayerId, hand_index: usize) -> bool {
        let p = &self.state.players[player];
        match p.hand.get(hand_index) {
            Some(card) => {
                p.mana.can_afford(card.mana_cost()) && !p.battlefield.is_full()
            }
            None => false,
        }
    }

    /// Play a card from hand to a battlefield slot.
    ///
    /// Checks turn ownership, hand index, mana, and slot occupancy before
    /// touching anything; on success the mana is paid and the instance
    /// moves from hand to the slot. On-play trigger effects are the
    /// caller's to resolve (see `effects::targeting`).
    pub fn play_card(
        &mut self,
        player: PlayerId,
        hand_index: usize,
        position: BoardPosition,
    ) -> PlayOutcome {
        if player != self.state.current_player {
            return PlayOutcome::NotYourTurn;
        }

        let p = &self.state.players[player];
        let Some(card) = p.hand.get(hand_index) else {
            return PlayOutcome::NoSuchCard;
        };
        let cost = card.mana_cost();
        if !p.mana.can_afford(cost) {
            return PlayOutcome::NotEnoughMana;
        }
        if !position.in_bounds() || p.battlefield.is_occupied(position) {
            return PlayOutcome::SlotOccupied;
        }

        let p = &mut self.state.players[player];
        let card = p.hand.remove(hand_index);
        let id = card.id;
        let name = card.name().to_string();
        p.mana.spend(cost);

        match p.battlefield.place(position, card) {
            Ok(()) => {
                self.state
                    .log_event(format!("{} played {} to {}", player, name, position));
                PlayOutcome::Played(id)
            }
            Err(card) => {
                // Pre-checked above; kept as a non-destructive fallback.
                let p = &mut self.state.players[player];
                p.mana.current += cost;
                p.hand.insert(hand_index, card);
                PlayOutcome::SlotOccupied
            }
        }
    }

    /// Declare an attack from a current-player slot.
    pub fn attack(&mut self, attacker: BoardPosition, target: AttackTarget) -> AttackOutcome {
        combat::resolve_attack(&mut self.state, attacker, target)
    }

    /// Move every dead battlefield instance to its owner's graveyard.
    ///
    /// Each dying instance first fires its persistent on-death effects
    /// (against itself), then leaves its slot. Returns the IDs of the
    /// instances that died, in seat then board order. The engine never
    /// calls this implicitly; drivers invoke it after damage has been
    /// dealt.
    pub fn resolve_deaths(&mut self) -> Vec<InstanceId> {
        let mut died = Vec::new();

        for seat in PlayerId::both() {
            let positions = self.state.players[seat].battlefield.occupied_positions();
            for pos in positions {
                let board = &mut self.state.players[seat].battlefield;
                let dead = board.slot(pos).is_some_and(|card| card.is_dead());
                if !dead {
                    continue;
                }

                if let Some(card) = board.slot_mut(pos) {
                    EffectProcessor::fire_persistent(card, EffectCondition::OnDeath);
                }

                if let Some(mut card) = self.state.players[seat].battlefield.take(pos) {
                    debug!("{} died at {} {}", card.name(), seat, pos);
                    self.state
                        .log_event(format!("{}'s {} was destroyed", seat, card.name()));
                    card.active_effects.clear();
                    card.can_attack = false;
                    card.is_exhausted = false;
                    died.push(card.id);
                    self.state.players[seat].graveyard.push(card);
                }
            }
        }

        died
    }

    /// Check whether either player has lost.
    ///
    /// Scans seats in index order; the first one at or below zero health
    /// ends the game with the other seat as winner. Evaluated only when
    /// called - combat resolution does not invoke it for you. Once the
    /// game is over the result is frozen.
    pub fn check_game_over(&mut self) -> bool {
        if self.state.is_game_over {
            return true;
        }

        for seat in PlayerId::both() {
            if self.state.players[seat].is_defeated() {
                let winner = seat.opponent();
                self.state.is_game_over = true;
                self.state.winner = Some(winner);
                debug!("game over, {} wins", winner);
                self.state.log_event(format!("{} wins the battle", winner));
                break;
            }
        }

        self.state.is_game_over
    }

    /// Record the caller's turn countdown. Bookkeeping only; a driver
    /// whose timer expires calls `end_turn` itself.
    pub fn update_timer(&mut self, remaining: Option<u32>) {
        self.state.update_timer(remaining);
    }

    /// The recorded turn countdown, if any.
    #[must_use]
    pub fn turn_timer(&self) -> Option<u32> {
        self.state.turn_timer()
    }
}
