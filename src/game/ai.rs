//! Placeholder opponent policy.
//!
//! A greedy, no-lookahead driver for the current player: play whatever is
//! affordable into the first open slots, swing with everything, end the
//! turn. It exists so a match can be driven end to end without a UI, and
//! doubles as the reference driver for on-play effect resolution.

use log::debug;

use super::battle::{Battle, PlayOutcome};
use super::combat::AttackTarget;
use super::phase::Phase;
use crate::core::{BoardPosition, PlayerId};
use crate::effects::{targeting, Effect, EffectProcessor, EffectType};

/// Play out the current player's whole turn.
///
/// Does nothing if the game is already over. The turn always ends unless
/// the game ends first.
pub fn take_turn(battle: &mut Battle) {
    if battle.state().is_game_over {
        return;
    }

    let player = battle.state().current_player;
    debug!("ai taking turn for {}", player);

    if battle.state().phase == Phase::Upkeep {
        battle.next_phase();
    }

    play_affordable_cards(battle, player);

    if battle.state().phase == Phase::Main {
        battle.next_phase();
    }

    attack_with_everything(battle, player);
    if battle.state().is_game_over {
        return;
    }

    if battle.state().phase == Phase::Combat {
        battle.next_phase();
    }
    // End phase: rolling the turn over.
    battle.next_phase();
}

fn play_affordable_cards(battle: &mut Battle, player: PlayerId) {
    loop {
        let hand_index = {
            let p = &battle.state().players[player];
            p.hand
                .iter()
                .position(|card| p.mana.can_afford(card.mana_cost()))
        };
        let Some(hand_index) = hand_index else { break };

        let Some(position) = battle.state().players[player]
            .battlefield
            .empty_positions()
            .first()
            .copied()
        else {
            break;
        };

        match battle.play_card(player, hand_index, position) {
            PlayOutcome::Played(_) => resolve_on_play(battle, player, position),
            _ => break,
        }
    }
}

/// Fire the played card's on-play trigger effects.
///
/// Single-target specs resolve to the first candidate; area specs hit
/// every candidate.
fn resolve_on_play(battle: &mut Battle, player: PlayerId, position: BoardPosition) {
    let effects: Vec<Effect> = match battle.state().instance_at(player, position) {
        Some(card) => card
            .definition
            .effects
            .iter()
            .filter(|e| e.effect_type == EffectType::Trigger)
            .cloned()
            .collect(),
        None => return,
    };

    for effect in &effects {
        let mut targets = targeting::candidates(battle.state(), player, Some(position), effect.target);
        if !effect.target.is_area() {
            targets.truncate(1);
        }
        for (seat, pos) in targets {
            if let Some(card) = battle.state_mut().instance_at_mut(seat, pos) {
                EffectProcessor::apply_single(effect, card);
            }
        }
    }

    battle.resolve_deaths();
    battle.check_game_over();
}

fn attack_with_everything(battle: &mut Battle, player: PlayerId) {
    let attackers = battle.state().players[player].battlefield.occupied_positions();

    for attacker_pos in attackers {
        if battle.state().is_game_over {
            return;
        }

        let ready = battle
            .state()
            .instance_at(player, attacker_pos)
            .is_some_and(|card| card.can_attack && !card.is_exhausted);
        if !ready {
            continue;
        }

        let target = battle.state().players[player.opponent()]
            .battlefield
            .occupied_positions()
            .first()
            .map(|pos| AttackTarget::Creature(*pos))
            .unwrap_or(AttackTarget::Player);

        battle.attack(attacker_pos, target);
        battle.resolve_deaths();
        battle.check_game_over();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId, CardType, StatBlock};
    use crate::core::BattleConfig;

    fn creature(id: u32) -> CardDefinition {
        CardDefinition::new(
            CardId::new(id),
            format!("Creature {}", id),
            CardType::Creature,
            StatBlock::new(5, 3, 1),
        )
    }

    fn deck(size: u32) -> Vec<CardDefinition> {
        (0..size).map(creature).collect()
    }

    #[test]
    fn test_turn_is_handed_over() {
        let mut battle = Battle::new(BattleConfig::default(), [deck(10), deck(10)], 42);

        take_turn(&mut battle);

        assert_eq!(battle.state().current_player, PlayerId::SECOND);
        assert_eq!(battle.state().phase, Phase::Upkeep);
    }

    #[test]
    fn test_plays_affordable_cards() {
        let mut battle = Battle::new(BattleConfig::default(), [deck(10), deck(10)], 42);

        take_turn(&mut battle);

        // One mana on turn 1 buys exactly one 1-cost creature.
        assert_eq!(battle.state().players[PlayerId::FIRST].battlefield.count(), 1);
        assert_eq!(battle.state().players[PlayerId::FIRST].hand.len(), 4);
    }

    #[test]
    fn test_noop_when_game_over() {
        let mut battle = Battle::new(BattleConfig::default(), [deck(10), deck(10)], 42);
        battle.state_mut().players[PlayerId::SECOND].health = 0;
        battle.check_game_over();

        let hand_before = battle.state().players[PlayerId::FIRST].hand.len();
        take_turn(&mut battle);

        assert_eq!(battle.state().players[PlayerId::FIRST].hand.len(), hand_before);
        assert_eq!(battle.state().current_player, PlayerId::FIRST);
    }
}
