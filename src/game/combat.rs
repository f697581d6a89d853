//! Attack resolution.
//!
//! An attack is declared from one of the current player's slots against
//! an enemy creature or the enemy player. Creature combat is a
//! simultaneous exchange: the defender takes the attacker's attack, the
//! attacker takes the defender's counterattack. Nothing dies here -
//! health may go negative, and the driver runs the death pass and the
//! game-over check afterwards.

use log::debug;

use super::state::GameState;
use crate::core::BoardPosition;

/// What an attack is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackTarget {
    /// An enemy battlefield slot.
    Creature(BoardPosition),
    /// The enemy player directly.
    Player,
}

/// Outcome of an attack declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The attack resolved.
    Struck {
        /// Damage dealt to the target.
        damage_dealt: i32,
        /// Counterattack damage taken by the attacker.
        damage_taken: i32,
    },
    /// Attacks only resolve during the combat phase.
    WrongPhase,
    /// No card in the attacking slot.
    NoAttacker,
    /// The attacker cannot act (summoned this turn, stunned, or spent).
    CannotAttack,
    /// No card in the targeted enemy slot.
    EmptyTarget,
}

/// Resolve an attack from a current-player slot.
pub(crate) fn resolve_attack(
    state: &mut GameState,
    attacker_pos: BoardPosition,
    target: AttackTarget,
) -> AttackOutcome {
    use super::phase::Phase;

    if state.phase != Phase::Combat {
        return AttackOutcome::WrongPhase;
    }

    let attacker_seat = state.current_player;
    let defender_seat = attacker_seat.opponent();

    let Some(attacker) = state.players[attacker_seat].battlefield.slot(attacker_pos) else {
        return AttackOutcome::NoAttacker;
    };
    if !attacker.can_attack || attacker.is_exhausted {
        return AttackOutcome::CannotAttack;
    }
    let damage = attacker.current_attack;
    let attacker_name = attacker.name().to_string();

    let outcome = match target {
        AttackTarget::Player => {
            state.players[defender_seat].health -= damage;
            state.log_event(format!(
                "{} hit {} for {}",
                attacker_name, defender_seat, damage
            ));
            AttackOutcome::Struck {
                damage_dealt: damage,
                damage_taken: 0,
            }
        }
        AttackTarget::Creature(defender_pos) => {
            let Some(defender) = state.players[defender_seat]
                .battlefield
                .slot_mut(defender_pos)
            else {
                return AttackOutcome::EmptyTarget;
            };
            let counter = defender.current_attack;
            let defender_name = defender.name().to_string();
            defender.current_health -= damage;

            state.log_event(format!(
                "{} struck {} for {}, taking {} back",
                attacker_name, defender_name, damage, counter
            ));
            AttackOutcome::Struck {
                damage_dealt: damage,
                damage_taken: counter,
            }
        }
    };

    // Exchange resolved; the attacker takes its counterattack damage and
    // is spent for the turn.
    if let Some(attacker) = state.players[attacker_seat]
        .battlefield
        .slot_mut(attacker_pos)
    {
        if let AttackOutcome::Struck { damage_taken, .. } = outcome {
            attacker.current_health -= damage_taken;
        }
        attacker.can_attack = false;
        attacker.is_exhausted = true;
    }

    debug!("{} attacked: {:?}", attacker_seat, outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId, CardType, StatBlock};
    use crate::core::{BattleConfig, PlayerId, Row};
    use crate::game::{Battle, Phase};

    fn creature(id: u32, health: i32, attack: i32) -> CardDefinition {
        CardDefinition::new(
            CardId::new(id),
            format!("Creature {}", id),
            CardType::Creature,
            StatBlock::new(health, attack, 1),
        )
    }

    /// Battle with one readied attacker (5/3) for player 0 at front 0 and
    /// one defender (4/2) for player 1 at front 1, in the combat phase.
    fn combat_ready() -> (Battle, BoardPosition, BoardPosition) {
        let deck0 = vec![creature(1, 5, 3)];
        let deck1 = vec![creature(2, 4, 2)];
        let mut battle = Battle::new(BattleConfig::default(), [deck0, deck1], 42);

        let attacker_pos = BoardPosition::new(Row::Front, 0);
        let defender_pos = BoardPosition::new(Row::Front, 1);

        battle.play_card(PlayerId::FIRST, 0, attacker_pos);
        battle.state_mut().current_player = PlayerId::SECOND;
        battle.play_card(PlayerId::SECOND, 0, defender_pos);
        battle.state_mut().current_player = PlayerId::FIRST;

        battle
            .state_mut()
            .instance_at_mut(PlayerId::FIRST, attacker_pos)
            .unwrap()
            .ready();
        battle.state_mut().phase = Phase::Combat;

        (battle, attacker_pos, defender_pos)
    }

    #[test]
    fn test_creature_exchange() {
        let (mut battle, attacker_pos, defender_pos) = combat_ready();

        let outcome = battle.attack(attacker_pos, AttackTarget::Creature(defender_pos));

        assert_eq!(
            outcome,
            AttackOutcome::Struck {
                damage_dealt: 3,
                damage_taken: 2,
            }
        );

        let defender = battle
            .state()
            .instance_at(PlayerId::SECOND, defender_pos)
            .unwrap();
        assert_eq!(defender.current_health, 1);

        let attacker = battle
            .state()
            .instance_at(PlayerId::FIRST, attacker_pos)
            .unwrap();
        assert_eq!(attacker.current_health, 3);
        assert!(!attacker.can_attack);
        assert!(attacker.is_exhausted);
    }

    #[test]
    fn test_direct_attack_hits_player() {
        let (mut battle, attacker_pos, _) = combat_ready();

        let outcome = battle.attack(attacker_pos, AttackTarget::Player);

        assert_eq!(
            outcome,
            AttackOutcome::Struck {
                damage_dealt: 3,
                damage_taken: 0,
            }
        );
        assert_eq!(battle.state().players[PlayerId::SECOND].health, 27);
    }

    #[test]
    fn test_attack_outside_combat_phase() {
        let (mut battle, attacker_pos, _) = combat_ready();
        battle.state_mut().phase = Phase::Main;

        let outcome = battle.attack(attacker_pos, AttackTarget::Player);

        assert_eq!(outcome, AttackOutcome::WrongPhase);
        assert_eq!(battle.state().players[PlayerId::SECOND].health, 30);
    }

    #[test]
    fn test_attacker_can_only_strike_once() {
        let (mut battle, attacker_pos, _) = combat_ready();

        battle.attack(attacker_pos, AttackTarget::Player);
        let second = battle.attack(attacker_pos, AttackTarget::Player);

        assert_eq!(second, AttackOutcome::CannotAttack);
        assert_eq!(battle.state().players[PlayerId::SECOND].health, 27);
    }

    #[test]
    fn test_summoned_creature_cannot_attack_yet() {
        let (mut battle, _, defender_pos) = combat_ready();
        // The defender was played this turn and never readied.
        battle.state_mut().current_player = PlayerId::SECOND;

        let outcome = battle.attack(defender_pos, AttackTarget::Player);
        assert_eq!(outcome, AttackOutcome::CannotAttack);
    }

    #[test]
    fn test_missing_slots() {
        let (mut battle, attacker_pos, _) = combat_ready();
        let empty = BoardPosition::new(Row::Back, 0);

        assert_eq!(
            battle.attack(empty, AttackTarget::Player),
            AttackOutcome::NoAttacker
        );
        assert_eq!(
            battle.attack(attacker_pos, AttackTarget::Creature(empty)),
            AttackOutcome::EmptyTarget
        );
        // A failed declaration spends nothing.
        let attacker = battle
            .state()
            .instance_at(PlayerId::FIRST, attacker_pos)
            .unwrap();
        assert!(attacker.can_attack);
    }

    #[test]
    fn test_lethal_exchange_then_death_pass() {
        let (mut battle, attacker_pos, defender_pos) = combat_ready();
        battle
            .state_mut()
            .instance_at_mut(PlayerId::SECOND, defender_pos)
            .unwrap()
            .current_health = 2;

        battle.attack(attacker_pos, AttackTarget::Creature(defender_pos));

        // Dead but still on the board until the driver resolves deaths.
        assert!(battle
            .state()
            .instance_at(PlayerId::SECOND, defender_pos)
            .unwrap()
            .is_dead());

        let died = battle.resolve_deaths();
        assert_eq!(died.len(), 1);
        assert!(battle
            .state()
            .instance_at(PlayerId::SECOND, defender_pos)
            .is_none());
        assert_eq!(battle.state().players[PlayerId::SECOND].graveyard.len(), 1);
    }
}
