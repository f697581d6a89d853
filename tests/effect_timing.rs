//! Effect timing integration tests.
//!
//! Exercises active-effect countdowns, control markers, and death
//! triggers through the public battle API rather than the processor in
//! isolation.

use cardverse_battle::cards::{CardDefinition, CardId, CardType, StatBlock};
use cardverse_battle::core::{BattleConfig, BoardPosition, PlayerId, Row};
use cardverse_battle::effects::{
    Effect, EffectCategory, EffectCondition, EffectDuration, EffectId, EffectProcessor,
    EffectType, StatKind,
};
use cardverse_battle::game::{AttackOutcome, AttackTarget, Battle, Phase};

fn creature(id: u32) -> CardDefinition {
    CardDefinition::new(
        CardId::new(id),
        format!("Creature {}", id),
        CardType::Creature,
        StatBlock::new(5, 3, 1),
    )
}

fn deck(base: u32, size: u32) -> Vec<CardDefinition> {
    (0..size).map(|i| creature(base + i)).collect()
}

/// Battle with one card played for player 0 at front 0.
fn battle_with_board() -> (Battle, BoardPosition) {
    let mut battle = Battle::new(BattleConfig::default(), [deck(0, 10), deck(100, 10)], 42);
    let pos = BoardPosition::new(Row::Front, 0);
    battle.play_card(PlayerId::FIRST, 0, pos);
    (battle, pos)
}

/// A timed buff's countdown survives the first start-of-turn pass with
/// one turn left and is pruned by the second; the stat change persists.
#[test]
fn test_active_effect_counts_down_across_turns() {
    let (mut battle, pos) = battle_with_board();

    let rally = Effect::buff(EffectId::new(800), StatKind::Attack, 2)
        .with_duration(EffectDuration::Turns(2));
    EffectProcessor::apply_single(
        &rally,
        battle.state_mut().instance_at_mut(PlayerId::FIRST, pos).unwrap(),
    );

    let card = battle.state().instance_at(PlayerId::FIRST, pos).unwrap();
    assert_eq!(card.current_attack, 5);
    assert_eq!(card.active_effects.len(), 1);
    assert_eq!(card.active_effects[0].turns_remaining, 2);

    // First start-of-turn pass (player 1's turn begins).
    battle.end_turn();
    let card = battle.state().instance_at(PlayerId::FIRST, pos).unwrap();
    assert_eq!(card.active_effects.len(), 1);
    assert_eq!(card.active_effects[0].turns_remaining, 1);

    // Second pass removes the entry; the buff itself is not reverted.
    battle.end_turn();
    let card = battle.state().instance_at(PlayerId::FIRST, pos).unwrap();
    assert!(card.active_effects.is_empty());
    assert_eq!(card.current_attack, 5);
}

/// Reapplying a timed effect refreshes its countdown instead of stacking
/// a second entry.
#[test]
fn test_reapplication_refreshes_countdown() {
    let (mut battle, pos) = battle_with_board();

    let rally = Effect::buff(EffectId::new(800), StatKind::Attack, 1)
        .with_duration(EffectDuration::Turns(3));

    EffectProcessor::apply_single(
        &rally,
        battle.state_mut().instance_at_mut(PlayerId::FIRST, pos).unwrap(),
    );
    battle.end_turn();

    let card = battle.state().instance_at(PlayerId::FIRST, pos).unwrap();
    assert_eq!(card.active_effects[0].turns_remaining, 2);

    EffectProcessor::apply_single(
        &rally,
        battle.state_mut().instance_at_mut(PlayerId::FIRST, pos).unwrap(),
    );

    let card = battle.state().instance_at(PlayerId::FIRST, pos).unwrap();
    assert_eq!(card.active_effects.len(), 1);
    assert_eq!(card.active_effects[0].turns_remaining, 3);
}

/// A stunned creature cannot attack while the marker lasts and recovers
/// once its owner's turn readies it again.
#[test]
fn test_stun_wears_off() {
    let (mut battle, pos) = battle_with_board();

    // Ready the creature as if its turn had come around.
    battle
        .state_mut()
        .instance_at_mut(PlayerId::FIRST, pos)
        .unwrap()
        .ready();

    let stun = Effect::stun(EffectId::new(801), 1);
    EffectProcessor::apply_single(
        &stun,
        battle.state_mut().instance_at_mut(PlayerId::FIRST, pos).unwrap(),
    );

    battle.state_mut().phase = Phase::Combat;
    assert_eq!(
        battle.attack(pos, AttackTarget::Player),
        AttackOutcome::CannotAttack
    );

    // Player 1's turn passes; player 0's turn start readies the board
    // and the marker's countdown expires.
    battle.end_turn();
    battle.end_turn();

    let card = battle.state().instance_at(PlayerId::FIRST, pos).unwrap();
    assert!(card.can_attack);
    assert!(card.active_effects.is_empty());

    battle.state_mut().phase = Phase::Combat;
    assert!(matches!(
        battle.attack(pos, AttackTarget::Player),
        AttackOutcome::Struck { .. }
    ));
}

/// Persistent turn-start effects fire every turn for as long as the card
/// stays on the battlefield.
#[test]
fn test_persistent_regeneration_fires_each_turn() {
    let regen = Effect::new(
        EffectId::new(802),
        EffectType::Persistent,
        EffectCategory::Healing,
    )
    .with_magnitude(1)
    .with_condition(EffectCondition::TurnStart);

    let mut deck0 = deck(0, 10);
    deck0[9] = creature(9).with_effect(regen);

    let mut battle = Battle::new(BattleConfig::default(), [deck0, deck(100, 10)], 42);

    // Ensure the regenerator is in hand, then play it wounded.
    let index = loop {
        let found = battle.state().players[PlayerId::FIRST]
            .hand
            .iter()
            .position(|c| c.definition.id == CardId::new(9));
        match found {
            Some(i) => break i,
            None => {
                battle.draw_card(PlayerId::FIRST);
            }
        }
    };

    let pos = BoardPosition::new(Row::Front, 2);
    battle.play_card(PlayerId::FIRST, index, pos);
    battle
        .state_mut()
        .instance_at_mut(PlayerId::FIRST, pos)
        .unwrap()
        .current_health = 1;

    battle.end_turn(); // player 1's turn start: +1
    battle.end_turn(); // player 0's turn start: +1

    let card = battle.state().instance_at(PlayerId::FIRST, pos).unwrap();
    assert_eq!(card.current_health, 3);
}

/// Death triggers fire before the instance reaches the graveyard.
#[test]
fn test_on_death_trigger_fires_before_burial() {
    let last_gasp = Effect::new(
        EffectId::new(803),
        EffectType::Persistent,
        EffectCategory::Healing,
    )
    .with_magnitude(3)
    .with_condition(EffectCondition::OnDeath);

    let mut deck0 = deck(0, 10);
    deck0[9] = creature(9).with_effect(last_gasp);

    let mut battle = Battle::new(BattleConfig::default(), [deck0, deck(100, 10)], 42);

    let index = loop {
        let found = battle.state().players[PlayerId::FIRST]
            .hand
            .iter()
            .position(|c| c.definition.id == CardId::new(9));
        match found {
            Some(i) => break i,
            None => {
                battle.draw_card(PlayerId::FIRST);
            }
        }
    };

    let pos = BoardPosition::new(Row::Back, 0);
    battle.play_card(PlayerId::FIRST, index, pos);
    battle
        .state_mut()
        .instance_at_mut(PlayerId::FIRST, pos)
        .unwrap()
        .current_health = -2;

    let died = battle.resolve_deaths();
    assert_eq!(died.len(), 1);

    // The dying heal (clamped arithmetic: -2 + 3) ran before burial.
    let grave = &battle.state().players[PlayerId::FIRST].graveyard;
    assert_eq!(grave.len(), 1);
    assert_eq!(grave[0].current_health, 1);
    assert_eq!(grave[0].position, None);
}

/// Two control applications keep independent countdowns: the first
/// expires without dragging the second with it.
#[test]
fn test_parallel_control_timers() {
    let (mut battle, pos) = battle_with_board();

    let short_stun = Effect::stun(EffectId::new(804), 1);
    let long_stun = Effect::stun(EffectId::new(804), 3);

    {
        let card = battle
            .state_mut()
            .instance_at_mut(PlayerId::FIRST, pos)
            .unwrap();
        EffectProcessor::apply_single(&short_stun, card);
        EffectProcessor::apply_single(&long_stun, card);
        assert_eq!(card.active_effects.len(), 2);
    }

    battle.end_turn();

    let card = battle.state().instance_at(PlayerId::FIRST, pos).unwrap();
    assert_eq!(card.active_effects.len(), 1);
    assert_eq!(card.active_effects[0].turns_remaining, 2);
}
