//! Effect application - executing effect rules on card instances.
//!
//! The `EffectProcessor` is stateless: every function operates purely on
//! the instances passed in. It never fails - categories without a
//! resolution branch fall through with no state change, matching the
//! engine-wide policy of degrading to no-ops instead of raising.
//!
//! Target resolution happens before these functions are called (see
//! `targeting`); the processor receives concrete instances.

use log::trace;

use crate::cards::CardInstance;

use super::effect::{
    ControlKind, Effect, EffectCategory, EffectCondition, EffectDuration, EffectType, StatKind,
};

/// Applies effect rules to card instances.
pub struct EffectProcessor;

impl EffectProcessor {
    /// Apply an effect once per target.
    ///
    /// An empty target list is a no-op.
    pub fn apply_effect<'a, I>(effect: &Effect, targets: I)
    where
        I: IntoIterator<Item = &'a mut CardInstance>,
    {
        for target in targets {
            Self::apply_single(effect, target);
        }
    }

    /// Apply an effect to one target.
    pub fn apply_single(effect: &Effect, target: &mut CardInstance) {
        trace!(
            "applying {} ({:?}) to {}",
            effect.id,
            effect.category,
            target.id
        );

        match effect.category {
            EffectCategory::StatModification => {
                let sign = if effect.effect_type == EffectType::Buff {
                    1
                } else {
                    -1
                };
                for stat in &effect.affected_stats {
                    match stat {
                        StatKind::Attack => target.current_attack += sign * effect.magnitude,
                        StatKind::Health => target.current_health += sign * effect.magnitude,
                    }
                }
                // Attack is floored at zero; health may keep a negative
                // value from the same effect.
                if target.current_attack < 0 {
                    target.current_attack = 0;
                }
            }

            EffectCategory::Damage => {
                // Unmitigated; overshoot below zero is allowed and left
                // for the death pass to observe.
                target.current_health -= effect.magnitude;
            }

            EffectCategory::Healing => {
                let cap = target.base_health();
                target.current_health = (target.current_health + effect.magnitude).min(cap);
            }

            EffectCategory::Control => {
                let turns = effect.duration.turns().unwrap_or(1);
                for kind in &effect.control {
                    target.push_active(effect.id, turns, 1);
                    if *kind == ControlKind::Stun {
                        target.can_attack = false;
                    }
                }
            }

            // Draw/mana orchestration belongs to the driver.
            EffectCategory::Utility => {}

            // Categories without a resolution branch are skipped.
            _ => {}
        }

        // Timed effects register a countdown entry on the target. Control
        // already pushed its own independent timers above.
        if effect.category != EffectCategory::Control {
            if let EffectDuration::Turns(turns) = effect.duration {
                target.register_active(effect.id, turns, effect.magnitude);
            }
        }
    }

    /// Start-of-turn pass over a set of instances.
    ///
    /// Per instance: tick down and prune active-effect timers, then fire
    /// the definition's persistent effects conditioned on turn start
    /// (target: the instance itself).
    pub fn process_turn_start<'a, I>(cards: I)
    where
        I: IntoIterator<Item = &'a mut CardInstance>,
    {
        for card in cards {
            card.tick_active_effects();
            Self::fire_persistent(card, EffectCondition::TurnStart);
        }
    }

    /// End-of-turn pass over a set of instances.
    ///
    /// Fires persistent effects conditioned on turn end. No timer
    /// bookkeeping happens here; countdowns belong to the start pass.
    pub fn process_turn_end<'a, I>(cards: I)
    where
        I: IntoIterator<Item = &'a mut CardInstance>,
    {
        for card in cards {
            Self::fire_persistent(card, EffectCondition::TurnEnd);
        }
    }

    pub(crate) fn fire_persistent(card: &mut CardInstance, condition: EffectCondition) {
        let triggered: Vec<Effect> = card
            .definition
            .effects
            .iter()
            .filter(|e| e.effect_type == EffectType::Persistent && e.condition == condition)
            .cloned()
            .collect();

        for effect in &triggered {
            Self::apply_single(effect, card);
        }
    }
}
