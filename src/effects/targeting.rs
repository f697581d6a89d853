//! Target-candidate resolution.
//!
//! The processor receives concrete instances; someone has to turn an
//! `EffectTarget` spec into those. That someone is the driver (UI or AI),
//! and this module does the enumeration for it: given the acting player
//! and the source slot, list every battlefield position the spec may
//! legally resolve to. Single-target specs pick one candidate; area specs
//! consume the whole list.

use crate::core::{BoardPosition, PlayerId};
use crate::game::GameState;

use super::effect::EffectTarget;

/// Candidate battlefield positions for a target spec.
///
/// `owner` is the acting player; `source` is the slot of the card the
/// effect comes from (`None` for sourceless casts, which makes `Self_`
/// resolve to nothing).
#[must_use]
pub fn candidates(
    state: &GameState,
    owner: PlayerId,
    source: Option<BoardPosition>,
    target: EffectTarget,
) -> Vec<(PlayerId, BoardPosition)> {
    match target {
        EffectTarget::Self_ => source.map(|pos| vec![(owner, pos)]).unwrap_or_default(),
        EffectTarget::Ally | EffectTarget::AllyAll => occupied(state, owner),
        EffectTarget::Enemy | EffectTarget::EnemyAll => occupied(state, owner.opponent()),
        EffectTarget::Any => {
            let mut all = occupied(state, owner);
            all.extend(occupied(state, owner.opponent()));
            all
        }
    }
}

fn occupied(state: &GameState, player: PlayerId) -> Vec<(PlayerId, BoardPosition)> {
    state.players[player]
        .battlefield
        .occupied_positions()
        .into_iter()
        .map(|pos| (player, pos))
        .collect()
}
