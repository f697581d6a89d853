//! # cardverse-battle
//!
//! A turn-based card battle engine: immutable card definitions, runtime
//! card instances with temporal effect bookkeeping, a stateless effect
//! processor, and a turn/phase state machine over a two-player game state.
//!
//! ## Design Principles
//!
//! 1. **A pure rules engine**: no storage, rendering, or networking.
//!    Decks come in as plain data; drivers read the state back out.
//!
//! 2. **No-ops over exceptions**: illegal calls (drawing from an empty
//!    deck, advancing a phase that cannot advance, unknown effect
//!    categories) degrade gracefully. Mutating entry points return
//!    outcome values (`DrawResult`, `PlayOutcome`, `AttackOutcome`)
//!    instead of errors; the only `Result`s live at the
//!    definition-authoring boundary.
//!
//! 3. **Ownership is location**: a card instance is owned by exactly one
//!    container - deck, hand, battlefield slot, or graveyard - so it can
//!    never be in two places at once.
//!
//! 4. **Single-writer state**: one `Battle` owns one `GameState`, and all
//!    mutation is synchronous and in-place from a single call stack.
//!    Concurrent drivers need an external serialization point.
//!
//! ## Modules
//!
//! - `core`: player identity, board geometry, configuration, RNG
//! - `cards`: card definitions, the validated library, runtime instances
//! - `effects`: effect definitions, the processor, target resolution
//! - `game`: players, battlefields, game state, the battle orchestrator,
//!   combat, and the placeholder AI
//!
//! ## Example
//!
//! ```
//! use cardverse_battle::cards::{CardDefinition, CardId, CardType, StatBlock};
//! use cardverse_battle::core::{BattleConfig, PlayerId};
//! use cardverse_battle::game::Battle;
//!
//! let deck = |base: u32| -> Vec<CardDefinition> {
//!     (0..10)
//!         .map(|i| {
//!             CardDefinition::new(
//!                 CardId::new(base + i),
//!                 format!("Creature {}", base + i),
//!                 CardType::Creature,
//!                 StatBlock::new(5, 3, 1),
//!             )
//!         })
//!         .collect()
//! };
//!
//! let mut battle = Battle::new(BattleConfig::default(), [deck(0), deck(100)], 42);
//!
//! assert_eq!(battle.state().players[PlayerId::FIRST].hand.len(), 5);
//!
//! battle.end_turn();
//! assert_eq!(battle.state().current_player, PlayerId::SECOND);
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod game;

// Re-export commonly used types
pub use crate::core::{BattleConfig, BoardPosition, GameRng, PlayerId, PlayerPair, RngState, Row};

pub use crate::cards::{
    ActiveEffect, CardDefinition, CardError, CardId, CardInstance, CardLibrary, CardType, Element,
    InstanceId, Rarity, StatBlock,
};

pub use crate::effects::{
    ControlKind, Effect, EffectCategory, EffectCondition, EffectDuration, EffectId,
    EffectProcessor, EffectTarget, EffectType, StatKind,
};

pub use crate::game::{
    AttackOutcome, AttackTarget, Battle, Battlefield, DrawResult, GameState, ManaPool, Phase,
    PlayOutcome, Player,
};
