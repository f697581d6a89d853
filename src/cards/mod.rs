//! Card data model: immutable definitions, the validated library, and
//! runtime instances.

pub mod definition;
pub mod instance;
pub mod library;
pub mod stats;

pub use definition::{CardDefinition, CardId, CardType, Element, Rarity};
pub use instance::{ActiveEffect, CardInstance, InstanceId};
pub use library::CardLibrary;
pub use stats::{CardError, StatBlock, ATTACK_RANGE, HEALTH_RANGE, MANA_COST_RANGE};
