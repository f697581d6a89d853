//! Game aggregate and turn resolution: players, battlefields, the game
//! state, the battle orchestrator, combat, and the placeholder AI driver.

pub mod ai;
pub mod battle;
pub mod battlefield;
pub mod combat;
pub mod phase;
pub mod player;
pub mod state;

pub use battle::{Battle, PlayOutcome};
pub use battlefield::Battlefield;
pub use combat::{AttackOutcome, AttackTarget};
pub use phase::Phase;
pub use player::{ManaPool, Player};
pub use state::{DrawResult, GameState};
