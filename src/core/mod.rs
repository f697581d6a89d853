//! Core building blocks: player identity, board geometry, configuration,
//! and deterministic randomness.

pub mod board;
pub mod config;
pub mod player;
pub mod rng;

pub use board::{BoardPosition, Row, ROW_SLOTS};
pub use config::BattleConfig;
pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, RngState};
