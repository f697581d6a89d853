//! Turn phases.

use serde::{Deserialize, Serialize};

/// Phases of a player turn.
///
/// `Setup` is the pre-game state and is not part of the cycle; a running
/// match walks `Upkeep -> Main -> Combat -> End`, after which the turn
/// passes to the other player and the phase resets to `Upkeep`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Setup,
    Upkeep,
    Main,
    Combat,
    End,
}

impl Phase {
    /// The next phase in turn order, or `None` at the end of the cycle
    /// (and for `Setup`, which only leaves via game creation).
    #[must_use]
    pub const fn next(self) -> Option<Phase> {
        match self {
            Phase::Setup => None,
            Phase::Upkeep => Some(Phase::Main),
            Phase::Main => Some(Phase::Combat),
            Phase::Combat => Some(Phase::End),
            Phase::End => None,
        }
    }

    /// Is this phase part of the running turn cycle?
    #[must_use]
    pub const fn in_turn_cycle(self) -> bool {
        !matches!(self, Phase::Setup)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::Upkeep => "upkeep",
            Phase::Main => "main",
            Phase::Combat => "combat",
            Phase::End => "end",
        };
        write!(f, "{}", name)
    }
}
