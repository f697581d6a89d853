//! Board geometry.
//!
//! Each player's battlefield is a fixed grid of two rows with three slots
//! each. `BoardPosition` names one slot; the container holding the cards
//! lives in `game::battlefield`.

use serde::{Deserialize, Serialize};

/// Slots per battlefield row.
pub const ROW_SLOTS: usize = 3;

/// Battlefield row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    Front,
    Back,
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Row::Front => write!(f, "front"),
            Row::Back => write!(f, "back"),
        }
    }
}

/// One battlefield slot: a row plus an index in `0..ROW_SLOTS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardPosition {
    pub row: Row,
    pub index: usize,
}

impl BoardPosition {
    /// Create a position.
    ///
    /// Out-of-range indices are representable; slot accessors treat them
    /// as unoccupied.
    #[must_use]
    pub const fn new(row: Row, index: usize) -> Self {
        Self { row, index }
    }

    /// Is the index within the row?
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.index < ROW_SLOTS
    }

    /// All six positions, front row first.
    pub fn all() -> impl Iterator<Item = BoardPosition> {
        [Row::Front, Row::Back]
            .into_iter()
            .flat_map(|row| (0..ROW_SLOTS).map(move |index| BoardPosition { row, index }))
    }
}

impl std::fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.row, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_positions() {
        let positions: Vec<_> = BoardPosition::all().collect();

        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], BoardPosition::new(Row::Front, 0));
        assert_eq!(positions[5], BoardPosition::new(Row::Back, 2));
        assert!(positions.iter().all(|p| p.in_bounds()));
    }

    #[test]
    fn test_bounds() {
        assert!(BoardPosition::new(Row::Front, 2).in_bounds());
        assert!(!BoardPosition::new(Row::Front, 3).in_bounds());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", BoardPosition::new(Row::Back, 1)), "back 1");
    }
}
