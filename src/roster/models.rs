use crate::formation::Position;
use serde::{Deserialize, Serialize};

/// A player read from one roster row.
///
/// Records are only built when every field was found in the row, so a
/// `PlayerRecord` always has at least one position and in-range numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Numeric id from the player page link.
    pub id: u64,
    pub name: String,
    /// Eligible positions, deduplicated, in the order they appeared.
    pub positions: Vec<Position>,
    /// Overall rating (OVR).
    pub rating: u8,
    pub age: u8,
}

impl PlayerRecord {
    /// Whether the player can fill a slot of the given position.
    pub fn plays(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Positions joined with commas, e.g. "CM,CDM".
    pub fn positions_label(&self) -> String {
        self.positions
            .iter()
            .map(|p| p.code())
            .collect::<Vec<_>>()
            .join(",")
    }
}
