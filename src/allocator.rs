//! Greedy assignment of players to formation slots.
//!
//! Slots are filled front to back. Each slot takes the highest-rated player
//! still available for its position; ties go to the player extracted first.
//! There is no backtracking, so an early slot can take a player a later slot
//! needed more. That is accepted: the result is locally best per slot, not the
//! best possible total.

use crate::constants::report::UNFILLED_LABEL;
use crate::formation::{FormationSlot, Position};
use crate::roster::PlayerRecord;
use serde::Serialize;
use tracing::debug;

/// A slot and the player assigned to it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineupEntry {
    pub slot: FormationSlot,
    /// `None` when no eligible player was left for the slot.
    pub player: Option<PlayerRecord>,
}

impl LineupEntry {
    pub fn is_filled(&self) -> bool {
        self.player.is_some()
    }

    pub fn position(&self) -> Position {
        self.slot.position
    }

    /// Player name, or the "not found" label for an empty slot.
    pub fn display_name(&self) -> &str {
        self.player
            .as_ref()
            .map_or(UNFILLED_LABEL, |player| player.name.as_str())
    }

    /// Player rating, 0 for an empty slot.
    pub fn rating(&self) -> u8 {
        self.player.as_ref().map_or(0, |player| player.rating)
    }

    /// Player age, 0 for an empty slot.
    pub fn age(&self) -> u8 {
        self.player.as_ref().map_or(0, |player| player.age)
    }
}

/// Assigns players from `pool` to `slots` in slot order.
///
/// Returns one entry per slot. An empty `slots` gives an empty lineup and an
/// empty `pool` gives all-unfilled entries. `pool` itself is not modified.
///
/// # Examples
/// ```
/// use sofifa_lineup::allocator::allocate;
/// use sofifa_lineup::formation::Position;
/// use sofifa_lineup::roster::PlayerRecord;
///
/// let pool = vec![
///     PlayerRecord { id: 1, name: "A".into(), positions: vec![Position::St], rating: 90, age: 25 },
///     PlayerRecord { id: 2, name: "B".into(), positions: vec![Position::St], rating: 80, age: 22 },
/// ];
/// let lineup = allocate(&pool, &[Position::St, Position::St, Position::Gk]);
///
/// assert_eq!(lineup[0].display_name(), "A");
/// assert_eq!(lineup[1].display_name(), "B");
/// assert!(!lineup[2].is_filled());
/// ```
pub fn allocate(pool: &[PlayerRecord], slots: &[Position]) -> Vec<LineupEntry> {
    let mut available: Vec<&PlayerRecord> = pool.iter().collect();
    let mut lineup = Vec::with_capacity(slots.len());

    for (order, &position) in slots.iter().enumerate() {
        let slot = FormationSlot { position, order };
        let player = best_candidate(&available, position).map(|index| available.remove(index));

        match player {
            Some(player) => debug!(
                "Slot {} ({}): {} OVR {}",
                order + 1,
                position,
                player.name,
                player.rating
            ),
            None => debug!("Slot {} ({}): no eligible player left", order + 1, position),
        }

        lineup.push(LineupEntry {
            slot,
            player: player.cloned(),
        });
    }

    lineup
}

/// Index of the highest-rated eligible player; the earliest one wins a tie.
fn best_candidate(available: &[&PlayerRecord], position: Position) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (index, player) in available.iter().enumerate() {
        if !player.plays(position) {
            continue;
        }
        if best.is_none_or(|(_, rating)| player.rating > rating) {
            best = Some((index, player.rating));
        }
    }
    best.map(|(index, _)| index)
}
