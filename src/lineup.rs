//! Lineup planning: formation lookup, roster extraction and allocation in one call.

use crate::allocator::{LineupEntry, allocate};
use crate::error::AppError;
use crate::formation::{Formation, formation_ids};
use crate::roster::{PlayerRecord, RosterExtractor};
use serde::Serialize;
use tracing::{info, warn};

/// The allocated lineup for one formation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lineup {
    pub formation: String,
    pub entries: Vec<LineupEntry>,
}

/// Flat output row: position code, player name, rating and age.
///
/// Empty slots carry the "not found" label with rating and age 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineupRow {
    pub position: String,
    pub name: String,
    pub rating: u8,
    pub age: u8,
}

impl Lineup {
    pub fn new(formation: impl Into<String>, entries: Vec<LineupEntry>) -> Self {
        Self {
            formation: formation.into(),
            entries,
        }
    }

    pub fn rows(&self) -> Vec<LineupRow> {
        self.entries
            .iter()
            .map(|entry| LineupRow {
                position: entry.position().code().to_string(),
                name: entry.display_name().to_string(),
                rating: entry.rating(),
                age: entry.age(),
            })
            .collect()
    }

    /// Mean rating of the filled slots, or `None` when no slot is filled.
    pub fn average_rating(&self) -> Option<f64> {
        crate::report::average_rating(&self.entries)
    }

    pub fn filled_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_filled()).count()
    }
}

/// Builds the lineup for `formation_id` from raw roster HTML.
///
/// # Errors
/// * `AppError::UnknownFormation` - the id is not in the catalog
/// * `AppError::NoPlayersFound` - no complete player row in the page
pub fn plan_lineup(html: &str, formation_id: &str) -> Result<Lineup, AppError> {
    let formation = resolve_formation(formation_id)?;
    let players = RosterExtractor::default().extract_html(html);
    lineup_for(&formation, &players)
}

/// Builds the lineup for `formation_id` from already extracted players.
pub fn plan_lineup_from_players(
    players: &[PlayerRecord],
    formation_id: &str,
) -> Result<Lineup, AppError> {
    let formation = resolve_formation(formation_id)?;
    lineup_for(&formation, players)
}

fn resolve_formation(formation_id: &str) -> Result<Formation, AppError> {
    Formation::lookup(formation_id).ok_or_else(|| {
        warn!("Unknown formation requested: {formation_id:?}");
        AppError::unknown_formation(formation_id, formation_ids().collect::<Vec<_>>().join(", "))
    })
}

fn lineup_for(formation: &Formation, players: &[PlayerRecord]) -> Result<Lineup, AppError> {
    if players.is_empty() {
        return Err(AppError::NoPlayersFound);
    }

    let entries = allocate(players, &formation.positions());
    let lineup = Lineup::new(formation.id, entries);
    info!(
        "Lineup {} filled {}/{} slots from {} players",
        lineup.formation,
        lineup.filled_count(),
        lineup.entries.len(),
        players.len()
    );
    Ok(lineup)
}
