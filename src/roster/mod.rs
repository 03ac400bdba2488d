//! Roster extraction from a rendered club page.
//!
//! The extractor walks every table row in document order and keeps the rows
//! that describe a player completely. Anything else (header rows, partial rows,
//! unrelated tables) is skipped and logged at debug level.

pub mod models;
pub mod positions;
pub mod row;

pub use models::PlayerRecord;
pub use positions::{LabelStrategy, PositionStrategy, TextScanStrategy, default_strategies};
pub use row::{RowOutcome, SkipReason, parse_row};

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, trace};

static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("static selector"));

/// Turns roster markup into player records.
pub struct RosterExtractor {
    strategies: Vec<Box<dyn PositionStrategy>>,
}

impl Default for RosterExtractor {
    fn default() -> Self {
        Self::new(default_strategies())
    }
}

impl RosterExtractor {
    /// Creates an extractor that tries `strategies` in order for positions.
    pub fn new(strategies: Vec<Box<dyn PositionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Extracts all complete player rows from a parsed document.
    ///
    /// The result keeps document order and is empty when no row qualifies.
    pub fn extract(&self, document: &Html) -> Vec<PlayerRecord> {
        let mut players = Vec::new();
        let mut rows_seen = 0usize;

        for row in document.select(&ROW_SELECTOR) {
            rows_seen += 1;
            match parse_row(row, &self.strategies) {
                RowOutcome::Player(player) => {
                    trace!(
                        "Parsed player {} ({}) OVR {} age {}",
                        player.name,
                        player.positions_label(),
                        player.rating,
                        player.age
                    );
                    players.push(player);
                }
                RowOutcome::Skipped(SkipReason::NoPlayerLink) => {}
                RowOutcome::Skipped(reason) => {
                    debug!("Skipping roster row {rows_seen}: {reason}");
                }
            }
        }

        info!(
            "Extracted {} players from {} table rows",
            players.len(),
            rows_seen
        );
        players
    }

    /// Parses `html` and extracts players from it.
    pub fn extract_html(&self, html: &str) -> Vec<PlayerRecord> {
        self.extract(&Html::parse_document(html))
    }
}

/// Extracts players from a parsed document with the default strategies.
pub fn extract(document: &Html) -> Vec<PlayerRecord> {
    RosterExtractor::default().extract(document)
}

/// Extracts players from raw HTML with the default strategies.
///
/// # Examples
/// ```
/// use sofifa_lineup::roster::extract_players;
///
/// let html = r#"<table><tr>
///     <td><a href="/player/158023/lionel-messi/">L. Messi</a><span>RW</span><span>CF</span></td>
///     <td>36</td><td>90</td>
/// </tr></table>"#;
///
/// let players = extract_players(html);
/// assert_eq!(players.len(), 1);
/// assert_eq!(players[0].name, "L. Messi");
/// assert_eq!(players[0].rating, 90);
/// assert_eq!(players[0].age, 36);
/// ```
pub fn extract_players(html: &str) -> Vec<PlayerRecord> {
    RosterExtractor::default().extract_html(html)
}
