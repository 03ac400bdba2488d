//! Parsing of a single roster table row.
//!
//! Every `<tr>` on the page goes through [`parse_row`]. A row that is not a
//! complete player row is skipped with a reason instead of failing the whole
//! extraction.

use super::models::PlayerRecord;
use super::positions::{PositionStrategy, stripped_text};
use crate::constants::roster::{AGE_RANGE, PLAYER_LINK_PATTERN, RATING_RANGE};
use crate::formation::Position;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};
use std::fmt;
use std::ops::RangeInclusive;

static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("static selector"));
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("static selector"));
static PLAYER_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(PLAYER_LINK_PATTERN).expect("static regex"));

/// Why a row did not produce a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No link to a player page; header rows and other tables end up here.
    NoPlayerLink,
    EmptyName,
    /// The player link is not inside a table cell.
    NoNameCell,
    NoPositions,
    NoAge,
    NoRating,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::NoPlayerLink => "no player link",
            SkipReason::EmptyName => "empty player name",
            SkipReason::NoNameCell => "player link outside a cell",
            SkipReason::NoPositions => "no position found",
            SkipReason::NoAge => "no age cell",
            SkipReason::NoRating => "no rating cell",
        };
        f.write_str(reason)
    }
}

/// Result of parsing one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Player(PlayerRecord),
    Skipped(SkipReason),
}

/// Parses one `<tr>` into a player record or a skip reason.
pub fn parse_row(row: ElementRef<'_>, strategies: &[Box<dyn PositionStrategy>]) -> RowOutcome {
    match try_parse_row(row, strategies) {
        Ok(player) => RowOutcome::Player(player),
        Err(reason) => RowOutcome::Skipped(reason),
    }
}

fn try_parse_row(
    row: ElementRef<'_>,
    strategies: &[Box<dyn PositionStrategy>],
) -> Result<PlayerRecord, SkipReason> {
    let (link, id) = row
        .select(&LINK_SELECTOR)
        .find_map(|link| player_id(link).map(|id| (link, id)))
        .ok_or(SkipReason::NoPlayerLink)?;

    let name = stripped_text(link);
    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    let name_cell = enclosing_cell(link).ok_or(SkipReason::NoNameCell)?;

    let positions = strategies
        .iter()
        .map(|strategy| strategy.extract(name_cell, &name))
        .find(|found| !found.is_empty())
        .map(dedup_positions)
        .ok_or(SkipReason::NoPositions)?;

    let cells: Vec<String> = row.select(&CELL_SELECTOR).map(stripped_text).collect();

    let age = first_integer_in(&cells, &AGE_RANGE, None).ok_or(SkipReason::NoAge)?;
    let rating = first_integer_in(&cells, &RATING_RANGE, Some(age)).ok_or(SkipReason::NoRating)?;

    Ok(PlayerRecord {
        id,
        name,
        positions,
        rating,
        age,
    })
}

fn player_id(link: ElementRef<'_>) -> Option<u64> {
    let href = link.value().attr("href")?;
    PLAYER_LINK.captures(href)?.get(1)?.as_str().parse().ok()
}

fn enclosing_cell(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "td")
}

fn dedup_positions(found: Vec<Position>) -> Vec<Position> {
    let mut unique = Vec::with_capacity(found.len());
    for position in found {
        if !unique.contains(&position) {
            unique.push(position);
        }
    }
    unique
}

/// First cell, in row order, holding a plain integer inside `range` and not
/// equal to `exclude`.
///
/// Age and rating are told apart only by scan order and by value, not by
/// column. A rating that happens to fall in the age range and comes first
/// will be read as the age.
fn first_integer_in(
    cells: &[String],
    range: &RangeInclusive<u8>,
    exclude: Option<u8>,
) -> Option<u8> {
    cells
        .iter()
        .filter_map(|text| parse_plain_integer(text))
        .filter_map(|value| u8::try_from(value).ok())
        .find(|value| range.contains(value) && Some(*value) != exclude)
}

fn parse_plain_integer(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::positions::default_strategies;
    use scraper::Html;

    fn parse_first_row(table_body: &str) -> RowOutcome {
        let document = Html::parse_document(&format!("<table>{table_body}</table>"));
        let tr = Selector::parse("tr").unwrap();
        let row = document.select(&tr).next().unwrap();
        parse_row(row, &default_strategies())
    }

    #[test]
    fn test_parses_complete_row() {
        let outcome = parse_first_row(
            r#"<tr><td><img></td>
               <td><a href="/player/239085/erling-haaland/">E. Haaland</a><span>ST</span></td>
               <td>23</td><td>91</td><td>94</td></tr>"#,
        );
        assert_eq!(
            outcome,
            RowOutcome::Player(PlayerRecord {
                id: 239085,
                name: "E. Haaland".to_string(),
                positions: vec![Position::St],
                rating: 91,
                age: 23,
            })
        );
    }

    #[test]
    fn test_header_row_is_skipped() {
        let outcome = parse_first_row("<tr><th>Name</th><th>Age</th><th>OVR</th></tr>");
        assert_eq!(outcome, RowOutcome::Skipped(SkipReason::NoPlayerLink));
    }

    #[test]
    fn test_non_player_links_are_ignored() {
        let outcome = parse_first_row(
            r#"<tr><td><a href="/team/10/manchester-city/">Man City</a><span>ST</span></td><td>25</td><td>80</td></tr>"#,
        );
        assert_eq!(outcome, RowOutcome::Skipped(SkipReason::NoPlayerLink));
    }

    #[test]
    fn test_row_without_positions_is_skipped() {
        let outcome = parse_first_row(
            r#"<tr><td><a href="/player/1/x">Nobody</a><span>Sub</span></td><td>25</td><td>80</td></tr>"#,
        );
        assert_eq!(outcome, RowOutcome::Skipped(SkipReason::NoPositions));
    }

    #[test]
    fn test_row_without_age_is_skipped() {
        let outcome = parse_first_row(
            r#"<tr><td><a href="/player/1/x">Veteran</a><span>CB</span></td><td>50</td><td>80</td></tr>"#,
        );
        assert_eq!(outcome, RowOutcome::Skipped(SkipReason::NoAge));
    }

    #[test]
    fn test_row_without_rating_is_skipped() {
        // 41 is taken as the age, so it cannot be the rating too
        let outcome = parse_first_row(
            r#"<tr><td><a href="/player/1/x">Solo</a><span>CB</span></td><td>41</td><td>41</td><td>€1M</td></tr>"#,
        );
        assert_eq!(outcome, RowOutcome::Skipped(SkipReason::NoRating));
    }

    #[test]
    fn test_first_rating_candidate_wins() {
        let outcome = parse_first_row(
            r#"<tr><td><a href="/player/7/x">Winger</a><span>LW</span></td>
               <td>24</td><td>82</td><td>88</td></tr>"#,
        );
        match outcome {
            RowOutcome::Player(player) => {
                assert_eq!(player.age, 24);
                assert_eq!(player.rating, 82);
            }
            other => panic!("expected a player, got {other:?}"),
        }
    }

    #[test]
    fn test_rating_equal_to_age_is_not_reused() {
        let outcome = parse_first_row(
            r#"<tr><td><a href="/player/7/x">Old Keeper</a><span>GK</span></td>
               <td>41</td><td>41</td><td>77</td></tr>"#,
        );
        match outcome {
            RowOutcome::Player(player) => {
                assert_eq!(player.age, 41);
                assert_eq!(player.rating, 77);
            }
            other => panic!("expected a player, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_labels_are_deduplicated() {
        let outcome = parse_first_row(
            r#"<tr><td><a href="/player/8/x">Dup</a><span>CM</span><span>CDM</span><span>CM</span></td>
               <td>27</td><td>80</td></tr>"#,
        );
        match outcome {
            RowOutcome::Player(player) => {
                assert_eq!(player.positions, vec![Position::Cm, Position::Cdm]);
            }
            other => panic!("expected a player, got {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_cells_are_ignored() {
        let outcome = parse_first_row(
            r#"<tr><td><a href="/player/9/x">Mixed</a><span>RB</span></td>
               <td>+2</td><td>20 y</td><td>-25</td><td> 26 </td><td>75.5</td><td>79</td></tr>"#,
        );
        match outcome {
            RowOutcome::Player(player) => {
                assert_eq!(player.age, 26);
                assert_eq!(player.rating, 79);
            }
            other => panic!("expected a player, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse_plain_integer("42"), Some(42));
        assert_eq!(parse_plain_integer(""), None);
        assert_eq!(parse_plain_integer("4 2"), None);
        assert_eq!(parse_plain_integer("99999999999999999999"), None);
    }
}
