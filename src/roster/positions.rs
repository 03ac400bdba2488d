//! Position extraction strategies for the player name cell.
//!
//! Roster pages usually render each position as its own label element next to
//! the player link. Older or drifted layouts only leave the codes as loose text
//! after the name, sometimes with no separator at all ("LWBRW"). Strategies are
//! tried in priority order and the first non-empty result wins.

use crate::formation::Position;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

static LABEL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span").expect("static selector"));

// Alternation order matters: LWB/RWB/CDM/CAM must be tried before the
// shorter codes that share their first letter.
static POSITION_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(GK|CB|LB|RB|LWB|RWB|CDM|CM|CAM|LM|RM|LW|RW|CF|ST)").expect("static regex")
});

/// A way of reading eligible positions out of the name cell.
pub trait PositionStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the positions found, possibly with duplicates, or an empty vec.
    fn extract(&self, name_cell: ElementRef<'_>, player_name: &str) -> Vec<Position>;
}

/// Reads `<span>` labels whose whole text is a position code.
#[derive(Debug, Default, Clone, Copy)]
pub struct LabelStrategy;

impl PositionStrategy for LabelStrategy {
    fn name(&self) -> &'static str {
        "labels"
    }

    fn extract(&self, name_cell: ElementRef<'_>, _player_name: &str) -> Vec<Position> {
        name_cell
            .select(&LABEL_SELECTOR)
            .filter_map(|label| Position::from_code(&stripped_text(label)))
            .collect()
    }
}

/// Scans the cell text after the player name for position tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextScanStrategy;

impl PositionStrategy for TextScanStrategy {
    fn name(&self) -> &'static str {
        "text-scan"
    }

    fn extract(&self, name_cell: ElementRef<'_>, player_name: &str) -> Vec<Position> {
        let fragments: Vec<&str> = name_cell
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        let cell_text = collapse_whitespace(&fragments.join(" "));
        let name = collapse_whitespace(player_name);
        let remainder = match cell_text.strip_prefix(name.as_str()) {
            Some(rest) => rest.trim(),
            None => cell_text.as_str(),
        };
        scan_position_tokens(remainder)
    }
}

/// Finds every position code in `text`, leftmost first.
///
/// # Examples
/// ```
/// use sofifa_lineup::formation::Position;
/// use sofifa_lineup::roster::positions::scan_position_tokens;
///
/// assert_eq!(scan_position_tokens("CM, CAM"), vec![Position::Cm, Position::Cam]);
/// assert_eq!(scan_position_tokens("LWBRW"), vec![Position::Lwb, Position::Rw]);
/// ```
pub fn scan_position_tokens(text: &str) -> Vec<Position> {
    POSITION_TOKEN
        .find_iter(text)
        .filter_map(|m| Position::from_code(m.as_str()))
        .collect()
}

/// The strategies used by default: labels first, then the text scan.
pub fn default_strategies() -> Vec<Box<dyn PositionStrategy>> {
    vec![Box::new(LabelStrategy), Box::new(TextScanStrategy)]
}

/// Text of an element with each fragment trimmed and the fragments joined.
pub(crate) fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_cell(document: &Html) -> ElementRef<'_> {
        let td = Selector::parse("td").unwrap();
        document.select(&td).next().unwrap()
    }

    fn cell_document(cell_html: &str) -> Html {
        Html::parse_document(&format!("<table><tr><td>{cell_html}</td></tr></table>"))
    }

    #[test]
    fn test_label_strategy_reads_exact_position_labels() {
        let document = cell_document(
            r#"<a href="/player/1/x">Rodri</a><span class="pos">CDM</span> <span class="pos"> CM </span>"#,
        );
        let positions = LabelStrategy.extract(first_cell(&document), "Rodri");
        assert_eq!(positions, vec![Position::Cdm, Position::Cm]);
    }

    #[test]
    fn test_label_strategy_ignores_non_position_labels() {
        let document = cell_document(
            r#"<a href="/player/1/x">Rodri</a><span>Spain</span><span>cm</span><span>CM CDM</span>"#,
        );
        assert!(LabelStrategy.extract(first_cell(&document), "Rodri").is_empty());
    }

    #[test]
    fn test_text_scan_strips_the_player_name_first() {
        // the "CB" in the name must not count as a position
        let document = cell_document(r#"<a href="/player/2/x">CB Smith</a> <div>ST, CF</div>"#);
        let positions = TextScanStrategy.extract(first_cell(&document), "CB Smith");
        assert_eq!(positions, vec![Position::St, Position::Cf]);
    }

    #[test]
    fn test_text_scan_handles_concatenated_codes() {
        let document = cell_document(r#"<a href="/player/3/x">Alphonso Davies</a>LWBLB"#);
        let positions = TextScanStrategy.extract(first_cell(&document), "Alphonso Davies");
        assert_eq!(positions, vec![Position::Lwb, Position::Lb]);
    }

    #[test]
    fn test_text_scan_collapses_whitespace_in_name() {
        let document = cell_document("<a href=\"/player/4/x\">Son\n   Heung-min</a><i>LW RW</i>");
        let positions = TextScanStrategy.extract(first_cell(&document), "Son Heung-min");
        assert_eq!(positions, vec![Position::Lw, Position::Rw]);
    }

    #[test]
    fn test_scan_position_tokens_prefers_longer_codes() {
        assert_eq!(scan_position_tokens("CAM"), vec![Position::Cam]);
        assert_eq!(scan_position_tokens("RWB"), vec![Position::Rwb]);
        assert_eq!(scan_position_tokens("CDM,CM"), vec![Position::Cdm, Position::Cm]);
        assert!(scan_position_tokens("goalkeeper").is_empty());
    }

    #[test]
    fn test_default_strategy_order() {
        let names: Vec<_> = default_strategies().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["labels", "text-scan"]);
    }
}
