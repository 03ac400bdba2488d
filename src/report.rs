//! Lineup summary and console rendering.

use crate::allocator::LineupEntry;
use crate::constants::report::{
    NAME_WIDTH, NO_LINEUP_MESSAGE, NO_PLAYERS_MESSAGE, POSITION_WIDTH, SEPARATOR_WIDTH,
};
use crate::error::AppError;
use crate::lineup::{Lineup, LineupRow};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use serde::Serialize;
use std::io::Write;

fn header_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
fn player_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
fn unfilled_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
fn average_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow

/// Mean rating over entries with a rating above zero.
///
/// Returns `None` when nothing is filled instead of dividing by zero.
pub fn average_rating(entries: &[LineupEntry]) -> Option<f64> {
    let ratings: Vec<u32> = entries
        .iter()
        .map(|entry| u32::from(entry.rating()))
        .filter(|rating| *rating > 0)
        .collect();

    if ratings.is_empty() {
        return None;
    }
    Some(f64::from(ratings.iter().sum::<u32>()) / ratings.len() as f64)
}

/// Formats one lineup line; empty slots omit the rating and age.
pub fn format_entry(entry: &LineupEntry) -> String {
    if entry.rating() > 0 {
        format!(
            "{:<pw$}: {:<nw$} (OVR {:2}, {:2} anos)",
            entry.position(),
            entry.display_name(),
            entry.rating(),
            entry.age(),
            pw = POSITION_WIDTH,
            nw = NAME_WIDTH
        )
    } else {
        format!(
            "{:<pw$}: {:<nw$}",
            entry.position(),
            entry.display_name(),
            pw = POSITION_WIDTH,
            nw = NAME_WIDTH
        )
    }
}

/// Writes the lineup as text, with ANSI colours when `colors` is set.
pub fn render_text<W: Write>(out: &mut W, lineup: &Lineup, colors: bool) -> std::io::Result<()> {
    let separator = "-".repeat(SEPARATOR_WIDTH);

    write_line(
        out,
        &format!("\nMelhor escalação para {}:", lineup.formation),
        colors.then(header_fg),
    )?;
    write_line(out, &separator, None)?;

    for entry in &lineup.entries {
        let color = if entry.is_filled() {
            player_fg()
        } else {
            unfilled_fg()
        };
        write_line(out, &format_entry(entry), colors.then_some(color))?;
    }

    if let Some(average) = lineup.average_rating() {
        write_line(
            out,
            &format!("\nMédia OVR do time: {average:.1}"),
            colors.then(average_fg),
        )?;
    }

    out.flush()
}

fn write_line<W: Write>(out: &mut W, text: &str, color: Option<Color>) -> std::io::Result<()> {
    match color {
        Some(color) => queue!(
            out,
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            Print("\n")
        ),
        None => queue!(out, Print(text), Print("\n")),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    formation: &'a str,
    lineup: Vec<LineupRow>,
    average_rating: Option<f64>,
}

/// Serializes the lineup rows and average as pretty JSON.
pub fn render_json(lineup: &Lineup) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        formation: &lineup.formation,
        lineup: lineup.rows(),
        average_rating: lineup.average_rating(),
    })
}

/// Messages shown when no lineup could be built.
pub fn outcome_messages(error: &AppError) -> Vec<String> {
    let reason = match error {
        AppError::NoPlayersFound => NO_PLAYERS_MESSAGE.to_string(),
        other => other.to_string(),
    };
    vec![reason, NO_LINEUP_MESSAGE.to_string()]
}

/// Writes the no-lineup messages as plain lines.
pub fn render_outcome_text<W: Write>(out: &mut W, error: &AppError) -> std::io::Result<()> {
    for message in outcome_messages(error) {
        writeln!(out, "{message}")?;
    }
    out.flush()
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    formation: &'a str,
    error: String,
    lineup: Vec<LineupRow>,
    average_rating: Option<f64>,
}

/// Serializes a no-lineup outcome with the same shape as [`render_json`].
pub fn render_outcome_json(formation: &str, error: &AppError) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutcome {
        formation,
        error: outcome_messages(error).join(" "),
        lineup: Vec::new(),
        average_rating: None,
    })
}
