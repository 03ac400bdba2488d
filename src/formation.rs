//! Field positions and the fixed formation catalog.
//!
//! A formation is an ordered list of slots. Order matters: the allocator fills
//! slots front to back, so earlier slots get first pick of eligible players.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field position code as shown on roster pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Gk,
    Cb,
    Lb,
    Rb,
    Lwb,
    Rwb,
    Cdm,
    Cm,
    Cam,
    Lm,
    Rm,
    Lw,
    Rw,
    Cf,
    St,
}

impl Position {
    /// Every position code, in the order used for token matching.
    pub const ALL: [Position; 15] = [
        Position::Gk,
        Position::Cb,
        Position::Lb,
        Position::Rb,
        Position::Lwb,
        Position::Rwb,
        Position::Cdm,
        Position::Cm,
        Position::Cam,
        Position::Lm,
        Position::Rm,
        Position::Lw,
        Position::Rw,
        Position::Cf,
        Position::St,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Position::Gk => "GK",
            Position::Cb => "CB",
            Position::Lb => "LB",
            Position::Rb => "RB",
            Position::Lwb => "LWB",
            Position::Rwb => "RWB",
            Position::Cdm => "CDM",
            Position::Cm => "CM",
            Position::Cam => "CAM",
            Position::Lm => "LM",
            Position::Rm => "RM",
            Position::Lw => "LW",
            Position::Rw => "RW",
            Position::Cf => "CF",
            Position::St => "ST",
        }
    }

    /// Looks up a position by its exact, case-sensitive code.
    pub fn from_code(code: &str) -> Option<Position> {
        Position::ALL.into_iter().find(|p| p.code() == code)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width specifiers like {:4} work in the report
        f.pad(self.code())
    }
}

/// One slot of a formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormationSlot {
    pub position: Position,
    /// Zero-based index within the formation.
    pub order: usize,
}

/// A named formation and its ordered slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formation {
    pub id: &'static str,
    pub slots: Vec<FormationSlot>,
}

impl Formation {
    /// Resolves a formation id against the catalog.
    ///
    /// Unlike [`slots_for`], an unknown id is reported as `None` so callers
    /// can tell it apart from a formation that simply has no slots.
    pub fn lookup(id: &str) -> Option<Formation> {
        CATALOG
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(key, positions)| Formation {
                id: key,
                slots: positions
                    .iter()
                    .enumerate()
                    .map(|(order, &position)| FormationSlot { position, order })
                    .collect(),
            })
    }

    /// The slot positions in order.
    pub fn positions(&self) -> Vec<Position> {
        self.slots.iter().map(|slot| slot.position).collect()
    }
}

use Position::*;

const CATALOG: &[(&str, &[Position])] = &[
    ("4-3-3", &[Gk, Cb, Cb, Lb, Rb, Cm, Cm, Cm, Lw, St, Rw]),
    ("4-4-2", &[Gk, Cb, Cb, Lb, Rb, Lm, Rm, Cm, Cm, St, St]),
    ("3-4-3", &[Gk, Cb, Cb, Cb, Lm, Rm, Cm, Cm, Lw, St, Rw]),
    ("3-5-2", &[Gk, Cb, Cb, Cb, Lm, Rm, Cm, Cm, Cam, St, St]),
    ("4-2-3-1", &[Gk, Cb, Cb, Lb, Rb, Cdm, Cdm, Lm, Rm, Cam, St]),
    ("5-3-2", &[Gk, Cb, Cb, Cb, Lwb, Rwb, Cm, Cm, Cm, St, St]),
    ("2-5-2-1", &[Gk, Cb, Cb, Lm, Rm, Cm, Cm, Cm, Cam, Cam, St]),
    ("4-2-4", &[Gk, Cb, Cb, Lb, Rb, Cm, Cm, Lw, Rw, St, St]),
    ("5-4-1", &[Gk, Cb, Cb, Cb, Rb, Lb, Cm, Cm, Lm, Rm, St]),
    ("4-4-2 (fechado)", &[Gk, Cb, Cb, Lb, Rb, Cm, Cm, Cam, Cam, St, St]),
    ("4-3-1-2", &[Gk, Cb, Cb, Lb, Rb, Cdm, Cm, Cm, Cam, St, St]),
];

/// Returns the slot positions for a formation id.
///
/// Unknown ids yield an empty slice. Matching is exact and case-sensitive.
///
/// # Examples
/// ```
/// use sofifa_lineup::formation::{slots_for, Position};
///
/// assert_eq!(slots_for("4-4-2").len(), 11);
/// assert_eq!(slots_for("4-4-2")[0], Position::Gk);
/// assert!(slots_for("9-9-9").is_empty());
/// ```
pub fn slots_for(formation_id: &str) -> &'static [Position] {
    CATALOG
        .iter()
        .find(|(key, _)| *key == formation_id)
        .map(|(_, positions)| *positions)
        .unwrap_or(&[])
}

/// All catalog ids in catalog order.
pub fn formation_ids() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(key, _)| *key)
}
