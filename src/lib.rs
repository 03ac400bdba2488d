//! Best starting lineup from a sofifa.com club roster.
//!
//! This library reads a club's roster table from page HTML, then fills the
//! slots of a formation greedily with the highest-rated eligible players.
//!
//! # Examples
//!
//! ```rust
//! use sofifa_lineup::lineup::plan_lineup;
//! use sofifa_lineup::report::render_text;
//!
//! let html = r#"<table>
//!   <tr><td><a href="/player/239085/erling-haaland/">E. Haaland</a><span>ST</span></td><td>23</td><td>91</td></tr>
//!   <tr><td><a href="/player/210257/ederson/">Ederson</a><span>GK</span></td><td>30</td><td>88</td></tr>
//! </table>"#;
//!
//! let lineup = plan_lineup(html, "4-3-3")?;
//! assert_eq!(lineup.filled_count(), 2);
//! assert_eq!(lineup.average_rating(), Some(89.5));
//!
//! let mut out = Vec::new();
//! render_text(&mut out, &lineup, false)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod allocator;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod formation;
pub mod lineup;
pub mod logging;
pub mod report;
pub mod roster;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use allocator::{LineupEntry, allocate};
pub use config::Config;
pub use error::AppError;
pub use formation::{Formation, FormationSlot, Position, slots_for};
pub use lineup::{Lineup, LineupRow, plan_lineup};
pub use roster::{PlayerRecord, RosterExtractor, extract_players};
