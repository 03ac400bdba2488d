//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers used by the extractor, the
//! allocator and the report so that the domain limits live in one place.

use std::ops::RangeInclusive;

/// Application name used for config and log directories
pub const APP_NAME: &str = "sofifa_lineup";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "sofifa_lineup.log";

/// Default timeout for HTTP requests in seconds (matches the page navigation timeout)
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 60;

/// Desktop browser user agent sent with page requests
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// Player data limits used when reading roster rows
pub mod roster {
    use super::RangeInclusive;

    /// Valid overall ratings
    pub const RATING_RANGE: RangeInclusive<u8> = 40..=99;

    /// Valid player ages
    pub const AGE_RANGE: RangeInclusive<u8> = 15..=45;

    /// Link target pattern identifying a player detail page
    pub const PLAYER_LINK_PATTERN: &str = r"/player/(\d+)";
}

/// Report layout constants
pub mod report {
    /// Label shown for a slot nobody could fill
    pub const UNFILLED_LABEL: &str = "Não encontrado";

    /// Shown when the page yields no player rows
    pub const NO_PLAYERS_MESSAGE: &str = "Nenhum jogador foi encontrado.";

    /// Shown whenever no lineup could be built
    pub const NO_LINEUP_MESSAGE: &str = "Não foi possível montar a escalação.";

    /// Width of the position column
    pub const POSITION_WIDTH: usize = 4;

    /// Width of the player name column
    pub const NAME_WIDTH: usize = 25;

    /// Width of the separator line
    pub const SEPARATOR_WIDTH: usize = 50;
}
