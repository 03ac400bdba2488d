use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch club page: {0}")]
    PageFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("Club page not found (404): {url}")]
    PageNotFound { url: String },

    #[error("Rate limit exceeded (429): {url}")]
    RateLimited { url: String },

    #[error("HTTP error ({status}): {message} (URL: {url})")]
    HttpStatus {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Club page is empty: {url}")]
    EmptyPage { url: String },

    #[error("Invalid club URL: {0}")]
    InvalidUrl(String),

    // Lineup outcomes
    #[error("Unknown formation '{formation}'. Known formations: {known}")]
    UnknownFormation { formation: String, known: String },

    #[error("No players found in the club page")]
    NoPlayersFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl(url.into())
    }

    /// Create a page not found error
    pub fn page_not_found(url: impl Into<String>) -> Self {
        Self::PageNotFound { url: url.into() }
    }

    /// Create a rate limit error
    pub fn rate_limited(url: impl Into<String>) -> Self {
        Self::RateLimited { url: url.into() }
    }

    /// Create an HTTP status error (any non-success status except 404 and 429)
    pub fn http_status(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an empty page error
    pub fn empty_page(url: impl Into<String>) -> Self {
        Self::EmptyPage { url: url.into() }
    }

    /// Create an unknown formation error listing the known ids
    pub fn unknown_formation(formation: impl Into<String>, known: impl Into<String>) -> Self {
        Self::UnknownFormation {
            formation: formation.into(),
            known: known.into(),
        }
    }

    /// Whether the error is a lineup outcome rather than a failure.
    ///
    /// These are reported to the user without failing the process.
    pub fn is_lineup_outcome(&self) -> bool {
        matches!(
            self,
            AppError::UnknownFormation { .. } | AppError::NoPlayersFound
        )
    }

    /// Whether the error came from fetching the page.
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            AppError::PageFetch(_)
                | AppError::PageNotFound { .. }
                | AppError::RateLimited { .. }
                | AppError::HttpStatus { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::EmptyPage { .. }
        )
    }
}
