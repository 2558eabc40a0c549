//! Error types for the media renamer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the media renamer.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (fatal, before any file is processed)
    #[error("TMDB API key not configured. Set TMDB_API_KEY environment variable")]
    TmdbApiKeyMissing,

    #[error("Invalid list file: {0}")]
    InvalidListFile(String),

    #[error("Unknown language code \"{0}\"")]
    UnknownLanguage(String),

    // Per-file lookup errors
    #[error("No matches found for \"{0}\"")]
    NotFound(String),

    // Per-file validation errors
    #[error("Season {0:02} not found")]
    SeasonNotFound(u32),

    #[error("S{season:02}E{episode:02} not found")]
    EpisodeNotFound { season: u32, episode: u32 },

    #[error("No season/episode marker in \"{0}\"")]
    MissingEpisodeMarker(String),

    // Per-file filesystem errors
    #[error("File doesn't exist: \"{0}\"")]
    SourceMissing(String),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
