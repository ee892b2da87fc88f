//! Error types for playback sequencing

use cadence_core::SongId;
use thiserror::Error;

/// Playback errors
///
/// Every variant is a local, recoverable failure. Operations that fail leave
/// the engine exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// No playlist with this name is registered
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// No song with this id in the collection being addressed
    #[error("Song not found: {0}")]
    SongNotFound(SongId),

    /// Index outside the valid bounds for the operation
    #[error("Index out of range: {index} (size {len})")]
    IndexOutOfRange { index: i64, len: usize },

    /// Negative index in a request
    #[error("Index out of range: {0}")]
    NegativeIndex(i64),

    /// A playlist with this name already exists
    #[error("Playlist already exists: {0}")]
    AlreadyExists(String),

    /// The registry holds no playlists, so nothing is active
    #[error("No active playlist")]
    NoActiveCollection,

    /// Unrecognized repeat mode
    #[error("Invalid repeat mode: {0} (expected off, one or all)")]
    InvalidMode(String),

    /// Unrecognized insertion position
    #[error("Invalid position: {0} (expected start, end or index)")]
    InvalidPosition(String),

    /// Playlist name was blank
    #[error("Playlist name required")]
    InvalidName,

    /// The media resolver could not produce a playable locator
    #[error("Media acquisition failed: {0}")]
    Acquisition(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse error classification for callers mapping errors to responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    OutOfRange,
    AlreadyExists,
    NoActiveCollection,
    InvalidMode,
    InvalidRequest,
    Acquisition,
    Config,
}

impl PlaybackError {
    /// Build an out-of-range error from a collection-sized index
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PlaylistNotFound(_) | Self::SongNotFound(_) => ErrorKind::NotFound,
            Self::IndexOutOfRange { .. } | Self::NegativeIndex(_) => ErrorKind::OutOfRange,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::NoActiveCollection => ErrorKind::NoActiveCollection,
            Self::InvalidMode(_) => ErrorKind::InvalidMode,
            Self::InvalidPosition(_) | Self::InvalidName => ErrorKind::InvalidRequest,
            Self::Acquisition(_) => ErrorKind::Acquisition,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<config::ConfigError> for PlaybackError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
