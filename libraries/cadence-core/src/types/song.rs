//! Song domain types

use crate::types::SongId;
use serde::{Deserialize, Serialize};

/// Title used when a request arrives with a blank title
pub const DEFAULT_TITLE: &str = "Untitled";

/// Artist used when a request arrives with a blank artist
pub const DEFAULT_ARTIST: &str = "Unknown";

/// One piece of media known to the engine
///
/// `url` is an opaque locator; the engine never dereferences it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Media locator (already resolved to something servable)
    pub url: String,

    /// Whether the user marked this song as a favorite
    pub favorite: bool,
}

impl Song {
    /// Create a new song with a freshly generated id
    pub fn new(title: impl Into<String>, artist: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: SongId::generate(),
            title: title.into(),
            artist: artist.into(),
            url: url.into(),
            favorite: false,
        }
    }

    /// Build a song record from a creation request
    ///
    /// Blank titles and artists fall back to [`DEFAULT_TITLE`] and [`DEFAULT_ARTIST`].
    pub fn from_request(request: NewSong) -> Self {
        let request = request.with_defaults();
        Self::new(request.title, request.artist, request.url)
    }

    /// Independent copy under a fresh id
    ///
    /// Used for override-queue entries, which must never share identity with
    /// the playlist entry they were copied from.
    pub fn duplicate(&self) -> Self {
        Self {
            id: SongId::generate(),
            ..self.clone()
        }
    }
}

/// Pre-validated payload for creating a song
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewSong {
    /// Requested title (may be blank)
    #[serde(default)]
    pub title: String,

    /// Requested artist (may be blank)
    #[serde(default)]
    pub artist: String,

    /// Media locator as supplied by the caller
    #[serde(default)]
    pub url: String,
}

impl NewSong {
    /// Create a new song request
    pub fn new(title: impl Into<String>, artist: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            url: url.into(),
        }
    }

    /// Whether the title is blank or still the placeholder
    pub fn has_placeholder_title(&self) -> bool {
        self.title.trim().is_empty() || self.title == DEFAULT_TITLE
    }

    /// Whether the artist is blank or still the placeholder
    pub fn has_placeholder_artist(&self) -> bool {
        self.artist.trim().is_empty() || self.artist == DEFAULT_ARTIST
    }

    /// Replace blank fields with their defaults
    pub fn with_defaults(mut self) -> Self {
        if self.title.trim().is_empty() {
            self.title = DEFAULT_TITLE.to_string();
        }
        if self.artist.trim().is_empty() {
            self.artist = DEFAULT_ARTIST.to_string();
        }
        self
    }
}
