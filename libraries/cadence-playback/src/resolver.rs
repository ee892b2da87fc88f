//! Media acquisition boundary
//!
//! Before a song record exists, the host may need to turn a remote page URL
//! into something it can serve locally (download, transcode, store). That work
//! lives outside this crate; the engine only sees the result through
//! [`SongResolver`]. A resolver either returns a complete [`ResolvedMedia`] or
//! an error, so a failed acquisition never produces a half-built song.

use crate::error::Result;
use cadence_core::NewSong;

/// Outcome of a successful acquisition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMedia {
    /// Locator the song record will carry
    pub url: String,

    /// Title discovered during acquisition, used when the request had none
    pub title: Option<String>,

    /// Artist discovered during acquisition, used when the request had none
    pub artist: Option<String>,
}

impl ResolvedMedia {
    /// Media that is already servable as requested
    pub fn unchanged(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            artist: None,
        }
    }

    /// Merge into the original request
    ///
    /// Discovered metadata only replaces blank or placeholder fields.
    pub fn apply_to(self, mut request: NewSong) -> NewSong {
        request.url = self.url;
        if let Some(title) = self.title {
            if request.has_placeholder_title() {
                request.title = title;
            }
        }
        if let Some(artist) = self.artist {
            if request.has_placeholder_artist() {
                request.artist = artist;
            }
        }
        request
    }
}

/// Turns a song request's locator into a servable one
///
/// Implementations report failures as [`crate::PlaybackError::Acquisition`].
pub trait SongResolver: Send {
    /// Resolve the request's media
    fn resolve(&self, request: &NewSong) -> Result<ResolvedMedia>;
}

/// Accepts every locator as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughResolver;

impl SongResolver for PassthroughResolver {
    fn resolve(&self, request: &NewSong) -> Result<ResolvedMedia> {
        Ok(ResolvedMedia::unchanged(request.url.clone()))
    }
}
