//! Serializable projections handed back to callers
//!
//! Field names are camelCase so the request layer can render these directly.

use crate::collection::{serialize_cursor, SongCollection};
use crate::queue::{OverrideQueue, QueueState};
use crate::types::PlaybackModes;
use cadence_core::Song;
use serde::Serialize;

/// Full state of one playlist: songs, cursor, queue and modes
///
/// Returned by every song, queue, cursor and mode mutation so a caller can
/// redraw without a second read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistView {
    /// Playlist name
    pub name: String,

    /// Number of songs
    pub size: usize,

    /// Cursor position (`-1` on the wire when unset)
    #[serde(serialize_with = "serialize_cursor")]
    pub current_index: Option<usize>,

    /// Songs in playlist order
    pub items: Vec<Song>,

    /// Override queue contents
    pub queue: QueueState,

    /// Mode flags
    pub modes: PlaybackModes,
}

impl PlaylistView {
    pub(crate) fn new(
        name: &str,
        collection: &SongCollection,
        queue: &OverrideQueue,
        modes: PlaybackModes,
    ) -> Self {
        let snapshot = collection.snapshot();
        Self {
            name: name.to_string(),
            size: snapshot.size,
            current_index: snapshot.current_index,
            items: snapshot.items,
            queue: queue.state(),
            modes,
        }
    }

    /// Song under the cursor
    pub fn current(&self) -> Option<&Song> {
        self.current_index.and_then(|i| self.items.get(i))
    }
}

/// Preview of what will play, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpNext {
    /// Song under the cursor
    pub current: Option<Song>,

    /// Queued songs first, then the rest of the playlist per mode
    pub items: Vec<Song>,

    /// How many of `items` come from the override queue
    pub queue_count: usize,

    /// Mode flags the preview was computed with
    pub modes: PlaybackModes,
}

/// Favorite songs of the active playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoritesView {
    /// Playlist the favorites were taken from
    pub playlist: String,

    /// Favorite songs in playlist order
    pub items: Vec<Song>,
}
