//! Override queue
//!
//! Songs the user asked to hear next. On advance the head of this queue wins
//! over the playlist's own order:
//!
//! ```text
//! Currently Playing: Song A
//! ─────────────────────────────
//! Override Queue (play next):
//!   - Song X (user added)
//!   - Song Y (user added)
//! ─────────────────────────────
//! Playlist order after A:
//!   - Song B
//!   - Song C
//! ```
//!
//! Entries are value copies. Editing a queued copy never touches the playlist
//! entry it came from, and vice versa.

use crate::error::{PlaybackError, Result};
use cadence_core::Song;
use serde::Serialize;
use std::collections::VecDeque;

/// FIFO of songs that pre-empt the playlist's natural order
#[derive(Debug, Clone, Default)]
pub struct OverrideQueue {
    songs: VecDeque<Song>,
}

/// Queue contents as reported to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueState {
    /// Number of queued songs
    pub size: usize,

    /// Queued songs, head first
    pub items: Vec<Song>,
}

impl OverrideQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy to the back of the queue
    pub fn enqueue(&mut self, song: Song) {
        self.songs.push_back(song);
    }

    /// Remove and return the head, if any
    pub fn dequeue(&mut self) -> Option<Song> {
        self.songs.pop_front()
    }

    /// Peek at the head without removing it
    pub fn peek(&self) -> Option<&Song> {
        self.songs.front()
    }

    /// Remove the song at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Song> {
        let len = self.songs.len();
        self.songs
            .remove(index)
            .ok_or_else(|| PlaybackError::out_of_range(index, len))
    }

    /// Move the song at `from` so that it ends up at `to`
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.songs.len();
        if from >= len {
            return Err(PlaybackError::out_of_range(from, len));
        }
        if to >= len {
            return Err(PlaybackError::out_of_range(to, len));
        }
        if from == to {
            return Ok(());
        }

        if let Some(song) = self.songs.remove(from) {
            self.songs.insert(to, song);
        }
        Ok(())
    }

    /// Clear entire queue
    pub fn clear(&mut self) {
        self.songs.clear();
    }

    /// Queued songs, head first
    pub fn iter(&self) -> impl Iterator<Item = &Song> + '_ {
        self.songs.iter()
    }

    /// Number of queued songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Count plus copies of every queued song
    pub fn state(&self) -> QueueState {
        QueueState {
            size: self.songs.len(),
            items: self.songs.iter().cloned().collect(),
        }
    }
}
