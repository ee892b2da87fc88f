//! Next / previous / up-next derivation
//!
//! Stateless: every function works on the playlist, queue and modes it is
//! given and keeps nothing between calls. There is no cached "next song".
//!
//! Advance priority:
//! 1. Override queue head (spliced onto the end of the playlist)
//! 2. Repeat one (stay put)
//! 3. Shuffle (any other song)
//! 4. Successor
//! 5. Repeat all wraps to the head, otherwise stall

use crate::collection::SongCollection;
use crate::queue::OverrideQueue;
use crate::shuffle::ShuffleSource;
use crate::types::{PlaybackModes, RepeatMode};
use crate::views::UpNext;
use cadence_core::Song;

/// What an advance or rewind did to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Queue head was appended to the playlist and made current
    FromQueue,

    /// Repeat one kept the current song
    Repeated,

    /// Shuffle picked a song
    Shuffled,

    /// Moved to the neighbouring song
    Stepped,

    /// Repeat all wrapped around to the other end
    Wrapped,

    /// Nothing to move to
    Stalled,
}

/// Move to the next song
pub fn advance(
    collection: &mut SongCollection,
    queue: &mut OverrideQueue,
    modes: PlaybackModes,
    rng: &mut dyn ShuffleSource,
) -> Step {
    if let Some(song) = queue.dequeue() {
        collection.add_last(song);
        collection.select_tail();
        return Step::FromQueue;
    }

    if modes.repeat == RepeatMode::One {
        return Step::Repeated;
    }

    if modes.shuffle && !collection.is_empty() {
        let pick = rng.pick_other(collection.len(), collection.current_index());
        return match collection.set_current(pick) {
            Ok(()) => Step::Shuffled,
            Err(_) => Step::Stalled,
        };
    }

    if collection.has_next() {
        collection.move_next();
        return Step::Stepped;
    }

    if modes.repeat == RepeatMode::All && !collection.is_empty() {
        collection.select_head();
        return Step::Wrapped;
    }

    Step::Stalled
}

/// Move to the previous song
///
/// Ignores the queue and shuffle.
pub fn rewind(collection: &mut SongCollection, modes: PlaybackModes) -> Step {
    if collection.has_prev() {
        collection.move_prev();
        return Step::Stepped;
    }

    if modes.repeat == RepeatMode::All && !collection.is_empty() {
        collection.select_tail();
        return Step::Wrapped;
    }

    Step::Stalled
}

/// Preview what will play, without changing anything
///
/// With shuffle on, every call draws a fresh random order.
pub fn up_next(
    collection: &SongCollection,
    queue: &OverrideQueue,
    modes: PlaybackModes,
    rng: &mut dyn ShuffleSource,
) -> UpNext {
    let current = collection.current().cloned();
    let mut items: Vec<Song> = queue.iter().cloned().collect();
    let queue_count = items.len();

    match &current {
        None => items.extend(collection.iter().cloned()),
        Some(_) if modes.repeat == RepeatMode::One => {}
        Some(playing) if modes.shuffle => {
            let mut rest: Vec<Song> = collection
                .iter()
                .filter(|song| song.id != playing.id)
                .cloned()
                .collect();
            rng.shuffle(&mut rest);
            items.extend(rest);
        }
        Some(_) => {
            items.extend(collection.songs_after_current().cloned());
            if modes.repeat == RepeatMode::All {
                items.extend(collection.songs_before_current().cloned());
            }
        }
    }

    UpNext {
        current,
        items,
        queue_count,
        modes,
    }
}
