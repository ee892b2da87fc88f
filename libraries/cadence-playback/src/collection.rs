//! Ordered song collection with a playback cursor
//!
//! A doubly-linked list stored in a dense arena. Nodes refer to each other by
//! slot index, and the cursor is a slot index too, so it keeps pointing at the
//! same song while other songs are inserted, removed or moved around it.
//!
//! ```text
//! head                                tail
//!  [A] <-> [B] <-> [C] <-> [D] <-> [E]
//!                   ^
//!                current
//! ```
//!
//! Removing a node swaps the last arena slot into the hole and patches the
//! links that pointed at the moved slot. Positional lookups walk from
//! whichever end is closer.

use crate::error::{PlaybackError, Result};
use crate::types::InsertPosition;
use cadence_core::{Song, SongId};
use serde::{Serialize, Serializer};
use std::iter;

#[derive(Debug, Clone)]
struct Node {
    song: Song,
    prev: Option<usize>,
    next: Option<usize>,
}

/// One named playlist's songs plus the "current" cursor
///
/// Invariants:
/// - `current` is `None` iff the collection is empty
/// - `current`, when set, refers to a linked node
#[derive(Debug, Clone, Default)]
pub struct SongCollection {
    nodes: Vec<Node>,
    head: Option<usize>,
    tail: Option<usize>,
    current: Option<usize>,
}

/// Ordered copy of a collection's songs with the cursor position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSnapshot {
    /// Number of songs
    pub size: usize,

    /// Cursor position (`-1` on the wire when unset)
    #[serde(serialize_with = "serialize_cursor")]
    pub current_index: Option<usize>,

    /// Songs in playlist order
    pub items: Vec<Song>,
}

pub(crate) fn serialize_cursor<S: Serializer>(
    index: &Option<usize>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match index {
        Some(i) => serializer.serialize_u64(*i as u64),
        None => serializer.serialize_i64(-1),
    }
}

impl SongCollection {
    /// Create new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if collection is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ===== Insertion =====

    /// Insert at index 0
    pub fn add_first(&mut self, song: Song) {
        self.link_new(song, None, self.head);
    }

    /// Insert after the last song
    pub fn add_last(&mut self, song: Song) {
        self.link_new(song, self.tail, None);
    }

    /// Insert so that the new song ends up at `index` (`0..=len`)
    ///
    /// Fails without touching the collection when `index > len`.
    pub fn add_at(&mut self, index: usize, song: Song) -> Result<()> {
        if index > self.len() {
            return Err(PlaybackError::out_of_range(index, self.len()));
        }

        match self.slot_at(index) {
            Some(next) => {
                let prev = self.nodes[next].prev;
                self.link_new(song, prev, Some(next));
            }
            // index == len
            None => self.add_last(song),
        }
        Ok(())
    }

    /// Insert according to an [`InsertPosition`]
    pub fn insert(&mut self, position: InsertPosition, song: Song) -> Result<()> {
        match position {
            InsertPosition::First => {
                self.add_first(song);
                Ok(())
            }
            InsertPosition::Last => {
                self.add_last(song);
                Ok(())
            }
            InsertPosition::At(index) => self.add_at(index, song),
        }
    }

    // ===== Removal & reordering =====

    /// Remove the song with this id
    ///
    /// If it was current, the cursor moves to its successor, else its
    /// predecessor, else becomes unset. Returns whether a song was removed.
    pub fn remove_by_id(&mut self, id: &SongId) -> bool {
        let Some(slot) = self.slot_of(id) else {
            return false;
        };

        let (prev, next) = self.detach(slot);
        if self.current == Some(slot) {
            self.current = next.or(prev);
        }
        self.release(slot);
        self.debug_check();
        true
    }

    /// Move the song at `from` so that it ends up at `to`
    ///
    /// The cursor stays on the same song.
    pub fn move_song(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.len();
        let slot = self
            .slot_at(from)
            .ok_or_else(|| PlaybackError::out_of_range(from, len))?;
        if to >= len {
            return Err(PlaybackError::out_of_range(to, len));
        }
        if from == to {
            return Ok(());
        }

        self.detach(slot);
        // `slot` is unlinked but still in the arena, so walk links rather than use slot_at
        let target = self.slots_from(self.head).nth(to);
        match target {
            Some(next) => {
                let prev = self.nodes[next].prev;
                self.attach(slot, prev, Some(next));
            }
            None => self.attach(slot, self.tail, None),
        }
        self.debug_check();
        Ok(())
    }

    // ===== Lookup =====

    /// Find a song by id, with its 0-based index
    pub fn find_by_id(&self, id: &SongId) -> Option<(usize, &Song)> {
        self.iter().enumerate().find(|(_, song)| &song.id == id)
    }

    /// Find a song by id for in-place edits (e.g. favorite flag)
    pub fn find_by_id_mut(&mut self, id: &SongId) -> Option<(usize, &mut Song)> {
        let (index, slot) = self
            .slots_from(self.head)
            .enumerate()
            .find(|&(_, slot)| &self.nodes[slot].song.id == id)?;
        Some((index, &mut self.nodes[slot].song))
    }

    /// Song at a 0-based index
    pub fn get(&self, index: usize) -> Option<&Song> {
        self.slot_at(index).map(|slot| &self.nodes[slot].song)
    }

    /// Songs in playlist order
    pub fn iter(&self) -> impl Iterator<Item = &Song> + '_ {
        self.songs_from(self.head)
    }

    /// Songs strictly after the cursor (empty when no cursor)
    pub fn songs_after_current(&self) -> impl Iterator<Item = &Song> + '_ {
        self.songs_from(self.current.and_then(|slot| self.nodes[slot].next))
    }

    /// Songs from the head up to, excluding, the cursor
    pub fn songs_before_current(&self) -> impl Iterator<Item = &Song> + '_ {
        let current = self.current;
        self.slots_from(self.head)
            .take_while(move |&slot| Some(slot) != current)
            .map(move |slot| &self.nodes[slot].song)
    }

    /// Songs flagged as favorite, in playlist order
    pub fn favorites(&self) -> impl Iterator<Item = &Song> + '_ {
        self.iter().filter(|song| song.favorite)
    }

    // ===== Cursor =====

    /// Currently selected song
    pub fn current(&self) -> Option<&Song> {
        self.current.map(|slot| &self.nodes[slot].song)
    }

    /// 0-based index of the cursor
    pub fn current_index(&self) -> Option<usize> {
        let current = self.current?;
        self.slots_from(self.head).position(|slot| slot == current)
    }

    /// Whether the cursor has a successor
    pub fn has_next(&self) -> bool {
        self.current
            .and_then(|slot| self.nodes[slot].next)
            .is_some()
    }

    /// Whether the cursor has a predecessor
    pub fn has_prev(&self) -> bool {
        self.current
            .and_then(|slot| self.nodes[slot].prev)
            .is_some()
    }

    /// Point the cursor at `index`
    ///
    /// On an empty collection this is a no-op and never fails.
    pub fn set_current(&mut self, index: usize) -> Result<()> {
        if self.is_empty() {
            self.current = None;
            return Ok(());
        }
        let slot = self
            .slot_at(index)
            .ok_or_else(|| PlaybackError::out_of_range(index, self.len()))?;
        self.current = Some(slot);
        Ok(())
    }

    /// Point the cursor at the first song (no-op when empty)
    pub fn select_head(&mut self) {
        self.current = self.head;
    }

    /// Point the cursor at the last song (no-op when empty)
    pub fn select_tail(&mut self) {
        self.current = self.tail;
    }

    /// Step the cursor forward (no-op at the tail or when unset)
    pub fn move_next(&mut self) {
        if let Some(next) = self.current.and_then(|slot| self.nodes[slot].next) {
            self.current = Some(next);
        }
    }

    /// Step the cursor backward (no-op at the head or when unset)
    pub fn move_prev(&mut self) {
        if let Some(prev) = self.current.and_then(|slot| self.nodes[slot].prev) {
            self.current = Some(prev);
        }
    }

    /// Ordered copy of every song plus the cursor index
    pub fn snapshot(&self) -> CollectionSnapshot {
        CollectionSnapshot {
            size: self.len(),
            current_index: self.current_index(),
            items: self.iter().cloned().collect(),
        }
    }

    // ===== Arena internals =====

    fn slots_from(&self, start: Option<usize>) -> impl Iterator<Item = usize> + '_ {
        iter::successors(start, move |&slot| self.nodes[slot].next)
    }

    fn songs_from(&self, start: Option<usize>) -> impl Iterator<Item = &Song> + '_ {
        self.slots_from(start).map(move |slot| &self.nodes[slot].song)
    }

    fn slot_of(&self, id: &SongId) -> Option<usize> {
        self.slots_from(self.head)
            .find(|&slot| &self.nodes[slot].song.id == id)
    }

    /// Slot holding the song at `index`, walking from the nearer end
    fn slot_at(&self, index: usize) -> Option<usize> {
        let len = self.len();
        if index >= len {
            return None;
        }
        if index <= len / 2 {
            self.slots_from(self.head).nth(index)
        } else {
            iter::successors(self.tail, |&slot| self.nodes[slot].prev).nth(len - 1 - index)
        }
    }

    fn link_new(&mut self, song: Song, prev: Option<usize>, next: Option<usize>) {
        let slot = self.nodes.len();
        self.nodes.push(Node {
            song,
            prev: None,
            next: None,
        });
        self.attach(slot, prev, next);

        // Only possible when the collection was empty
        if self.current.is_none() {
            self.current = Some(slot);
        }
        self.debug_check();
    }

    /// Splice `slot` between `prev` and `next`
    fn attach(&mut self, slot: usize, prev: Option<usize>, next: Option<usize>) {
        self.nodes[slot].prev = prev;
        self.nodes[slot].next = next;
        match prev {
            Some(p) => self.nodes[p].next = Some(slot),
            None => self.head = Some(slot),
        }
        match next {
            Some(n) => self.nodes[n].prev = Some(slot),
            None => self.tail = Some(slot),
        }
    }

    /// Unlink `slot` from its neighbours, returning its old (prev, next)
    fn detach(&mut self, slot: usize) -> (Option<usize>, Option<usize>) {
        let Node { prev, next, .. } = self.nodes[slot];
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
        (prev, next)
    }

    /// Drop a detached slot, moving the last arena node into its place
    fn release(&mut self, slot: usize) {
        let last = self.nodes.len() - 1;
        self.nodes.swap_remove(slot);
        if slot == last {
            return;
        }

        let Node { prev, next, .. } = self.nodes[slot];
        match prev {
            Some(p) => self.nodes[p].next = Some(slot),
            None => self.head = Some(slot),
        }
        match next {
            Some(n) => self.nodes[n].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        if self.current == Some(last) {
            self.current = Some(slot);
        }
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.current.is_none(), self.nodes.is_empty());
        debug_assert_eq!(self.head.is_none(), self.nodes.is_empty());
        debug_assert_eq!(self.tail.is_none(), self.nodes.is_empty());
    }
}
