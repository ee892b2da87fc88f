//! Named playlists and the active selection

use crate::collection::SongCollection;
use crate::error::{PlaybackError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Owns every named [`SongCollection`] and tracks which one is active
///
/// `active` is `None` only while the registry is empty; otherwise it always
/// names a registered playlist. Names are reported in creation order.
#[derive(Debug, Clone, Default)]
pub struct CollectionRegistry {
    collections: HashMap<String, SongCollection>,
    order: Vec<String>,
    active: Option<String>,
}

/// Registered playlist names plus the active one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistListing {
    /// Active playlist name
    pub active: Option<String>,

    /// Every playlist name, in creation order
    pub items: Vec<String>,
}

impl CollectionRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty playlist
    ///
    /// The first playlist ever registered becomes active.
    pub fn create(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(PlaybackError::InvalidName);
        }
        if self.collections.contains_key(name) {
            return Err(PlaybackError::AlreadyExists(name.to_string()));
        }

        self.collections
            .insert(name.to_string(), SongCollection::new());
        self.order.push(name.to_string());
        if self.active.is_none() {
            self.active = Some(name.to_string());
        }
        Ok(())
    }

    /// Drop a playlist and its songs
    ///
    /// If it was active, the oldest remaining playlist takes over.
    pub fn remove(&mut self, name: &str) -> Result<SongCollection> {
        let collection = self
            .collections
            .remove(name)
            .ok_or_else(|| PlaybackError::PlaylistNotFound(name.to_string()))?;
        self.order.retain(|n| n != name);

        if self.active.as_deref() == Some(name) {
            self.active = self.order.first().cloned();
        }
        Ok(collection)
    }

    /// Make `name` the active playlist
    pub fn activate(&mut self, name: &str) -> Result<()> {
        if !self.collections.contains_key(name) {
            return Err(PlaybackError::PlaylistNotFound(name.to_string()));
        }
        self.active = Some(name.to_string());
        Ok(())
    }

    /// Active playlist name
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Active playlist
    pub fn active_collection(&self) -> Result<&SongCollection> {
        let name = self.active.as_deref().ok_or(PlaybackError::NoActiveCollection)?;
        self.get(name)
    }

    /// Active playlist, mutably
    pub fn active_collection_mut(&mut self) -> Result<&mut SongCollection> {
        let name = self.active.clone().ok_or(PlaybackError::NoActiveCollection)?;
        self.get_mut(&name)
    }

    /// Playlist by name
    pub fn get(&self, name: &str) -> Result<&SongCollection> {
        self.collections
            .get(name)
            .ok_or_else(|| PlaybackError::PlaylistNotFound(name.to_string()))
    }

    /// Playlist by name, mutably
    pub fn get_mut(&mut self, name: &str) -> Result<&mut SongCollection> {
        self.collections
            .get_mut(name)
            .ok_or_else(|| PlaybackError::PlaylistNotFound(name.to_string()))
    }

    /// Whether a playlist with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Playlist names in creation order
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Number of registered playlists
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Names plus active selection
    pub fn listing(&self) -> PlaylistListing {
        PlaylistListing {
            active: self.active.clone(),
            items: self.order.clone(),
        }
    }
}
