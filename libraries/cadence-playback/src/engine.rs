//! Engine - owner of all sequencing state
//!
//! Holds the playlist registry, the override queue, the mode flags, the
//! shuffle source and the media resolver. Every operation a request layer
//! needs goes through here.
//!
//! The engine is synchronous and `Send`. A host serving concurrent requests
//! wraps a single instance in a `Mutex`; nothing inside blocks on I/O.

use crate::{
    config::EngineConfig,
    error::{PlaybackError, Result},
    queue::{OverrideQueue, QueueState},
    registry::{CollectionRegistry, PlaylistListing},
    resolver::{PassthroughResolver, SongResolver},
    seed,
    sequencer::{self, Step},
    shuffle::{shuffle_source, ShuffleSource},
    types::{InsertPosition, ModeUpdate, PlaybackModes, RepeatMode},
    views::{FavoritesView, PlaylistView, UpNext},
};
use cadence_core::{NewSong, Song, SongId};
use std::fmt;
use tracing::{debug, info, warn};

/// Playback-sequencing engine
///
/// Song, cursor, queue and mode mutations return the resulting
/// [`PlaylistView`] of the active playlist. Registry operations return a
/// [`PlaylistListing`]. A failed operation changes nothing.
pub struct Engine {
    registry: CollectionRegistry,
    queue: OverrideQueue,
    modes: PlaybackModes,
    shuffle: Box<dyn ShuffleSource>,
    resolver: Box<dyn SongResolver>,
}

impl Engine {
    /// Create an engine from configuration
    ///
    /// Seeds the sample playlists when enabled, makes sure the configured
    /// default playlist exists, and activates it.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Self::with_shuffle_source(config, shuffle_source(config.library.rng_seed))
    }

    /// Create an engine with a caller-supplied shuffle source
    pub fn with_shuffle_source(
        config: &EngineConfig,
        shuffle: Box<dyn ShuffleSource>,
    ) -> Result<Self> {
        config.validate()?;

        let mut registry = CollectionRegistry::new();
        if config.library.seed_defaults {
            seed::seed_defaults(&mut registry)?;
        }

        let default_playlist = config.library.default_playlist.trim();
        if !registry.contains(default_playlist) {
            registry.create(default_playlist)?;
        }
        registry.activate(default_playlist)?;

        info!(
            playlists = registry.len(),
            active = default_playlist,
            "Engine initialized"
        );

        Ok(Self {
            registry,
            queue: OverrideQueue::new(),
            modes: config.modes(),
            shuffle,
            resolver: Box::new(PassthroughResolver),
        })
    }

    /// Engine with no playlists at all
    pub fn empty() -> Self {
        Self {
            registry: CollectionRegistry::new(),
            queue: OverrideQueue::new(),
            modes: PlaybackModes::default(),
            shuffle: shuffle_source(None),
            resolver: Box::new(PassthroughResolver),
        }
    }

    /// Replace the media resolver
    pub fn with_resolver(mut self, resolver: impl SongResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    // ===== Playlists =====

    /// Playlist names plus the active one
    pub fn playlists(&self) -> PlaylistListing {
        self.registry.listing()
    }

    /// Register an empty playlist (name is trimmed)
    pub fn create_playlist(&mut self, name: &str) -> Result<PlaylistListing> {
        let name = name.trim();
        self.registry
            .create(name)
            .inspect_err(|err| warn!(name, %err, "Rejected playlist creation"))?;
        info!(name, "Created playlist");
        Ok(self.registry.listing())
    }

    /// Make a playlist active
    pub fn activate_playlist(&mut self, name: &str) -> Result<PlaylistListing> {
        self.registry.activate(name)?;
        info!(name, "Activated playlist");
        Ok(self.registry.listing())
    }

    /// Remove a playlist and its songs
    pub fn remove_playlist(&mut self, name: &str) -> Result<PlaylistListing> {
        let removed = self.registry.remove(name)?;
        info!(
            name,
            songs = removed.len(),
            active = self.registry.active_name(),
            "Removed playlist"
        );
        Ok(self.registry.listing())
    }

    // ===== Songs =====

    /// View of the active playlist
    pub fn playlist(&self) -> Result<PlaylistView> {
        let name = self.active_name()?;
        self.view(name)
    }

    /// View of a playlist by name
    pub fn playlist_named(&self, name: &str) -> Result<PlaylistView> {
        self.view(name)
    }

    /// Resolve and insert a new song
    ///
    /// Goes into `target` when given, the active playlist otherwise. Returns
    /// the view of the playlist the song went into.
    pub fn add_song(
        &mut self,
        request: NewSong,
        position: InsertPosition,
        target: Option<&str>,
    ) -> Result<PlaylistView> {
        let target = match target {
            Some(name) => name.to_string(),
            None => self.active_name()?.to_string(),
        };
        if !self.registry.contains(&target) {
            warn!(playlist = %target, "Add song to unknown playlist");
            return Err(PlaybackError::PlaylistNotFound(target));
        }

        let media = self
            .resolver
            .resolve(&request)
            .inspect_err(|err| warn!(url = %request.url, %err, "Media acquisition failed"))?;
        let song = Song::from_request(media.apply_to(request));
        let id = song.id.clone();

        self.registry
            .get_mut(&target)?
            .insert(position, song)
            .inspect_err(|err| warn!(playlist = %target, ?position, %err, "Rejected song insert"))?;

        debug!(playlist = %target, song_id = %id, ?position, "Added song");
        self.view(&target)
    }

    /// Remove a song from the active playlist
    pub fn remove_song(&mut self, id: &SongId) -> Result<PlaylistView> {
        let collection = self.registry.active_collection_mut()?;
        if !collection.remove_by_id(id) {
            return Err(PlaybackError::SongNotFound(id.clone()));
        }
        debug!(song_id = %id, "Removed song");
        self.playlist()
    }

    /// Move a song within the active playlist
    pub fn move_song(&mut self, from: usize, to: usize) -> Result<PlaylistView> {
        self.registry.active_collection_mut()?.move_song(from, to)?;
        debug!(from, to, "Moved song");
        self.playlist()
    }

    /// Set a song's favorite flag, or toggle it when `favorite` is `None`
    pub fn set_favorite(&mut self, id: &SongId, favorite: Option<bool>) -> Result<PlaylistView> {
        let (_, song) = self
            .registry
            .active_collection_mut()?
            .find_by_id_mut(id)
            .ok_or_else(|| PlaybackError::SongNotFound(id.clone()))?;

        song.favorite = favorite.unwrap_or(!song.favorite);
        debug!(song_id = %id, favorite = song.favorite, "Updated favorite");
        self.playlist()
    }

    /// Favorite songs of the active playlist
    pub fn favorites(&self) -> Result<FavoritesView> {
        let name = self.active_name()?;
        let items = self.registry.get(name)?.favorites().cloned().collect();
        Ok(FavoritesView {
            playlist: name.to_string(),
            items,
        })
    }

    // ===== Override queue =====

    /// Queue contents
    pub fn queue_state(&self) -> QueueState {
        self.queue.state()
    }

    /// Queue a copy of a song from the active playlist
    ///
    /// The copy gets its own id, so it stays independent of the original.
    pub fn enqueue(&mut self, id: &SongId) -> Result<PlaylistView> {
        let (_, song) = self
            .registry
            .active_collection()?
            .find_by_id(id)
            .ok_or_else(|| PlaybackError::SongNotFound(id.clone()))?;

        let copy = song.duplicate();
        debug!(song_id = %id, queued_id = %copy.id, "Enqueued song");
        self.queue.enqueue(copy);
        self.playlist()
    }

    /// Remove a queued song by position
    pub fn remove_from_queue(&mut self, index: usize) -> Result<PlaylistView> {
        self.active_name()?;
        let song = self.queue.remove_at(index)?;
        debug!(index, song_id = %song.id, "Removed from queue");
        self.playlist()
    }

    /// Move a queued song
    pub fn reorder_queue(&mut self, from: usize, to: usize) -> Result<PlaylistView> {
        self.active_name()?;
        self.queue.reorder(from, to)?;
        debug!(from, to, "Reordered queue");
        self.playlist()
    }

    /// Empty the queue
    pub fn clear_queue(&mut self) -> Result<PlaylistView> {
        self.active_name()?;
        self.queue.clear();
        debug!("Cleared queue");
        self.playlist()
    }

    // ===== Modes =====

    /// Current mode flags
    pub fn modes(&self) -> PlaybackModes {
        self.modes
    }

    /// Turn shuffle on or off
    pub fn set_shuffle(&mut self, shuffle: bool) -> Result<PlaylistView> {
        self.active_name()?;
        self.modes.shuffle = shuffle;
        debug!(shuffle, "Set shuffle");
        self.playlist()
    }

    /// Set repeat mode
    pub fn set_repeat(&mut self, repeat: RepeatMode) -> Result<PlaylistView> {
        self.active_name()?;
        self.modes.repeat = repeat;
        debug!(%repeat, "Set repeat");
        self.playlist()
    }

    /// Apply a partial mode change
    ///
    /// The textual repeat value is validated before either flag changes.
    pub fn update_modes(&mut self, update: &ModeUpdate) -> Result<PlaylistView> {
        self.active_name()?;
        self.modes = update
            .apply(self.modes)
            .inspect_err(|err| warn!(%err, "Rejected mode change"))?;
        debug!(shuffle = self.modes.shuffle, repeat = %self.modes.repeat, "Updated modes");
        self.playlist()
    }

    // ===== Playback control =====

    /// Point the cursor of the active playlist at `index`
    pub fn set_current(&mut self, index: usize) -> Result<PlaylistView> {
        self.registry.active_collection_mut()?.set_current(index)?;
        debug!(index, "Set current");
        self.playlist()
    }

    /// Point the cursor at a song by id
    pub fn jump_to(&mut self, id: &SongId) -> Result<PlaylistView> {
        let collection = self.registry.active_collection_mut()?;
        let (index, _) = collection
            .find_by_id(id)
            .ok_or_else(|| PlaybackError::SongNotFound(id.clone()))?;
        collection.set_current(index)?;
        debug!(song_id = %id, index, "Jumped to song");
        self.playlist()
    }

    /// Advance to the next song
    pub fn next(&mut self) -> Result<PlaylistView> {
        let collection = self.registry.active_collection_mut()?;
        let step = sequencer::advance(
            collection,
            &mut self.queue,
            self.modes,
            self.shuffle.as_mut(),
        );
        self.log_step("next", step);
        self.playlist()
    }

    /// Go back to the previous song
    pub fn previous(&mut self) -> Result<PlaylistView> {
        let step = sequencer::rewind(self.registry.active_collection_mut()?, self.modes);
        self.log_step("previous", step);
        self.playlist()
    }

    /// Preview of what will play next
    pub fn up_next(&mut self) -> Result<UpNext> {
        let collection = self.registry.active_collection()?;
        Ok(sequencer::up_next(
            collection,
            &self.queue,
            self.modes,
            self.shuffle.as_mut(),
        ))
    }

    // ===== Internals =====

    fn active_name(&self) -> Result<&str> {
        self.registry
            .active_name()
            .ok_or(PlaybackError::NoActiveCollection)
    }

    fn view(&self, name: &str) -> Result<PlaylistView> {
        let collection = self.registry.get(name)?;
        Ok(PlaylistView::new(name, collection, &self.queue, self.modes))
    }

    fn log_step(&self, direction: &str, step: Step) {
        let current = self
            .registry
            .active_collection()
            .ok()
            .and_then(|collection| collection.current_index());
        debug!(direction, ?step, ?current, "Moved cursor");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&EngineConfig::default()).unwrap_or_else(|err| {
            warn!(%err, "Default engine setup failed, starting empty");
            Self::empty()
        })
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .field("queue", &self.queue)
            .field("modes", &self.modes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ResolvedMedia;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> Engine {
        let mut config = EngineConfig::default();
        config.library.seed_defaults = false;
        config.library.default_playlist = "Test".to_string();
        Engine::with_shuffle_source(&config, Box::new(StdRng::seed_from_u64(1))).unwrap()
    }

    fn engine_with(titles: &[&str]) -> Engine {
        let mut engine = engine();
        for title in titles {
            engine
                .add_song(NewSong::new(*title, "Artist", "/media/x.mp3"), InsertPosition::Last, None)
                .unwrap();
        }
        engine
    }

    fn id_of(engine: &Engine, index: usize) -> SongId {
        engine.playlist().unwrap().items[index].id.clone()
    }

    fn titles(view: &PlaylistView) -> Vec<&str> {
        view.items.iter().map(|s| s.title.as_str()).collect()
    }

    struct FailingResolver;

    impl SongResolver for FailingResolver {
        fn resolve(&self, _request: &NewSong) -> Result<ResolvedMedia> {
            Err(PlaybackError::Acquisition("unreachable host".to_string()))
        }
    }

    struct RemoteResolver;

    impl SongResolver for RemoteResolver {
        fn resolve(&self, request: &NewSong) -> Result<ResolvedMedia> {
            Ok(ResolvedMedia {
                url: format!("/media/{}.mp3", request.url.len()),
                title: Some("Remote Title".to_string()),
                artist: Some("Uploader".to_string()),
            })
        }
    }

    #[test]
    fn default_engine_is_seeded() {
        let engine = Engine::default();
        let listing = engine.playlists();

        assert_eq!(listing.active.as_deref(), Some("General"));
        assert_eq!(listing.items, ["General", "Focus", "Chill"]);
        assert_eq!(engine.playlist().unwrap().size, 3);
    }

    #[test]
    fn unseeded_engine_has_only_default_playlist() {
        let engine = engine();
        assert_eq!(engine.playlists().items, ["Test"]);
        assert_eq!(engine.playlist().unwrap().current_index, None);
    }

    #[test]
    fn configured_modes_apply_at_startup() {
        let mut config = EngineConfig::default();
        config.playback.repeat = RepeatMode::All;
        config.playback.shuffle = true;

        let engine = Engine::new(&config).unwrap();
        assert_eq!(engine.modes().repeat, RepeatMode::All);
        assert!(engine.modes().shuffle);
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = EngineConfig::default();
        config.library.default_playlist = String::new();
        assert!(matches!(Engine::new(&config), Err(PlaybackError::Config(_))));
    }

    #[test]
    fn playlist_lifecycle() {
        let mut engine = engine();

        let listing = engine.create_playlist("  Road Trip ").unwrap();
        assert_eq!(listing.items, ["Test", "Road Trip"]);
        assert_eq!(listing.active.as_deref(), Some("Test"));

        let listing = engine.activate_playlist("Road Trip").unwrap();
        assert_eq!(listing.active.as_deref(), Some("Road Trip"));

        let listing = engine.remove_playlist("Road Trip").unwrap();
        assert_eq!(listing.active.as_deref(), Some("Test"));
        assert_eq!(listing.items, ["Test"]);
    }

    #[test]
    fn playlist_errors() {
        let mut engine = engine();
        assert_eq!(
            engine.create_playlist("Test"),
            Err(PlaybackError::AlreadyExists("Test".to_string()))
        );
        assert_eq!(engine.create_playlist(" "), Err(PlaybackError::InvalidName));
        assert!(matches!(
            engine.activate_playlist("Nope"),
            Err(PlaybackError::PlaylistNotFound(_))
        ));
        assert!(matches!(
            engine.remove_playlist("Nope"),
            Err(PlaybackError::PlaylistNotFound(_))
        ));
    }

    #[test]
    fn add_song_positions() {
        let mut engine = engine_with(&["B"]);
        engine
            .add_song(NewSong::new("A", "x", "u"), InsertPosition::First, None)
            .unwrap();
        let view = engine
            .add_song(NewSong::new("C", "x", "u"), InsertPosition::At(2), None)
            .unwrap();

        assert_eq!(titles(&view), ["A", "B", "C"]);
        assert_eq!(view.current().unwrap().title, "B");
    }

    #[test]
    fn add_song_out_of_range_changes_nothing() {
        let mut engine = engine_with(&["A"]);
        let before = engine.playlist().unwrap();

        let result = engine.add_song(NewSong::new("X", "x", "u"), InsertPosition::At(5), None);

        assert!(matches!(result, Err(PlaybackError::IndexOutOfRange { index: 5, len: 1 })));
        assert_eq!(engine.playlist().unwrap(), before);
    }

    #[test]
    fn add_song_to_named_playlist() {
        let mut engine = engine();
        engine.create_playlist("Other").unwrap();

        let view = engine
            .add_song(NewSong::new("A", "x", "u"), InsertPosition::Last, Some("Other"))
            .unwrap();

        assert_eq!(view.name, "Other");
        assert_eq!(view.size, 1);
        assert_eq!(engine.playlist().unwrap().size, 0);

        assert!(matches!(
            engine.add_song(NewSong::new("A", "x", "u"), InsertPosition::Last, Some("Nope")),
            Err(PlaybackError::PlaylistNotFound(_))
        ));
    }

    #[test]
    fn blank_fields_get_defaults() {
        let mut engine = engine();
        let view = engine
            .add_song(NewSong::new("", " ", "/media/a.mp3"), InsertPosition::Last, None)
            .unwrap();

        assert_eq!(view.items[0].title, "Untitled");
        assert_eq!(view.items[0].artist, "Unknown");
    }

    #[test]
    fn failing_resolver_adds_nothing() {
        let mut engine = engine_with(&["A"]).with_resolver(FailingResolver);
        let before = engine.playlist().unwrap();

        let result = engine.add_song(
            NewSong::new("B", "x", "https://remote/page"),
            InsertPosition::Last,
            None,
        );

        assert!(matches!(result, Err(PlaybackError::Acquisition(_))));
        assert_eq!(engine.playlist().unwrap(), before);
    }

    #[test]
    fn resolver_fills_placeholder_metadata() {
        let mut engine = engine().with_resolver(RemoteResolver);

        let view = engine
            .add_song(
                NewSong::new("Untitled", "Kept Artist", "https://remote/page"),
                InsertPosition::Last,
                None,
            )
            .unwrap();

        let song = &view.items[0];
        assert_eq!(song.title, "Remote Title");
        assert_eq!(song.artist, "Kept Artist");
        assert!(song.url.starts_with("/media/"));
    }

    #[test]
    fn remove_song_and_missing_id() {
        let mut engine = engine_with(&["A", "B"]);
        let id = id_of(&engine, 0);

        let view = engine.remove_song(&id).unwrap();
        assert_eq!(titles(&view), ["B"]);
        assert_eq!(view.current().unwrap().title, "B");

        assert_eq!(
            engine.remove_song(&id),
            Err(PlaybackError::SongNotFound(id))
        );
    }

    #[test]
    fn favorites_toggle_and_set() {
        let mut engine = engine_with(&["A", "B"]);
        let id = id_of(&engine, 1);

        engine.set_favorite(&id, None).unwrap();
        let favorites = engine.favorites().unwrap();
        assert_eq!(favorites.playlist, "Test");
        assert_eq!(favorites.items.len(), 1);
        assert_eq!(favorites.items[0].title, "B");

        engine.set_favorite(&id, None).unwrap();
        assert!(engine.favorites().unwrap().items.is_empty());

        engine.set_favorite(&id, Some(true)).unwrap();
        engine.set_favorite(&id, Some(true)).unwrap();
        assert_eq!(engine.favorites().unwrap().items.len(), 1);

        assert!(engine.set_favorite(&SongId::new("missing"), None).is_err());
    }

    #[test]
    fn enqueue_copies_with_fresh_id() {
        let mut engine = engine_with(&["A", "B"]);
        let id = id_of(&engine, 1);

        let view = engine.enqueue(&id).unwrap();
        assert_eq!(view.queue.size, 1);
        let queued = &view.queue.items[0];
        assert_eq!(queued.title, "B");
        assert_ne!(queued.id, id);

        // Editing the original leaves the queued copy alone
        engine.set_favorite(&id, Some(true)).unwrap();
        assert!(!engine.queue_state().items[0].favorite);

        assert!(matches!(
            engine.enqueue(&SongId::new("missing")),
            Err(PlaybackError::SongNotFound(_))
        ));
    }

    #[test]
    fn queue_edits() {
        let mut engine = engine_with(&["A", "B", "C"]);
        for i in 0..3 {
            let id = id_of(&engine, i);
            engine.enqueue(&id).unwrap();
        }

        let view = engine.reorder_queue(0, 2).unwrap();
        let queued: Vec<_> = view.queue.items.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(queued, ["B", "C", "A"]);

        let view = engine.remove_from_queue(1).unwrap();
        assert_eq!(view.queue.size, 2);
        assert!(engine.remove_from_queue(5).is_err());

        let view = engine.clear_queue().unwrap();
        assert_eq!(view.queue.size, 0);
    }

    #[test]
    fn mode_changes() {
        let mut engine = engine_with(&["A"]);

        let view = engine.set_shuffle(true).unwrap();
        assert!(view.modes.shuffle);

        let view = engine.set_repeat(RepeatMode::One).unwrap();
        assert_eq!(view.modes.repeat, RepeatMode::One);

        let update = ModeUpdate {
            shuffle: Some(false),
            repeat: Some("forever".to_string()),
        };
        assert_eq!(
            engine.update_modes(&update),
            Err(PlaybackError::InvalidMode("forever".to_string()))
        );
        assert!(engine.modes().shuffle);
        assert_eq!(engine.modes().repeat, RepeatMode::One);

        let update = ModeUpdate {
            shuffle: None,
            repeat: Some("all".to_string()),
        };
        let view = engine.update_modes(&update).unwrap();
        assert!(view.modes.shuffle);
        assert_eq!(view.modes.repeat, RepeatMode::All);
    }

    #[test]
    fn set_current_and_jump() {
        let mut engine = engine_with(&["A", "B", "C"]);

        let view = engine.set_current(2).unwrap();
        assert_eq!(view.current_index, Some(2));
        assert!(matches!(
            engine.set_current(3),
            Err(PlaybackError::IndexOutOfRange { .. })
        ));

        let id = id_of(&engine, 0);
        let view = engine.jump_to(&id).unwrap();
        assert_eq!(view.current().unwrap().title, "A");
        assert!(engine.jump_to(&SongId::new("missing")).is_err());
    }

    #[test]
    fn next_and_previous() {
        let mut engine = engine_with(&["A", "B"]);

        assert_eq!(engine.next().unwrap().current().unwrap().title, "B");
        assert_eq!(engine.next().unwrap().current().unwrap().title, "B");
        assert_eq!(engine.previous().unwrap().current().unwrap().title, "A");
        assert_eq!(engine.previous().unwrap().current().unwrap().title, "A");
    }

    #[test]
    fn next_plays_queue_first() {
        let mut engine = engine_with(&["A", "B", "C"]);
        let id = id_of(&engine, 2);
        engine.enqueue(&id).unwrap();
        engine.set_shuffle(true).unwrap();

        let view = engine.next().unwrap();

        assert_eq!(view.size, 4);
        assert_eq!(view.current_index, Some(3));
        assert_eq!(view.current().unwrap().title, "C");
        assert_eq!(view.queue.size, 0);
    }

    #[test]
    fn up_next_reflects_queue_and_modes() {
        let mut engine = engine_with(&["A", "B", "C"]);
        let id = id_of(&engine, 2);
        engine.enqueue(&id).unwrap();

        let preview = engine.up_next().unwrap();
        assert_eq!(preview.current.as_ref().unwrap().title, "A");
        assert_eq!(preview.queue_count, 1);
        let items: Vec<_> = preview.items.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(items, ["C", "B", "C"]);
    }

    #[test]
    fn no_active_playlist() {
        let mut engine = Engine::empty();

        assert_eq!(engine.playlist(), Err(PlaybackError::NoActiveCollection));
        assert_eq!(engine.next(), Err(PlaybackError::NoActiveCollection));
        assert_eq!(engine.set_shuffle(true), Err(PlaybackError::NoActiveCollection));
        assert!(!engine.modes().shuffle);
        assert!(engine.up_next().is_err());
        assert!(engine
            .add_song(NewSong::new("A", "x", "u"), InsertPosition::Last, None)
            .is_err());

        engine.create_playlist("First").unwrap();
        assert_eq!(engine.playlist().unwrap().name, "First");
    }

    #[test]
    fn engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Engine>();
    }
}
