//! Cadence - Playback Sequencing
//!
//! Decides which song plays next for a media player. Audio itself is somebody
//! else's job: this crate only tracks which song is current and what follows.
//!
//! This crate provides:
//! - Ordered playlists with a cursor that survives edits
//! - A registry of named playlists with one active selection
//! - An override queue that pre-empts the playlist order
//! - Shuffle and repeat (Off, One, All) modes
//! - Next / previous / up-next derivation
//! - Layered configuration (TOML file + `CADENCE_` environment)
//!
//! # Architecture
//!
//! [`Engine`] owns all state and is constructed explicitly; there are no
//! globals. Sequencing rules live in [`sequencer`] as plain functions over a
//! [`SongCollection`], an [`OverrideQueue`] and [`PlaybackModes`]. Media
//! acquisition is a seam ([`SongResolver`]) the host fills in.
//!
//! # Example: Basic Sequencing
//!
//! ```rust
//! use cadence_playback::{Engine, EngineConfig, InsertPosition};
//! use cadence_core::NewSong;
//!
//! let mut config = EngineConfig::default();
//! config.library.seed_defaults = false;
//! let mut engine = Engine::new(&config)?;
//!
//! for title in ["A", "B", "C"] {
//!     engine.add_song(NewSong::new(title, "Artist", "/media/a.mp3"), InsertPosition::Last, None)?;
//! }
//!
//! engine.set_current(1)?;
//! let view = engine.next()?;
//! assert_eq!(view.current().unwrap().title, "C");
//! # Ok::<(), cadence_playback::PlaybackError>(())
//! ```
//!
//! # Example: Queue and Modes
//!
//! ```rust
//! use cadence_playback::{Engine, RepeatMode};
//!
//! let mut engine = Engine::default();
//! let first = engine.playlist()?.items[0].id.clone();
//!
//! engine.enqueue(&first)?;
//! engine.set_repeat(RepeatMode::All)?;
//!
//! let preview = engine.up_next()?;
//! assert_eq!(preview.queue_count, 1);
//! # Ok::<(), cadence_playback::PlaybackError>(())
//! ```

mod collection;
mod config;
mod engine;
mod error;
mod queue;
mod registry;
mod resolver;
pub mod seed;
pub mod sequencer;
mod shuffle;
pub mod types;
mod views;

// Public exports
pub use collection::{CollectionSnapshot, SongCollection};
pub use crate::config::{EngineConfig, LibrarySettings, PlaybackSettings};
pub use engine::Engine;
pub use error::{ErrorKind, PlaybackError, Result};
pub use queue::{OverrideQueue, QueueState};
pub use registry::{CollectionRegistry, PlaylistListing};
pub use resolver::{PassthroughResolver, ResolvedMedia, SongResolver};
pub use sequencer::Step;
pub use shuffle::{shuffle_source, ShuffleSource};
pub use types::{InsertPosition, ModeUpdate, PlaybackModes, RepeatMode};
pub use views::{FavoritesView, PlaylistView, UpNext};
