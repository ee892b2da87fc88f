//! Cadence Core
//!
//! Leaf domain types shared by every Cadence crate.
//!
//! The core crate defines:
//! - **Identifiers**: `SongId`, an opaque UUID-backed handle
//! - **Song records**: `Song` (what the engine sequences) and `NewSong`
//!   (the pre-validated payload a caller hands in)
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{NewSong, Song, DEFAULT_ARTIST};
//!
//! let request = NewSong::new("Intro Beat", "Dev One", "/media/intro.wav");
//! let song = Song::from_request(request);
//!
//! assert_eq!(song.title, "Intro Beat");
//! assert!(!song.favorite);
//!
//! let anonymous = Song::from_request(NewSong::new("Outro", "  ", "/media/outro.wav"));
//! assert_eq!(anonymous.artist, DEFAULT_ARTIST);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

pub use types::{NewSong, Song, SongId, DEFAULT_ARTIST, DEFAULT_TITLE};
