//! Domain types for Cadence

mod ids;
mod song;

pub use ids::SongId;
pub use song::{NewSong, Song, DEFAULT_ARTIST, DEFAULT_TITLE};
