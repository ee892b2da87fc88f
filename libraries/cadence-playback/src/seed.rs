//! Sample playlists installed into a fresh engine

use crate::error::Result;
use crate::registry::CollectionRegistry;
use cadence_core::Song;

const SOUND_FILES: &str = "https://www2.cs.uic.edu/~i101/SoundFiles";

struct SeedSong {
    title: &'static str,
    artist: &'static str,
    file: &'static str,
}

const fn seed(title: &'static str, artist: &'static str, file: &'static str) -> SeedSong {
    SeedSong {
        title,
        artist,
        file,
    }
}

const GENERAL: &[SeedSong] = &[
    seed("Intro Beat", "Dev One", "StarWars60.wav"),
    seed("Lo-Fi Loop", "CoderX", "CantinaBand60.wav"),
    seed("Focus Track", "DeepWork", "PinkPanther30.wav"),
];

const FOCUS: &[SeedSong] = &[
    seed("Deep Work", "DeepWork", "ImperialMarch60.wav"),
    seed("Steady State", "CoderX", "BabyElephantWalk60.wav"),
];

const CHILL: &[SeedSong] = &[
    seed("Slow Sunday", "Dev One", "Fanfare60.wav"),
    seed("Afterglow", "Night Shift", "taunt.wav"),
];

/// Seed playlists in creation order
pub const SEED_PLAYLISTS: [&str; 3] = ["General", "Focus", "Chill"];

/// Create each sample playlist that does not exist yet and fill it
///
/// Returns how many playlists were created.
pub fn seed_defaults(registry: &mut CollectionRegistry) -> Result<usize> {
    let mut created = 0;
    for (name, songs) in SEED_PLAYLISTS.into_iter().zip([GENERAL, FOCUS, CHILL]) {
        if registry.contains(name) {
            continue;
        }
        registry.create(name)?;
        let collection = registry.get_mut(name)?;
        for song in songs {
            collection.add_last(Song::new(
                song.title,
                song.artist,
                format!("{}/{}", SOUND_FILES, song.file),
            ));
        }
        created += 1;
    }

    tracing::info!(created, "Seeded default playlists");
    Ok(created)
}
