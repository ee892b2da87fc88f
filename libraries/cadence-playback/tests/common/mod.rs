//! Shared helpers for integration tests

#![allow(dead_code)]

use cadence_core::{NewSong, SongId};
use cadence_playback::{Engine, EngineConfig, InsertPosition, PlaylistView};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route engine logs to the test harness (`RUST_LOG=cadence_playback=debug`)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Engine with one empty playlist ("Test") and a seeded shuffle source
pub fn empty_engine(seed: u64) -> Engine {
    init_tracing();
    let mut config = EngineConfig::default();
    config.library.seed_defaults = false;
    config.library.default_playlist = "Test".to_string();
    Engine::with_shuffle_source(&config, Box::new(StdRng::seed_from_u64(seed)))
        .expect("test config is valid")
}

/// Engine whose active playlist holds `titles`, in order
pub fn engine_with(titles: &[&str]) -> Engine {
    let mut engine = empty_engine(42);
    for title in titles {
        engine
            .add_song(
                NewSong::new(*title, "Test Artist", format!("/media/{}.mp3", title)),
                InsertPosition::Last,
                None,
            )
            .expect("append never fails");
    }
    engine
}

/// Titles in playlist order
pub fn titles(view: &PlaylistView) -> Vec<String> {
    view.items.iter().map(|s| s.title.clone()).collect()
}

/// Title under the cursor
pub fn current_title(engine: &Engine) -> Option<String> {
    engine
        .playlist()
        .ok()
        .and_then(|view| view.current().map(|s| s.title.clone()))
}

/// Id of the song at `index` in the active playlist
pub fn id_at(engine: &Engine, index: usize) -> SongId {
    engine.playlist().unwrap().items[index].id.clone()
}
