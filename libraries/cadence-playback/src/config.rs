//! Engine configuration
use crate::error::{PlaybackError, Result};
use crate::types::{PlaybackModes, RepeatMode};
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENV_PREFIX: &str = "CADENCE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,

    #[serde(default = "default_library")]
    pub library: LibrarySettings,
}

/// Modes the engine starts with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default)]
    pub shuffle: bool,

    #[serde(default)]
    pub repeat: RepeatMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LibrarySettings {
    /// Install the sample playlists at startup
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,

    /// Playlist made active at startup (created empty if missing)
    #[serde(default = "default_playlist_name")]
    pub default_playlist: String,

    /// Fixed shuffle seed; entropy when unset
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            playback: default_playback(),
            library: default_library(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from an optional TOML file and the environment
    ///
    /// Environment variables are prefixed with `CADENCE_` and use `__` between
    /// section and key, e.g. `CADENCE_PLAYBACK__REPEAT=all`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, environment())
    }

    fn load_from(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path).required(false));
        }

        settings = settings.add_source(env);

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;

        tracing::info!(
            shuffle = config.playback.shuffle,
            repeat = %config.playback.repeat,
            seed_defaults = config.library.seed_defaults,
            default_playlist = %config.library.default_playlist,
            "Loaded engine configuration"
        );
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.library.default_playlist.trim().is_empty() {
            return Err(PlaybackError::Config(
                "library.default_playlist must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Starting modes
    pub fn modes(&self) -> PlaybackModes {
        PlaybackModes {
            shuffle: self.playback.shuffle,
            repeat: self.playback.repeat,
        }
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// Default values
fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        shuffle: false,
        repeat: RepeatMode::Off,
    }
}

fn default_library() -> LibrarySettings {
    LibrarySettings {
        seed_defaults: default_seed_defaults(),
        default_playlist: default_playlist_name(),
        rng_seed: None,
    }
}

fn default_seed_defaults() -> bool {
    true
}

fn default_playlist_name() -> String {
    "General".to_string()
}
