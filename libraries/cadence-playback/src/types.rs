//! Core types for playback sequencing

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stall at the end of the playlist
    #[default]
    Off,

    /// Keep playing the current song
    One,

    /// Wrap around to the start of the playlist
    All,
}

impl RepeatMode {
    /// Textual form used by callers
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatMode::Off => "off",
            RepeatMode::One => "one",
            RepeatMode::All => "all",
        }
    }
}

impl FromStr for RepeatMode {
    type Err = PlaybackError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "off" => Ok(RepeatMode::Off),
            "one" => Ok(RepeatMode::One),
            "all" => Ok(RepeatMode::All),
            other => Err(PlaybackError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine-wide playback mode flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaybackModes {
    /// Pick a random other song on advance
    pub shuffle: bool,

    /// Repeat behavior at the end of the playlist
    pub repeat: RepeatMode,
}

/// Partial mode change as received from a caller
///
/// `repeat` stays textual so that validation happens in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeUpdate {
    #[serde(default)]
    pub shuffle: Option<bool>,

    #[serde(default)]
    pub repeat: Option<String>,
}

impl ModeUpdate {
    /// Apply to `modes`, validating before anything changes
    pub fn apply(&self, modes: PlaybackModes) -> Result<PlaybackModes> {
        let repeat = match self.repeat.as_deref() {
            Some(value) => value.parse()?,
            None => modes.repeat,
        };
        Ok(PlaybackModes {
            shuffle: self.shuffle.unwrap_or(modes.shuffle),
            repeat,
        })
    }
}

/// Where a new song goes in a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InsertPosition {
    /// Before the current head
    First,

    /// After the current tail
    #[default]
    Last,

    /// At a 0-based index (`0..=len`)
    At(usize),
}

impl InsertPosition {
    /// Parse the `"start" | "end" | "index"` request form
    ///
    /// The index is only consulted for `"index"`; negative values are out of range.
    pub fn parse(position: &str, index: i64) -> Result<Self> {
        match position {
            "start" => Ok(InsertPosition::First),
            "end" => Ok(InsertPosition::Last),
            "index" => usize::try_from(index)
                .map(InsertPosition::At)
                .map_err(|_| PlaybackError::NegativeIndex(index)),
            other => Err(PlaybackError::InvalidPosition(other.to_string())),
        }
    }
}
